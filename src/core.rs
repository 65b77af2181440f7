//! Core runtime logic for kupo.
//!
//! This module contains the non-UI engine pieces used by the application:
//! - [fm]: directory traversal (see [browse_dir], [FileEntry]).
//! - [formatter]: sorting/filtering and the bounded preview readers.
//! - [worker]: background preview reads and message passing back into the
//!   app state.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui
//!   event loop.

pub mod fm;
pub mod formatter;
pub mod terminal;
pub mod worker;

pub use fm::{FileEntry, browse_dir};
pub use formatter::{
    Formatter, PREVIEW_BYTE_BUDGET, file_stamp_line, format_file_size, format_file_time,
    preview_directory, read_file_preview, sanitize_to_exact_width,
};
pub use worker::{WorkerResponse, WorkerTask, Workers};
