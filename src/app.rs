//! Application logic for kupo.
//!
//! - [event]: the closed navigation event set and pane identities.
//! - [pane]: per-pane directory/highlight state.
//! - [preview]: generation-gated preview content state.
//! - [state]: the [AppState] controller tying panes, preview and workers
//!   together.
//! - [keymap]: key parsing and the action dispatch table.

pub mod event;
pub mod keymap;
pub mod pane;
pub mod preview;
pub mod state;

pub use event::{NavigationEvent, PaneId};
pub use pane::PaneState;
pub use preview::{PreviewData, PreviewState};
pub use state::{AppState, KeypressResult, LayoutMetrics};
