//! Miscellaneous utility functions for kupo.
//!
//! Holds the [helpers] submodule: color parsing for the theme and home
//! directory handling for the header path display.

pub mod helpers;

pub use helpers::{get_home, parse_color, shorten_home_path};
