//! UI modules for kupo.
//!
//! - [render]: top-level frame rendering and layout.
//! - [panes]: drawing of the parent, current and preview panes.
//! - [help]: the full-screen key binding help overlay.

pub mod help;
pub mod panes;
pub mod render;

pub use render::render;
