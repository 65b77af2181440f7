//! Navigation events for kupo.
//!
//! A closed set of event variants flows from the panes into the single
//! reconciliation entry point on [AppState](crate::app::AppState). Keeping
//! this a tagged union rather than an open message hierarchy keeps the
//! reconciliation rules exhaustive and easy to test in isolation.

use std::path::PathBuf;

/// Identity of a navigable pane, carried as the sender of highlight events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneId {
    Parent,
    Current,
}

/// Events produced by pane mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// The highlighted entry in a pane changed, including programmatic
    /// re-selection during re-anchoring.
    HighlightChanged { sender: PaneId, path: PathBuf },
    /// The current pane committed a descend or ascend. `from_dir` is the
    /// directory being left; it is used to restore the highlight after an
    /// ascend.
    DirectoryChanged { new_dir: PathBuf, from_dir: PathBuf },
}
