//! Pane state for kupo.
//!
//! One [PaneState] exists per navigable pane (parent and current). A pane
//! owns its source directory, the filtered listing of that directory, and
//! the highlighted index. Mutations that move the highlight hand back a
//! [NavigationEvent] for the caller to feed into the controller.

use crate::app::event::{NavigationEvent, PaneId};
use crate::core::{FileEntry, Formatter, browse_dir};

use std::path::{Path, PathBuf};

/// Holds one directory listing and its highlight.
///
/// Invariant: the highlighted path, when set, is a direct child of
/// `source_dir`. `select_path` silently refuses anything else, which makes
/// a stale UI event racing a newer directory state harmless.
pub struct PaneState {
    id: PaneId,
    source_dir: PathBuf,
    entries: Vec<FileEntry>,
    selected: Option<usize>,
}

impl PaneState {
    pub fn new(id: PaneId, source_dir: PathBuf) -> Self {
        Self {
            id,
            source_dir,
            entries: Vec::new(),
            selected: None,
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn id(&self) -> PaneId {
        self.id
    }

    #[inline]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[inline]
    pub fn selected_idx(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.selected.and_then(|idx| self.entries.get(idx))
    }

    /// Absolute path of the highlighted entry, if any.
    pub fn highlighted_path(&self) -> Option<PathBuf> {
        self.selected_entry()
            .map(|e| self.source_dir.join(e.name()))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Mutators

    /// Replaces the source directory and re-enumerates it.
    ///
    /// An unreadable directory yields an empty listing instead of an error;
    /// the rest of the UI stays interactive. The highlight is cleared and
    /// NOT re-picked here, the caller decides what to select afterwards.
    pub fn update_source_dir(&mut self, new_dir: PathBuf, formatter: &Formatter) {
        let mut entries = browse_dir(&new_dir).unwrap_or_default();
        formatter.filter_entries(&mut entries);

        self.source_dir = new_dir;
        self.entries = entries;
        self.selected = None;
    }

    /// Sets the highlight to the entry at `path`.
    ///
    /// No-op (returning None) when `path` is not a direct child of the
    /// source directory or names no listed entry. Successful selection
    /// emits a [NavigationEvent::HighlightChanged] tagged with this pane's
    /// identity, also when the same entry is re-selected.
    pub fn select_path(&mut self, path: &Path) -> Option<NavigationEvent> {
        if path.parent() != Some(self.source_dir.as_path()) {
            return None;
        }
        let name = path.file_name()?;
        let idx = self.entries.iter().position(|e| e.name() == name)?;

        self.selected = Some(idx);
        Some(NavigationEvent::HighlightChanged {
            sender: self.id,
            path: path.to_path_buf(),
        })
    }

    /// Clears the highlight without emitting anything.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Moves the highlight up by one entry, wrapping around.
    pub fn move_up(&mut self) -> Option<NavigationEvent> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        let idx = match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.select_index(idx)
    }

    /// Moves the highlight down by one entry, wrapping around.
    pub fn move_down(&mut self) -> Option<NavigationEvent> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        let idx = match self.selected {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.select_index(idx)
    }

    /// Moves the highlight to the first entry.
    pub fn select_first(&mut self) -> Option<NavigationEvent> {
        if self.entries.is_empty() {
            return None;
        }
        self.select_index(0)
    }

    /// Moves the highlight to the last entry.
    pub fn select_last(&mut self) -> Option<NavigationEvent> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        self.select_index(len - 1)
    }

    fn select_index(&mut self, idx: usize) -> Option<NavigationEvent> {
        let entry = self.entries.get(idx)?;
        let path = self.source_dir.join(entry.name());
        self.selected = Some(idx);
        Some(NavigationEvent::HighlightChanged {
            sender: self.id,
            path,
        })
    }
}
