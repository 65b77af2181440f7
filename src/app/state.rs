//! Application state and main controller module for kupo.
//!
//! This module defines the [AppState] struct, the explicit owned context
//! object holding both pane states, the preview state and the worker
//! channels. It is the single reconciliation point for navigation events:
//!
//! - a highlight change in the current pane drives the preview (files
//!   load asynchronously, directories render synchronously),
//! - a directory change re-anchors both panes around the new current
//!   directory and restores the correct highlight in each.
//!
//! Constructing the controller needs no UI runtime, which is what the unit
//! tests below rely on.

use crate::app::event::{NavigationEvent, PaneId};
use crate::app::keymap::{Action, Keymap, NavAction, SystemAction};
use crate::app::pane::PaneState;
use crate::app::preview::PreviewState;
use crate::config::Config;
use crate::core::worker::{WorkerResponse, WorkerTask, Workers};
use crate::core::{Formatter, file_stamp_line, preview_directory};

use crossterm::event::{KeyCode, KeyEvent};

use std::io;
use std::path::{Path, PathBuf};

/// Result of a processed keypress.
pub enum KeypressResult {
    Continue,
    Consumed,
    Quit,
}

/// Current layout metrics of the TUI, fed back from the renderer.
#[derive(Debug, Clone, Copy)]
pub struct LayoutMetrics {
    pub parent_width: usize,
    pub current_width: usize,
    pub preview_width: usize,
    pub preview_height: usize,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            parent_width: 20,
            current_width: 40,
            preview_width: 40,
            preview_height: 50,
        }
    }
}

/// Main struct holding the central application state of kupo.
///
/// Owns the parent and current [PaneState]s, the [PreviewState] and the
/// worker channels; holds the configuration by reference.
pub struct AppState<'a> {
    config: &'a Config,
    keymap: Keymap,

    metrics: LayoutMetrics,

    parent: PaneState,
    current: PaneState,
    preview: PreviewState,

    workers: Workers,
    show_help: bool,
}

impl<'a> AppState<'a> {
    pub fn new(config: &'a Config) -> io::Result<Self> {
        let current_dir = std::env::current_dir()?;
        Self::from_dir(config, &current_dir)
    }

    pub fn from_dir(config: &'a Config, initial_path: &Path) -> io::Result<Self> {
        let current_dir = if initial_path.is_dir() {
            initial_path.to_path_buf()
        } else {
            std::env::current_dir()?
        };

        let mut app = Self {
            config,
            keymap: Keymap::from_config(config),
            metrics: LayoutMetrics::default(),
            parent: PaneState::new(PaneId::Parent, current_dir.clone()),
            current: PaneState::new(PaneId::Current, current_dir.clone()),
            preview: PreviewState::default(),
            workers: Workers::spawn(),
            show_help: false,
        };

        // Initial anchoring reuses the directory-change path with
        // from_dir == new_dir, which resolves to "select the first entry"
        // in the current pane.
        app.reconcile(NavigationEvent::DirectoryChanged {
            new_dir: current_dir.clone(),
            from_dir: current_dir,
        });
        Ok(app)
    }

    // Getters / accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn parent(&self) -> &PaneState {
        &self.parent
    }

    #[inline]
    pub fn current(&self) -> &PaneState {
        &self.current
    }

    #[inline]
    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    #[inline]
    pub fn workers(&self) -> &Workers {
        &self.workers
    }

    #[inline]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    fn formatter(&self) -> Formatter {
        let general = self.config.general();
        Formatter::new(
            general.dirs_first(),
            general.show_hidden(),
            general.case_insensitive(),
        )
    }

    /// Metrics updater; a resized preview pane re-requests content at the
    /// new dimensions.
    pub fn update_layout_metrics(&mut self, metrics: LayoutMetrics) {
        let old_width = self.metrics.preview_width;
        let old_height = self.metrics.preview_height;

        self.metrics = metrics;

        if old_width != self.metrics.preview_width || old_height != self.metrics.preview_height {
            if self.preview.data().is_empty() {
                self.request_preview();
            } else {
                self.preview.mark_pending();
            }
        }
    }

    /// Single reconciliation entry point for pane events.
    pub fn reconcile(&mut self, event: NavigationEvent) {
        match event {
            NavigationEvent::HighlightChanged { sender, path } => {
                self.highlight_changed(sender, path)
            }
            NavigationEvent::DirectoryChanged { new_dir, from_dir } => {
                self.directory_changed(new_dir, from_dir)
            }
        }
    }

    /// Highlight changes in the current pane drive the preview. The
    /// parent pane's highlight is informational only.
    fn highlight_changed(&mut self, sender: PaneId, path: PathBuf) {
        if sender != PaneId::Current {
            return;
        }

        if path.is_dir() {
            // Directory summaries render synchronously; the generation bump
            // supersedes any in-flight file load, whose late result will no
            // longer match.
            let generation = self.preview.prepare_new_request(path.clone());
            let lines = preview_directory(
                &path,
                self.metrics.preview_height,
                self.metrics.preview_width,
            );
            self.preview.deliver_directory(lines, generation);
        } else if self.config.general().instant_preview() {
            self.request_file_preview(path);
        } else {
            self.preview.mark_pending();
        }
    }

    /// A committed directory change re-anchors both panes.
    ///
    /// Both panes are fully re-anchored before any cascaded highlight event
    /// is reconciled, so the preview loader never observes a partial
    /// re-anchor.
    fn directory_changed(&mut self, new_dir: PathBuf, from_dir: PathBuf) {
        let formatter = self.formatter();
        let mut cascaded: Vec<NavigationEvent> = Vec::new();

        // Current pane: ascends re-highlight the directory just left;
        // descends, or a from_dir that vanished meanwhile, fall back to the
        // first entry.
        self.current.update_source_dir(new_dir.clone(), &formatter);
        let restored = if from_dir.parent() == Some(new_dir.as_path()) {
            self.current.select_path(&from_dir)
        } else {
            None
        };
        let current_event = restored.or_else(|| self.current.select_first());
        if current_event.is_none() {
            self.preview.clear();
        }
        cascaded.extend(current_event);

        // Parent pane: shows the new directory highlighted inside its own
        // parent. At the filesystem root it anchors onto the new directory
        // itself and highlights nothing.
        match new_dir.parent() {
            Some(parent) => {
                self.parent
                    .update_source_dir(parent.to_path_buf(), &formatter);
                cascaded.extend(self.parent.select_path(&new_dir));
            }
            None => {
                self.parent.update_source_dir(new_dir, &formatter);
                self.parent.clear_selection();
            }
        }

        for event in cascaded {
            self.reconcile(event);
        }
    }

    /// Updates state from worker messages and the preview debounce.
    ///
    /// Used by the main event loop; returns true when a redraw is needed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;

        if self.preview.should_trigger() {
            self.request_preview();
            changed = true;
        }

        while let Ok(response) = self.workers.response_rx().try_recv() {
            changed = true;

            match response {
                WorkerResponse::PreviewLoaded { lines, generation } => {
                    let stamp = self
                        .preview
                        .current_path()
                        .map(|p| file_stamp_line(p))
                        .unwrap_or_default();
                    self.preview.deliver_file(stamp, lines, generation);
                }
                WorkerResponse::PreviewFailed { reason, generation } => {
                    self.preview.deliver_error(reason, generation);
                }
            }
        }
        changed
    }

    /// Central key handler.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return KeypressResult::Consumed;
        }

        if let Some(action) = self.keymap.lookup(key) {
            match action {
                Action::System(sys_act) => return self.handle_sys_action(sys_act),
                Action::Nav(nav_act) => return self.handle_nav_action(nav_act),
            }
        }

        KeypressResult::Continue
    }

    fn handle_sys_action(&mut self, action: SystemAction) -> KeypressResult {
        match action {
            SystemAction::Quit => KeypressResult::Quit,
            SystemAction::Help => {
                self.show_help = true;
                KeypressResult::Consumed
            }
        }
    }

    fn handle_nav_action(&mut self, action: NavAction) -> KeypressResult {
        match action {
            NavAction::GoUp => self.move_current(|pane| pane.move_up()),
            NavAction::GoDown => self.move_current(|pane| pane.move_down()),
            NavAction::GoToTop => self.move_current(|pane| pane.select_first()),
            NavAction::GoToBottom => self.move_current(|pane| pane.select_last()),
            NavAction::GoParent => self.ascend(),
            NavAction::GoIntoDir => self.descend(),
        }
        KeypressResult::Continue
    }

    /// Applies a highlight movement to the current pane and reconciles the
    /// resulting event, if the movement happened.
    fn move_current<F>(&mut self, f: F)
    where
        F: FnOnce(&mut PaneState) -> Option<NavigationEvent>,
    {
        if let Some(event) = f(&mut self.current) {
            self.reconcile(event);
        }
    }

    /// Commits entering the highlighted directory entry.
    fn descend(&mut self) {
        let Some(entry) = self.current.selected_entry() else {
            return;
        };
        if !entry.is_dir() {
            return;
        }

        let from_dir = self.current.source_dir().to_path_buf();
        let new_dir = from_dir.join(entry.name());
        self.reconcile(NavigationEvent::DirectoryChanged { new_dir, from_dir });
    }

    /// Commits ascending to the parent directory.
    fn ascend(&mut self) {
        let from_dir = self.current.source_dir().to_path_buf();
        let Some(parent) = from_dir.parent() else {
            return;
        };

        let new_dir = parent.to_path_buf();
        self.reconcile(NavigationEvent::DirectoryChanged { new_dir, from_dir });
    }

    /// Issues a preview for the currently highlighted entry, clearing the
    /// pane when nothing is highlighted. Used by the debounce path and
    /// after layout changes.
    pub fn request_preview(&mut self) {
        match self.current.highlighted_path() {
            Some(path) if path.is_dir() => {
                let generation = self.preview.prepare_new_request(path.clone());
                let lines = preview_directory(
                    &path,
                    self.metrics.preview_height,
                    self.metrics.preview_width,
                );
                self.preview.deliver_directory(lines, generation);
            }
            Some(path) => self.request_file_preview(path),
            None => self.preview.clear(),
        }
    }

    /// Hands a generation-tagged file read to the preview worker.
    fn request_file_preview(&mut self, path: PathBuf) {
        let generation = self.preview.prepare_new_request(path.clone());
        let _ = self.workers.preview_tx().try_send(WorkerTask::LoadPreview {
            path,
            max_lines: self.metrics.preview_height,
            pane_width: self.metrics.preview_width,
            generation,
        });
    }
}
