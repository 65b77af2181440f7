//! State for the preview pane in kupo.
//!
//! Tracks the loaded preview content, the path it belongs to, and the
//! generation counter that keeps stale loads from ever being rendered.
//!
//! The loader lifecycle is: a new request bumps the generation and marks
//! any in-flight read as superseded; when a worker result arrives its
//! generation is compared against the latest issued one and dropped on
//! mismatch. Cancellation is purely cooperative, an outdated read finishes
//! but its output is discarded.

use std::path::PathBuf;
use std::time::Instant;

/// Content shown in the preview pane.
pub enum PreviewData {
    /// Bounded text preview of a file, plus the stamp line shown above it.
    File { stamp: String, lines: Vec<String> },
    /// Directory summary listing.
    Directory(Vec<String>),
    /// Read failure placeholder; navigation is unaffected.
    Error(String),
    Empty,
}

impl PreviewData {
    pub fn is_empty(&self) -> bool {
        match self {
            PreviewData::File { lines, .. } => lines.is_empty(),
            PreviewData::Directory(lines) => lines.is_empty(),
            PreviewData::Error(_) => false,
            PreviewData::Empty => true,
        }
    }
}

/// State and helpers for managing the preview pane.
pub struct PreviewState {
    data: PreviewData,
    current_path: Option<PathBuf>,
    generation: u64,
    pending: bool,
    last_input_time: Instant,
}

impl PreviewState {
    // Getters / Accessors

    pub fn data(&self) -> &PreviewData {
        &self.data
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current_path(&self) -> Option<&PathBuf> {
        self.current_path.as_ref()
    }

    // Setters / mutators

    /// Marks the preview as pending and updates the last input time.
    pub fn mark_pending(&mut self) {
        self.pending = true;
        self.last_input_time = Instant::now();
    }

    /// Debounce timing: a pending preview fires once input has been quiet
    /// for a moment.
    pub fn should_trigger(&self) -> bool {
        self.pending && self.last_input_time.elapsed().as_millis() > 75
    }

    /// Prepares a new preview request for the given path.
    ///
    /// Increments the generation, which supersedes any in-flight load: its
    /// eventual result will no longer match and gets dropped on arrival.
    pub fn prepare_new_request(&mut self, path: PathBuf) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current_path = Some(path);
        self.pending = false;
        self.generation
    }

    /// Applies loaded file content, only if `generation` is still the
    /// latest issued one.
    pub fn deliver_file(&mut self, stamp: String, lines: Vec<String>, generation: u64) {
        if generation == self.generation {
            self.data = PreviewData::File { stamp, lines };
        }
    }

    /// Applies a directory summary, only if `generation` is still the
    /// latest issued one.
    pub fn deliver_directory(&mut self, lines: Vec<String>, generation: u64) {
        if generation == self.generation {
            self.data = PreviewData::Directory(lines);
        }
    }

    /// Applies a load failure placeholder, only if `generation` is still
    /// the latest issued one.
    pub fn deliver_error(&mut self, reason: String, generation: u64) {
        if generation == self.generation {
            self.data = PreviewData::Error(reason);
        }
    }

    /// Clears the preview entirely and supersedes any in-flight load.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.data = PreviewData::Empty;
        self.current_path = None;
        self.pending = false;
    }
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            data: PreviewData::Empty,
            current_path: None,
            generation: 0,
            pending: false,
            last_input_time: Instant::now(),
        }
    }
}
