//! Preview worker thread for kupo.
//!
//! File preview reads happen off the event loop on a dedicated thread.
//! Requests [WorkerTask] come in from the AppState via a channel, and
//! results or errors [WorkerResponse] go back the same way, each tagged
//! with the generation of the request that produced them. The main thread
//! compares generations on receipt and drops anything stale; the worker
//! itself never needs to be interrupted mid-read.

use crate::core::read_file_preview;

use crossbeam_channel::{Receiver, Sender, unbounded};

use std::path::PathBuf;
use std::thread;

/// Channel endpoints for the preview worker.
pub struct Workers {
    preview_tx: Sender<WorkerTask>,
    response_rx: Receiver<WorkerResponse>,
}

impl Workers {
    /// Create the worker set, spawning the preview thread.
    pub fn spawn() -> Self {
        let (preview_tx, preview_rx) = unbounded::<WorkerTask>();
        let (res_tx, response_rx) = unbounded::<WorkerResponse>();

        start_preview_worker(preview_rx, res_tx);

        Self {
            preview_tx,
            response_rx,
        }
    }

    /// Accessor for the preview worker task sender.
    pub fn preview_tx(&self) -> &Sender<WorkerTask> {
        &self.preview_tx
    }

    /// Accessor for the worker response receiver.
    pub fn response_rx(&self) -> &Receiver<WorkerResponse> {
        &self.response_rx
    }
}

/// Tasks sent to the preview worker.
pub enum WorkerTask {
    LoadPreview {
        path: PathBuf,
        max_lines: usize,
        pane_width: usize,
        generation: u64,
    },
}

/// Responses sent from the worker back to the main thread.
///
/// Every variant carries the generation of the originating request so the
/// receiver can discard results that a newer request has superseded.
#[derive(Debug)]
pub enum WorkerResponse {
    PreviewLoaded {
        lines: Vec<String>,
        generation: u64,
    },
    PreviewFailed {
        reason: String,
        generation: u64,
    },
}

/// Starts the preview worker thread.
///
/// Stacked-up requests are coalesced so only the newest queued preview is
/// actually read; superseded requests never touch the filesystem.
fn start_preview_worker(task_rx: Receiver<WorkerTask>, res_tx: Sender<WorkerResponse>) {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let WorkerTask::LoadPreview {
                mut path,
                mut max_lines,
                mut pane_width,
                mut generation,
            } = task;

            // Coalesce queued LoadPreview tasks to only process the latest
            while let Ok(next) = task_rx.try_recv() {
                let WorkerTask::LoadPreview {
                    path: p,
                    max_lines: m,
                    pane_width: w,
                    generation: g,
                } = next;
                path = p;
                max_lines = m;
                pane_width = w;
                generation = g;
            }

            let response = match read_file_preview(&path, max_lines, pane_width) {
                Ok(lines) => WorkerResponse::PreviewLoaded { lines, generation },
                Err(e) => WorkerResponse::PreviewFailed {
                    reason: e.to_string(),
                    generation,
                },
            };
            let _ = res_tx.send(response);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn preview_worker_loads_file() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let preview_file = temp.path().join("preview.txt");
        fs::write(&preview_file, "A\nB\nC\nD\n")?;

        let workers = Workers::spawn();
        workers.preview_tx().send(WorkerTask::LoadPreview {
            path: preview_file,
            max_lines: 2,
            pane_width: 40,
            generation: 3,
        })?;

        match workers.response_rx().recv_timeout(Duration::from_secs(2))? {
            WorkerResponse::PreviewLoaded { lines, generation } => {
                assert_eq!(generation, 3);
                let previewed: Vec<_> = lines.iter().map(|s| s.trim_end()).collect();
                assert_eq!(previewed, vec!["A", "B"]);
            }
            r => return Err(format!("unexpected response: {:?}", r).into()),
        }
        Ok(())
    }

    #[test]
    fn preview_worker_reports_read_failure() -> Result<(), Box<dyn std::error::Error>> {
        let workers = Workers::spawn();
        workers.preview_tx().send(WorkerTask::LoadPreview {
            path: PathBuf::from("/no/such/file/anywhere"),
            max_lines: 5,
            pane_width: 40,
            generation: 7,
        })?;

        match workers.response_rx().recv_timeout(Duration::from_secs(2))? {
            WorkerResponse::PreviewFailed { generation, .. } => {
                assert_eq!(generation, 7);
            }
            r => return Err(format!("unexpected response: {:?}", r).into()),
        }
        Ok(())
    }

    #[test]
    fn stacked_requests_answer_with_newest_generation() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let a = temp.path().join("a.txt");
        let b = temp.path().join("b.txt");
        fs::write(&a, "old\n")?;
        fs::write(&b, "new\n")?;

        let workers = Workers::spawn();
        // Queue several requests back to back; the worker may coalesce any
        // prefix of them, but the final answer must be for the newest.
        for (r#gen, path) in [(1u64, &a), (2, &a), (3, &b)] {
            workers.preview_tx().send(WorkerTask::LoadPreview {
                path: path.clone(),
                max_lines: 4,
                pane_width: 20,
                generation: r#gen,
            })?;
        }

        let mut last_gen = 0;
        while let Ok(resp) = workers.response_rx().recv_timeout(Duration::from_millis(500)) {
            if let WorkerResponse::PreviewLoaded { generation, .. } = resp {
                assert!(generation >= last_gen);
                last_gen = generation;
            }
        }
        assert_eq!(last_gen, 3);
        Ok(())
    }
}
