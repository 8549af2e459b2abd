//! Worker thread implementation for fetching and recomputation.
//!
//! [`JobWorker`] turns a [`WorkerMessage`] into a [`WorkerResponse`] synchronously.
//! [`WorkerHandle`] runs a `JobWorker` on its own thread, feeding it from an `mpsc`
//! channel and passing each response to a callback supplied at spawn time.

use crate::client::JobSource;
use crate::domain::error::{JobBoardError, Result};
use crate::domain::{FetchError, FilterCriteria, Job};
use crate::engine;
use crate::worker::{WorkerMessage, WorkerResponse};
use chrono::NaiveDate;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

/// Name given to the spawned worker thread.
pub const WORKER_THREAD_NAME: &str = "jobboard-worker";

/// Worker state: the job source the fetches go to.
pub struct JobWorker {
    source: Box<dyn JobSource>,
}

impl JobWorker {
    #[must_use]
    pub fn new(source: Box<dyn JobSource>) -> Self {
        Self { source }
    }

    /// Helper for handling fetch results with consistent logging.
    fn handle_fetch_result<F>(result: std::result::Result<Vec<Job>, FetchError>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(Vec<Job>) -> WorkerResponse,
    {
        match result {
            Ok(jobs) => {
                tracing::debug!(job_count = jobs.len(), "fetch successful");
                on_success(jobs)
            }
            Err(error) => {
                tracing::warn!(error = %error, "fetch failed");
                WorkerResponse::FetchFailed { error }
            }
        }
    }

    fn handle_fetch_jobs(&self) -> WorkerResponse {
        Self::handle_fetch_result(self.source.fetch_jobs(), |jobs| {
            WorkerResponse::JobsFetched { jobs }
        })
    }

    fn handle_compute_order(
        generation: u64,
        jobs: &[Job],
        criteria: &FilterCriteria,
        today_only: bool,
        today: NaiveDate,
    ) -> WorkerResponse {
        let ids = engine::compute_visible_order_at(jobs, criteria, today_only, today);
        tracing::debug!(generation = generation, visible = ids.len(), "order computed");
        WorkerResponse::OrderComputed { generation, ids }
    }

    /// Processes a worker message and returns the response.
    ///
    /// The handling span is a child of the span stored in the message.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!(
            parent: message.parent(),
            "worker_handle_message",
            message_type = message.kind()
        );
        let _guard = span.entered();

        match message {
            WorkerMessage::FetchJobs { .. } => self.handle_fetch_jobs(),

            WorkerMessage::ComputeOrder {
                generation,
                jobs,
                criteria,
                today_only,
                today,
                ..
            } => Self::handle_compute_order(generation, &jobs, &criteria, today_only, today),
        }
    }
}

impl std::fmt::Debug for JobWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobWorker").finish_non_exhaustive()
    }
}

/// Handle to a running worker thread.
///
/// Dropping the handle closes the request channel and joins the thread after it
/// finishes the message in progress.
#[derive(Debug)]
pub struct WorkerHandle {
    sender: Option<Sender<WorkerMessage>>,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Spawns the worker thread.
    ///
    /// `on_response` is called on the worker thread for every response; returning
    /// `false` stops the worker (e.g. because the receiving side is gone).
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::Io`] if the thread cannot be spawned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::mpsc;
    /// use jobboard::client::StaticJobSource;
    /// use jobboard::worker::{WorkerHandle, WorkerMessage, WorkerResponse};
    ///
    /// let (tx, rx) = mpsc::channel();
    /// let worker = WorkerHandle::spawn(Box::new(StaticJobSource::new(vec![])), move |response| {
    ///     tx.send(response).is_ok()
    /// })?;
    ///
    /// worker.post(WorkerMessage::fetch_jobs())?;
    /// assert_eq!(rx.recv().unwrap(), WorkerResponse::JobsFetched { jobs: vec![] });
    /// # Ok::<(), jobboard::JobBoardError>(())
    /// ```
    pub fn spawn<F>(source: Box<dyn JobSource>, mut on_response: F) -> Result<Self>
    where
        F: FnMut(WorkerResponse) -> bool + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel::<WorkerMessage>();

        let thread = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                let mut worker = JobWorker::new(source);
                for message in receiver {
                    let response = worker.handle_message(message);
                    if !on_response(response) {
                        tracing::debug!("response receiver gone, stopping worker");
                        break;
                    }
                }
                tracing::debug!("worker stopped");
            })?;

        Ok(Self {
            sender: Some(sender),
            thread: Some(thread),
        })
    }

    /// Queues a message for the worker.
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::Worker`] if the worker thread has stopped.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        let kind = message.kind();
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| JobBoardError::Worker("worker already shut down".to_string()))?;

        sender
            .send(message)
            .map_err(|_| JobBoardError::Worker(format!("worker stopped before receiving {kind}")))?;

        tracing::debug!(message_type = kind, "posted message to worker");
        Ok(())
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("worker thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StaticJobSource;
    use std::sync::Arc;
    use url::Url;

    fn job(id: i64, date: &str) -> Job {
        Job::new(id, "t", "c", "l", date, Url::parse("https://x.example/").unwrap())
    }

    #[test]
    fn fetch_failure_becomes_a_response() {
        let mut worker = JobWorker::new(Box::new(StaticJobSource::failing(
            FetchError::HttpStatus { status: 500 },
        )));

        assert_eq!(
            worker.handle_message(WorkerMessage::fetch_jobs()),
            WorkerResponse::FetchFailed {
                error: FetchError::HttpStatus { status: 500 }
            }
        );
    }

    #[test]
    fn compute_order_echoes_generation() {
        let mut worker = JobWorker::new(Box::new(StaticJobSource::new(Vec::new())));
        let jobs = Arc::new(vec![job(1, "2025-02-01"), job(2, "2025-02-09")]);
        let today = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();

        let response = worker.handle_message(WorkerMessage::compute_order(
            7,
            jobs,
            FilterCriteria::default(),
            false,
            today,
        ));

        assert_eq!(
            response,
            WorkerResponse::OrderComputed {
                generation: 7,
                ids: vec![2, 1]
            }
        );
    }

    #[test]
    fn post_after_worker_stops_is_an_error() {
        let handle = WorkerHandle::spawn(Box::new(StaticJobSource::new(Vec::new())), |_| false)
            .unwrap();
        handle.post(WorkerMessage::fetch_jobs()).unwrap();

        // The callback returned false, so the thread exits and drops the receiver.
        let mut stopped = false;
        for _ in 0..200 {
            if handle.post(WorkerMessage::fetch_jobs()).is_err() {
                stopped = true;
                break;
            }
            thread::sleep(std::time::Duration::from_millis(5));
        }
        assert!(stopped);
    }
}
