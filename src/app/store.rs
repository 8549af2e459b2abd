//! Master job collection with change notification.
//!
//! [`JobStore`] is the single owner of the fetched listings. Mutations publish a
//! [`StoreChange`] to every subscriber channel, so dependent views learn about a new
//! batch or a toggled application without polling.
//!
//! The collection is held in an `Arc` so recomputation requests can carry a cheap
//! snapshot to the worker. Mutating while a snapshot is in flight clones the vector
//! (`Arc::make_mut`); the snapshot keeps the old contents.

use crate::domain::{Job, JobId};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

/// Notification published after each store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    /// The whole collection was replaced by a fetched batch.
    Replaced {
        /// Number of jobs now held.
        count: usize,
    },

    /// One job's applied flag flipped.
    AppliedToggled {
        /// The job that changed.
        id: JobId,
        /// Its new applied flag.
        applied_to: bool,
    },
}

/// Owner of the master job collection.
///
/// # Example
///
/// ```rust
/// use jobboard::{Job, JobStore, StoreChange};
/// use url::Url;
///
/// let url = Url::parse("https://example.com/").unwrap();
/// let mut store = JobStore::default();
/// let changes = store.subscribe();
///
/// store.replace_all(vec![Job::new(1, "t", "c", "l", "2025-02-10", url)]);
/// assert!(store.toggle_applied(1));
/// assert!(!store.toggle_applied(99));
///
/// assert_eq!(changes.try_recv(), Ok(StoreChange::Replaced { count: 1 }));
/// assert_eq!(changes.try_recv(), Ok(StoreChange::AppliedToggled { id: 1, applied_to: true }));
/// assert!(changes.try_recv().is_err());
/// ```
#[derive(Debug, Default)]
pub struct JobStore {
    jobs: Arc<Vec<Job>>,
    subscribers: Vec<Sender<StoreChange>>,
}

impl JobStore {
    #[must_use]
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: Arc::new(jobs),
            subscribers: Vec::new(),
        }
    }

    /// Current jobs in fetch order.
    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Shared snapshot for handing to another thread.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Job>> {
        Arc::clone(&self.jobs)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Registers a new subscriber; dropped receivers are pruned on the next publish.
    pub fn subscribe(&mut self) -> Receiver<StoreChange> {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(sender);
        receiver
    }

    /// Replaces the whole collection with a freshly fetched batch.
    pub fn replace_all(&mut self, jobs: Vec<Job>) {
        let count = jobs.len();
        self.jobs = Arc::new(jobs);
        tracing::debug!(job_count = count, "job store replaced");
        self.publish(&StoreChange::Replaced { count });
    }

    /// Flips the applied flag of the job with `id`.
    ///
    /// Returns `false` and changes nothing if no job has that id.
    pub fn toggle_applied(&mut self, id: JobId) -> bool {
        let Some(position) = self.jobs.iter().position(|job| job.id == id) else {
            tracing::debug!(job_id = id, "toggle ignored: unknown job");
            return false;
        };

        let job = &mut Arc::make_mut(&mut self.jobs)[position];
        job.applied_to = !job.applied_to;
        let applied_to = job.applied_to;

        tracing::debug!(job_id = id, applied_to = applied_to, "applied status toggled");
        self.publish(&StoreChange::AppliedToggled { id, applied_to });
        true
    }

    fn publish(&mut self, change: &StoreChange) {
        self.subscribers
            .retain(|subscriber| subscriber.send(change.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn job(id: JobId) -> Job {
        Job::new(id, "t", "c", "l", "2025-02-10", Url::parse("https://x.example/").unwrap())
    }

    #[test]
    fn toggle_flips_in_place_and_back() {
        let mut store = JobStore::new(vec![job(1), job(2)]);
        assert!(store.toggle_applied(2));
        assert!(store.get(2).unwrap().applied_to);
        assert!(!store.get(1).unwrap().applied_to);

        assert!(store.toggle_applied(2));
        assert!(!store.get(2).unwrap().applied_to);
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutation() {
        let mut store = JobStore::new(vec![job(1)]);
        let snapshot = store.snapshot();

        store.toggle_applied(1);

        assert!(!snapshot[0].applied_to);
        assert!(store.jobs()[0].applied_to);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut store = JobStore::default();
        let kept = store.subscribe();
        drop(store.subscribe());

        store.replace_all(vec![job(5)]);

        assert_eq!(store.subscribers.len(), 1);
        assert_eq!(kept.try_recv(), Ok(StoreChange::Replaced { count: 1 }));
    }

    #[test]
    fn unknown_id_publishes_nothing() {
        let mut store = JobStore::new(vec![job(1)]);
        let changes = store.subscribe();
        assert!(!store.toggle_applied(42));
        assert!(changes.try_recv().is_err());
    }
}
