//! Applied-jobs partition for the applications tracker.
//!
//! Applied jobs split into "recent" and "older" by the age of the posting:
//! a posting exactly [`APPLICATION_AGE_DAYS`] old is already "older". Postings with
//! an unparseable date cannot be aged and stay in "recent".

use super::dates::{self, APPLICATION_AGE_DAYS};
use crate::domain::Job;
use chrono::NaiveDate;

/// Applied jobs split by posting age, in master-collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedPartition<'a> {
    pub recent: Vec<&'a Job>,
    pub older: Vec<&'a Job>,
}

impl<'a> AppliedPartition<'a> {
    /// Partitions the applied jobs in `jobs` relative to `today`.
    #[must_use]
    pub fn compute_at(jobs: &'a [Job], today: NaiveDate) -> Self {
        let (older, recent): (Vec<&Job>, Vec<&Job>) = jobs
            .iter()
            .filter(|job| job.applied_to)
            .partition(|job| is_older_application(job, today));
        Self { recent, older }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty() && self.older.is_empty()
    }
}

/// Whether the posting is at least [`APPLICATION_AGE_DAYS`] old.
#[must_use]
pub fn is_older_application(job: &Job, today: NaiveDate) -> bool {
    job.posted_on()
        .is_some_and(|posted| posted <= dates::threshold(today, APPLICATION_AGE_DAYS))
}

/// Applied jobs posted less than 14 days before `today`.
#[must_use]
pub fn recent_applied_at(jobs: &[Job], today: NaiveDate) -> Vec<&Job> {
    AppliedPartition::compute_at(jobs, today).recent
}

/// Applied jobs posted 14 or more days before `today`.
#[must_use]
pub fn older_applied_at(jobs: &[Job], today: NaiveDate) -> Vec<&Job> {
    AppliedPartition::compute_at(jobs, today).older
}

/// [`recent_applied_at`] for the local calendar date.
#[must_use]
pub fn recent_applied(jobs: &[Job]) -> Vec<&Job> {
    recent_applied_at(jobs, dates::today())
}

/// [`older_applied_at`] for the local calendar date.
#[must_use]
pub fn older_applied(jobs: &[Job]) -> Vec<&Job> {
    older_applied_at(jobs, dates::today())
}
