//! Filter, sort and paginate engine.
//!
//! Pure functions from the master job collection plus filter criteria to an ordered
//! list of job IDs. Nothing here fails: unparseable dates and missing optional fields
//! degrade per the permissive rules in [`filter`].
//!
//! # Pipeline
//!
//! ```text
//! jobs ─► drop applied ─► filter ─► today-only ─► sort ─► [JobId] ─► page
//! ```
//!
//! The output is IDs rather than indices: callers re-derive positions with
//! [`resolve_indices`] against whatever the master collection looks like when they
//! consume the result.
//!
//! # Modules
//!
//! - [`dates`]: Calendar-day thresholds
//! - [`filter`]: Criteria predicates
//! - [`sort`]: Default and filtered comparators
//! - [`pagination`]: Position-based pages
//! - [`applied`]: Applications tracker partition
//! - [`stats`]: Aggregate statistics

pub mod applied;
pub mod dates;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod stats;

pub use applied::{older_applied, older_applied_at, recent_applied, recent_applied_at, AppliedPartition};
pub use filter::matches;
pub use pagination::{page, total_pages, Pager, PAGE_SIZE};
pub use sort::{sort_jobs, SortMode};
pub use stats::{
    average_salary, job_count, level_counts, location_counts, posted_this_week, posted_this_week_at,
    JobStats, WeeklySummary,
};

use crate::domain::{FilterCriteria, Job, JobId};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Computes the visible listing order for the local calendar date.
///
/// See [`compute_visible_order_at`].
#[must_use]
pub fn compute_visible_order(
    jobs: &[Job],
    criteria: &FilterCriteria,
    today_only: bool,
) -> Vec<JobId> {
    compute_visible_order_at(jobs, criteria, today_only, dates::today())
}

/// Computes the visible listing order relative to `today`.
///
/// Applied jobs are always excluded; they surface only in the applications view.
/// The result is deterministic for identical inputs.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use jobboard::{engine::compute_visible_order_at, FilterCriteria, Job};
/// use url::Url;
///
/// let url = Url::parse("https://example.com/").unwrap();
/// let jobs = vec![
///     Job::new(1, "Old", "c", "l", "2025-01-01", url.clone()),
///     Job::new(2, "New", "c", "l", "2025-02-13", url.clone()),
///     Job::new(3, "Done", "c", "l", "2025-02-13", url).with_applied(true),
/// ];
/// let today = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
/// let order = compute_visible_order_at(&jobs, &FilterCriteria::default(), false, today);
/// assert_eq!(order, vec![2, 1]);
/// ```
#[must_use]
pub fn compute_visible_order_at(
    jobs: &[Job],
    criteria: &FilterCriteria,
    today_only: bool,
    today: NaiveDate,
) -> Vec<JobId> {
    let _span = tracing::debug_span!(
        "compute_visible_order",
        total_jobs = jobs.len(),
        filters_active = criteria.is_active(),
        today_only = today_only
    )
    .entered();

    let retained: Vec<&Job> = jobs
        .iter()
        .filter(|job| !job.applied_to)
        .filter(|job| filter::matches(job, criteria, today))
        .filter(|job| !today_only || dates::posted_today(job, today))
        .collect();

    let mode = SortMode::select(criteria, today_only);
    let ordered: Vec<JobId> = sort_jobs(retained, mode, today)
        .into_iter()
        .map(|job| job.id)
        .collect();

    tracing::debug!(visible = ordered.len(), mode = ?mode, "visible order computed");
    ordered
}

/// Maps ordered IDs back to positions in `jobs`, skipping IDs no longer present.
#[must_use]
pub fn resolve_indices(jobs: &[Job], ordered_ids: &[JobId]) -> Vec<usize> {
    let positions: HashMap<JobId, usize> = jobs
        .iter()
        .enumerate()
        .map(|(index, job)| (job.id, index))
        .collect();

    ordered_ids
        .iter()
        .filter_map(|id| positions.get(id).copied())
        .collect()
}
