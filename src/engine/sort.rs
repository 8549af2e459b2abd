//! Listing order.
//!
//! Two mutually exclusive modes, chosen by whether the user is narrowing results:
//!
//! - [`SortMode::Default`]: recent posts (within [`RECENT_WINDOW_DAYS`]) before
//!   older ones, newest first inside each partition.
//! - [`SortMode::Filtered`]: salaried posts first by ascending salary, then level
//!   (only when a level filter is active), then newest first.
//!
//! Sorting is stable, so ties keep the order the server returned.

use super::dates::{self, RECENT_WINDOW_DAYS};
use crate::domain::{FilterCriteria, Job};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Comparator selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// No filter active: recency partition, newest first.
    Default,
    /// Some filter active: salary transparency first.
    Filtered {
        /// Break salary ties by level label.
        by_level: bool,
    },
}

impl SortMode {
    /// Picks the mode for the given criteria; the today-only toggle counts as a filter.
    #[must_use]
    pub fn select(criteria: &FilterCriteria, today_only: bool) -> Self {
        if criteria.is_active() || today_only {
            Self::Filtered {
                by_level: criteria.level.is_some(),
            }
        } else {
            Self::Default
        }
    }
}

/// A job with its post date parsed once for the comparator.
struct Keyed<'a> {
    job: &'a Job,
    posted: Option<NaiveDate>,
    recent: bool,
}

/// Sorts the jobs according to `mode`.
#[must_use]
pub fn sort_jobs<'a>(jobs: Vec<&'a Job>, mode: SortMode, today: NaiveDate) -> Vec<&'a Job> {
    let cutoff = dates::threshold(today, RECENT_WINDOW_DAYS);

    let mut keyed: Vec<Keyed<'a>> = jobs
        .into_iter()
        .map(|job| {
            let posted = job.posted_on();
            Keyed {
                job,
                posted,
                recent: posted.is_some_and(|date| date >= cutoff),
            }
        })
        .collect();

    match mode {
        SortMode::Default => keyed.sort_by(default_order),
        SortMode::Filtered { by_level } => keyed.sort_by(|a, b| filtered_order(a, b, by_level)),
    }

    keyed.into_iter().map(|k| k.job).collect()
}

fn default_order(a: &Keyed<'_>, b: &Keyed<'_>) -> Ordering {
    b.recent
        .cmp(&a.recent)
        .then_with(|| newest_first(a.posted, b.posted))
}

fn filtered_order(a: &Keyed<'_>, b: &Keyed<'_>, by_level: bool) -> Ordering {
    salary_ascending(a.job.salary, b.job.salary)
        .then_with(|| {
            if by_level {
                level_ascending(a.job.level.as_deref(), b.job.level.as_deref())
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| newest_first(a.posted, b.posted))
}

/// Present values before absent ones.
fn present_first<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn newest_first(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    present_first(a, b, |x, y| y.cmp(&x))
}

fn salary_ascending(a: Option<u64>, b: Option<u64>) -> Ordering {
    present_first(a, b, |x, y| x.cmp(&y))
}

fn level_ascending(a: Option<&str>, b: Option<&str>) -> Ordering {
    present_first(a, b, |x, y| x.to_lowercase().cmp(&y.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobLevel;
    use url::Url;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
    }

    fn job(id: i64, post_date: &str) -> Job {
        Job::new(id, "t", "c", "l", post_date, Url::parse("https://x.example/").unwrap())
    }

    fn ids(sorted: &[&Job]) -> Vec<i64> {
        sorted.iter().map(|j| j.id).collect()
    }

    #[test]
    fn mode_selection_counts_today_only_as_a_filter() {
        let criteria = FilterCriteria::default();
        assert_eq!(SortMode::select(&criteria, false), SortMode::Default);
        assert_eq!(
            SortMode::select(&criteria, true),
            SortMode::Filtered { by_level: false }
        );

        let criteria = FilterCriteria {
            level: Some(JobLevel::Mid),
            ..FilterCriteria::default()
        };
        assert_eq!(
            SortMode::select(&criteria, false),
            SortMode::Filtered { by_level: true }
        );
    }

    #[test]
    fn default_mode_puts_undated_jobs_last_in_original_order() {
        let jobs = [
            job(1, "bogus"),
            job(2, "2025-01-01"),
            job(3, "2025-02-13"),
            job(4, "???"),
        ];
        let sorted = sort_jobs(jobs.iter().collect(), SortMode::Default, today());
        assert_eq!(ids(&sorted), vec![3, 2, 1, 4]);
    }

    #[test]
    fn default_mode_recent_boundary_is_inclusive() {
        let jobs = [job(1, "2025-02-06"), job(2, "2025-02-07")];
        let sorted = sort_jobs(jobs.iter().collect(), SortMode::Default, today());
        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn filtered_mode_breaks_salary_ties_by_level_then_date() {
        let jobs = [
            job(1, "2025-02-01").with_salary(60_000).with_level("Senior"),
            job(2, "2025-02-10").with_salary(60_000).with_level("Junior"),
            job(3, "2025-02-12").with_salary(60_000).with_level("junior"),
            job(4, "2025-02-12").with_salary(60_000),
        ];
        let sorted = sort_jobs(
            jobs.iter().collect(),
            SortMode::Filtered { by_level: true },
            today(),
        );
        assert_eq!(ids(&sorted), vec![3, 2, 1, 4]);

        let sorted = sort_jobs(
            jobs.iter().collect(),
            SortMode::Filtered { by_level: false },
            today(),
        );
        assert_eq!(ids(&sorted), vec![3, 4, 2, 1]);
    }
}
