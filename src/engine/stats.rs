//! Aggregate statistics for the stats view.
//!
//! The average salary counts a missing salary as zero in both the sum and the job
//! count. Use [`disclosed_salary_count`] alongside it to tell how many salaries were
//! actually disclosed.

use super::dates::{self, RECENT_WINDOW_DAYS};
use crate::domain::{Job, JobLevel, NOT_APPLICABLE_LOCATION};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Label used for jobs without a level.
pub const UNKNOWN_LEVEL: &str = "Unknown";

/// Label used for jobs at the "not applicable" location.
pub const LOCAL_LOCATION: &str = "Local";

#[must_use]
pub fn job_count<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> usize {
    jobs.into_iter().count()
}

/// Integer average salary; missing salaries count as 0; no jobs yields 0.
///
/// # Examples
///
/// ```
/// use jobboard::{engine::average_salary, Job};
/// use url::Url;
///
/// let url = Url::parse("https://example.com/").unwrap();
/// let jobs = vec![
///     Job::new(1, "a", "c", "l", "2025-01-01", url.clone()).with_salary(100_001),
///     Job::new(2, "b", "c", "l", "2025-01-01", url),
/// ];
/// assert_eq!(average_salary(&jobs), 50_000);
/// assert_eq!(average_salary(&Vec::<Job>::new()), 0);
/// ```
#[must_use]
pub fn average_salary<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> u64 {
    let (total, count) = jobs.into_iter().fold((0_u128, 0_u128), |(total, count), job| {
        (total + u128::from(job.salary.unwrap_or(0)), count + 1)
    });
    u64::try_from(total / count.max(1)).unwrap_or(u64::MAX)
}

/// Number of jobs that disclose a salary.
#[must_use]
pub fn disclosed_salary_count<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> usize {
    jobs.into_iter().filter(|job| job.salary.is_some()).count()
}

/// Job counts grouped by level label.
///
/// Labels naming a [`JobLevel`] come first in seniority order, then other labels
/// alphabetically, then [`UNKNOWN_LEVEL`].
#[must_use]
pub fn level_counts<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> Vec<(String, usize)> {
    let mut counts: HashMap<Option<String>, usize> = HashMap::new();
    for job in jobs {
        *counts.entry(job.level.clone()).or_default() += 1;
    }

    let mut grouped: Vec<(Option<String>, usize)> = counts.into_iter().collect();
    grouped.sort_by_cached_key(|(label, _)| match label {
        Some(text) => match JobLevel::from_label(text) {
            Some(level) => (0, Some(level), text.clone()),
            None => (1, None, text.clone()),
        },
        None => (2, None, String::new()),
    });

    grouped
        .into_iter()
        .map(|(label, count)| (label.unwrap_or_else(|| UNKNOWN_LEVEL.to_string()), count))
        .collect()
}

/// Job counts grouped by location, alphabetically; `"N/A"` is reported as `"Local"`.
#[must_use]
pub fn location_counts<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for job in jobs {
        let label = if job.location == NOT_APPLICABLE_LOCATION {
            LOCAL_LOCATION.to_string()
        } else {
            job.location.clone()
        };
        *counts.entry(label).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Breakdown of the jobs posted in the last seven days.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySummary {
    pub count: usize,
    pub levels: Vec<(String, usize)>,
    pub locations: Vec<(String, usize)>,
    pub average_salary: u64,
}

/// Summarizes jobs posted within the last seven days, applied or not.
#[must_use]
pub fn posted_this_week_at(jobs: &[Job], today: NaiveDate) -> WeeklySummary {
    let week: Vec<&Job> = jobs
        .iter()
        .filter(|job| dates::posted_within(job, today, RECENT_WINDOW_DAYS))
        .collect();

    WeeklySummary {
        count: week.len(),
        levels: level_counts(week.iter().copied()),
        locations: location_counts(week.iter().copied()),
        average_salary: average_salary(week.iter().copied()),
    }
}

/// [`posted_this_week_at`] for the local calendar date.
#[must_use]
pub fn posted_this_week(jobs: &[Job]) -> WeeklySummary {
    posted_this_week_at(jobs, dates::today())
}

/// Everything the stats view shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobStats {
    pub total: usize,
    pub average_salary: u64,
    pub disclosed_salaries: usize,
    pub levels: Vec<(String, usize)>,
    pub locations: Vec<(String, usize)>,
    pub this_week: WeeklySummary,
}

impl JobStats {
    #[must_use]
    pub fn compute_at(jobs: &[Job], today: NaiveDate) -> Self {
        let _span = tracing::debug_span!("compute_stats", total_jobs = jobs.len()).entered();

        Self {
            total: job_count(jobs),
            average_salary: average_salary(jobs),
            disclosed_salaries: disclosed_salary_count(jobs),
            levels: level_counts(jobs),
            locations: location_counts(jobs),
            this_week: posted_this_week_at(jobs, today),
        }
    }
}
