//! Filter predicates.
//!
//! A job is retained iff every active criterion matches. Missing data is handled
//! permissively as a business rule: a job without a level matches any level filter
//! and a job without a salary matches any salary range, so unlabeled postings are
//! never hidden. Unparseable post dates fail a recency filter but never error.

use super::dates;
use crate::domain::{FilterCriteria, Job, LocationFilter};
use chrono::NaiveDate;

/// Returns `true` if the job satisfies every active criterion.
///
/// Applied status is not considered here; see
/// [`compute_visible_order_at`](super::compute_visible_order_at).
#[must_use]
pub fn matches(job: &Job, criteria: &FilterCriteria, today: NaiveDate) -> bool {
    contains_ignore_case(&job.title, &criteria.title)
        && contains_ignore_case(&job.company, &criteria.company)
        && matches_location(job, criteria.location.as_ref())
        && matches_level(job, criteria)
        && matches_salary(job, criteria)
        && matches_recency(job, criteria, today)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_location(job: &Job, location: Option<&LocationFilter>) -> bool {
    match location {
        None => true,
        Some(LocationFilter::Local) => job.is_local(),
        Some(other) => contains_ignore_case(&job.location, other.needle()),
    }
}

fn matches_level(job: &Job, criteria: &FilterCriteria) -> bool {
    match (criteria.level, job.level.as_deref()) {
        (None, _) | (Some(_), None) => true,
        (Some(wanted), Some(stored)) => contains_ignore_case(stored, wanted.as_str()),
    }
}

fn matches_salary(job: &Job, criteria: &FilterCriteria) -> bool {
    match (criteria.salary, job.salary) {
        (None, _) | (Some(_), None) => true,
        (Some(range), Some(salary)) => range.contains(salary),
    }
}

fn matches_recency(job: &Job, criteria: &FilterCriteria, today: NaiveDate) -> bool {
    criteria
        .posted_within
        .map_or(true, |window| dates::posted_within(job, today, window.days()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{JobLevel, PostedWithin, SalaryRange};
    use url::Url;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
    }

    fn job(location: &str) -> Job {
        Job::new(
            1,
            "Senior Rust Engineer",
            "Ferrous Systems",
            location,
            "2025-02-10",
            Url::parse("https://x.example/1").unwrap(),
        )
    }

    #[test]
    fn default_criteria_match_everything() {
        assert!(matches(&job("Berlin"), &FilterCriteria::default(), today()));
    }

    #[test]
    fn title_and_company_are_case_insensitive_substrings() {
        let criteria = FilterCriteria {
            title: "rust".to_string(),
            company: "FERROUS".to_string(),
            ..FilterCriteria::default()
        };
        assert!(matches(&job("Berlin"), &criteria, today()));

        let criteria = FilterCriteria {
            title: "python".to_string(),
            ..FilterCriteria::default()
        };
        assert!(!matches(&job("Berlin"), &criteria, today()));
    }

    #[test]
    fn text_needles_are_matched_verbatim() {
        let criteria = FilterCriteria {
            title: "Rust ".to_string(),
            ..FilterCriteria::default()
        };
        assert!(matches(&job("Berlin"), &criteria, today()));

        let criteria = FilterCriteria {
            title: "Engineer ".to_string(),
            ..FilterCriteria::default()
        };
        assert!(!matches(&job("Berlin"), &criteria, today()));
    }

    #[test]
    fn local_matches_only_the_not_applicable_sentinel() {
        let criteria = FilterCriteria {
            location: Some(LocationFilter::Local),
            ..FilterCriteria::default()
        };
        assert!(matches(&job("n/a"), &criteria, today()));
        assert!(!matches(&job("Local, CA"), &criteria, today()));
    }

    #[test]
    fn other_locations_are_substrings() {
        let criteria = FilterCriteria {
            location: Some(LocationFilter::Remote),
            ..FilterCriteria::default()
        };
        assert!(matches(&job("Remote (US)"), &criteria, today()));
        assert!(!matches(&job("Berlin"), &criteria, today()));
    }

    #[test]
    fn missing_level_matches_any_level_filter() {
        let criteria = FilterCriteria {
            level: Some(JobLevel::Expert),
            ..FilterCriteria::default()
        };
        assert!(matches(&job("Berlin"), &criteria, today()));
        assert!(!matches(&job("Berlin").with_level("Junior"), &criteria, today()));
        assert!(matches(&job("Berlin").with_level("expert level"), &criteria, today()));
    }

    #[test]
    fn salary_range_is_inclusive_and_missing_salary_passes() {
        let criteria = FilterCriteria {
            salary: Some(SalaryRange::new(50_000, 80_000).unwrap()),
            ..FilterCriteria::default()
        };
        assert!(matches(&job("Berlin"), &criteria, today()));
        assert!(matches(&job("Berlin").with_salary(50_000), &criteria, today()));
        assert!(matches(&job("Berlin").with_salary(80_000), &criteria, today()));
        assert!(!matches(&job("Berlin").with_salary(80_001), &criteria, today()));
    }

    #[test]
    fn recency_uses_start_of_day_threshold() {
        let criteria = FilterCriteria {
            posted_within: Some(PostedWithin::OneDay),
            ..FilterCriteria::default()
        };
        let mut yesterday = job("Berlin");
        yesterday.post_date = "2025-02-13".to_string();
        assert!(matches(&yesterday, &criteria, today()));
        assert!(!matches(&job("Berlin"), &criteria, today()));

        let mut unknown = job("Berlin");
        unknown.post_date = "soon".to_string();
        assert!(!matches(&unknown, &criteria, today()));
    }
}
