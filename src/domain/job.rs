//! Job record domain model and payload decoding.
//!
//! A [`Job`] is one listing as returned by the remote API. Records are immutable
//! after decoding except for [`Job::applied_to`], which only user action flips.

use crate::domain::error::FetchError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

/// Identifier assigned to a job by the API.
pub type JobId = i64;

/// Wire format of [`Job::post_date`].
pub const POST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Stored location meaning "no location listed"; matched by the `Local` filter.
pub const NOT_APPLICABLE_LOCATION: &str = "N/A";

/// One job listing.
///
/// Field names follow the API payload through serde renames: `job_type` becomes
/// `level`, `job_link` becomes `url`. `post_date` stays a string so a bad date never
/// fails decoding; use [`Job::posted_on`] to read it as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Server-assigned id, unique within a batch.
    pub id: JobId,

    /// Position name as posted.
    pub title: String,

    /// Hiring company name.
    pub company: String,

    /// Free text; `"N/A"` marks a local position.
    pub location: String,

    /// Annual salary in whole currency units, if disclosed.
    #[serde(default)]
    pub salary: Option<u64>,

    /// Free-text seniority such as "Senior" or "Mid Level".
    #[serde(default, rename = "job_type")]
    pub level: Option<String>,

    /// Unparsed `YYYY-MM-DD` date.
    pub post_date: String,

    /// Absolute link to the posting.
    #[serde(rename = "job_link")]
    pub url: Url,

    /// Set by the user from the detail view. Never part of the payload.
    #[serde(skip)]
    pub applied_to: bool,
}

impl Job {
    /// Creates a job with no level, no salary and not applied to.
    ///
    /// # Examples
    ///
    /// ```
    /// use jobboard::Job;
    /// use url::Url;
    ///
    /// let url = Url::parse("https://example.com/jobs/1").unwrap();
    /// let job = Job::new(1, "Rust Engineer", "Ferrous", "Remote", "2025-02-10", url)
    ///     .with_salary(120_000);
    /// assert_eq!(job.salary, Some(120_000));
    /// assert!(!job.applied_to);
    /// ```
    #[must_use]
    pub fn new(
        id: JobId,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        post_date: impl Into<String>,
        url: Url,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            company: company.into(),
            location: location.into(),
            salary: None,
            level: None,
            post_date: post_date.into(),
            url,
            applied_to: false,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    #[must_use]
    pub const fn with_salary(mut self, salary: u64) -> Self {
        self.salary = Some(salary);
        self
    }

    #[must_use]
    pub const fn with_applied(mut self, applied_to: bool) -> Self {
        self.applied_to = applied_to;
        self
    }

    /// Parses the post date, returning `None` for anything not `YYYY-MM-DD`.
    #[must_use]
    pub fn posted_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.post_date.trim(), POST_DATE_FORMAT).ok()
    }

    /// Whether the stored location is the "not applicable" sentinel.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.location.eq_ignore_ascii_case(NOT_APPLICABLE_LOCATION)
    }
}

/// Decodes a response body into a batch of jobs.
///
/// Decoding is atomic: the first malformed record (wrong shape, relative or invalid
/// `job_link`, negative salary, repeated `id`) fails the whole batch.
///
/// # Errors
///
/// - [`FetchError::DecodeFailure`] if the body is not a JSON array
/// - [`FetchError::MalformedRecord`] if any element is not a valid job
pub fn decode_batch(body: &[u8]) -> Result<Vec<Job>, FetchError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_slice(body).map_err(|e| FetchError::DecodeFailure(e.to_string()))?;

    let mut seen = HashSet::with_capacity(values.len());

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let job = Job::deserialize(value).map_err(|e| FetchError::MalformedRecord {
                index,
                reason: e.to_string(),
            })?;

            if !seen.insert(job.id) {
                return Err(FetchError::MalformedRecord {
                    index,
                    reason: format!("duplicate id {}", job.id),
                });
            }

            Ok(job)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {"id": 7, "title": "iOS Developer", "company": "Apple", "location": "Cupertino, CA",
         "salary": 120000, "job_type": "Senior", "post_date": "2025-02-10",
         "job_link": "https://apple.com/jobs/7"},
        {"id": 9, "title": "Intern", "company": "Tiny", "location": "N/A",
         "salary": null, "job_type": null, "post_date": "yesterday",
         "job_link": "https://tiny.example/9"}
    ]"#;

    #[test]
    fn decodes_wire_field_names() {
        let jobs = decode_batch(PAYLOAD.as_bytes()).unwrap();
        assert_eq!(jobs.len(), 2);

        let first = &jobs[0];
        assert_eq!(first.id, 7);
        assert_eq!(first.level.as_deref(), Some("Senior"));
        assert_eq!(first.salary, Some(120_000));
        assert_eq!(first.url.as_str(), "https://apple.com/jobs/7");
        assert_eq!(first.posted_on(), NaiveDate::from_ymd_opt(2025, 2, 10));
        assert!(!first.applied_to);
    }

    #[test]
    fn null_optionals_decode_to_absent_and_bad_dates_survive() {
        let jobs = decode_batch(PAYLOAD.as_bytes()).unwrap();
        let second = &jobs[1];
        assert_eq!(second.salary, None);
        assert_eq!(second.level, None);
        assert_eq!(second.post_date, "yesterday");
        assert_eq!(second.posted_on(), None);
        assert!(second.is_local());
    }

    #[test]
    fn missing_optional_fields_decode_to_absent() {
        let body = r#"[{"id": 1, "title": "t", "company": "c", "location": "l",
                        "post_date": "2025-01-01", "job_link": "https://x.example/1"}]"#;
        let jobs = decode_batch(body.as_bytes()).unwrap();
        assert_eq!(jobs[0].salary, None);
        assert_eq!(jobs[0].level, None);
    }

    #[test]
    fn relative_link_fails_the_whole_batch() {
        let body = r#"[
            {"id": 1, "title": "t", "company": "c", "location": "l",
             "post_date": "2025-01-01", "job_link": "https://x.example/1"},
            {"id": 2, "title": "t", "company": "c", "location": "l",
             "post_date": "2025-01-01", "job_link": "/jobs/2"}
        ]"#;
        let err = decode_batch(body.as_bytes()).unwrap_err();
        assert!(matches!(err, FetchError::MalformedRecord { index: 1, .. }));
    }

    #[test]
    fn negative_salary_is_malformed() {
        let body = r#"[{"id": 1, "title": "t", "company": "c", "location": "l", "salary": -5,
                        "post_date": "2025-01-01", "job_link": "https://x.example/1"}]"#;
        let err = decode_batch(body.as_bytes()).unwrap_err();
        assert!(matches!(err, FetchError::MalformedRecord { index: 0, .. }));
    }

    #[test]
    fn duplicate_ids_are_malformed() {
        let body = r#"[
            {"id": 4, "title": "a", "company": "c", "location": "l",
             "post_date": "2025-01-01", "job_link": "https://x.example/a"},
            {"id": 4, "title": "b", "company": "c", "location": "l",
             "post_date": "2025-01-01", "job_link": "https://x.example/b"}
        ]"#;
        let err = decode_batch(body.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            FetchError::MalformedRecord {
                index: 1,
                reason: "duplicate id 4".to_string()
            }
        );
    }

    #[test]
    fn non_array_body_is_a_decode_failure() {
        let err = decode_batch(br#"{"jobs": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::DecodeFailure(_)));

        let err = decode_batch(b"<html>").unwrap_err();
        assert!(matches!(err, FetchError::DecodeFailure(_)));
    }
}
