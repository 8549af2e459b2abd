//! Calendar-day arithmetic shared by the recency filter, the default sort, the
//! applied partition and the weekly statistics.
//!
//! Everything works on whole calendar days (`NaiveDate`): a post date has no time
//! of day, so "start of day N days ago" is simply the date N days before today.

use crate::domain::Job;
use chrono::{Duration, NaiveDate};

/// Posts at most this many days old sort into the "recent" partition.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Applications on posts at least this many days old are "older".
pub const APPLICATION_AGE_DAYS: i64 = 14;

/// Today's date on the local calendar.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Start-of-day cutoff `days` before `today`.
#[must_use]
pub fn threshold(today: NaiveDate, days: i64) -> NaiveDate {
    today
        .checked_sub_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MIN)
}

/// Whether the job was posted on or after the cutoff `days` before `today`.
///
/// Unparseable post dates never qualify.
#[must_use]
pub fn posted_within(job: &Job, today: NaiveDate, days: i64) -> bool {
    job.posted_on()
        .is_some_and(|posted| posted >= threshold(today, days))
}

/// Whether the job was posted in `[today, tomorrow)`.
#[must_use]
pub fn posted_today(job: &Job, today: NaiveDate) -> bool {
    job.posted_on() == Some(today)
}

/// Whole days between the post date and today (negative for future dates).
#[must_use]
pub fn days_since(posted: NaiveDate, today: NaiveDate) -> i64 {
    (today - posted).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn job_posted(date: &str) -> Job {
        Job::new(1, "t", "c", "l", date, Url::parse("https://x.example/1").unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn threshold_is_inclusive() {
        let today = date(2025, 3, 1);
        assert!(posted_within(&job_posted("2025-02-22"), today, 7));
        assert!(!posted_within(&job_posted("2025-02-21"), today, 7));
    }

    #[test]
    fn unparseable_dates_never_qualify() {
        let today = date(2025, 3, 1);
        assert!(!posted_within(&job_posted("Today"), today, 30));
        assert!(!posted_today(&job_posted(""), today));
    }

    #[test]
    fn posted_today_only_matches_the_current_day() {
        let today = date(2025, 3, 1);
        assert!(posted_today(&job_posted("2025-03-01"), today));
        assert!(!posted_today(&job_posted("2025-02-28"), today));
        assert!(!posted_today(&job_posted("2025-03-02"), today));
    }

    #[test]
    fn days_since_counts_calendar_days() {
        assert_eq!(days_since(date(2025, 2, 15), date(2025, 3, 1)), 14);
        assert_eq!(days_since(date(2025, 3, 2), date(2025, 3, 1)), -1);
    }
}
