//! Filter criteria value objects.
//!
//! [`FilterCriteria`] carries every user constraint that narrows the listing. Each
//! field defaults to "no constraint"; closed choices (location, level, recency) are
//! enums so an out-of-range selection cannot be represented.

use crate::domain::error::{JobBoardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Location selector.
///
/// `Local` is special: it matches the "not applicable" sentinel stored for postings
/// without a location. Every other variant is a case-insensitive substring match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationFilter {
    Local,
    Hybrid,
    Remote,
    /// Free-text location, e.g. a city name.
    Custom(String),
}

impl LocationFilter {
    /// Text compared against the stored location (ignored for `Local`).
    #[must_use]
    pub fn needle(&self) -> &str {
        match self {
            Self::Local => "Local",
            Self::Hybrid => "Hybrid",
            Self::Remote => "Remote",
            Self::Custom(text) => text,
        }
    }
}

impl FromStr for LocationFilter {
    type Err = JobBoardError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(JobBoardError::Criteria("empty location".to_string()));
        }
        Ok(match trimmed.to_ascii_lowercase().as_str() {
            "local" => Self::Local,
            "hybrid" => Self::Hybrid,
            "remote" => Self::Remote,
            _ => Self::Custom(trimmed.to_string()),
        })
    }
}

/// Seniority selector.
///
/// Matched against the stored level label by case-insensitive substring, so `Mid`
/// matches `"Mid Level"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JobLevel {
    Internship,
    Junior,
    Mid,
    Senior,
    Expert,
}

impl JobLevel {
    /// All levels in seniority order.
    pub const ALL: [Self; 5] = [
        Self::Internship,
        Self::Junior,
        Self::Mid,
        Self::Senior,
        Self::Expert,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Internship => "Internship",
            Self::Junior => "Junior",
            Self::Mid => "Mid",
            Self::Senior => "Senior",
            Self::Expert => "Expert",
        }
    }

    /// Finds the level named inside a free-text label, if any.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let lower = label.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| lower.contains(&level.as_str().to_lowercase()))
    }
}

impl fmt::Display for JobLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobLevel {
    type Err = JobBoardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| JobBoardError::Criteria(format!("unknown level `{}`", s.trim())))
    }
}

/// "Posted within" recency selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostedWithin {
    OneDay,
    SevenDays,
    FourteenDays,
    ThirtyDays,
}

impl PostedWithin {
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::OneDay => 1,
            Self::SevenDays => 7,
            Self::FourteenDays => 14,
            Self::ThirtyDays => 30,
        }
    }

    /// Maps a day count onto the closed enumeration.
    #[must_use]
    pub const fn from_days(days: i64) -> Option<Self> {
        match days {
            1 => Some(Self::OneDay),
            7 => Some(Self::SevenDays),
            14 => Some(Self::FourteenDays),
            30 => Some(Self::ThirtyDays),
            _ => None,
        }
    }
}

/// Inclusive salary bounds with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    min: u64,
    max: u64,
}

impl SalaryRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::Criteria`] if `min > max`.
    pub fn new(min: u64, max: u64) -> Result<Self> {
        if min > max {
            return Err(JobBoardError::Criteria(format!(
                "salary minimum {min} exceeds maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> u64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u64 {
        self.max
    }

    #[must_use]
    pub const fn contains(&self, salary: u64) -> bool {
        self.min <= salary && salary <= self.max
    }
}

/// User-specified constraints narrowing the visible set.
///
/// Empty strings and `None` mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub title: String,
    pub company: String,
    pub location: Option<LocationFilter>,
    pub level: Option<JobLevel>,
    pub salary: Option<SalaryRange>,
    pub posted_within: Option<PostedWithin>,
}

impl FilterCriteria {
    /// Whether any field constrains the listing.
    ///
    /// # Examples
    ///
    /// ```
    /// use jobboard::{FilterCriteria, JobLevel};
    ///
    /// let mut criteria = FilterCriteria::default();
    /// assert!(!criteria.is_active());
    ///
    /// criteria.level = Some(JobLevel::Mid);
    /// assert!(criteria.is_active());
    /// ```
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.title.is_empty()
            || !self.company.is_empty()
            || self.location.is_some()
            || self.level.is_some()
            || self.salary.is_some()
            || self.posted_within.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_range_rejects_inverted_bounds() {
        assert!(SalaryRange::new(10, 5).is_err());
        let range = SalaryRange::new(5, 5).unwrap();
        assert!(range.contains(5));
        assert!(!range.contains(6));
    }

    #[test]
    fn location_parses_closed_choices_case_insensitively() {
        assert_eq!("LOCAL".parse::<LocationFilter>().unwrap(), LocationFilter::Local);
        assert_eq!("remote".parse::<LocationFilter>().unwrap(), LocationFilter::Remote);
        assert_eq!(
            " Austin ".parse::<LocationFilter>().unwrap(),
            LocationFilter::Custom("Austin".to_string())
        );
        assert!("  ".parse::<LocationFilter>().is_err());
    }

    #[test]
    fn level_parsing_and_label_lookup() {
        assert_eq!("senior".parse::<JobLevel>().unwrap(), JobLevel::Senior);
        assert!("principal".parse::<JobLevel>().is_err());
        assert_eq!(JobLevel::from_label("Mid Level"), Some(JobLevel::Mid));
        assert_eq!(JobLevel::from_label("Entry Level"), None);
    }

    #[test]
    fn posted_within_round_trips_day_counts() {
        for option in [
            PostedWithin::OneDay,
            PostedWithin::SevenDays,
            PostedWithin::FourteenDays,
            PostedWithin::ThirtyDays,
        ] {
            assert_eq!(PostedWithin::from_days(option.days()), Some(option));
        }
        assert_eq!(PostedWithin::from_days(3), None);
    }

    #[test]
    fn only_empty_text_is_inactive() {
        let mut criteria = FilterCriteria::default();
        assert!(!criteria.is_active());

        criteria.title = " ".to_string();
        assert!(criteria.is_active());
    }
}
