//! Display formatting for salaries and post dates.
//!
//! All presentation strings go through a [`Formatter`] built from an explicit
//! [`FormatConfig`]. Nothing reads process-wide locale state, so two formatters with
//! different settings can coexist.
//!
//! # Example
//!
//! ```rust
//! use jobboard::ui::format::{FormatConfig, Formatter};
//!
//! let formatter = Formatter::new(FormatConfig::default());
//! assert_eq!(formatter.salary(Some(120_000)), "$120,000.00");
//! assert_eq!(formatter.salary(None), "N/A");
//! ```

use crate::domain::{Job, JobBoardError, Result};
use crate::engine::dates;
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt::Write as _;

/// Currency and date presentation settings.
///
/// Loaded from the `[format]` table of the configuration file; every field falls
/// back to US dollar formatting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Symbol placed before amounts, e.g. `"$"`.
    pub currency_symbol: String,
    /// ISO 4217 code shown in stats headers.
    pub currency_code: String,
    /// Digit group separator.
    pub thousands_separator: String,
    /// Separator between whole and fractional part.
    pub decimal_separator: String,
    /// Number of fraction digits printed (always zeros: salaries are whole units).
    pub fraction_digits: usize,
    /// `chrono` pattern used for post dates.
    pub date_format: String,
    /// Placeholder for absent values.
    pub missing: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            currency_code: "USD".to_string(),
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            fraction_digits: 2,
            date_format: "%b %-d, %Y".to_string(),
            missing: "N/A".to_string(),
        }
    }
}

impl FormatConfig {
    /// Checks that `date_format` is a pattern `chrono` can render.
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::Config`] naming the pattern if it contains an
    /// unknown or incomplete specifier.
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(JobBoardError::Config(format!(
                "invalid date_format `{}`",
                self.date_format
            )));
        }
        Ok(())
    }
}

/// Formats domain values for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    #[must_use]
    pub const fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Formats an optional salary, rendering `None` as the missing placeholder.
    #[must_use]
    pub fn salary(&self, salary: Option<u64>) -> String {
        salary.map_or_else(|| self.config.missing.clone(), |amount| self.amount(amount))
    }

    /// Formats a whole currency amount with grouping and fraction digits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jobboard::ui::format::Formatter;
    ///
    /// assert_eq!(Formatter::default().amount(1_234_567), "$1,234,567.00");
    /// assert_eq!(Formatter::default().amount(0), "$0.00");
    /// ```
    #[must_use]
    pub fn amount(&self, amount: u64) -> String {
        let mut out = String::with_capacity(24);
        out.push_str(&self.config.currency_symbol);
        out.push_str(&group_digits(amount, &self.config.thousands_separator));

        if self.config.fraction_digits > 0 {
            out.push_str(&self.config.decimal_separator);
            out.push_str(&"0".repeat(self.config.fraction_digits));
        }

        out
    }

    /// Formats the post date with the configured pattern.
    ///
    /// Dates that do not parse, or a pattern that cannot render them, fall back to
    /// the raw string.
    #[must_use]
    pub fn post_date(&self, job: &Job) -> String {
        let Some(date) = job.posted_on() else {
            return job.post_date.clone();
        };

        let mut out = String::new();
        match write!(out, "{}", date.format(&self.config.date_format)) {
            Ok(()) => out,
            Err(_) => {
                tracing::warn!(pattern = %self.config.date_format, "date pattern failed to render");
                job.post_date.clone()
            }
        }
    }

    /// Human-friendly age of a posting relative to `today`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use jobboard::{ui::format::Formatter, Job};
    /// use url::Url;
    ///
    /// let job = Job::new(1, "t", "c", "l", "2025-02-07", Url::parse("https://x.example/").unwrap());
    /// let today = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
    /// assert_eq!(Formatter::default().posted_ago(&job, today), "3 days ago");
    /// ```
    #[must_use]
    pub fn posted_ago(&self, job: &Job, today: NaiveDate) -> String {
        let Some(posted) = job.posted_on() else {
            return "unknown date".to_string();
        };

        match dates::days_since(posted, today) {
            d if d < 0 => "upcoming".to_string(),
            0 => "today".to_string(),
            1 => "yesterday".to_string(),
            d if d < 7 => format!("{d} days ago"),
            d if d < 14 => "1 week ago".to_string(),
            d if d < 30 => format!("{} weeks ago", d / 7),
            d if d < 60 => "1 month ago".to_string(),
            d if d < 365 => format!("{} months ago", d / 30),
            d => format!("{} years ago", d / 365),
        }
    }
}

fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }

    out
}
