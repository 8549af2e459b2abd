//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel) and
//! consumed by the renderer. They hold display-ready strings only: every salary and
//! date has already been through the [`Formatter`].
//!
//! # Example
//!
//! ```rust
//! use jobboard::ui::viewmodel::{FooterInfo, HeaderInfo, UIViewModel, ViewBody};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: "Job Listings".to_string(), subtitle: String::new() },
//!     status: None,
//!     body: ViewBody::Empty(None),
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//! };
//! assert!(vm.status.is_none());
//! ```

use crate::domain::{Job, JobId};
use crate::engine::{JobStats, WeeklySummary};
use crate::ui::format::Formatter;
use chrono::NaiveDate;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (screen title, context line).
    pub header: HeaderInfo,

    /// Loading notice or last fetch error.
    pub status: Option<String>,

    /// Screen-specific content.
    pub body: ViewBody,

    /// Footer information (command hints).
    pub footer: FooterInfo,
}

/// Screen-specific content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBody {
    Listings(ListingView),
    Applications(ApplicationsView),
    Stats(StatsView),
    /// Nothing to show yet.
    Empty(Option<EmptyState>),
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// Secondary line, e.g. the active filters.
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command help text (e.g., "n: next | p: previous | q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No jobs match your filters").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// One job as a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRow {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub level: String,
    pub salary: String,
    pub posted: String,
    pub age: String,
    pub link: String,
}

impl JobRow {
    #[must_use]
    pub fn from_job(job: &Job, formatter: &Formatter, today: NaiveDate) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            level: job
                .level
                .clone()
                .unwrap_or_else(|| formatter.config().missing.clone()),
            salary: formatter.salary(job.salary),
            posted: formatter.post_date(job),
            age: formatter.posted_ago(job, today),
            link: job.url.to_string(),
        }
    }
}

/// Listing screen content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    /// Rows of the current page.
    pub rows: Vec<JobRow>,

    /// "Page X of Y".
    pub page_label: String,

    /// Number of jobs across all pages.
    pub total_visible: usize,

    /// Shown instead of rows when the page is empty.
    pub empty_state: Option<EmptyState>,
}

/// Applications tracker content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationsView {
    pub recent: Vec<JobRow>,
    pub older: Vec<JobRow>,
    pub empty_state: Option<EmptyState>,
}

/// Statistics screen content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub total: usize,
    pub average_salary: String,
    pub disclosed_salaries: usize,
    pub levels: Vec<(String, usize)>,
    pub locations: Vec<(String, usize)>,
    pub this_week: WeeklyView,
}

/// "Posted this week" summary content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyView {
    pub count: usize,
    pub average_salary: String,
    pub levels: Vec<(String, usize)>,
    pub locations: Vec<(String, usize)>,
}

impl StatsView {
    #[must_use]
    pub fn from_stats(stats: JobStats, formatter: &Formatter) -> Self {
        Self {
            total: stats.total,
            average_salary: formatter.amount(stats.average_salary),
            disclosed_salaries: stats.disclosed_salaries,
            levels: stats.levels,
            locations: stats.locations,
            this_week: WeeklyView::from_summary(stats.this_week, formatter),
        }
    }
}

impl WeeklyView {
    #[must_use]
    pub fn from_summary(summary: WeeklySummary, formatter: &Formatter) -> Self {
        Self {
            count: summary.count,
            average_salary: formatter.amount(summary.average_salary),
            levels: summary.levels,
            locations: summary.locations,
        }
    }
}
