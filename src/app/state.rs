//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of everything the shell
//! shows: the job store, the active criteria, the derived visible order and the
//! pagination cursor.
//!
//! # Architecture
//!
//! `AppState` separates core data (the [`JobStore`]) from derived state (the
//! visible ID order). `AppState` subscribes to the store at construction and
//! [`AppState::sync_store`] turns pending [`StoreChange`]s into page updates and a
//! recomputation request. Derived state is recomputed by the worker: each request
//! gets a fresh generation number and answers for older generations are dropped, so
//! a slow recomputation can never overwrite a newer one.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use jobboard::{AppState, Formatter, Job};
//! use url::Url;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
//! let mut state = AppState::new(Formatter::default()).with_today(today);
//! state.store.replace_all(vec![Job::new(
//!     1, "Engineer", "Acme", "Remote", "2025-02-09",
//!     Url::parse("https://acme.example/1").unwrap(),
//! )]);
//! state.recompute_now();
//! assert_eq!(state.current_page_ids(), &[1]);
//! ```

use super::modes::ViewMode;
use std::sync::mpsc::Receiver;
use super::store::{JobStore, StoreChange};
use crate::domain::{FilterCriteria, Job, JobId};
use crate::engine::{self, AppliedPartition, JobStats, Pager};
use crate::ui::format::Formatter;
use crate::ui::viewmodel::{
    ApplicationsView, EmptyState, FooterInfo, HeaderInfo, JobRow, ListingView, StatsView,
    UIViewModel, ViewBody,
};
use crate::worker::WorkerMessage;
use chrono::NaiveDate;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Master job collection.
    pub store: JobStore,

    /// Active filter criteria.
    pub criteria: FilterCriteria,

    /// Restrict the listing to jobs posted today.
    pub today_only: bool,

    /// Screen currently shown.
    pub view_mode: ViewMode,

    /// Pagination cursor over `visible_ids`.
    pub pager: Pager,

    /// Visible job IDs in display order, as of the last applied recomputation.
    pub visible_ids: Vec<JobId>,

    /// Generation of the most recent recomputation request.
    pub generation: u64,

    /// A recomputation has been requested and not yet applied.
    pub recompute_pending: bool,

    /// A fetch has been posted and not yet answered.
    pub fetch_in_flight: bool,

    /// Message of the last failed fetch, cleared by the next attempt.
    pub error_message: Option<String>,

    /// Display formatting settings.
    pub formatter: Formatter,

    /// Fixed calendar date, used instead of the local clock when set.
    pinned_today: Option<NaiveDate>,

    /// Notifications from `store`, drained by `sync_store`.
    store_changes: Receiver<StoreChange>,
}

impl AppState {
    /// Creates an empty state showing the listings screen.
    #[must_use]
    pub fn new(formatter: Formatter) -> Self {
        let mut store = JobStore::default();
        let store_changes = store.subscribe();

        Self {
            store,
            criteria: FilterCriteria::default(),
            today_only: false,
            view_mode: ViewMode::default(),
            pager: Pager::default(),
            visible_ids: Vec::new(),
            generation: 0,
            recompute_pending: false,
            fetch_in_flight: false,
            error_message: None,
            formatter,
            pinned_today: None,
            store_changes,
        }
    }

    /// Pins "today" to a fixed date.
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.pinned_today = Some(today);
        self
    }

    /// The calendar date all date rules are evaluated against.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.pinned_today.unwrap_or_else(engine::dates::today)
    }

    /// Marks a fetch as in flight and builds the worker request.
    pub fn request_fetch(&mut self) -> WorkerMessage {
        self.fetch_in_flight = true;
        self.error_message = None;
        WorkerMessage::fetch_jobs()
    }

    /// Starts a new recomputation generation and builds the worker request.
    ///
    /// The request carries a snapshot of the store, so later mutations do not
    /// affect it.
    pub fn request_recompute(&mut self) -> WorkerMessage {
        self.generation += 1;
        self.recompute_pending = true;

        tracing::debug!(generation = self.generation, "recompute requested");

        WorkerMessage::compute_order(
            self.generation,
            self.store.snapshot(),
            self.criteria.clone(),
            self.today_only,
            self.today(),
        )
    }

    /// Installs a computed order if it answers the latest request.
    ///
    /// Returns `false` for stale generations, which are discarded. The current
    /// page is kept, clamped to the new page count.
    pub fn apply_order(&mut self, generation: u64, ids: Vec<JobId>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation = generation,
                latest = self.generation,
                "discarding stale order"
            );
            return false;
        }

        self.visible_ids = ids;
        self.recompute_pending = false;
        self.pager.clamp(self.visible_ids.len());

        tracing::debug!(
            generation = generation,
            visible = self.visible_ids.len(),
            page = self.pager.index(),
            "order applied"
        );
        true
    }

    /// Reacts to store notifications published since the last call.
    ///
    /// A replaced batch resets the page and a newly applied job leaves the visible
    /// list at once. Returns a recomputation request if anything changed.
    pub fn sync_store(&mut self) -> Option<WorkerMessage> {
        if self.drain_store_changes() {
            Some(self.request_recompute())
        } else {
            None
        }
    }

    fn drain_store_changes(&mut self) -> bool {
        let mut changed = false;
        while let Ok(change) = self.store_changes.try_recv() {
            tracing::debug!(change = ?change, "store change received");
            changed = true;
            match change {
                StoreChange::Replaced { .. } => self.pager.reset(),
                StoreChange::AppliedToggled {
                    id,
                    applied_to: true,
                } => self.hide_visible(id),
                StoreChange::AppliedToggled { .. } => {}
            }
        }
        changed
    }

    /// Recomputes the visible order on the calling thread.
    ///
    /// Pending store notifications are consumed first.
    pub fn recompute_now(&mut self) {
        self.drain_store_changes();
        self.generation += 1;
        let ids = engine::compute_visible_order_at(
            self.store.jobs(),
            &self.criteria,
            self.today_only,
            self.today(),
        );
        self.apply_order(self.generation, ids);
    }

    /// IDs on the current page.
    #[must_use]
    pub fn current_page_ids(&self) -> &[JobId] {
        self.pager.slice(&self.visible_ids)
    }

    /// Jobs on the current page, in display order.
    ///
    /// IDs no longer present in the store are skipped.
    #[must_use]
    pub fn current_page_jobs(&self) -> Vec<&Job> {
        let jobs = self.store.jobs();
        engine::resolve_indices(jobs, self.current_page_ids())
            .into_iter()
            .map(|index| &jobs[index])
            .collect()
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next(self.visible_ids.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.pager.previous()
    }

    /// Hides a job that just became applied without waiting for recomputation.
    pub fn hide_visible(&mut self, id: JobId) {
        self.visible_ids.retain(|visible| *visible != id);
        self.pager.clamp(self.visible_ids.len());
    }

    /// Computes a renderable UI view model for the current screen.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let today = self.today();

        let body = if self.store.is_empty() {
            ViewBody::Empty(self.empty_store_state())
        } else {
            match self.view_mode {
                ViewMode::Listings => ViewBody::Listings(self.listing_view(today)),
                ViewMode::Applications => ViewBody::Applications(self.applications_view(today)),
                ViewMode::Stats => ViewBody::Stats(StatsView::from_stats(
                    JobStats::compute_at(self.store.jobs(), today),
                    &self.formatter,
                )),
            }
        };

        UIViewModel {
            header: HeaderInfo {
                title: self.view_mode.title().to_string(),
                subtitle: self.criteria_summary(),
            },
            status: self.status_line(),
            body,
            footer: FooterInfo {
                keybindings: footer_for(self.view_mode).to_string(),
            },
        }
    }

    fn listing_view(&self, today: NaiveDate) -> ListingView {
        let rows: Vec<JobRow> = self
            .current_page_jobs()
            .into_iter()
            .map(|job| JobRow::from_job(job, &self.formatter, today))
            .collect();

        let empty_state = rows.is_empty().then(|| EmptyState {
            message: "No jobs match your filters".to_string(),
            subtitle: "Type 'reset' to clear all filters".to_string(),
        });

        ListingView {
            rows,
            page_label: self.pager.label(self.visible_ids.len()),
            total_visible: self.visible_ids.len(),
            empty_state,
        }
    }

    fn applications_view(&self, today: NaiveDate) -> ApplicationsView {
        let partition = AppliedPartition::compute_at(self.store.jobs(), today);
        let to_rows = |jobs: &[&Job]| -> Vec<JobRow> {
            jobs.iter()
                .map(|job| JobRow::from_job(job, &self.formatter, today))
                .collect()
        };

        let empty_state = partition.is_empty().then(|| EmptyState {
            message: "No applications yet".to_string(),
            subtitle: "Type 'apply <id>' on a listing to track it".to_string(),
        });

        ApplicationsView {
            recent: to_rows(partition.recent.as_slice()),
            older: to_rows(partition.older.as_slice()),
            empty_state,
        }
    }

    fn empty_store_state(&self) -> Option<EmptyState> {
        if self.fetch_in_flight {
            return None;
        }
        Some(EmptyState {
            message: "No jobs loaded".to_string(),
            subtitle: "Type 'refresh' to fetch listings".to_string(),
        })
    }

    fn status_line(&self) -> Option<String> {
        if let Some(error) = &self.error_message {
            return Some(format!("Error: {error}"));
        }
        if self.fetch_in_flight {
            return Some("Loading listings...".to_string());
        }
        None
    }

    fn criteria_summary(&self) -> String {
        let criteria = &self.criteria;
        let mut parts = Vec::new();

        if !criteria.title.is_empty() {
            parts.push(format!("title~{}", criteria.title));
        }
        if !criteria.company.is_empty() {
            parts.push(format!("company~{}", criteria.company));
        }
        if let Some(location) = &criteria.location {
            parts.push(format!("location={}", location.needle()));
        }
        if let Some(level) = criteria.level {
            parts.push(format!("level={level}"));
        }
        if let Some(range) = criteria.salary {
            parts.push(format!(
                "salary {}-{}",
                self.formatter.amount(range.min()),
                self.formatter.amount(range.max())
            ));
        }
        if let Some(within) = criteria.posted_within {
            parts.push(format!("posted within {}d", within.days()));
        }
        if self.today_only {
            parts.push("today only".to_string());
        }

        if parts.is_empty() {
            "No filters".to_string()
        } else {
            parts.join(", ")
        }
    }
}

const fn footer_for(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Listings => {
            "n/p: page | apply <id> | title/company/location/level/salary/posted | today | reset | apps | stats | refresh | q"
        }
        ViewMode::Applications => "apply <id>: unmark | list | stats | q",
        ViewMode::Stats => "list | apps | refresh | q",
    }
}
