//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user commands and
//! worker responses, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the shell or the worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Store notifications raised by the event are folded in via
//!    [`AppState::sync_store`]
//! 5. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `NextPage`, `PreviousPage`, `ShowListings`, `ShowApplications`, `ShowStats`
//! - **Filtering**: `UpdateCriteria`, `ResetFilters`, `ToggleTodayOnly`
//! - **Tracking**: `ToggleApplied`
//! - **System**: `Refresh`, `Quit`
//! - **Worker**: `WorkerResponse` with typed message variants
//!
//! # Example
//!
//! ```rust
//! use jobboard::{handle_event, Action, AppState, Event, Formatter};
//!
//! let mut state = AppState::new(Formatter::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Refresh)?;
//! assert!(should_render);
//! assert!(matches!(actions.as_slice(), [Action::PostToWorker(_)]));
//! # Ok::<(), jobboard::JobBoardError>(())
//! ```

use crate::app::{Action, AppState, ViewMode};
use crate::domain::error::Result;
use crate::domain::{FilterCriteria, JobId, JobLevel, LocationFilter, PostedWithin, SalaryRange};
use crate::worker::WorkerResponse;

/// A single edit to the filter criteria. `None` clears the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaChange {
    Title(String),
    Company(String),
    Location(Option<LocationFilter>),
    Level(Option<JobLevel>),
    Salary(Option<SalaryRange>),
    PostedWithin(Option<PostedWithin>),
}

impl CriteriaChange {
    /// Writes the change into `criteria`, returning whether anything changed.
    pub fn apply(self, criteria: &mut FilterCriteria) -> bool {
        fn set<T: PartialEq>(slot: &mut T, value: T) -> bool {
            if *slot == value {
                false
            } else {
                *slot = value;
                true
            }
        }

        match self {
            Self::Title(title) => set(&mut criteria.title, title),
            Self::Company(company) => set(&mut criteria.company, company),
            Self::Location(location) => set(&mut criteria.location, location),
            Self::Level(level) => set(&mut criteria.level, level),
            Self::Salary(salary) => set(&mut criteria.salary, salary),
            Self::PostedWithin(within) => set(&mut criteria.posted_within, within),
        }
    }
}

/// Events triggered by user commands or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Fetches the listings again. Ignored while a fetch is in flight.
    Refresh,
    /// Moves to the next page (no-op on the last page).
    NextPage,
    /// Moves to the previous page (no-op on the first page).
    PreviousPage,
    /// Edits one filter field and resets to the first page.
    UpdateCriteria(CriteriaChange),
    /// Clears every filter, including "today only".
    ResetFilters,
    /// Flips the "posted today only" restriction.
    ToggleTodayOnly,
    /// Flips a job's applied status.
    ToggleApplied(JobId),
    /// Switches to the listings screen.
    ShowListings,
    /// Switches to the applications tracker.
    ShowApplications,
    /// Switches to the statistics screen.
    ShowStats,
    /// Ends the session.
    Quit,
    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// A tuple of whether the screen should be re-rendered and the actions to execute
/// in order.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for events that validate input.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    let (mut should_render, mut actions) = dispatch(state, event)?;

    if let Some(recompute) = state.sync_store() {
        should_render = true;
        actions.push(Action::PostToWorker(recompute));
    }

    Ok((should_render, actions))
}

fn dispatch(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::Refresh => {
            if state.fetch_in_flight {
                tracing::debug!("refresh ignored: fetch already in flight");
                return Ok((false, vec![]));
            }
            Ok((true, vec![Action::PostToWorker(state.request_fetch())]))
        }
        Event::NextPage => Ok((state.next_page(), vec![])),
        Event::PreviousPage => Ok((state.previous_page(), vec![])),
        Event::UpdateCriteria(change) => {
            if !change.clone().apply(&mut state.criteria) {
                tracing::debug!("criteria unchanged");
                return Ok((false, vec![]));
            }
            tracing::debug!(criteria = ?state.criteria, "criteria updated");
            state.pager.reset();
            Ok((false, vec![Action::PostToWorker(state.request_recompute())]))
        }
        Event::ResetFilters => {
            if !state.criteria.is_active() && !state.today_only {
                return Ok((false, vec![]));
            }
            state.criteria = FilterCriteria::default();
            state.today_only = false;
            state.pager.reset();
            Ok((false, vec![Action::PostToWorker(state.request_recompute())]))
        }
        Event::ToggleTodayOnly => {
            state.today_only = !state.today_only;
            state.pager.reset();
            tracing::debug!(today_only = state.today_only, "today-only toggled");
            Ok((false, vec![Action::PostToWorker(state.request_recompute())]))
        }
        Event::ToggleApplied(id) => {
            state.store.toggle_applied(*id);
            Ok((false, vec![]))
        }
        Event::ShowListings => Ok((switch_view(state, ViewMode::Listings), vec![])),
        Event::ShowApplications => Ok((switch_view(state, ViewMode::Applications), vec![])),
        Event::ShowStats => Ok((switch_view(state, ViewMode::Stats), vec![])),
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::JobsFetched { jobs } => {
            tracing::info!(job_count = jobs.len(), "listings fetched");
            state.fetch_in_flight = false;
            state.error_message = None;
            state.store.replace_all(jobs.clone());
            (true, vec![])
        }
        WorkerResponse::FetchFailed { error } => {
            tracing::error!(error = %error, "fetch failed");
            state.fetch_in_flight = false;
            state.error_message = Some(error.to_string());
            (true, vec![])
        }
        WorkerResponse::OrderComputed { generation, ids } => {
            (state.apply_order(*generation, ids.clone()), vec![])
        }
    }
}

fn switch_view(state: &mut AppState, mode: ViewMode) -> bool {
    if state.view_mode == mode {
        return false;
    }
    tracing::debug!(from = ?state.view_mode, to = ?mode, "view switched");
    state.view_mode = mode;
    true
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Refresh => "refresh",
        Event::NextPage => "next_page",
        Event::PreviousPage => "previous_page",
        Event::UpdateCriteria(_) => "update_criteria",
        Event::ResetFilters => "reset_filters",
        Event::ToggleTodayOnly => "toggle_today_only",
        Event::ToggleApplied(_) => "toggle_applied",
        Event::ShowListings => "show_listings",
        Event::ShowApplications => "show_applications",
        Event::ShowStats => "show_stats",
        Event::Quit => "quit",
        Event::WorkerResponse(_) => "worker_response",
    }
}
