//! Full event loop with a real worker thread and an in-memory job source.

use std::sync::mpsc;
use std::time::Duration;

use chrono::NaiveDate;
use jobboard::client::StaticJobSource;
use jobboard::worker::{WorkerHandle, WorkerResponse};
use jobboard::{
    handle_event, Action, AppState, CriteriaChange, Event, FetchError, Formatter, Job, JobLevel,
};
use url::Url;

const TIMEOUT: Duration = Duration::from_secs(5);

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

fn job(id: i64, date: &str) -> Job {
    Job::new(
        id,
        format!("Job {id}"),
        "Acme",
        "Remote",
        date,
        Url::parse(&format!("https://acme.example/{id}")).unwrap(),
    )
}

struct Harness {
    state: AppState,
    worker: WorkerHandle,
    responses: mpsc::Receiver<WorkerResponse>,
}

impl Harness {
    fn new(source: StaticJobSource) -> Self {
        let (tx, responses) = mpsc::channel();
        let worker = WorkerHandle::spawn(Box::new(source), move |response| tx.send(response).is_ok())
            .unwrap();
        Self {
            state: AppState::new(Formatter::default()).with_today(today()),
            worker,
            responses,
        }
    }

    /// Handles `event` and every follow-up until no worker request is outstanding.
    fn dispatch(&mut self, event: Event) {
        let mut outstanding = self.execute(event);
        while outstanding > 0 {
            let response = self.responses.recv_timeout(TIMEOUT).unwrap();
            outstanding -= 1;
            outstanding += self.execute(Event::WorkerResponse(response));
        }
    }

    fn execute(&mut self, event: Event) -> usize {
        let (_, actions) = handle_event(&mut self.state, &event).unwrap();
        let mut posted = 0;
        for action in actions {
            if let Action::PostToWorker(message) = action {
                self.worker.post(message).unwrap();
                posted += 1;
            }
        }
        posted
    }
}

#[test]
fn refresh_populates_and_orders_the_listing() {
    let mut harness = Harness::new(StaticJobSource::new(vec![
        job(1, "2025-02-01"),
        job(2, "2025-03-14"),
        job(3, "2025-03-10"),
    ]));

    harness.dispatch(Event::Refresh);

    assert_eq!(harness.state.store.len(), 3);
    assert_eq!(harness.state.visible_ids, vec![2, 3, 1]);
    assert!(!harness.state.fetch_in_flight);
    assert!(!harness.state.recompute_pending);
}

#[test]
fn fetch_failure_leaves_store_empty_with_message() {
    let mut harness = Harness::new(StaticJobSource::failing(FetchError::NetworkFailure(
        "connection refused".to_string(),
    )));

    harness.dispatch(Event::Refresh);

    assert!(harness.state.store.is_empty());
    assert_eq!(
        harness.state.error_message.as_deref(),
        Some("network failure: connection refused")
    );
    let vm = harness.state.compute_viewmodel();
    assert_eq!(
        vm.status.as_deref(),
        Some("Error: network failure: connection refused")
    );
}

#[test]
fn filters_and_applications_flow_through_the_worker() {
    let mut harness = Harness::new(StaticJobSource::new(vec![
        job(1, "2025-03-14").with_level("Senior").with_salary(150_000),
        job(2, "2025-03-14").with_level("Junior").with_salary(60_000),
        job(3, "2025-03-13").with_level("Senior Staff"),
    ]));
    harness.dispatch(Event::Refresh);

    harness.dispatch(Event::UpdateCriteria(CriteriaChange::Level(Some(JobLevel::Senior))));
    assert_eq!(harness.state.visible_ids, vec![1, 3]);

    harness.dispatch(Event::ToggleApplied(1));
    assert_eq!(harness.state.visible_ids, vec![3]);
    assert!(harness.state.store.get(1).unwrap().applied_to);

    harness.dispatch(Event::ResetFilters);
    assert_eq!(harness.state.visible_ids, vec![2, 3]);

    harness.dispatch(Event::ToggleApplied(1));
    assert_eq!(harness.state.visible_ids, vec![1, 2, 3]);
}

#[test]
fn only_the_latest_recompute_is_applied() {
    let mut harness = Harness::new(StaticJobSource::new(vec![
        job(1, "2025-03-15"),
        job(2, "2025-03-14"),
    ]));
    harness.dispatch(Event::Refresh);

    let first = harness.execute(Event::ToggleTodayOnly);
    let second = harness.execute(Event::ToggleTodayOnly);
    assert_eq!(first + second, 2);

    let stale = harness.responses.recv_timeout(TIMEOUT).unwrap();
    let fresh = harness.responses.recv_timeout(TIMEOUT).unwrap();

    let (render_stale, _) = handle_event(&mut harness.state, &Event::WorkerResponse(stale)).unwrap();
    let (render_fresh, _) = handle_event(&mut harness.state, &Event::WorkerResponse(fresh)).unwrap();

    assert!(!render_stale);
    assert!(render_fresh);
    assert!(!harness.state.today_only);
    assert_eq!(harness.state.visible_ids, vec![1, 2]);
}
