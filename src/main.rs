//! Terminal shell and entry point.
//!
//! A line-oriented front end over the library: commands are read from stdin,
//! translated to [`Event`]s and fed to [`handle_event`]. Worker responses arrive
//! on the same channel, so the shell thread is the only one touching `AppState`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ShellEvent   ┌──────────────────┐   WorkerMessage   ┌───────────────┐
//! │ stdin reader │ ─────────────► │   shell thread   │ ────────────────► │ worker thread │
//! └──────────────┘                │ AppState, render │ ◄──────────────── │ HttpJobSource │
//!                                 └──────────────────┘   ShellEvent      └───────────────┘
//! ```
//!
//! # Commands
//!
//! - `n` / `p`: next / previous page
//! - `today`: toggle "posted today only"
//! - `apply <id>`: toggle applied status
//! - `title <text>`, `company <text>`: substring filters (no text clears)
//! - `location <any|local|hybrid|remote|text>`
//! - `level <any|internship|junior|mid|senior|expert>`
//! - `salary <min> <max>` or `salary any`
//! - `posted <any|1|7|14|30>`
//! - `reset`: clear all filters
//! - `list`, `apps`, `stats`: switch screens
//! - `refresh`: fetch again
//! - `q`: quit

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};

use jobboard::client::HttpJobSource;
use jobboard::worker::WorkerHandle;
use jobboard::{
    handle_event, Action, AppState, Config, CriteriaChange, Event, JobBoardError, JobLevel,
    LocationFilter, PostedWithin, SalaryRange,
};

/// Everything the shell thread reacts to.
enum ShellEvent {
    /// A parsed command or a worker response.
    App(Event),
    /// A line that did not parse.
    Invalid(String),
    /// Stdin reached end of file.
    InputClosed,
}

fn main() {
    if let Err(e) = run() {
        tracing::error!(error = %e, "jobboard exited with error");
        eprintln!("jobboard: {e}");
        std::process::exit(1);
    }
}

fn run() -> jobboard::Result<()> {
    let config_path = std::env::var_os("JOBBOARD_CONFIG").map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;
    jobboard::observability::init_tracing(&config);

    let span = tracing::info_span!("shell");
    let _guard = span.enter();

    tracing::info!(base_url = %config.api.base_url, "starting jobboard");

    let source = HttpJobSource::new(&config.api)?;
    let (events, inbox) = mpsc::channel::<ShellEvent>();

    let worker_events = events.clone();
    let worker = WorkerHandle::spawn(Box::new(source), move |response| {
        worker_events
            .send(ShellEvent::App(Event::WorkerResponse(response)))
            .is_ok()
    })?;

    spawn_stdin_reader(events)?;

    let mut state = jobboard::initialize(&config);
    let mut pending = vec![Event::Refresh];

    loop {
        for event in pending.drain(..) {
            let (should_render, actions) = handle_event(&mut state, &event)?;

            if execute_actions(&worker, actions)? {
                tracing::info!("quit requested");
                return Ok(());
            }
            if should_render {
                render(&state)?;
            }
        }

        match inbox.recv() {
            Ok(ShellEvent::App(event)) => pending.push(event),
            Ok(ShellEvent::Invalid(message)) => eprintln!("{message}"),
            Ok(ShellEvent::InputClosed) | Err(_) => {
                tracing::info!("input closed");
                return Ok(());
            }
        }
    }
}

/// Runs actions in order. Returns `true` if the shell should exit.
fn execute_actions(worker: &WorkerHandle, actions: Vec<Action>) -> jobboard::Result<bool> {
    for action in actions {
        match action {
            Action::PostToWorker(message) => worker.post(message)?,
            Action::Quit => return Ok(true),
        }
    }
    Ok(false)
}

fn render(state: &AppState) -> jobboard::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    jobboard::ui::render(&state.compute_viewmodel(), &mut out)?;
    Ok(())
}

fn spawn_stdin_reader(events: Sender<ShellEvent>) -> jobboard::Result<()> {
    std::thread::Builder::new()
        .name("jobboard-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };

                let event = match parse_command(&line) {
                    Ok(Some(event)) => ShellEvent::App(event),
                    Ok(None) => continue,
                    Err(e) => ShellEvent::Invalid(e.to_string()),
                };
                if events.send(event).is_err() {
                    return;
                }
            }
            let _ = events.send(ShellEvent::InputClosed);
        })?;
    Ok(())
}

/// Parses one input line. Blank lines yield `None`.
fn parse_command(line: &str) -> jobboard::Result<Option<Event>> {
    let line = line.trim();
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    let event = match command.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "n" | "next" => Event::NextPage,
        "p" | "prev" | "previous" => Event::PreviousPage,
        "today" => Event::ToggleTodayOnly,
        "apply" => Event::ToggleApplied(
            rest.parse()
                .map_err(|_| invalid(format!("expected a job id, got `{rest}`")))?,
        ),
        "title" => Event::UpdateCriteria(CriteriaChange::Title(rest.to_string())),
        "company" => Event::UpdateCriteria(CriteriaChange::Company(rest.to_string())),
        "location" => Event::UpdateCriteria(CriteriaChange::Location(
            unless_any(rest).map(str::parse::<LocationFilter>).transpose()?,
        )),
        "level" => Event::UpdateCriteria(CriteriaChange::Level(
            unless_any(rest).map(str::parse::<JobLevel>).transpose()?,
        )),
        "salary" => Event::UpdateCriteria(CriteriaChange::Salary(
            unless_any(rest).map(parse_salary_range).transpose()?,
        )),
        "posted" => Event::UpdateCriteria(CriteriaChange::PostedWithin(
            unless_any(rest).map(parse_posted_within).transpose()?,
        )),
        "reset" => Event::ResetFilters,
        "list" => Event::ShowListings,
        "apps" => Event::ShowApplications,
        "stats" => Event::ShowStats,
        "refresh" => Event::Refresh,
        "q" | "quit" => Event::Quit,
        other => return Err(invalid(format!("unknown command `{other}`"))),
    };

    Ok(Some(event))
}

fn unless_any(arg: &str) -> Option<&str> {
    if arg.is_empty() || arg.eq_ignore_ascii_case("any") {
        None
    } else {
        Some(arg)
    }
}

fn parse_salary_range(arg: &str) -> jobboard::Result<SalaryRange> {
    let mut bounds = arg.split_whitespace().map(str::parse::<u64>);
    match (bounds.next(), bounds.next(), bounds.next()) {
        (Some(Ok(min)), Some(Ok(max)), None) => SalaryRange::new(min, max),
        _ => Err(invalid(format!("expected `salary <min> <max>`, got `{arg}`"))),
    }
}

fn parse_posted_within(arg: &str) -> jobboard::Result<PostedWithin> {
    arg.parse::<i64>()
        .ok()
        .and_then(PostedWithin::from_days)
        .ok_or_else(|| invalid(format!("posted window must be 1, 7, 14 or 30 days, got `{arg}`")))
}

fn invalid(message: String) -> JobBoardError {
    JobBoardError::Criteria(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> Event {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parsed("n"), Event::NextPage);
        assert_eq!(parsed("P"), Event::PreviousPage);
        assert_eq!(parsed("apply 42"), Event::ToggleApplied(42));
        assert_eq!(parsed("q"), Event::Quit);
    }

    #[test]
    fn filter_commands() {
        assert_eq!(
            parsed("title  ios developer "),
            Event::UpdateCriteria(CriteriaChange::Title("ios developer".to_string()))
        );
        assert_eq!(
            parsed("location remote"),
            Event::UpdateCriteria(CriteriaChange::Location(Some(LocationFilter::Remote)))
        );
        assert_eq!(
            parsed("level any"),
            Event::UpdateCriteria(CriteriaChange::Level(None))
        );
        assert_eq!(
            parsed("salary 50000 90000"),
            Event::UpdateCriteria(CriteriaChange::Salary(Some(
                SalaryRange::new(50_000, 90_000).unwrap()
            )))
        );
        assert_eq!(
            parsed("posted 7"),
            Event::UpdateCriteria(CriteriaChange::PostedWithin(Some(PostedWithin::SevenDays)))
        );
    }

    #[test]
    fn invalid_input_is_reported() {
        assert!(parse_command("apply seven").is_err());
        assert!(parse_command("salary 9 1").is_err());
        assert!(parse_command("salary 1").is_err());
        assert!(parse_command("posted 3").is_err());
        assert!(parse_command("level principal").is_err());
        assert!(parse_command("dance").is_err());
    }
}
