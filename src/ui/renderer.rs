//! Top-level rendering coordinator.
//!
//! Writes a [`UIViewModel`] as plain text to any [`Write`] sink. The shell passes
//! stdout; tests pass a `Vec<u8>`.
//!
//! # Layout
//!
//! ```text
//! == Job Listings ==
//! No filters
//! [status line, if any]
//!
//! [body: table, applications or stats]
//!
//! n/p: page | ... | q
//! ```
//!
//! # Example
//!
//! ```rust
//! use jobboard::ui::render;
//! use jobboard::{AppState, Formatter};
//!
//! let state = AppState::new(Formatter::default());
//! let mut out = Vec::new();
//! render(&state.compute_viewmodel(), &mut out)?;
//! assert!(String::from_utf8_lossy(&out).contains("No jobs loaded"));
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::ui::viewmodel::{
    ApplicationsView, EmptyState, JobRow, ListingView, StatsView, UIViewModel, ViewBody,
};
use std::io::{self, Write};

const TITLE_WIDTH: usize = 32;
const COMPANY_WIDTH: usize = 20;
const LOCATION_WIDTH: usize = 20;
const LEVEL_WIDTH: usize = 12;
const SALARY_WIDTH: usize = 14;

/// Renders a view model.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render<W: Write>(vm: &UIViewModel, out: &mut W) -> io::Result<()> {
    writeln!(out, "== {} ==", vm.header.title)?;
    writeln!(out, "{}", vm.header.subtitle)?;
    if let Some(status) = &vm.status {
        writeln!(out, "{status}")?;
    }
    writeln!(out)?;

    match &vm.body {
        ViewBody::Listings(listing) => render_listing(listing, out)?,
        ViewBody::Applications(apps) => render_applications(apps, out)?,
        ViewBody::Stats(stats) => render_stats(stats, out)?,
        ViewBody::Empty(empty) => {
            if let Some(empty) = empty {
                render_empty_state(empty, out)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", vm.footer.keybindings)?;
    out.flush()
}

fn render_listing<W: Write>(listing: &ListingView, out: &mut W) -> io::Result<()> {
    if let Some(empty) = &listing.empty_state {
        render_empty_state(empty, out)?;
    } else {
        render_table(&listing.rows, out)?;
    }
    writeln!(out)?;
    writeln!(out, "{} ({} jobs)", listing.page_label, listing.total_visible)
}

fn render_applications<W: Write>(apps: &ApplicationsView, out: &mut W) -> io::Result<()> {
    if let Some(empty) = &apps.empty_state {
        return render_empty_state(empty, out);
    }

    writeln!(out, "Recent applications ({})", apps.recent.len())?;
    render_table(&apps.recent, out)?;
    writeln!(out)?;
    writeln!(out, "Older applications ({})", apps.older.len())?;
    render_table(&apps.older, out)
}

fn render_stats<W: Write>(stats: &StatsView, out: &mut W) -> io::Result<()> {
    writeln!(out, "Total jobs:      {}", stats.total)?;
    writeln!(out, "Average salary:  {}", stats.average_salary)?;
    writeln!(out, "With salary:     {}", stats.disclosed_salaries)?;
    render_counts("Levels", &stats.levels, out)?;
    render_counts("Locations", &stats.locations, out)?;

    writeln!(out)?;
    writeln!(out, "Posted this week: {}", stats.this_week.count)?;
    writeln!(out, "  Average salary: {}", stats.this_week.average_salary)?;
    render_counts("  Levels", &stats.this_week.levels, out)?;
    render_counts("  Locations", &stats.this_week.locations, out)
}

fn render_counts<W: Write>(label: &str, counts: &[(String, usize)], out: &mut W) -> io::Result<()> {
    writeln!(out, "{label}:")?;
    for (name, count) in counts {
        writeln!(out, "    {name:<24} {count:>5}")?;
    }
    Ok(())
}

fn render_table<W: Write>(rows: &[JobRow], out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:>6}  {:<TITLE_WIDTH$}  {:<COMPANY_WIDTH$}  {:<LOCATION_WIDTH$}  {:<LEVEL_WIDTH$}  {:>SALARY_WIDTH$}  POSTED",
        "ID", "TITLE", "COMPANY", "LOCATION", "LEVEL", "SALARY"
    )?;

    for row in rows {
        writeln!(
            out,
            "{:>6}  {:<TITLE_WIDTH$}  {:<COMPANY_WIDTH$}  {:<LOCATION_WIDTH$}  {:<LEVEL_WIDTH$}  {:>SALARY_WIDTH$}  {} ({})",
            row.id,
            truncate(&row.title, TITLE_WIDTH),
            truncate(&row.company, COMPANY_WIDTH),
            truncate(&row.location, LOCATION_WIDTH),
            truncate(&row.level, LEVEL_WIDTH),
            row.salary,
            row.posted,
            row.age,
        )?;
    }
    Ok(())
}

fn render_empty_state<W: Write>(empty: &EmptyState, out: &mut W) -> io::Result<()> {
    writeln!(out, "  {}", empty.message)?;
    writeln!(out, "  {}", empty.subtitle)
}

/// Shortens `text` to at most `width` characters, marking the cut with `…`.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
