//! Plain-text snapshot
//!
//! Renders a settled dashboard once for scripting: a fixed-width table or
//! the two datasets as JSON.

use serde::Serialize;
use std::fmt::Write;

use crate::api::{BalancePoint, Bet};
use crate::dashboard::DashboardState;
use crate::views::{BetHistory, HEADERS};

/// Output format for `snapshot`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SnapshotFormat {
    Table,
    Json,
}

#[derive(Serialize)]
struct SnapshotJson<'a> {
    history: &'a [BalancePoint],
    bets: &'a [Bet],
}

/// Render the dashboard state in the requested format
pub fn render(state: &DashboardState, format: SnapshotFormat) -> anyhow::Result<String> {
    match format {
        SnapshotFormat::Json => Ok(serde_json::to_string_pretty(&SnapshotJson {
            history: state.balance_history(),
            bets: state.recent_bets(),
        })?),
        SnapshotFormat::Table => Ok(render_table(state)?),
    }
}

fn render_table(state: &DashboardState) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Balance History")?;
    let history = state.balance_history();
    if history.is_empty() {
        writeln!(out, "No balance history")?;
    } else {
        writeln!(out, "{:<12} | {:>12}", "Date", "Balance")?;
        writeln!(out, "{}", "-".repeat(27))?;
        for point in history {
            writeln!(out, "{:<12} | {:>12}", point.date, point.balance)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Recent Bets")?;
    let rows = BetHistory::new(state.recent_bets()).rows();
    if rows.is_empty() {
        writeln!(out, "No bets")?;
        return Ok(out);
    }

    writeln!(out, "{}", format_row(&HEADERS))?;
    writeln!(out, "{}", "-".repeat(84))?;
    for row in &rows {
        writeln!(out, "{}", format_row(&row.cells()))?;
    }

    Ok(out)
}

fn format_row(cells: &[&str; 7]) -> String {
    format!(
        "{:<12}{:<10}{:<14}{:>8}{:>10}{:>10}  {}",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5], cells[6]
    )
    .trim_end()
    .to_string()
}
