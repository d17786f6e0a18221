//! Output formatting for CLI display
//!
//! Plain-terminal rendering of records for the one-shot `query` command:
//! highlighted titles, formatted amounts and dates, colored statuses.

use crate::format::{format_currency, format_date};
use crate::record::{Record, Status};
use crate::search::highlight_segments;
use colored::Colorize;

/// Render `text` with occurrences of `query` emphasized
#[must_use]
pub fn highlight(text: &str, query: &str) -> String {
    highlight_segments(text, query)
        .into_iter()
        .map(|segment| {
            if segment.matched {
                segment.text.yellow().bold().to_string()
            } else {
                segment.text
            }
        })
        .collect()
}

/// Color a status by what it means for the record
#[must_use]
pub fn colorize_status(status: &Status) -> String {
    let label = status.as_str();
    match status {
        Status::Active | Status::Completed => label.green().to_string(),
        Status::Pending => label.yellow().to_string(),
        Status::Blocked => label.red().to_string(),
        Status::Inactive | Status::Custom(_) => label.dimmed().to_string(),
    }
}

/// Format an amount, red when negative
#[must_use]
pub fn colorize_amount(amount: f64, currency: Option<&str>) -> String {
    let formatted = format_currency(amount, currency);
    if amount < 0.0 {
        formatted.red().to_string()
    } else {
        formatted.green().to_string()
    }
}

/// Format one record for display
///
/// Quiet mode prints only the id and title, tab separated.
#[must_use]
pub fn record_line(record: &Record, query: &str, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", record.id, record.title);
    }

    let mut line = format!("  {}", highlight(&record.title, query));

    if let Some(amount) = record.amount {
        line.push_str("  ");
        line.push_str(&colorize_amount(amount, record.currency.as_deref()));
    }
    if let Some(status) = &record.status {
        line.push_str(&format!("  [{}]", colorize_status(status)));
    }
    if let Some(category) = &record.category {
        line.push_str(&format!("  {}", category.as_str().cyan()));
    }
    if let Some(created_at) = &record.created_at {
        line.push_str(&format!("  {}", format_date(created_at).dimmed()));
    }
    if let Some(subtitle) = &record.subtitle {
        line.push_str(&format!("\n    {}", highlight(subtitle, query).dimmed()));
    }
    line
}

/// Header printed above a group of results
#[must_use]
pub fn group_header(key: &str, count: usize) -> String {
    format!("{} ({count})", key.to_uppercase().bold())
}
