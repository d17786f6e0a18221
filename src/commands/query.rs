//! Query command - one-shot search over the record set

use crate::{
    SmartSearchError,
    cli::QueryArgs,
    format::parse_timestamp,
    output,
    record::Record,
    search::{
        AmountRange, DateRange, FilterCriteria, GroupedResults, default_search_filter,
        group_by_field,
    },
};
use chrono::{DateTime, Duration, NaiveDate, Utc};

type Result<T> = std::result::Result<T, SmartSearchError>;

/// Parse a `--since`/`--until` bound
///
/// A date without a time means the start of that day, or its last
/// millisecond when `end_of_day` is set.
fn parse_bound(value: &str, end_of_day: bool) -> Result<DateTime<Utc>> {
    let instant = parse_timestamp(value)
        .ok_or_else(|| SmartSearchError::InvalidInput(format!("Invalid date: {value}")))?;
    let date_only = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_ok();
    if end_of_day && date_only {
        return Ok(instant + Duration::days(1) - Duration::milliseconds(1));
    }
    Ok(instant)
}

/// Translate command-line flags into filter criteria
///
/// # Errors
///
/// Returns an error if a date cannot be parsed or a range is inverted.
pub fn criteria_from_args(args: &QueryArgs) -> Result<FilterCriteria> {
    let date_range = if args.since.is_some() || args.until.is_some() {
        let start = match &args.since {
            Some(since) => parse_bound(since, false)?,
            None => DateTime::<Utc>::MIN_UTC,
        };
        let end = match &args.until {
            Some(until) => parse_bound(until, true)?,
            None => DateTime::<Utc>::MAX_UTC,
        };
        Some(DateRange::new(start, end)?)
    } else {
        None
    };

    let amount_range = if args.min_amount.is_some() || args.max_amount.is_some() {
        Some(AmountRange::new(
            args.min_amount.unwrap_or(f64::NEG_INFINITY),
            args.max_amount.unwrap_or(f64::INFINITY),
        )?)
    } else {
        None
    };

    Ok(FilterCriteria {
        categories: args.categories.clone(),
        statuses: args.statuses.clone(),
        date_range,
        amount_range,
        sort_by: args.sort,
        sort_order: args.order,
    })
}

/// Match, filter, sort, limit and group
///
/// # Errors
///
/// Returns an error if the criteria flags are invalid.
pub fn run_query(records: &[Record], args: &QueryArgs) -> Result<GroupedResults<Record>> {
    let criteria = criteria_from_args(args)?;

    let matches: Vec<Record> = records
        .iter()
        .filter(|record| default_search_filter(record, &args.text))
        .cloned()
        .collect();
    let mut ordered = criteria.apply(&matches);
    if let Some(limit) = args.limit {
        ordered.truncate(limit);
    }

    tracing::debug!(
        query = %args.text,
        matched = matches.len(),
        shown = ordered.len(),
        "query evaluated"
    );

    Ok(match &args.group_by {
        Some(field) => group_by_field(&ordered, field),
        None => GroupedResults::single(ordered),
    })
}

fn print_json(groups: &GroupedResults<Record>) -> Result<()> {
    let encoded = if groups.is_ungrouped() || groups.is_empty() {
        serde_json::to_string_pretty(&groups.flatten())
    } else {
        let grouped: Vec<serde_json::Value> = groups
            .iter()
            .map(|group| serde_json::json!({ "group": group.key, "records": group.items }))
            .collect();
        serde_json::to_string_pretty(&grouped)
    };
    let json = encoded
        .map_err(|e| SmartSearchError::InvalidInput(format!("Failed to encode results: {e}")))?;

    println!("{json}");
    Ok(())
}

fn print_text(groups: &GroupedResults<Record>, query: &str, quiet: bool) {
    if !quiet {
        let total = groups.total();
        let noun = if total == 1 { "result" } else { "results" };
        if query.trim().is_empty() {
            println!("{total} {noun}");
        } else {
            println!("{total} {noun} for \"{query}\"");
        }
    }

    for group in groups {
        if !quiet && !groups.is_ungrouped() {
            println!("{}", output::group_header(&group.key, group.items.len()));
        }
        for record in &group.items {
            println!("{}", output::record_line(record, query, quiet));
        }
    }
}

/// Execute the query command
///
/// # Errors
///
/// Returns an error if the criteria flags are invalid or JSON encoding fails.
pub fn execute(records: &[Record], args: &QueryArgs, quiet: bool) -> Result<()> {
    let groups = run_query(records, args)?;
    if args.json {
        print_json(&groups)
    } else {
        print_text(&groups, &args.text, quiet);
        Ok(())
    }
}
