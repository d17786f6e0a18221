//! Browse command - interactive search widget in the terminal

use crate::{
    SmartSearchError,
    cli::BrowseArgs,
    config::SmartSearchConfig,
    output,
    record::Record,
    ui::{self, Theme, ratatui_adapter::widgets::ResultRenderer},
    widget::{DisplayMode, SearchOptions, SmartSearch},
};
use std::time::Duration;

type Result<T> = std::result::Result<T, SmartSearchError>;

/// Widget options from the configuration with command-line overrides applied
#[must_use]
pub fn resolve_options(args: &BrowseArgs, config: &SmartSearchConfig) -> SearchOptions {
    let mut options = config.search_options();
    if args.cards {
        options.display_mode = DisplayMode::Cards;
    }
    if args.submit {
        options.search_on_submit = true;
    }
    if let Some(field) = &args.group_by {
        options.group_by = Some(field.clone());
    }
    if let Some(min_length) = args.min_length {
        options.min_search_length = min_length;
    }
    if let Some(max_results) = args.max_results {
        options.max_results = max_results;
    }
    if let Some(debounce_ms) = args.debounce_ms {
        options.debounce = Duration::from_millis(debounce_ms);
    }
    options
}

/// Execute the browse command
///
/// Prints the last selected record after the TUI closes.
///
/// # Errors
///
/// Returns an error if the widget cannot be built or the terminal fails.
pub fn execute(
    records: Vec<Record>,
    args: &BrowseArgs,
    config: &SmartSearchConfig,
    quiet: bool,
) -> Result<()> {
    let options = resolve_options(args, config);
    tracing::info!(
        records = records.len(),
        mode = %options.display_mode,
        search_on_submit = options.search_on_submit,
        "starting interactive search"
    );

    let search = SmartSearch::builder()
        .records(records)
        .options(options)
        .build()?;

    let renderer = args.compact.then(ResultRenderer::compact);
    let state = ui::run(search, &Theme::default(), renderer)?;

    if let Some(record) = state.last_selected() {
        println!("{}", output::record_line(record, "", quiet));
    }
    Ok(())
}
