//! Smartsearch - search, rank and group in-memory records
//!
//! This library provides the core of a search widget: a text input coupled
//! to a filtered, ranked and grouped result list with keyboard navigation.
//!
//! - [`debounce`] turns rapidly changing input into a stable query
//! - [`search`] matches, ranks, groups and highlights records
//! - [`navigation`] maps navigation keys to a selection index
//! - [`widget`] ties them together behind renderer-facing intents
//!
//! The [`ui`] module is a terminal renderer for the widget, used by the
//! `smartsearch` binary.
//!
//! ```
//! use smartsearch::record::Record;
//! use smartsearch::widget::{SearchEvent, SmartSearch};
//! use std::time::{Duration, Instant};
//!
//! let mut search = SmartSearch::builder()
//!     .records(vec![
//!         Record::new(1, "Premium Savings").with_priority(2),
//!         Record::new(2, "Business Checking"),
//!     ])
//!     .build()?;
//!
//! let now = Instant::now();
//! search.on_text_changed("sav", now);
//! search.tick(now + Duration::from_millis(300));
//!
//! assert_eq!(search.results().len(), 1);
//! assert_eq!(
//!     search.drain_events(),
//!     [SearchEvent::Searched { query: "sav".into() }]
//! );
//! # Ok::<(), smartsearch::search::SearchError>(())
//! ```

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod format;
pub mod navigation;
pub mod output;
pub mod record;
pub mod search;
pub mod ui;
pub mod widget;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SmartSearchError {
    /// Search setup error
    #[error("Search error: {0}")]
    Search(#[from] search::SearchError),

    /// Record loading error
    #[error("Record error: {0}")]
    Record(#[from] record::RecordError),

    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),

    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
