//! Widget options

use crate::record::GroupField;
use crate::search::SearchError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default quiet period before a typed query is searched
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Default minimum query length
pub const DEFAULT_MIN_SEARCH_LENGTH: usize = 1;

/// Default cap on visible results
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// How results are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Overlay surface that opens and closes
    #[default]
    Dropdown,
    /// Inline grid that is always shown
    Cards,
}

impl DisplayMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dropdown => "dropdown",
            Self::Cards => "cards",
        }
    }

    /// Whether results render in an open/close surface
    #[must_use]
    pub const fn is_overlay(&self) -> bool {
        matches!(self, Self::Dropdown)
    }
}

impl FromStr for DisplayMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dropdown" => Ok(Self::Dropdown),
            "cards" => Ok(Self::Cards),
            _ => Err(SearchError::InvalidDisplayMode(s.to_string())),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behaviour knobs of a [`SmartSearch`](super::SmartSearch)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Quiet period for live queries
    pub debounce: Duration,
    /// Trimmed queries shorter than this show no results
    pub min_search_length: usize,
    pub max_results: usize,
    /// Search only on explicit submit instead of while typing
    pub search_on_submit: bool,
    pub display_mode: DisplayMode,
    pub group_by: Option<GroupField>,
    /// Passed through to the renderer
    pub loading: bool,
    pub disabled: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            min_search_length: DEFAULT_MIN_SEARCH_LENGTH,
            max_results: DEFAULT_MAX_RESULTS,
            search_on_submit: false,
            display_mode: DisplayMode::Dropdown,
            group_by: None,
            loading: false,
            disabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SearchOptions::default();
        assert_eq!(options.debounce, Duration::from_millis(300));
        assert_eq!(options.min_search_length, 1);
        assert_eq!(options.max_results, 10);
        assert!(!options.search_on_submit);
        assert_eq!(options.display_mode, DisplayMode::Dropdown);
        assert!(options.group_by.is_none());
    }

    #[test]
    fn test_display_mode_parse() {
        assert_eq!("cards".parse::<DisplayMode>().unwrap(), DisplayMode::Cards);
        assert_eq!("Dropdown".parse::<DisplayMode>().unwrap(), DisplayMode::Dropdown);
        assert!(matches!(
            "grid".parse::<DisplayMode>(),
            Err(SearchError::InvalidDisplayMode(_))
        ));
    }

    #[test]
    fn test_display_mode_serde() {
        let json = serde_json::to_string(&DisplayMode::Cards).unwrap();
        assert_eq!(json, "\"cards\"");
        let mode: DisplayMode = serde_json::from_str("\"dropdown\"").unwrap();
        assert!(mode.is_overlay());
    }
}
