//! Outbound notifications and the renderer-facing snapshot

use super::options::DisplayMode;
use crate::record::Record;
use crate::search::ResultSet;
use std::sync::Arc;

/// Notification raised by the widget for its host
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Results were recomputed for this effective query
    Searched { query: String },
    /// A record was activated by click or Enter
    Selected(Arc<Record>),
    /// The host should move focus to the text input
    FocusInput,
    /// The host should take focus away from the text input
    BlurInput,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct SearchView<'a> {
    /// Raw text in the input
    pub query: &'a str,
    /// Query the results were computed for
    pub effective_query: &'a str,
    pub results: &'a ResultSet,
    /// Highlighted row in [`ResultSet::records`], never out of range
    pub selected_index: Option<usize>,
    /// Surface state; `None` when the display mode has no surface
    pub is_open: Option<bool>,
    pub loading: bool,
    pub disabled: bool,
    pub display_mode: DisplayMode,
}

impl SearchView<'_> {
    /// Whether the results should be drawn at all
    #[must_use]
    pub fn shows_results(&self) -> bool {
        self.is_open.unwrap_or(true)
    }

    /// The highlighted record, if any
    #[must_use]
    pub fn selected(&self) -> Option<&Arc<Record>> {
        self.selected_index.and_then(|i| self.results.get(i))
    }
}
