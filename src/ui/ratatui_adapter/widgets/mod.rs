//! Ratatui widgets for the search TUI
//!
//! Custom widgets for rendering a [`SearchView`](crate::widget::SearchView).

mod help_bar;
mod record_spans;
mod result_cards;
mod results_dropdown;
mod search_bar;
mod search_log;

pub use help_bar::{HelpBar, KeyHint, hint_spans};
pub use record_spans::{ResultRenderer, highlighted, metadata};
pub use result_cards::{CARD_HEIGHT, CARD_MIN_WIDTH, ResultCards, card_areas};
pub use results_dropdown::{DropdownLine, ResultsDropdown, dropdown_lines, scroll_offset};
pub use search_bar::SearchBar;
pub use search_log::SearchLog;
