//! Application state for the ratatui TUI
//!
//! Owns the mounted widget and the keyboard hub it listens on, and keeps
//! what the screen shows beside the widget: the search log and the last
//! selected record.

use super::widgets::{KeyHint, ResultRenderer};
use crate::navigation::{DispatchResult, KeyboardHub, NavKey};
use crate::record::Record;
use crate::widget::{MountedSearch, SearchEvent, SmartSearch};
use ratatui::layout::{Position, Rect};
use std::cell::Ref;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Entries kept in the search log
pub const SEARCH_LOG_LIMIT: usize = 10;

/// Longest the loop waits for input when no debounce is pending
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// Screen areas from the last frame, for mouse hit-testing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// The search bar
    pub input: Rect,
    /// The open dropdown or the card grid
    pub results: Option<Rect>,
    /// Clickable rows and cards with their result index
    pub items: Vec<(Rect, usize)>,
}

impl HitMap {
    /// Result index under a position
    #[must_use]
    pub fn item_at(&self, position: Position) -> Option<usize> {
        self.items
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|&(_, index)| index)
    }

    /// Whether a position falls on the widget at all
    #[must_use]
    pub fn inside_widget(&self, position: Position) -> bool {
        self.input.contains(position) || self.results.is_some_and(|area| area.contains(position))
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    search: MountedSearch,
    hub: KeyboardHub,
    /// Whether the search input has focus
    input_focused: bool,
    log: Vec<String>,
    last_selected: Option<Arc<Record>>,
    hit_map: HitMap,
    /// Shown in the dropdown footer
    pub dropdown_hints: Vec<KeyHint>,
    /// Shown in the bottom bar
    pub hints: Vec<KeyHint>,
    /// Custom result rendering for the dropdown and the cards
    pub renderer: Option<ResultRenderer>,
}

impl AppState {
    /// Mount `search` on a fresh keyboard hub
    #[must_use]
    pub fn new(search: SmartSearch, hints: Vec<KeyHint>) -> Self {
        let hub = KeyboardHub::new();
        let search = MountedSearch::mount(search, &hub);
        Self {
            search,
            hub,
            input_focused: true,
            log: Vec::new(),
            last_selected: None,
            hit_map: HitMap::default(),
            dropdown_hints: vec![
                KeyHint::new("↑↓", "navigate"),
                KeyHint::new("Enter", "select"),
                KeyHint::new("Esc", "close"),
            ],
            hints,
            renderer: None,
        }
    }

    /// Borrow the widget
    #[must_use]
    pub fn search(&self) -> Ref<'_, SmartSearch> {
        self.search.borrow()
    }

    #[must_use]
    pub const fn input_focused(&self) -> bool {
        self.input_focused
    }

    /// Search log, oldest first
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    #[must_use]
    pub const fn last_selected(&self) -> Option<&Arc<Record>> {
        self.last_selected.as_ref()
    }

    /// Clickable areas of the last frame
    #[must_use]
    pub const fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    pub(crate) fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    // --- Input ---

    /// Append a typed character to the query
    pub fn type_char(&mut self, c: char, now: Instant) {
        let mut text = self.search.borrow().query().to_string();
        text.push(c);
        self.input_focused = true;
        self.search.borrow_mut().on_text_changed(text, now);
        self.collect_events();
    }

    /// Remove the last character of the query
    pub fn backspace(&mut self, now: Instant) {
        let mut text = self.search.borrow().query().to_string();
        if text.pop().is_none() {
            return;
        }
        self.input_focused = true;
        self.search.borrow_mut().on_text_changed(text, now);
        self.collect_events();
    }

    pub fn clear(&mut self) {
        self.search.borrow_mut().on_clear();
        self.collect_events();
    }

    /// Enter: submit the query, then let the listeners act on the key
    pub fn submit(&mut self) -> DispatchResult {
        self.search.borrow_mut().on_submit();
        self.collect_events();
        self.dispatch(NavKey::Enter)
    }

    pub fn focus(&mut self) {
        self.input_focused = true;
        self.search.borrow_mut().on_focus();
        self.collect_events();
    }

    /// Deliver a navigation key to every mounted listener
    pub fn dispatch(&mut self, key: NavKey) -> DispatchResult {
        let result = self.hub.dispatch(key);
        tracing::trace!(key = %key, delivered = result.delivered, "key dispatched");
        self.collect_events();
        result
    }

    /// Primary click at a screen position
    pub fn click(&mut self, position: Position) {
        if let Some(index) = self.hit_map.item_at(position) {
            let record = self.search.borrow().results().get(index).cloned();
            if let Some(record) = record {
                self.search.borrow_mut().on_item_clicked(&record);
            }
        } else if self.hit_map.inside_widget(position) {
            self.input_focused = true;
            self.search.borrow_mut().on_focus();
        } else {
            self.input_focused = false;
            self.search.borrow_mut().on_outside_interaction();
        }
        self.collect_events();
    }

    /// Let a due debounced query through
    pub fn tick(&mut self, now: Instant) {
        if self.search.borrow_mut().tick(now) {
            self.collect_events();
        }
    }

    /// How long to wait for input before the next tick is due
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.search
            .borrow()
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(now).min(IDLE_POLL)
            })
    }

    fn push_log(&mut self, entry: String) {
        self.log.push(entry);
        if self.log.len() > SEARCH_LOG_LIMIT {
            let excess = self.log.len() - SEARCH_LOG_LIMIT;
            self.log.drain(..excess);
        }
    }

    fn collect_events(&mut self) {
        let events = self.search.borrow_mut().drain_events();
        for event in events {
            match event {
                SearchEvent::Searched { query } if query.trim().is_empty() => {}
                SearchEvent::Searched { query } => {
                    let count = self.search.borrow().results().len();
                    self.push_log(format!("searched \"{query}\" ({count})"));
                }
                SearchEvent::Selected(record) => {
                    tracing::info!(id = %record.id, title = %record.title, "record selected");
                    self.push_log(format!("selected {}", record.title));
                    self.last_selected = Some(record);
                }
                SearchEvent::FocusInput => self.input_focused = true,
                SearchEvent::BlurInput => self.input_focused = false,
            }
        }
    }
}
