//! The search widget controller
//!
//! [`SmartSearch`] owns the query state and wires the debouncer, the search
//! pipeline and keyboard navigation together. It draws nothing: a renderer
//! reads [`SmartSearch::view`] and reports user intents back through the
//! `on_*` methods and [`SmartSearch::handle_key`].
//!
//! Time is explicit. Text changes take the current [`Instant`], and the
//! host calls [`SmartSearch::tick`] when [`SmartSearch::next_deadline`]
//! passes to let the debounced query through.
//!
//! # Query state
//!
//! The effective query is the debounced input in live mode, or the last
//! submitted text in submit-gated mode. Results are recomputed whenever the
//! effective query, the records, the filter, the minimum length, the result
//! cap, the grouping or the display mode change.
//!
//! # Surface state
//!
//! In dropdown mode the surface opens as soon as typed text reaches the
//! minimum length (live mode only) and after each recomputation exactly
//! when there are results. It closes on Escape, Tab, selection, clear and
//! outside interaction. Cards mode has no surface; navigation there is
//! active whenever there are results.

use super::events::{SearchEvent, SearchView};
use super::options::{DisplayMode, SearchOptions};
use crate::debounce::Debouncer;
use crate::navigation::{KeyListener, KeyOutcome, KeyboardNavigation, NavCommand, NavKey};
use crate::record::{GroupField, Record};
use crate::search::{PipelineInput, ResultSet, SearchError, SearchFilter, recompute};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Search widget state machine
#[derive(Debug)]
pub struct SmartSearch {
    records: Vec<Arc<Record>>,
    options: SearchOptions,
    filter: SearchFilter,
    query: String,
    committed: String,
    debouncer: Debouncer<String>,
    open: bool,
    results: ResultSet,
    navigation: KeyboardNavigation,
    events: Vec<SearchEvent>,
    disposed: bool,
}

fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}

impl SmartSearch {
    /// Create a builder for a `SmartSearch`
    #[must_use]
    pub fn builder() -> SmartSearchBuilder {
        SmartSearchBuilder::new()
    }

    fn new(records: Vec<Arc<Record>>, options: SearchOptions, filter: SearchFilter) -> Self {
        let mut search = Self {
            debouncer: Debouncer::new(String::new(), options.debounce),
            records,
            options,
            filter,
            query: String::new(),
            committed: String::new(),
            open: false,
            results: ResultSet::default(),
            navigation: KeyboardNavigation::new(),
            events: Vec::new(),
            disposed: false,
        };
        search.refresh();
        search
    }

    // --- Read side ---

    /// Raw text in the input
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Query the results are computed from
    #[must_use]
    pub fn effective_query(&self) -> &str {
        if self.options.search_on_submit {
            &self.committed
        } else {
            self.debouncer.value()
        }
    }

    #[must_use]
    pub const fn results(&self) -> &ResultSet {
        &self.results
    }

    #[must_use]
    pub const fn options(&self) -> &SearchOptions {
        &self.options
    }

    #[must_use]
    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    #[must_use]
    pub const fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    /// Raw surface flag; always false in cards mode
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Whether navigation keys are currently evaluated
    #[must_use]
    pub fn is_navigation_active(&self) -> bool {
        if self.disposed || self.options.disabled {
            return false;
        }
        match self.options.display_mode {
            DisplayMode::Dropdown => self.open,
            DisplayMode::Cards => !self.results.is_empty(),
        }
    }

    /// Selected index as stored, possibly stale
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.navigation.selected_index()
    }

    /// When [`tick`](Self::tick) next has work to do
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.disposed {
            return None;
        }
        self.debouncer.next_deadline()
    }

    /// Snapshot for the renderer
    #[must_use]
    pub fn view(&self) -> SearchView<'_> {
        let selected_index = self
            .navigation
            .selected_index()
            .filter(|&i| i < self.results.len());
        let is_open = self
            .options
            .display_mode
            .is_overlay()
            .then_some(self.open && !self.options.disabled);

        SearchView {
            query: &self.query,
            effective_query: self.effective_query(),
            results: &self.results,
            selected_index,
            is_open,
            loading: self.options.loading,
            disabled: self.options.disabled,
            display_mode: self.options.display_mode,
        }
    }

    /// Take the notifications raised since the last call
    pub fn drain_events(&mut self) -> Vec<SearchEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Intents ---

    /// The input text changed
    pub fn on_text_changed(&mut self, text: impl Into<String>, now: Instant) {
        if self.disposed || self.options.disabled {
            return;
        }
        let text = text.into();
        self.debouncer.update(text.clone(), now);
        if !self.options.search_on_submit
            && self.options.display_mode.is_overlay()
            && trimmed_len(&text) >= self.options.min_search_length
        {
            self.set_open(true);
        }
        self.query = text;
        self.sync_navigation();
    }

    /// Advance time; lets a due debounced query through
    ///
    /// Returns whether the results were recomputed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        if self.debouncer.poll(now).is_none() || self.options.search_on_submit {
            return false;
        }
        if self.effective_query() == self.results.query() {
            return false;
        }
        self.refresh();
        true
    }

    /// The clear control was used
    pub fn on_clear(&mut self) {
        if self.disposed {
            return;
        }
        self.reset_query();
        self.results = ResultSet::default();
        self.set_open(false);
        self.navigation.set_selected_index(None);
        self.events.push(SearchEvent::FocusInput);
    }

    /// The input gained focus
    pub fn on_focus(&mut self) {
        if self.disposed {
            return;
        }
        if !self.options.search_on_submit
            && self.options.display_mode.is_overlay()
            && trimmed_len(&self.query) >= self.options.min_search_length
            && !self.results.is_empty()
        {
            self.set_open(true);
            self.sync_navigation();
        }
    }

    /// Explicit submit (Enter in the input or a search button)
    ///
    /// Only acts in submit-gated mode. Commits the trimmed text, empty
    /// included, which is how a gated search is cleared.
    pub fn on_submit(&mut self) {
        if self.disposed || !self.options.search_on_submit {
            return;
        }
        let committed = self.query.trim().to_string();
        if committed == self.committed {
            return;
        }
        self.committed = committed;
        self.refresh();
    }

    /// A result was clicked
    pub fn on_item_clicked(&mut self, record: &Arc<Record>) {
        if self.disposed {
            return;
        }
        self.select(Arc::clone(record));
    }

    /// Interaction outside the widget; never touches the query text
    pub fn on_outside_interaction(&mut self) {
        if self.disposed {
            return;
        }
        self.set_open(false);
        self.sync_navigation();
    }

    /// Hover or programmatic highlight; not validated against the list
    pub fn set_selected_index(&mut self, index: Option<usize>) {
        self.navigation.set_selected_index(index);
        self.sync_navigation();
    }

    /// Feed a navigation key
    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        if self.disposed {
            return KeyOutcome::ignored();
        }
        let active = self.is_navigation_active();
        let outcome = self.navigation.handle_key(key, self.results.len(), active);

        match outcome.command {
            Some(NavCommand::Select(index)) => match self.results.get(index).cloned() {
                Some(record) => self.select(record),
                None => tracing::warn!(
                    index,
                    len = self.results.len(),
                    "ignoring stale selection index"
                ),
            },
            Some(NavCommand::Close) => self.set_open(false),
            None => {}
        }
        self.sync_navigation();
        outcome
    }

    /// Tear down: cancels the pending debounce, after which every intent is
    /// ignored
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.debouncer.cancel();
        self.disposed = true;
        self.navigation.sync(0, false);
        tracing::debug!("search widget disposed");
    }

    // --- Reconfiguration ---

    pub fn set_records(&mut self, records: impl IntoIterator<Item = impl Into<Arc<Record>>>) {
        self.records = records.into_iter().map(Into::into).collect();
        self.refresh();
    }

    /// Swap the match predicate
    pub fn set_filter(&mut self, filter: SearchFilter) {
        if filter.same_as(&self.filter) {
            return;
        }
        self.filter = filter;
        self.refresh();
    }

    pub fn set_min_search_length(&mut self, min_search_length: usize) {
        if self.options.min_search_length != min_search_length {
            self.options.min_search_length = min_search_length;
            self.refresh();
        }
    }

    pub fn set_max_results(&mut self, max_results: usize) {
        if self.options.max_results != max_results {
            self.options.max_results = max_results;
            self.refresh();
        }
    }

    pub fn set_group_by(&mut self, group_by: Option<GroupField>) {
        if self.options.group_by != group_by {
            self.options.group_by = group_by;
            self.refresh();
        }
    }

    pub fn set_display_mode(&mut self, display_mode: DisplayMode) {
        if self.options.display_mode != display_mode {
            self.options.display_mode = display_mode;
            if !display_mode.is_overlay() {
                self.open = false;
            }
            self.refresh();
        }
    }

    /// Switch between live and submit-gated mode
    ///
    /// Leaving submit-gated mode discards the committed text.
    pub fn set_search_on_submit(&mut self, search_on_submit: bool) {
        if self.options.search_on_submit == search_on_submit {
            return;
        }
        self.options.search_on_submit = search_on_submit;
        if !search_on_submit {
            self.committed.clear();
        }
        if self.effective_query() != self.results.query() {
            self.refresh();
        }
    }

    pub fn set_debounce(&mut self, delay: Duration, now: Instant) {
        self.options.debounce = delay;
        self.debouncer.set_delay(delay, now);
    }

    pub const fn set_loading(&mut self, loading: bool) {
        self.options.loading = loading;
    }

    /// Disabling ignores text input and hides the surface
    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
        self.sync_navigation();
    }

    // --- Internals ---

    fn refresh(&mut self) {
        if self.disposed {
            return;
        }
        let query = self.effective_query().to_string();
        let previous_was_empty = self.results.query().trim().is_empty();

        let results = recompute(&PipelineInput {
            query: &query,
            records: &self.records,
            min_search_length: self.options.min_search_length,
            filter: &self.filter,
            max_results: self.options.max_results,
            group_by: self.options.group_by.as_ref(),
        });

        if self.options.display_mode.is_overlay() {
            let open = !results.below_min_length() && !results.is_empty();
            self.set_open(open);
        }

        let is_empty = query.trim().is_empty();
        let notify = if is_empty {
            !previous_was_empty
        } else {
            !results.below_min_length()
        };

        self.results = results;
        if notify {
            self.events.push(SearchEvent::Searched { query });
        }
        self.sync_navigation();
    }

    fn select(&mut self, record: Arc<Record>) {
        tracing::debug!(id = %record.id, title = %record.title, "result selected");
        self.events.push(SearchEvent::Selected(record));
        self.events.push(SearchEvent::BlurInput);
        self.reset_query();
        self.navigation.set_selected_index(None);
        self.refresh();
        self.set_open(false);
        self.sync_navigation();
    }

    fn reset_query(&mut self) {
        self.query.clear();
        self.committed.clear();
        self.debouncer.reset(String::new());
    }

    fn set_open(&mut self, open: bool) {
        let open = open && self.options.display_mode.is_overlay();
        if self.open != open {
            tracing::debug!(open, "results surface toggled");
            self.open = open;
        }
    }

    fn sync_navigation(&mut self) {
        let active = self.is_navigation_active();
        self.navigation.sync(self.results.len(), active);
    }
}

impl KeyListener for SmartSearch {
    fn on_key(&mut self, key: NavKey) -> KeyOutcome {
        self.handle_key(key)
    }
}

/// Builder for [`SmartSearch`]
///
/// ```
/// use smartsearch::record::Record;
/// use smartsearch::widget::{DisplayMode, SmartSearch};
///
/// let search = SmartSearch::builder()
///     .records(vec![Record::new(1, "Savings")])
///     .display_mode(DisplayMode::Cards)
///     .min_search_length(2)
///     .build()?;
/// assert!(search.results().is_empty());
/// # Ok::<(), smartsearch::search::SearchError>(())
/// ```
#[derive(Debug, Default)]
pub struct SmartSearchBuilder {
    records: Option<Vec<Arc<Record>>>,
    options: SearchOptions,
    filter: Option<SearchFilter>,
}

impl SmartSearchBuilder {
    /// Create a builder with default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the searchable records (required)
    #[must_use]
    pub fn records(mut self, records: impl IntoIterator<Item = impl Into<Arc<Record>>>) -> Self {
        self.records = Some(records.into_iter().map(Into::into).collect());
        self
    }

    /// Replace all options at once
    #[must_use]
    pub fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the default match predicate
    #[must_use]
    pub fn filter(mut self, filter: SearchFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub const fn debounce(mut self, delay: Duration) -> Self {
        self.options.debounce = delay;
        self
    }

    #[must_use]
    pub const fn min_search_length(mut self, min_search_length: usize) -> Self {
        self.options.min_search_length = min_search_length;
        self
    }

    #[must_use]
    pub const fn max_results(mut self, max_results: usize) -> Self {
        self.options.max_results = max_results;
        self
    }

    #[must_use]
    pub const fn search_on_submit(mut self, search_on_submit: bool) -> Self {
        self.options.search_on_submit = search_on_submit;
        self
    }

    #[must_use]
    pub const fn display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.options.display_mode = display_mode;
        self
    }

    #[must_use]
    pub fn group_by(mut self, group_by: Option<GroupField>) -> Self {
        self.options.group_by = group_by;
        self
    }

    /// Build the `SmartSearch`
    ///
    /// # Errors
    ///
    /// Returns `SearchError::BuildError` if no records were provided.
    pub fn build(self) -> Result<SmartSearch, SearchError> {
        let records = self
            .records
            .ok_or_else(|| SearchError::BuildError("records are required".to_string()))?;
        Ok(SmartSearch::new(
            records,
            self.options,
            self.filter.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Category;
    use crate::testing::shared_records;

    const DELAY: Duration = Duration::from_millis(300);

    fn search(options: SearchOptions) -> SmartSearch {
        SmartSearch::builder()
            .records(shared_records())
            .options(options)
            .build()
            .unwrap()
    }

    fn type_and_settle(search: &mut SmartSearch, text: &str, now: Instant) -> Instant {
        search.on_text_changed(text, now);
        let later = now + search.options().debounce;
        search.tick(later);
        later
    }

    fn searched(events: &[SearchEvent]) -> Vec<&str> {
        events
            .iter()
            .filter_map(|e| match e {
                SearchEvent::Searched { query } => Some(query.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_builder_requires_records() {
        let result = SmartSearch::builder().build();
        assert!(matches!(result, Err(SearchError::BuildError(_))));
    }

    #[test]
    fn test_initial_state() {
        let mut s = search(SearchOptions::default());
        let view = s.view();
        assert_eq!(view.query, "");
        assert!(view.results.is_empty());
        assert_eq!(view.selected_index, None);
        assert_eq!(view.is_open, Some(false));
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_typing_opens_before_results_arrive() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());

        s.on_text_changed("sav", t0);
        assert!(s.is_open());
        assert!(s.results().is_empty());
        assert_eq!(s.next_deadline(), Some(t0 + DELAY));

        assert!(!s.tick(t0 + Duration::from_millis(100)));
        assert!(s.tick(t0 + DELAY));
        assert!(!s.results().is_empty());
        assert!(s.is_open());
        assert_eq!(searched(&s.drain_events()), ["sav"]);
    }

    #[test]
    fn test_no_match_closes_and_still_notifies() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());

        type_and_settle(&mut s, "zzzz", t0);
        assert!(s.results().is_empty());
        assert!(!s.is_open());
        assert_eq!(searched(&s.drain_events()), ["zzzz"]);
    }

    #[test]
    fn test_min_length_suppresses_results() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions {
            min_search_length: 2,
            ..SearchOptions::default()
        });

        let t1 = type_and_settle(&mut s, "J", t0);
        assert!(s.results().is_empty());
        assert_eq!(s.view().is_open, Some(false));
        assert!(searched(&s.drain_events()).is_empty());

        type_and_settle(&mut s, "Jo", t1);
        assert!(!s.results().is_empty());
        assert_eq!(s.view().is_open, Some(true));
    }

    #[test]
    fn test_deleting_query_notifies_once_when_emptied() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());

        let t1 = type_and_settle(&mut s, "card", t0);
        type_and_settle(&mut s, "", t1);

        assert!(s.results().is_empty());
        assert!(!s.is_open());
        assert_eq!(searched(&s.drain_events()), ["card", ""]);
    }

    #[test]
    fn test_submit_gated_mode() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions {
            search_on_submit: true,
            ..SearchOptions::default()
        });

        let t1 = type_and_settle(&mut s, "card", t0);
        assert!(!s.is_open());
        assert!(s.results().is_empty());
        assert!(s.drain_events().is_empty());

        s.on_submit();
        assert_eq!(s.effective_query(), "card");
        assert!(!s.results().is_empty());
        assert!(s.is_open());
        assert_eq!(searched(&s.drain_events()), ["card"]);

        // Resubmitting the same text changes nothing
        s.on_submit();
        assert!(s.drain_events().is_empty());

        // Empty submit clears the gated search
        type_and_settle(&mut s, "   ", t1);
        s.on_submit();
        assert_eq!(s.effective_query(), "");
        assert!(s.results().is_empty());
        assert_eq!(searched(&s.drain_events()), [""]);
    }

    #[test]
    fn test_submit_is_noop_in_live_mode() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());
        s.on_text_changed("card", t0);
        s.on_submit();
        assert!(s.results().is_empty());
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_leaving_submit_mode_uses_debounced_text() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions {
            search_on_submit: true,
            ..SearchOptions::default()
        });

        type_and_settle(&mut s, "card", t0);
        s.on_submit();
        s.set_search_on_submit(false);
        assert_eq!(s.effective_query(), "card");

        s.set_search_on_submit(true);
        assert_eq!(s.effective_query(), "");
        assert!(s.results().is_empty());
    }

    #[test]
    fn test_keyboard_select_in_dropdown() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());
        type_and_settle(&mut s, "card", t0);
        s.drain_events();

        assert!(s.is_navigation_active());
        s.handle_key(NavKey::ArrowDown);
        assert_eq!(s.view().selected_index, Some(0));
        let expected = Arc::clone(&s.results().records()[0]);

        let outcome = s.handle_key(NavKey::Enter);
        assert!(outcome.prevent_default);

        let events = s.drain_events();
        assert_eq!(
            events,
            [
                SearchEvent::Selected(expected),
                SearchEvent::BlurInput,
                SearchEvent::Searched { query: String::new() },
            ]
        );
        assert_eq!(s.query(), "");
        assert!(!s.is_open());
        assert!(s.results().is_empty());
        assert_eq!(s.selected_index(), None);
    }

    #[test]
    fn test_escape_closes_and_resets_selection() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());
        type_and_settle(&mut s, "card", t0);

        s.handle_key(NavKey::End);
        assert!(s.selected_index().is_some());

        s.handle_key(NavKey::Escape);
        assert!(!s.is_open());
        assert_eq!(s.selected_index(), None);
        assert_eq!(s.query(), "card");
    }

    #[test]
    fn test_tab_closes_without_prevent_default() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());
        type_and_settle(&mut s, "card", t0);

        let outcome = s.handle_key(NavKey::Tab);
        assert!(!outcome.prevent_default);
        assert!(!s.is_open());
    }

    #[test]
    fn test_focus_reopens_with_existing_results() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());
        type_and_settle(&mut s, "card", t0);

        s.on_outside_interaction();
        assert!(!s.is_open());
        assert_eq!(s.query(), "card");

        s.on_focus();
        assert!(s.is_open());
    }

    #[test]
    fn test_clear_resets_everything() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());
        type_and_settle(&mut s, "card", t0);
        s.handle_key(NavKey::ArrowDown);
        s.drain_events();

        s.on_clear();
        let view = s.view();
        assert_eq!(view.query, "");
        assert_eq!(view.effective_query, "");
        assert!(view.results.is_empty());
        assert_eq!(view.selected_index, None);
        assert_eq!(view.is_open, Some(false));
        assert_eq!(s.drain_events(), [SearchEvent::FocusInput]);
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn test_cards_mode_navigation_tracks_results() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions {
            display_mode: DisplayMode::Cards,
            ..SearchOptions::default()
        });
        assert!(!s.is_navigation_active());
        assert_eq!(s.view().is_open, None);

        s.on_text_changed("card", t0);
        assert!(!s.is_open());
        s.tick(t0 + DELAY);

        assert!(s.is_navigation_active());
        s.handle_key(NavKey::ArrowUp);
        assert_eq!(s.selected_index(), Some(s.results().len() - 1));

        // Escape has nothing to close in cards mode
        s.handle_key(NavKey::Escape);
        assert!(s.is_navigation_active());
        assert!(s.selected_index().is_some());
    }

    #[test]
    fn test_item_click_selects() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());
        type_and_settle(&mut s, "card", t0);
        s.drain_events();

        let record = Arc::clone(&s.results().records()[0]);
        s.on_item_clicked(&record);
        assert_eq!(
            s.drain_events(),
            [
                SearchEvent::Selected(record),
                SearchEvent::BlurInput,
                SearchEvent::Searched { query: String::new() },
            ]
        );
    }

    #[test]
    fn test_selection_recomputes_for_empty_query() {
        let t0 = Instant::now();
        let records = vec![
            Arc::new(Record::new(1, "Alpha")),
            Arc::new(Record::new(2, "Beta")),
        ];
        let mut s = SmartSearch::builder()
            .records(records)
            .display_mode(DisplayMode::Cards)
            .min_search_length(0)
            .build()
            .unwrap();
        assert_eq!(s.results().len(), 2);

        let later = type_and_settle(&mut s, "alp", t0);
        assert_eq!(s.results().len(), 1);
        let record = Arc::clone(&s.results().records()[0]);
        s.on_item_clicked(&record);
        s.tick(later + Duration::from_secs(5));

        assert_eq!(s.effective_query(), "");
        assert_eq!(s.results().len(), 2);
        assert_eq!(s.selected_index(), None);
    }

    #[test]
    fn test_gated_selection_reports_emptied_query() {
        let mut s = search(SearchOptions {
            search_on_submit: true,
            ..SearchOptions::default()
        });
        s.on_text_changed("card", Instant::now());
        s.on_submit();
        s.drain_events();

        let record = Arc::clone(&s.results().records()[0]);
        s.on_item_clicked(&record);
        assert_eq!(searched(&s.drain_events()), [""]);
        assert_eq!(s.effective_query(), "");
        assert!(s.results().is_empty());
        assert!(!s.is_open());
    }

    #[test]
    fn test_stale_index_is_ignored_on_enter() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());
        type_and_settle(&mut s, "card", t0);
        s.drain_events();

        s.set_selected_index(Some(99));
        assert_eq!(s.view().selected_index, None);

        s.handle_key(NavKey::Enter);
        assert!(s.drain_events().is_empty());
        assert_eq!(s.query(), "card");
    }

    #[test]
    fn test_group_by_reorders_flat_list() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions {
            group_by: Some(GroupField::Category),
            min_search_length: 0,
            max_results: 100,
            ..SearchOptions::default()
        });
        type_and_settle(&mut s, "a", t0);

        let groups: Vec<&str> = s.results().groups().keys().collect();
        assert!(groups.len() > 1);
        let flat_categories: Vec<Option<&Category>> = s
            .results()
            .records()
            .iter()
            .map(|r| r.category.as_ref())
            .collect();
        // Records of one category are contiguous in the flattened list
        let mut seen = Vec::new();
        for category in flat_categories {
            if seen.last() != Some(&category) {
                assert!(!seen.contains(&category));
                seen.push(category);
            }
        }
    }

    #[test]
    fn test_set_filter_recomputes() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());
        type_and_settle(&mut s, "card", t0);
        assert!(!s.results().is_empty());

        s.set_filter(SearchFilter::new(|_: &Record, _: &str| false));
        assert!(s.results().is_empty());
        assert!(!s.is_open());
    }

    #[test]
    fn test_set_max_results_zero() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());
        type_and_settle(&mut s, "a", t0);
        s.set_max_results(0);
        assert!(s.results().is_empty());
    }

    #[test]
    fn test_disabled_ignores_input_and_hides_surface() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());
        type_and_settle(&mut s, "card", t0);

        s.set_disabled(true);
        assert_eq!(s.view().is_open, Some(false));
        assert!(!s.is_navigation_active());

        s.on_text_changed("other", t0);
        assert_eq!(s.query(), "card");
    }

    #[test]
    fn test_dispose_cancels_pending_query() {
        let t0 = Instant::now();
        let mut s = search(SearchOptions::default());
        s.on_text_changed("card", t0);
        s.dispose();

        assert_eq!(s.next_deadline(), None);
        assert!(!s.tick(t0 + DELAY));
        assert!(s.results().is_empty());
        assert_eq!(s.handle_key(NavKey::ArrowDown), KeyOutcome::ignored());
    }
}
