//! Event handling for the ratatui TUI
//!
//! Maps crossterm keyboard and mouse events to widget intents and
//! navigation keys.

use super::state::AppState;
use crate::navigation::NavKey;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use std::time::{Duration, Instant};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the TUI
    Quit,
    /// No action taken
    Ignored,
}

/// Navigation key for a terminal key, if it is one
#[must_use]
pub const fn nav_key(code: KeyCode) -> Option<NavKey> {
    match code {
        KeyCode::Up => Some(NavKey::ArrowUp),
        KeyCode::Down => Some(NavKey::ArrowDown),
        KeyCode::Home => Some(NavKey::Home),
        KeyCode::End => Some(NavKey::End),
        KeyCode::Esc => Some(NavKey::Escape),
        KeyCode::Tab => Some(NavKey::Tab),
        _ => None,
    }
}

/// Handle a key press
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.clear();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.type_char(c, now);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            state.backspace(now);
            EventResult::Continue
        }
        (KeyCode::Enter, _) => {
            state.submit();
            EventResult::Continue
        }
        (KeyCode::BackTab, _) => {
            state.focus();
            EventResult::Continue
        }
        (code, _) => match nav_key(code) {
            Some(nav) => {
                if state.dispatch(nav).prevent_default {
                    EventResult::Continue
                } else {
                    EventResult::Ignored
                }
            }
            None => EventResult::Ignored,
        },
    }
}

/// Handle mouse events
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.click(Position::new(mouse.column, mouse.row));
            EventResult::Continue
        }
        MouseEventKind::ScrollUp => {
            state.dispatch(NavKey::ArrowUp);
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.dispatch(NavKey::ArrowDown);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key, Instant::now()),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::shared_records;
    use crate::widget::SmartSearch;

    fn make_state(search_on_submit: bool) -> AppState {
        let search = SmartSearch::builder()
            .records(shared_records())
            .search_on_submit(search_on_submit)
            .debounce(Duration::ZERO)
            .build()
            .unwrap();
        AppState::new(search, Vec::new())
    }

    fn press(state: &mut AppState, code: KeyCode, now: Instant) -> EventResult {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE), now)
    }

    #[test]
    fn test_nav_key_mapping() {
        assert_eq!(nav_key(KeyCode::Up), Some(NavKey::ArrowUp));
        assert_eq!(nav_key(KeyCode::Tab), Some(NavKey::Tab));
        assert_eq!(nav_key(KeyCode::Char('j')), None);
    }

    #[test]
    fn test_query_input() {
        let mut state = make_state(false);
        let now = Instant::now();
        for c in "carx".chars() {
            assert_eq!(press(&mut state, KeyCode::Char(c), now), EventResult::Continue);
        }
        press(&mut state, KeyCode::Backspace, now);
        press(&mut state, KeyCode::Char('d'), now);
        assert_eq!(state.search().query(), "card");

        state.tick(now);
        assert_eq!(state.search().results().len(), 2);
    }

    #[test]
    fn test_arrows_navigate_open_dropdown() {
        let mut state = make_state(false);
        let now = Instant::now();
        for c in "card".chars() {
            press(&mut state, KeyCode::Char(c), now);
        }
        state.tick(now);

        assert_eq!(press(&mut state, KeyCode::Up, now), EventResult::Continue);
        assert_eq!(state.search().selected_index(), Some(1));
        assert_eq!(press(&mut state, KeyCode::Esc, now), EventResult::Continue);
        assert!(!state.search().is_open());
        assert_eq!(press(&mut state, KeyCode::Down, now), EventResult::Ignored);
    }

    #[test]
    fn test_enter_submits_in_gated_mode() {
        let mut state = make_state(true);
        let now = Instant::now();
        for c in "sav".chars() {
            press(&mut state, KeyCode::Char(c), now);
        }
        state.tick(now);
        assert!(state.search().results().is_empty());

        press(&mut state, KeyCode::Enter, now);
        assert_eq!(state.search().effective_query(), "sav");
        assert_eq!(state.log(), ["searched \"sav\" (1)"]);
    }

    #[test]
    fn test_ctrl_keys() {
        let mut state = make_state(false);
        let now = Instant::now();
        press(&mut state, KeyCode::Char('x'), now);

        let clear = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, clear, now), EventResult::Continue);
        assert_eq!(state.search().query(), "");

        let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, quit, now), EventResult::Quit);
    }
}
