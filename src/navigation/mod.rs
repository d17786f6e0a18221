//! Keyboard navigation over a result list
//!
//! [`KeyboardNavigation`] is a reducer: it owns only the selected index.
//! The item count and the active flag come from the caller on every call,
//! and the index is forced back to none whenever the machine is inactive or
//! the list is empty.
//!
//! | Key | Effect | Default suppressed |
//! |---|---|---|
//! | `ArrowDown` | next item, wraps to first | yes |
//! | `ArrowUp` | previous item, wraps to last (from none too) | yes |
//! | `Home` / `End` | first / last item | yes |
//! | `Enter` | select current item, if any | yes |
//! | `Escape` | close | yes |
//! | `Tab` | close | no |
//! | anything else | nothing | no |
//!
//! Keys are only evaluated while active with a non-empty list.

pub mod hub;

pub use hub::{DispatchResult, KeyListener, KeySubscription, KeyboardHub};

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Keys the navigation machine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Enter,
    Escape,
    Tab,
    /// Any other key, never handled
    Other,
}

impl NavKey {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ArrowUp => "ArrowUp",
            Self::ArrowDown => "ArrowDown",
            Self::Home => "Home",
            Self::End => "End",
            Self::Enter => "Enter",
            Self::Escape => "Escape",
            Self::Tab => "Tab",
            Self::Other => "Other",
        }
    }
}

impl FromStr for NavKey {
    type Err = Infallible;

    /// Parse a DOM-style key name; unknown names become [`NavKey::Other`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            _ => Self::Other,
        })
    }
}

impl fmt::Display for NavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request the machine hands back to its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Activate the item at this index
    Select(usize),
    /// Close the results surface
    Close,
}

/// What handling one key produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub command: Option<NavCommand>,
    /// Whether the key's default action should be suppressed
    pub prevent_default: bool,
}

impl KeyOutcome {
    /// Key not handled
    #[must_use]
    pub const fn ignored() -> Self {
        Self {
            command: None,
            prevent_default: false,
        }
    }

    /// Key handled, default suppressed
    #[must_use]
    pub const fn handled(command: Option<NavCommand>) -> Self {
        Self {
            command,
            prevent_default: true,
        }
    }

    #[must_use]
    pub const fn is_handled(&self) -> bool {
        self.prevent_default || self.command.is_some()
    }
}

/// Selection index state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardNavigation {
    selected: Option<usize>,
}

impl KeyboardNavigation {
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Currently selected index, `None` when nothing is selected
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Set the index directly
    ///
    /// Not validated against the list length; the next [`sync`](Self::sync)
    /// with an inactive or empty list clears it, and consumers treat an
    /// out-of-range index as no selection.
    pub const fn set_selected_index(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    /// Apply the reset rule for the current inputs
    pub fn sync(&mut self, item_count: usize, active: bool) {
        if (!active || item_count == 0) && self.selected.take().is_some() {
            tracing::trace!(item_count, active, "navigation reset");
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: NavKey, item_count: usize, active: bool) -> KeyOutcome {
        self.sync(item_count, active);
        if !active || item_count == 0 {
            return KeyOutcome::ignored();
        }

        let last = item_count - 1;
        match key {
            NavKey::ArrowDown => {
                self.selected = Some(match self.selected {
                    Some(i) if i < last => i + 1,
                    _ => 0,
                });
                KeyOutcome::handled(None)
            }
            NavKey::ArrowUp => {
                self.selected = Some(match self.selected {
                    Some(i) if i > 0 => (i - 1).min(last),
                    _ => last,
                });
                KeyOutcome::handled(None)
            }
            NavKey::Home => {
                self.selected = Some(0);
                KeyOutcome::handled(None)
            }
            NavKey::End => {
                self.selected = Some(last);
                KeyOutcome::handled(None)
            }
            NavKey::Enter => KeyOutcome::handled(self.selected.map(NavCommand::Select)),
            NavKey::Escape => KeyOutcome::handled(Some(NavCommand::Close)),
            NavKey::Tab => KeyOutcome {
                command: Some(NavCommand::Close),
                prevent_default: false,
            },
            NavKey::Other => KeyOutcome::ignored(),
        }
    }
}
