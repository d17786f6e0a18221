//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "Ctrl-U")
    pub key: String,
    /// Action description (e.g., "select", "clear")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Hints spanned as `key:action` pairs
#[must_use]
pub fn hint_spans<'a>(hints: &'a [KeyHint], theme: &Theme) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme.dimmed_style()));
        }
        spans.push(Span::styled(hint.key.as_str(), theme.accent_style()));
        spans.push(Span::styled(":", theme.dimmed_style()));
        spans.push(Span::raw(hint.action.as_str()));
    }
    spans
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the browse screen
    #[must_use]
    pub fn default_hints(search_on_submit: bool) -> Vec<KeyHint> {
        let mut hints = Vec::new();
        if search_on_submit {
            hints.push(KeyHint::new("Enter", "search"));
        }
        hints.extend([
            KeyHint::new("Ctrl-U", "clear"),
            KeyHint::new("Shift-Tab", "focus"),
            KeyHint::new("Ctrl-C", "quit"),
        ]);
        hints
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(hint_spans(self.hints, self.theme))).render(area, buf);
    }
}
