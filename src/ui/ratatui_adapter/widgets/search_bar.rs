//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with a trailing cursor
pub struct SearchBar<'a> {
    /// Current input text
    query: &'a str,
    /// Shown while the input is empty
    placeholder: &'a str,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the input has focus
    focused: bool,
    disabled: bool,
    loading: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            placeholder: "Search...",
            theme,
            focused: true,
            disabled: false,
            loading: false,
        }
    }

    /// Set the placeholder text
    #[must_use]
    pub const fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused && !self.disabled {
            self.theme.accent_style()
        } else {
            self.theme.border_style()
        };

        let title = if self.loading {
            " Search (searching...) "
        } else {
            " Search "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled(">", self.theme.dimmed_style()), Span::raw(" ")];

        if self.disabled {
            spans.push(Span::styled(self.query, self.theme.dimmed_style()));
        } else if self.query.is_empty() {
            if self.focused {
                spans.push(cursor);
            }
            spans.push(Span::styled(self.placeholder, self.theme.dimmed_style()));
        } else {
            spans.push(Span::raw(self.query));
            if self.focused {
                spans.push(cursor);
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
