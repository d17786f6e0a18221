//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the application.

use crate::record::Status;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted result
    pub selection_bg: Color,
    /// Foreground color for the highlighted result
    pub selection_fg: Color,
    /// Color for query occurrences in result text
    pub match_highlight: Color,
    /// Color for the focused input and key hints
    pub accent: Color,
    /// Positive amounts, active and completed statuses
    pub positive: Color,
    /// Negative amounts, blocked statuses
    pub negative: Color,
    /// Pending statuses
    pub pending: Color,
    /// Category labels and group headers
    pub category: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            match_highlight: Color::Yellow,
            accent: Color::Cyan,
            positive: Color::Green,
            negative: Color::Red,
            pending: Color::Yellow,
            category: Color::Magenta,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the highlighted result
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected items
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the focused border and key hints
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for query occurrences
    #[must_use]
    pub fn match_style(&self) -> Style {
        Style::default()
            .fg(self.match_highlight)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for an amount, by sign
    #[must_use]
    pub fn amount_style(&self, amount: f64) -> Style {
        if amount < 0.0 {
            Style::default().fg(self.negative)
        } else {
            Style::default().fg(self.positive)
        }
    }

    /// Style for a status badge
    #[must_use]
    pub fn status_style(&self, status: &Status) -> Style {
        match status {
            Status::Active | Status::Completed => Style::default().fg(self.positive),
            Status::Pending => Style::default().fg(self.pending),
            Status::Blocked => Style::default().fg(self.negative),
            Status::Inactive | Status::Custom(_) => self.dimmed_style(),
        }
    }

    /// Style for category labels
    #[must_use]
    pub fn category_style(&self) -> Style {
        Style::default().fg(self.category)
    }

    /// Style for group headers
    #[must_use]
    pub fn group_header_style(&self) -> Style {
        Style::default()
            .fg(self.category)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
