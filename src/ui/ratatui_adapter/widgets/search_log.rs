//! Side panel: widget notifications and the last selection

use super::record_spans::metadata;
use crate::record::Record;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Recent notifications, newest first, above the selected record
pub struct SearchLog<'a> {
    entries: &'a [String],
    selected: Option<&'a Record>,
    theme: &'a Theme,
}

impl<'a> SearchLog<'a> {
    #[must_use]
    pub const fn new(entries: &'a [String], selected: Option<&'a Record>, theme: &'a Theme) -> Self {
        Self {
            entries,
            selected,
            theme,
        }
    }

    fn selected_lines(&self) -> Vec<Line<'a>> {
        let Some(record) = self.selected else {
            return vec![Line::from(Span::styled(
                "Nothing selected yet",
                self.theme.dimmed_style(),
            ))];
        };

        let mut lines = vec![Line::from(Span::styled(
            record.title.clone(),
            self.theme.accent_style(),
        ))];
        if let Some(subtitle) = &record.subtitle {
            lines.push(Line::from(subtitle.clone()));
        }
        if let Some(description) = &record.description {
            lines.push(Line::from(Span::styled(
                description.clone(),
                self.theme.dimmed_style(),
            )));
        }
        lines.push(Line::from(metadata(record, self.theme)));
        lines.push(Line::from(Span::styled(
            format!("id: {}", record.id),
            self.theme.dimmed_style(),
        )));
        lines
    }
}

impl Widget for SearchLog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(8)])
            .split(area);

        let log_lines: Vec<Line> = if self.entries.is_empty() {
            vec![Line::from(Span::styled(
                "No searches yet",
                self.theme.dimmed_style(),
            ))]
        } else {
            self.entries
                .iter()
                .rev()
                .map(|entry| Line::from(entry.as_str()))
                .collect()
        };
        Paragraph::new(log_lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style())
                    .title(" Search log "),
            )
            .render(chunks[0], buf);

        Paragraph::new(self.selected_lines())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style())
                    .title(" Selected "),
            )
            .render(chunks[1], buf);
    }
}
