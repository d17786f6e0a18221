//! Dropdown list of results
//!
//! The dropdown is laid out as a sequence of [`DropdownLine`]s, one terminal
//! row each. The same layout backs rendering and mouse hit-testing, so a
//! click lands on the row that was drawn.

use super::help_bar::{KeyHint, hint_spans};
use super::record_spans::{ResultRenderer, highlighted, metadata};
use crate::ui::ratatui_adapter::theme::Theme;
use crate::widget::SearchView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// One row of the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownLine {
    /// "N results for "q""
    Header,
    Loading,
    GroupHeader { key: String, count: usize },
    /// Result at this index of the flat result list
    Item(usize),
    /// Nothing matched a searchable query
    Empty,
    Footer,
}

/// Layout the dropdown rows for `view`
#[must_use]
pub fn dropdown_lines(view: &SearchView<'_>) -> Vec<DropdownLine> {
    if view.loading {
        return vec![DropdownLine::Loading];
    }
    let results = view.results;
    if results.is_empty() {
        if results.below_min_length() || view.effective_query.trim().is_empty() {
            return Vec::new();
        }
        return vec![DropdownLine::Empty];
    }

    let mut lines = vec![DropdownLine::Header];
    let grouped = !results.groups().is_ungrouped();
    let mut index = 0;
    for group in results.groups() {
        if grouped {
            lines.push(DropdownLine::GroupHeader {
                key: group.key.clone(),
                count: group.items.len(),
            });
        }
        for _ in &group.items {
            lines.push(DropdownLine::Item(index));
            index += 1;
        }
    }
    lines.push(DropdownLine::Footer);
    lines
}

/// First row to draw so the highlighted item stays within `height` rows
#[must_use]
pub fn scroll_offset(lines: &[DropdownLine], selected: Option<usize>, height: usize) -> usize {
    if height == 0 || lines.len() <= height {
        return 0;
    }
    let Some(selected) = selected else {
        return 0;
    };
    let row = lines
        .iter()
        .position(|line| *line == DropdownLine::Item(selected))
        .unwrap_or(0);
    (row + 1).saturating_sub(height).min(lines.len() - height)
}

/// Dropdown widget rendering a [`SearchView`]
pub struct ResultsDropdown<'a> {
    view: &'a SearchView<'a>,
    lines: &'a [DropdownLine],
    hints: &'a [KeyHint],
    theme: &'a Theme,
    renderer: Option<&'a ResultRenderer>,
}

impl<'a> ResultsDropdown<'a> {
    /// Create a dropdown over precomputed `lines`
    #[must_use]
    pub const fn new(
        view: &'a SearchView<'a>,
        lines: &'a [DropdownLine],
        hints: &'a [KeyHint],
        theme: &'a Theme,
    ) -> Self {
        Self {
            view,
            lines,
            hints,
            theme,
            renderer: None,
        }
    }

    /// Draw items with `renderer` instead of the built-in row
    #[must_use]
    pub const fn renderer(mut self, renderer: Option<&'a ResultRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Rows needed to draw every line, borders included
    #[must_use]
    pub fn height(lines: &[DropdownLine]) -> u16 {
        u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2)
    }

    fn render_line(&self, line: &DropdownLine) -> Line<'a> {
        let query = self.view.effective_query;
        match line {
            DropdownLine::Header => {
                let count = self.view.results.len();
                let noun = if count == 1 { "result" } else { "results" };
                let text = if query.trim().is_empty() {
                    format!("{count} {noun}")
                } else {
                    format!("{count} {noun} for \"{query}\"")
                };
                Line::from(Span::styled(text, self.theme.dimmed_style()))
            }
            DropdownLine::Loading => {
                Line::from(Span::styled("Searching...", self.theme.dimmed_style()))
            }
            DropdownLine::GroupHeader { key, count } => Line::from(Span::styled(
                format!("{} ({count})", key.to_uppercase()),
                self.theme.group_header_style(),
            )),
            DropdownLine::Item(index) => self.render_item(*index),
            DropdownLine::Empty => Line::from(Span::styled(
                format!("No results found for \"{query}\""),
                self.theme.dimmed_style(),
            )),
            DropdownLine::Footer => Line::from(hint_spans(self.hints, self.theme)),
        }
    }

    fn render_item(&self, index: usize) -> Line<'a> {
        let Some(record) = self.view.results.get(index) else {
            return Line::default();
        };
        let query = self.view.effective_query;
        let is_cursor = self.view.selected_index == Some(index);
        let base = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let mut spans = vec![Span::styled(if is_cursor { "> " } else { "  " }, base)];
        if let Some(renderer) = self.renderer {
            spans.extend(renderer.render(record, query, self.theme).spans);
        } else {
            spans.extend(highlighted(&record.title, query, base, self.theme));
            if let Some(subtitle) = &record.subtitle {
                spans.push(Span::raw("  "));
                spans.extend(highlighted(
                    subtitle,
                    query,
                    self.theme.dimmed_style(),
                    self.theme,
                ));
            }
            spans.extend(metadata(record, self.theme));
        }

        let line = Line::from(spans);
        if is_cursor { line.style(base) } else { line }
    }
}

impl Widget for ResultsDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());

        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        if height == 0 {
            return;
        }

        let start = scroll_offset(self.lines, self.view.selected_index, height);
        let rows: Vec<Line> = self
            .lines
            .iter()
            .skip(start)
            .take(height)
            .map(|line| self.render_line(line))
            .collect();

        Paragraph::new(rows).render(inner, buf);
    }
}
