//! Inline card grid of results

use super::record_spans::{ResultRenderer, highlighted, metadata};
use crate::record::Record;
use crate::ui::ratatui_adapter::theme::Theme;
use crate::widget::SearchView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 5;

/// Narrowest a card column gets before the grid drops a column
pub const CARD_MIN_WIDTH: u16 = 32;

const MAX_COLUMNS: u16 = 3;

/// Areas of the cards that fit in `area`, in result order
#[must_use]
pub fn card_areas(area: Rect, count: usize) -> Vec<Rect> {
    if area.width == 0 || area.height < CARD_HEIGHT {
        return Vec::new();
    }
    let columns = (area.width / CARD_MIN_WIDTH).clamp(1, MAX_COLUMNS);
    let width = area.width / columns;
    let rows = area.height / CARD_HEIGHT;
    let capacity = usize::from(columns) * usize::from(rows);

    (0..count.min(capacity))
        .filter_map(|i| {
            let column = u16::try_from(i % usize::from(columns)).ok()?;
            let row = u16::try_from(i / usize::from(columns)).ok()?;
            Some(Rect {
                x: area.x + column * width,
                y: area.y + row * CARD_HEIGHT,
                width,
                height: CARD_HEIGHT,
            })
        })
        .collect()
}

/// Card grid widget rendering a [`SearchView`]
pub struct ResultCards<'a> {
    view: &'a SearchView<'a>,
    theme: &'a Theme,
    renderer: Option<&'a ResultRenderer>,
}

impl<'a> ResultCards<'a> {
    #[must_use]
    pub const fn new(view: &'a SearchView<'a>, theme: &'a Theme) -> Self {
        Self {
            view,
            theme,
            renderer: None,
        }
    }

    /// Fill card bodies with `renderer` instead of the built-in layout
    #[must_use]
    pub const fn renderer(mut self, renderer: Option<&'a ResultRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    fn card_body(&self, record: &Record, title_style: Style) -> Vec<Line<'a>> {
        let query = self.view.effective_query;
        if let Some(renderer) = self.renderer {
            return vec![renderer.render(record, query, self.theme)];
        }

        let mut lines = vec![Line::from(highlighted(
            &record.title,
            query,
            title_style,
            self.theme,
        ))];
        if let Some(subtitle) = &record.subtitle {
            lines.push(Line::from(highlighted(
                subtitle,
                query,
                self.theme.dimmed_style(),
                self.theme,
            )));
        }
        let mut meta = metadata(record, self.theme);
        if let Some(first) = meta.first()
            && first.content == "  "
        {
            meta.remove(0);
        }
        lines.push(Line::from(meta));
        lines
    }

    fn title(&self) -> String {
        let count = self.view.results.len();
        let query = self.view.effective_query;
        if query.trim().is_empty() {
            format!(" {count} results ")
        } else {
            format!(" {count} results for \"{query}\" ")
        }
    }
}

impl Widget for ResultCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        let query = self.view.effective_query;
        if self.view.loading {
            Paragraph::new(Span::styled("Searching...", self.theme.dimmed_style()))
                .render(inner, buf);
            return;
        }
        if self.view.results.is_empty() {
            if !self.view.results.below_min_length() && !query.trim().is_empty() {
                Paragraph::new(Span::styled(
                    format!("No results found for \"{query}\""),
                    self.theme.dimmed_style(),
                ))
                .render(inner, buf);
            }
            return;
        }

        for (index, card) in card_areas(inner, self.view.results.len())
            .into_iter()
            .enumerate()
        {
            let Some(record) = self.view.results.get(index) else {
                continue;
            };
            let selected = self.view.selected_index == Some(index);
            let border = if selected {
                self.theme.accent_style()
            } else {
                self.theme.border_style()
            };
            let title_style = if selected {
                self.theme.selected_style()
            } else {
                self.theme.normal_style()
            };

            Paragraph::new(self.card_body(record, title_style))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border),
                )
                .render(card, buf);
        }
    }
}
