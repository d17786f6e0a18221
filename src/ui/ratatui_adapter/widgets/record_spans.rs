//! Span builders shared by the result widgets

use crate::format::{format_currency, format_date};
use crate::record::Record;
use crate::search::highlight_segments;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use std::fmt;
use std::sync::Arc;

type RenderFn = dyn Fn(&Record, &str, &Theme) -> Line<'static> + Send + Sync;

/// Replacement body for a result row or card
///
/// Called with the record, the effective query and the theme. The
/// selection marker and card borders are still drawn around the line.
#[derive(Clone)]
pub struct ResultRenderer {
    render: Arc<RenderFn>,
}

impl ResultRenderer {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&Record, &str, &Theme) -> Line<'static> + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
        }
    }

    /// Id followed by the highlighted title, on one line
    #[must_use]
    pub fn compact() -> Self {
        Self::new(|record, query, theme| {
            let mut spans = vec![Span::styled(
                format!("{:<10} ", record.id.to_string()),
                theme.dimmed_style(),
            )];
            spans.extend(highlighted(&record.title, query, Style::default(), theme));
            Line::from(spans)
        })
    }

    #[must_use]
    pub fn render(&self, record: &Record, query: &str, theme: &Theme) -> Line<'static> {
        (self.render)(record, query, theme)
    }
}

impl fmt::Debug for ResultRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultRenderer").finish_non_exhaustive()
    }
}

/// `text` split into spans, query occurrences in the match style
#[must_use]
pub fn highlighted<'a>(text: &str, query: &str, base: Style, theme: &Theme) -> Vec<Span<'a>> {
    highlight_segments(text, query)
        .into_iter()
        .map(|segment| {
            if segment.matched {
                Span::styled(segment.text, base.patch(theme.match_style()))
            } else {
                Span::styled(segment.text, base)
            }
        })
        .collect()
}

/// Amount, status, category and date of a record, each preceded by a gap
#[must_use]
pub fn metadata<'a>(record: &Record, theme: &Theme) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    if let Some(amount) = record.amount {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format_currency(amount, record.currency.as_deref()),
            theme.amount_style(amount),
        ));
    }
    if let Some(status) = &record.status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{}]", status.as_str()),
            theme.status_style(status),
        ));
    }
    if let Some(category) = &record.category {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            category.as_str().to_string(),
            theme.category_style(),
        ));
    }
    if let Some(created_at) = &record.created_at {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format_date(created_at), theme.dimmed_style()));
    }
    spans
}
