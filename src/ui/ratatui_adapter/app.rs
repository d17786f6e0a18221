//! Terminal lifecycle, frame rendering and the event loop

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, HitMap};
use super::theme::Theme;
use super::widgets::{
    CARD_HEIGHT, DropdownLine, HelpBar, ResultCards, ResultRenderer, ResultsDropdown, SearchBar,
    SearchLog, card_areas, dropdown_lines, scroll_offset,
};
use crate::ui::error::Result;
use crate::widget::{DisplayMode, SmartSearch};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Instant;

/// Setup terminal for TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Rows of the dropdown as clickable areas inside `inner`
fn dropdown_hits(lines: &[DropdownLine], selected: Option<usize>, inner: Rect) -> Vec<(Rect, usize)> {
    let height = inner.height as usize;
    let start = scroll_offset(lines, selected, height);
    lines
        .iter()
        .skip(start)
        .take(height)
        .zip(inner.rows())
        .filter_map(|(line, row)| match line {
            DropdownLine::Item(index) => Some((row, *index)),
            _ => None,
        })
        .collect()
}

/// Draw one frame and record where the clickable parts landed
pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = frame.area();
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Search + side panel
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_layout[0]);

    let widget_column = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[0]);
    let (input_area, results_area) = (widget_column[0], widget_column[1]);

    let mut hit_map = HitMap {
        input: input_area,
        ..HitMap::default()
    };

    {
        let search = state.search();
        let view = search.view();

        let search_bar = SearchBar::new(view.query, theme)
            .focused(state.input_focused())
            .disabled(view.disabled)
            .loading(view.loading);
        frame.render_widget(search_bar, input_area);

        match view.display_mode {
            DisplayMode::Dropdown if view.shows_results() => {
                let lines = dropdown_lines(&view);
                if !lines.is_empty() {
                    let height = ResultsDropdown::height(&lines).min(results_area.height);
                    let dropdown_area = Rect { height, ..results_area };
                    let inner = dropdown_area.inner(ratatui::layout::Margin::new(1, 1));
                    hit_map.items = dropdown_hits(&lines, view.selected_index, inner);
                    hit_map.results = Some(dropdown_area);

                    let dropdown =
                        ResultsDropdown::new(&view, &lines, &state.dropdown_hints, theme)
                            .renderer(state.renderer.as_ref());
                    frame.render_widget(dropdown, dropdown_area);
                }
            }
            DisplayMode::Dropdown => {}
            DisplayMode::Cards => {
                if results_area.height >= CARD_HEIGHT {
                    let inner = results_area.inner(ratatui::layout::Margin::new(1, 1));
                    hit_map.items = card_areas(inner, view.results.len())
                        .into_iter()
                        .enumerate()
                        .map(|(index, card)| (card, index))
                        .collect();
                }
                hit_map.results = Some(results_area);
                let cards = ResultCards::new(&view, theme).renderer(state.renderer.as_ref());
                frame.render_widget(cards, results_area);
            }
        }

        let log = SearchLog::new(state.log(), state.last_selected().map(Arc::as_ref), theme);
        frame.render_widget(log, columns[1]);
        frame.render_widget(HelpBar::new(&state.hints, theme), main_layout[1]);
    }

    state.set_hit_map(hit_map);
}

/// Event loop: tick the widget, draw, wait for input or the next deadline
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut AppState,
    theme: &Theme,
) -> Result<()> {
    loop {
        state.tick(Instant::now());
        terminal.draw(|frame| render(frame, state, theme))?;

        let timeout = state.poll_timeout(Instant::now());
        if poll_and_handle(state, timeout)? == EventResult::Quit {
            return Ok(());
        }
    }
}

/// Run the interactive search until the user quits
///
/// `renderer` replaces the built-in result rows and card bodies.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to or read.
pub fn run(
    search: SmartSearch,
    theme: &Theme,
    renderer: Option<ResultRenderer>,
) -> Result<AppState> {
    let hints = HelpBar::default_hints(search.options().search_on_submit);
    let mut state = AppState::new(search, hints);
    state.renderer = renderer;

    let mut terminal = setup_terminal()?;
    tracing::debug!("terminal ready");

    let result = run_loop(&mut terminal, &mut state, theme);

    if let Err(e) = cleanup_terminal() {
        tracing::error!(error = %e, "terminal cleanup failed");
    }

    result.map(|()| state)
}
