//! Ratatui front end for the search widget
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 AppState                    │
//! │  (mounted SmartSearch + KeyboardHub + log)  │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │   events   │ │  widgets  │ │ Crossterm │
//! │ (intents)  │ │ (ratatui) │ │ (terminal)│
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! The event loop sleeps until input arrives or the widget's next debounce
//! deadline passes, whichever is first.

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::{render, run};
pub use events::{EventResult, handle_key, handle_mouse, nav_key};
pub use state::{AppState, HitMap, IDLE_POLL, SEARCH_LOG_LIMIT};
pub use theme::Theme;
