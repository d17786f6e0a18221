//! Terminal front end for the search widget
//!
//! The widget in [`crate::widget`] draws nothing itself. This module is its
//! rendering collaborator: it reads [`SearchView`](crate::widget::SearchView)
//! snapshots, draws them with ratatui, and turns crossterm input into widget
//! intents and navigation keys.
//!
//! ```text
//! ┌──────────────┐  intents   ┌──────────────┐
//! │  crossterm   │ ─────────▶ │ SmartSearch  │
//! │   events     │            │  (widget)    │
//! └──────┬───────┘            └──────┬───────┘
//!        │ NavKey                    │ SearchView
//!        ▼                           ▼
//! ┌──────────────┐            ┌──────────────┐
//! │ KeyboardHub  │            │   ratatui    │
//! └──────────────┘            │   widgets    │
//!                             └──────────────┘
//! ```

mod error;

pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use ratatui_adapter::{AppState, Theme, run};
