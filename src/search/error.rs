//! Search-specific error types
//!
//! The search pipeline itself never fails: malformed dates sort as epoch 0
//! and missing fields are skipped. These errors cover the edges where
//! caller-supplied text is turned into pipeline settings (group fields,
//! display modes, sort strategies, filter ranges) and where a search widget
//! is assembled from a builder.

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// Unknown record field name for grouping
    #[error("Invalid group field: {0}")]
    InvalidGroupField(String),

    /// Unknown results display mode
    #[error("Invalid display mode '{0}' (expected 'dropdown' or 'cards')")]
    InvalidDisplayMode(String),

    /// Unknown sort strategy
    #[error("Invalid sort strategy '{0}' (expected relevance, date, amount or alphabetical)")]
    InvalidSortStrategy(String),

    /// Unknown sort direction
    #[error("Invalid sort order '{0}' (expected 'asc' or 'desc')")]
    InvalidSortOrder(String),

    /// A range whose lower bound exceeds its upper bound
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Failed to assemble a search widget
    #[error("Failed to build search widget: {0}")]
    BuildError(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
