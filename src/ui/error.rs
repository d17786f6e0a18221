//! UI error types

use thiserror::Error;

/// Errors that can occur while driving the terminal
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing or input failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
