//! Record loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading record files
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record file could not be read
    #[error("Failed to read record file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record file is not a valid JSON array of records
    #[error("Invalid record data: {0}")]
    Json(#[from] serde_json::Error),
}
