//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and the loaded configuration.

pub mod browse;
pub mod config;
pub mod query;

pub use browse::execute as browse;
pub use config::execute as config;
pub use query::execute as query;

use crate::SmartSearchError;
use crate::record::{self, Record};
use std::path::Path;

/// Load the records to search
///
/// `--data` wins over the configured `data_file`; with neither, the bundled
/// banking demo set is used.
///
/// # Errors
///
/// Returns `SmartSearchError::Record` if the file cannot be read or parsed.
pub fn load_records(
    data: Option<&Path>,
    config: &crate::config::SmartSearchConfig,
) -> Result<Vec<Record>, SmartSearchError> {
    let records = match data.or(config.data_file.as_deref()) {
        Some(path) => record::load_records(path)?,
        None => record::demo::banking_records()?,
    };
    Ok(records)
}
