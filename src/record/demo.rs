//! Bundled banking data set used by the demo front end and examples

use super::{Record, RecordError, parse_records};

/// Raw JSON of the bundled banking records
pub const BANKING_JSON: &str = include_str!("banking.json");

/// Accounts, transactions, customers, cards and investments for demos
///
/// # Errors
///
/// Returns `RecordError::Json` if the bundled data fails to parse.
pub fn banking_records() -> Result<Vec<Record>, RecordError> {
    parse_records(BANKING_JSON)
}
