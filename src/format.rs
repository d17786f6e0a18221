//! Display formatting for amounts and timestamps
//!
//! Formatting never fails: unparseable timestamps render as
//! [`INVALID_DATE`], non-finite amounts render in their textual form.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Sentinel rendered for timestamps that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Currency used when a record carries none
pub const DEFAULT_CURRENCY: &str = "USD";

/// Parse an ISO-8601 timestamp
///
/// Accepts RFC 3339 (`2024-01-15T10:30:00Z`, offsets allowed), naive
/// date-times (`2024-01-15T10:30:00`) and plain dates (`2024-01-15`).
/// Values without an offset are taken as UTC.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Milliseconds since the Unix epoch, 0 for missing or malformed input
#[must_use]
pub fn timestamp_millis(value: Option<&str>) -> i64 {
    value
        .and_then(parse_timestamp)
        .map_or(0, |dt| dt.timestamp_millis())
}

/// Format a timestamp as `M/D/YYYY` (UTC)
///
/// ```
/// use smartsearch::format::format_date;
///
/// assert_eq!(format_date("2024-01-15T10:30:00Z"), "1/15/2024");
/// assert_eq!(format_date("yesterday"), "Invalid Date");
/// ```
#[must_use]
pub fn format_date(value: &str) -> String {
    parse_timestamp(value).map_or_else(
        || INVALID_DATE.to_string(),
        |dt| format!("{}/{}/{}", dt.month(), dt.day(), dt.year()),
    )
}

fn currency_prefix(code: &str) -> String {
    match code {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        "INR" => "₹".to_string(),
        "KRW" => "₩".to_string(),
        "CNY" => "CN¥".to_string(),
        "CAD" => "CA$".to_string(),
        "AUD" => "A$".to_string(),
        "MXN" => "MX$".to_string(),
        "BRL" => "R$".to_string(),
        other => format!("{other} "),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount in en-US currency style with two fraction digits
///
/// `currency` defaults to USD. Known codes get their symbol, unknown codes
/// are printed in front of the number.
///
/// ```
/// use smartsearch::format::format_currency;
///
/// assert_eq!(format_currency(1234.56, Some("USD")), "$1,234.56");
/// assert_eq!(format_currency(-500.25, None), "-$500.25");
/// ```
#[must_use]
pub fn format_currency(amount: f64, currency: Option<&str>) -> String {
    let code = currency
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY)
        .to_uppercase();
    let prefix = currency_prefix(&code);

    if amount.is_nan() {
        return format!("{prefix}NaN");
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}{prefix}∞");
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // -0.001 rounds to zero and prints without a sign
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };

    format!("{sign}{prefix}{}.{fraction}", group_thousands(whole))
}
