//! Searchable record model
//!
//! A [`Record`] is the unit the search pipeline filters, ranks and groups.
//! Records are immutable once handed to the pipeline: every stage works on
//! shared references (`Arc<Record>`) and never mutates them.
//!
//! Records deserialize from the camelCase JSON shape used by record files:
//!
//! ```json
//! {
//!   "id": "acc-001",
//!   "title": "Premium Savings Account",
//!   "category": "account",
//!   "amount": 125000.5,
//!   "currency": "USD",
//!   "createdAt": "2024-01-15T10:30:00Z",
//!   "priority": 10,
//!   "metadata": { "accountType": "savings" }
//! }
//! ```

pub mod demo;
mod error;

pub use error::RecordError;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::search::SearchError;

/// Caller-provided record identity
///
/// Uniqueness within a working set is the caller's contract; the pipeline
/// never deduplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Integer identity
    Int(i64),
    /// String identity
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<i32> for RecordId {
    fn from(id: i32) -> Self {
        Self::Int(i64::from(id))
    }
}

/// Category tag of a record
///
/// The banking categories form a closed set; any other string is kept
/// verbatim as [`Category::Custom`] so callers can bring their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Account,
    Transaction,
    Customer,
    Card,
    Investment,
    Other,
    /// Caller-defined category
    Custom(String),
}

impl Category {
    /// Lowercase name used for matching, grouping and display
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Account => "account",
            Self::Transaction => "transaction",
            Self::Customer => "customer",
            Self::Card => "card",
            Self::Investment => "investment",
            Self::Other => "other",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        match name.as_str() {
            "account" => Self::Account,
            "transaction" => Self::Transaction,
            "customer" => Self::Customer,
            "card" => Self::Card,
            "investment" => Self::Investment,
            "other" => Self::Other,
            _ => Self::Custom(name),
        }
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Active,
    Inactive,
    Pending,
    Blocked,
    Completed,
    /// Caller-defined status
    Custom(String),
}

impl Status {
    /// Lowercase name used for grouping and display
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
            Self::Blocked => "blocked",
            Self::Completed => "completed",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for Status {
    fn from(name: String) -> Self {
        match name.as_str() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "pending" => Self::Pending,
            "blocked" => Self::Blocked,
            "completed" => Self::Completed,
            _ => Self::Custom(name),
        }
    }
}

impl From<&str> for Status {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single searchable entity (account, transaction, customer, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-text blob searched in addition to the display fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searchable_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// ISO-8601 creation timestamp, kept as given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub priority: i64,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Record {
    /// Create a record with only the required fields set
    #[must_use]
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            description: None,
            searchable_text: None,
            category: None,
            status: None,
            amount: None,
            currency: None,
            created_at: None,
            priority: 0,
            metadata: Map::new(),
            avatar: None,
            icon: None,
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_searchable_text(mut self, text: impl Into<String>) -> Self {
        self.searchable_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<Status>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_amount(mut self, amount: f64, currency: impl Into<String>) -> Self {
        self.amount = Some(amount);
        self.currency = Some(currency.into());
        self
    }

    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Metadata value rendered as text, if present and printable
    ///
    /// Strings are returned as-is, numbers and `true` in their display form,
    /// arrays joined with commas. `null`, `false`, empty strings and objects
    /// count as absent.
    #[must_use]
    pub fn metadata_text(&self, key: &str) -> Option<String> {
        self.metadata.get(key).and_then(value_text)
    }
}

impl AsRef<Self> for Record {
    fn as_ref(&self) -> &Self {
        self
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| value_text(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        _ => None,
    }
}

/// Record field used as a group key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GroupField {
    Id,
    Title,
    Subtitle,
    Category,
    Status,
    Currency,
    /// A key inside the metadata bag, written `metadata.<key>`
    Metadata(String),
}

impl GroupField {
    /// Group key of a record, `None` when the field is missing or empty
    #[must_use]
    pub fn key_of(&self, record: &Record) -> Option<String> {
        let key = match self {
            Self::Id => Some(record.id.to_string()),
            Self::Title => Some(record.title.clone()),
            Self::Subtitle => record.subtitle.clone(),
            Self::Category => record.category.as_ref().map(|c| c.as_str().to_string()),
            Self::Status => record.status.as_ref().map(|s| s.as_str().to_string()),
            Self::Currency => record.currency.clone(),
            Self::Metadata(key) => record.metadata_text(key),
        };
        key.filter(|k| !k.is_empty())
    }
}

impl FromStr for GroupField {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "subtitle" => Ok(Self::Subtitle),
            "category" => Ok(Self::Category),
            "status" => Ok(Self::Status),
            "currency" => Ok(Self::Currency),
            other => match other.strip_prefix("metadata.") {
                Some(key) if !key.is_empty() => Ok(Self::Metadata(key.to_string())),
                _ => Err(SearchError::InvalidGroupField(other.to_string())),
            },
        }
    }
}

impl TryFrom<String> for GroupField {
    type Error = SearchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GroupField> for String {
    fn from(field: GroupField) -> Self {
        field.to_string()
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => f.write_str("id"),
            Self::Title => f.write_str("title"),
            Self::Subtitle => f.write_str("subtitle"),
            Self::Category => f.write_str("category"),
            Self::Status => f.write_str("status"),
            Self::Currency => f.write_str("currency"),
            Self::Metadata(key) => write!(f, "metadata.{key}"),
        }
    }
}

/// Parse a JSON array of records
///
/// # Errors
///
/// Returns `RecordError::Json` if the text is not a valid record array.
pub fn parse_records(json: &str) -> Result<Vec<Record>, RecordError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a JSON array of records from a file
///
/// # Errors
///
/// Returns `RecordError` if the file cannot be read or parsed.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, RecordError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| RecordError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&text)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}
