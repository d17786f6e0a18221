//! Result ordering
//!
//! [`sort_results`] orders records by one of four strategies. Each strategy
//! defines an ascending comparator; [`SortOrder::Desc`] (the default) negates
//! the whole comparator result once, after the fact. Tie-breaks are part of
//! the comparator, so a descending sort flips them too.
//!
//! | Strategy | Ascending comparator |
//! |---|---|
//! | `relevance` | priority (absent = 0), then title |
//! | `date` | creation timestamp (absent or malformed = epoch 0) |
//! | `amount` | amount (absent = 0) |
//! | `alphabetical` | title |
//!
//! Titles compare with [`locale_compare`]. Sorting is stable and never
//! touches the input slice.

use crate::format::timestamp_millis;
use crate::record::Record;
use crate::search::error::SearchError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    #[default]
    Relevance,
    Date,
    Amount,
    Alphabetical,
}

impl SortStrategy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Alphabetical => "alphabetical",
        }
    }

    /// Ascending comparison of two records under this strategy
    #[must_use]
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            Self::Relevance => a
                .priority
                .cmp(&b.priority)
                .then_with(|| locale_compare(&a.title, &b.title)),
            Self::Date => timestamp_millis(a.created_at.as_deref())
                .cmp(&timestamp_millis(b.created_at.as_deref())),
            Self::Amount => sort_amount(a).total_cmp(&sort_amount(b)),
            Self::Alphabetical => locale_compare(&a.title, &b.title),
        }
    }
}

/// Amount used for ordering; absent and NaN amounts rank as zero
fn sort_amount(record: &Record) -> f64 {
    match record.amount {
        Some(amount) if amount.is_nan() || amount == 0.0 => 0.0,
        Some(amount) => amount,
        None => 0.0,
    }
}

impl FromStr for SortStrategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "alphabetical" | "alpha" => Ok(Self::Alphabetical),
            _ => Err(SearchError::InvalidSortStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Apply the direction to an ascending comparison result
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(SearchError::InvalidSortOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Locale-style string comparison
///
/// Case-insensitive first, so `apple` sorts before `Banana`; strings equal
/// ignoring case put the lowercase form first, then fall back to code point
/// order so the result is total.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(x, y)| x != y)
            .map_or(Ordering::Equal, |(x, y)| {
                match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => x.cmp(&y),
                }
            })
            .then_with(|| a.len().cmp(&b.len()))
    })
}

/// Return a newly ordered copy of `items`
///
/// ```
/// use smartsearch::record::Record;
/// use smartsearch::search::{SortOrder, SortStrategy, sort_results};
///
/// let records = vec![
///     Record::new(1, "Banana").with_priority(1),
///     Record::new(2, "Apple").with_priority(1),
/// ];
/// let sorted = sort_results(&records, SortStrategy::Relevance, SortOrder::Asc);
/// assert_eq!(sorted[0].title, "Apple");
/// assert_eq!(records[0].title, "Banana");
/// ```
#[must_use]
pub fn sort_results<R>(items: &[R], strategy: SortStrategy, order: SortOrder) -> Vec<R>
where
    R: AsRef<Record> + Clone,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| order.apply(strategy.compare(a.as_ref(), b.as_ref())));
    sorted
}
