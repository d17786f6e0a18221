//! Record matching and criteria filtering
//!
//! This module provides the query predicate used by the search pipeline and
//! the structured [`FilterCriteria`] used by one-shot searches.
//!
//! # Matching
//!
//! [`default_search_filter`] is a case-insensitive substring test over the
//! textual fields of a record. Callers can replace it wholesale by wrapping
//! their own predicate in a [`SearchFilter`]:
//!
//! ```
//! use smartsearch::record::Record;
//! use smartsearch::search::SearchFilter;
//!
//! let by_title_prefix = SearchFilter::new(|record: &Record, query: &str| {
//!     record.title.to_lowercase().starts_with(&query.to_lowercase())
//! });
//!
//! let record = Record::new(1, "Savings");
//! assert!(by_title_prefix.matches(&record, "sav"));
//! assert!(!by_title_prefix.matches(&record, "ings"));
//! ```

use crate::format::parse_timestamp;
use crate::record::{Category, Record, Status};
use crate::search::error::SearchError;
use crate::search::sort::{SortOrder, SortStrategy, sort_results};
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Metadata keys searched by the default filter
pub const SEARCHED_METADATA_KEYS: [&str; 2] = ["accountType", "reference"];

/// Default query predicate
///
/// An empty or whitespace-only query matches every record. Otherwise the
/// lower-cased query is looked for as a substring of the title, subtitle,
/// description, free-text blob, category and the `accountType`/`reference`
/// metadata entries; any hit is a match. Absent fields are skipped.
#[must_use]
pub fn default_search_filter(record: &Record, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&needle);

    let text_fields = [
        Some(record.title.as_str()),
        record.subtitle.as_deref(),
        record.description.as_deref(),
        record.searchable_text.as_deref(),
    ];
    if text_fields.into_iter().flatten().any(contains) {
        return true;
    }

    if SEARCHED_METADATA_KEYS
        .iter()
        .filter_map(|key| record.metadata_text(key))
        .any(|value| contains(&value))
    {
        return true;
    }

    record.category.as_ref().is_some_and(|c| contains(c.as_str()))
}

type FilterFn = dyn Fn(&Record, &str) -> bool + Send + Sync;

/// Injectable query predicate
///
/// Cloning is cheap and clones compare equal under [`SearchFilter::same_as`],
/// which is how the search widget notices that its predicate was swapped.
#[derive(Clone)]
pub struct SearchFilter {
    predicate: Arc<FilterFn>,
    custom: bool,
}

impl SearchFilter {
    /// Wrap a custom predicate
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Record, &str) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            custom: true,
        }
    }

    /// Does `record` match `query`?
    #[must_use]
    pub fn matches(&self, record: &Record, query: &str) -> bool {
        (self.predicate)(record, query)
    }

    /// Whether this wraps a caller-supplied predicate
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.custom
    }

    /// Identity comparison: true only for clones of the same filter
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.predicate, &other.predicate)
    }
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            predicate: Arc::new(default_search_filter),
            custom: false,
        }
    }
}

impl fmt::Debug for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchFilter")
            .field("custom", &self.custom)
            .finish_non_exhaustive()
    }
}

/// Inclusive range of creation timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Create a range, rejecting `start > end`
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidRange` if `start` is after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, SearchError> {
        if start > end {
            return Err(SearchError::InvalidRange(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Inclusive range of amounts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

impl AmountRange {
    /// Create a range, rejecting `min > max`
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidRange` if `min` exceeds `max` or either
    /// bound is NaN.
    pub fn new(min: f64, max: f64) -> Result<Self, SearchError> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(SearchError::InvalidRange(format!("min {min} > max {max}")));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn contains(&self, amount: f64) -> bool {
        self.min <= amount && amount <= self.max
    }
}

/// Structured constraints applied on top of the query predicate
///
/// Empty category/status lists and absent ranges impose no constraint.
/// Records lacking a timestamp or amount fail the corresponding range.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub categories: Vec<Category>,
    pub statuses: Vec<Status>,
    pub date_range: Option<DateRange>,
    pub amount_range: Option<AmountRange>,
    pub sort_by: SortStrategy,
    pub sort_order: SortOrder,
}

impl FilterCriteria {
    /// Does `record` satisfy every constraint?
    #[must_use]
    pub fn accepts(&self, record: &Record) -> bool {
        if !self.categories.is_empty()
            && !record
                .category
                .as_ref()
                .is_some_and(|c| self.categories.contains(c))
        {
            return false;
        }

        if !self.statuses.is_empty()
            && !record
                .status
                .as_ref()
                .is_some_and(|s| self.statuses.contains(s))
        {
            return false;
        }

        if let Some(range) = &self.date_range {
            let created = record.created_at.as_deref().and_then(parse_timestamp);
            if !created.is_some_and(|dt| range.contains(dt)) {
                return false;
            }
        }

        if let Some(range) = &self.amount_range
            && !record.amount.is_some_and(|a| range.contains(a))
        {
            return false;
        }

        true
    }

    /// Keep accepted records and order them by `sort_by`/`sort_order`
    ///
    /// The input slice is left untouched.
    #[must_use]
    pub fn apply<R>(&self, records: &[R]) -> Vec<R>
    where
        R: AsRef<Record> + Clone,
    {
        let kept: Vec<R> = records
            .iter()
            .filter(|r| self.accepts(r.as_ref()))
            .cloned()
            .collect();
        sort_results(&kept, self.sort_by, self.sort_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_records;
    use chrono::TimeZone;

    #[test]
    fn test_empty_query_matches_everything() {
        let record = Record::new(1, "Anything");
        assert!(default_search_filter(&record, ""));
        assert!(default_search_filter(&record, "   "));
        assert!(default_search_filter(&record, "\t\n"));
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let record = Record::new(1, "Premium Savings Account");
        assert!(default_search_filter(&record, "SAVINGS"));
        assert!(default_search_filter(&record, "prem"));
        assert!(!default_search_filter(&record, "checking"));
    }

    #[test]
    fn test_matches_secondary_fields() {
        let record = Record::new(1, "Title")
            .with_subtitle("Account Number: ****1234")
            .with_description("High-yield savings")
            .with_searchable_text("vip gold");

        assert!(default_search_filter(&record, "1234"));
        assert!(default_search_filter(&record, "high-yield"));
        assert!(default_search_filter(&record, "gold"));
    }

    #[test]
    fn test_matches_category_and_metadata_keys() {
        let record = Record::new(1, "Wire Transfer")
            .with_category(Category::Transaction)
            .with_metadata("reference", "WT2024001")
            .with_metadata("accountType", "checking")
            .with_metadata("branch", "Fifth Avenue");

        assert!(default_search_filter(&record, "transaction"));
        assert!(default_search_filter(&record, "wt2024"));
        assert!(default_search_filter(&record, "checking"));
        // Only accountType and reference are searched
        assert!(!default_search_filter(&record, "fifth"));
    }

    #[test]
    fn test_query_is_not_trimmed_for_matching() {
        let record = Record::new(1, "Savings");
        assert!(!default_search_filter(&record, " savings "));
    }

    #[test]
    fn test_missing_fields_are_skipped() {
        let record = Record::new(1, "Only title");
        assert!(!default_search_filter(&record, "subtitle"));
    }

    #[test]
    fn test_custom_filter_replaces_default() {
        let filter = SearchFilter::new(|r: &Record, q: &str| r.id.to_string() == q);
        let record = Record::new("acc-1", "Savings");

        assert!(filter.is_custom());
        assert!(filter.matches(&record, "acc-1"));
        assert!(!filter.matches(&record, "savings"));
    }

    #[test]
    fn test_filter_identity() {
        let a = SearchFilter::default();
        let b = a.clone();
        let c = SearchFilter::default();

        assert!(a.same_as(&b));
        assert!(!a.same_as(&c));
        assert!(!a.is_custom());
    }

    #[test]
    fn test_criteria_default_accepts_everything() {
        let records = sample_records();
        let criteria = FilterCriteria::default();
        assert!(records.iter().all(|r| criteria.accepts(r)));
    }

    #[test]
    fn test_criteria_categories_and_statuses() {
        let criteria = FilterCriteria {
            categories: vec![Category::Card],
            statuses: vec![Status::Active],
            ..FilterCriteria::default()
        };

        let kept = criteria.apply(&sample_records());
        assert!(!kept.is_empty());
        assert!(kept.iter().all(|r| r.category == Some(Category::Card)));
        assert!(kept.iter().all(|r| r.status == Some(Status::Active)));
    }

    #[test]
    fn test_criteria_amount_range_rejects_missing_amounts() {
        let criteria = FilterCriteria {
            amount_range: Some(AmountRange::new(-1000.0, 1000.0).unwrap()),
            ..FilterCriteria::default()
        };

        assert!(criteria.accepts(&Record::new(1, "a").with_amount(-500.0, "USD")));
        assert!(!criteria.accepts(&Record::new(2, "b").with_amount(5000.0, "USD")));
        assert!(!criteria.accepts(&Record::new(3, "c")));
    }

    #[test]
    fn test_criteria_date_range() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let criteria = FilterCriteria {
            date_range: Some(DateRange::new(start, end).unwrap()),
            ..FilterCriteria::default()
        };

        assert!(criteria.accepts(&Record::new(1, "a").with_created_at("2024-06-01T00:00:00Z")));
        assert!(!criteria.accepts(&Record::new(2, "b").with_created_at("2023-06-01T00:00:00Z")));
        assert!(!criteria.accepts(&Record::new(3, "c").with_created_at("bogus")));
        assert!(!criteria.accepts(&Record::new(4, "d")));
    }

    #[test]
    fn test_inverted_ranges_are_rejected() {
        assert!(AmountRange::new(10.0, 5.0).is_err());
        assert!(AmountRange::new(f64::NAN, 5.0).is_err());

        let start = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(
            DateRange::new(start, end),
            Err(SearchError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_criteria_apply_sorts_without_touching_input() {
        let records = sample_records();
        let before: Vec<String> = records.iter().map(|r| r.title.clone()).collect();

        let criteria = FilterCriteria {
            sort_by: SortStrategy::Amount,
            sort_order: SortOrder::Desc,
            amount_range: Some(AmountRange::new(f64::MIN, f64::MAX).unwrap()),
            ..FilterCriteria::default()
        };
        let kept = criteria.apply(&records);

        let after: Vec<String> = records.iter().map(|r| r.title.clone()).collect();
        assert_eq!(before, after);
        let amounts: Vec<f64> = kept.iter().filter_map(|r| r.amount).collect();
        assert!(amounts.windows(2).all(|w| w[0] >= w[1]));
    }
}
