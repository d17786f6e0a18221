//! Result recomputation
//!
//! [`recompute`] is the single derivation from the current inputs to the
//! visible result set: match, rank by relevance, truncate, then group. It is
//! pure; the widget calls it again whenever any input changes and replaces
//! its result set wholesale.

use crate::record::{GroupField, Record};
use crate::search::filter::SearchFilter;
use crate::search::group::{GroupedResults, group_by_field};
use crate::search::sort::{SortOrder, SortStrategy, sort_results};
use std::sync::Arc;

/// Inputs of one recomputation
#[derive(Debug, Clone, Copy)]
pub struct PipelineInput<'a> {
    /// Effective query, untrimmed
    pub query: &'a str,
    pub records: &'a [Arc<Record>],
    pub min_search_length: usize,
    pub filter: &'a SearchFilter,
    pub max_results: usize,
    pub group_by: Option<&'a GroupField>,
}

/// Visible results derived from a [`PipelineInput`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    query: String,
    groups: GroupedResults<Arc<Record>>,
    flat: Vec<Arc<Record>>,
    matched: usize,
    below_min_length: bool,
}

impl ResultSet {
    /// The query these results were computed for
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Visible records by group; a single `all` bucket when ungrouped
    #[must_use]
    pub const fn groups(&self) -> &GroupedResults<Arc<Record>> {
        &self.groups
    }

    /// Visible records in group order, the list navigation indexes into
    #[must_use]
    pub fn records(&self) -> &[Arc<Record>] {
        &self.flat
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<Record>> {
        self.flat.get(index)
    }

    /// Number of visible records
    #[must_use]
    pub fn len(&self) -> usize {
        self.flat.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    /// Matches before truncation
    #[must_use]
    pub const fn matched(&self) -> usize {
        self.matched
    }

    /// Whether matching was skipped because the query was too short
    #[must_use]
    pub const fn below_min_length(&self) -> bool {
        self.below_min_length
    }
}

/// Derive the visible result set
///
/// A trimmed query shorter than `min_search_length` (in characters) yields
/// an empty set without consulting the filter. Otherwise every record is
/// matched against the query, matches are ranked relevance/desc, the first
/// `max_results` are kept and then grouped. Truncation happens before
/// grouping so the visible total never exceeds `max_results`.
#[must_use]
pub fn recompute(input: &PipelineInput<'_>) -> ResultSet {
    if input.query.trim().chars().count() < input.min_search_length {
        return ResultSet {
            query: input.query.to_string(),
            below_min_length: true,
            ..ResultSet::default()
        };
    }

    let matches: Vec<Arc<Record>> = input
        .records
        .iter()
        .filter(|record| input.filter.matches(record, input.query))
        .cloned()
        .collect();
    let matched = matches.len();

    let mut ranked = sort_results(&matches, SortStrategy::Relevance, SortOrder::Desc);
    ranked.truncate(input.max_results);

    let groups = match input.group_by {
        Some(field) => group_by_field(&ranked, field),
        None => GroupedResults::single(ranked),
    };
    let flat = groups.flatten();

    tracing::debug!(
        query = input.query,
        matched,
        visible = flat.len(),
        groups = groups.len(),
        "recomputed results"
    );

    ResultSet {
        query: input.query.to_string(),
        groups,
        flat,
        matched,
        below_min_length: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Category;
    use crate::search::group::ALL_GROUP;
    use crate::testing::sample_records;

    fn arc_records() -> Vec<Arc<Record>> {
        sample_records().into_iter().map(Arc::new).collect()
    }

    fn input<'a>(
        query: &'a str,
        records: &'a [Arc<Record>],
        filter: &'a SearchFilter,
    ) -> PipelineInput<'a> {
        PipelineInput {
            query,
            records,
            min_search_length: 1,
            filter,
            max_results: 10,
            group_by: None,
        }
    }

    #[test]
    fn test_below_min_length_is_empty() {
        let records = arc_records();
        let filter = SearchFilter::default();
        let mut inp = input("J", &records, &filter);
        inp.min_search_length = 2;

        let result = recompute(&inp);
        assert!(result.is_empty());
        assert!(result.below_min_length());
        assert!(result.groups().is_empty());
    }

    #[test]
    fn test_whitespace_is_trimmed_for_length_check() {
        let records = arc_records();
        let filter = SearchFilter::default();
        let mut inp = input("  a  ", &records, &filter);
        inp.min_search_length = 2;

        assert!(recompute(&inp).below_min_length());
    }

    #[test]
    fn test_zero_min_length_shows_everything_for_empty_query() {
        let records = arc_records();
        let filter = SearchFilter::default();
        let mut inp = input("", &records, &filter);
        inp.min_search_length = 0;
        inp.max_results = usize::MAX;

        let result = recompute(&inp);
        assert_eq!(result.len(), records.len());
    }

    #[test]
    fn test_results_are_ranked_by_priority() {
        let records: Vec<Arc<Record>> = vec![
            Arc::new(Record::new(1, "Savings low").with_priority(1)),
            Arc::new(Record::new(2, "Savings high").with_priority(5)),
            Arc::new(Record::new(3, "Checking").with_priority(9)),
        ];
        let filter = SearchFilter::default();

        let result = recompute(&input("savings", &records, &filter));
        let titles: Vec<&str> = result.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Savings high", "Savings low"]);
        assert_eq!(result.matched(), 2);
    }

    #[test]
    fn test_max_results_truncates_before_grouping() {
        let records: Vec<Arc<Record>> = (0..6)
            .map(|i| {
                let category = if i % 2 == 0 {
                    Category::Account
                } else {
                    Category::Card
                };
                Arc::new(
                    Record::new(i, format!("Item {i}"))
                        .with_category(category)
                        .with_priority(10 - i),
                )
            })
            .collect();
        let filter = SearchFilter::default();
        let mut inp = input("item", &records, &filter);
        inp.max_results = 3;
        let field = GroupField::Category;
        inp.group_by = Some(&field);

        let result = recompute(&inp);
        assert_eq!(result.len(), 3);
        assert_eq!(result.groups().total(), 3);
        assert_eq!(result.matched(), 6);
        // Ranked 0,1,2 then grouped: account [0, 2], card [1]
        let ids: Vec<String> = result.records().iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, ["0", "2", "1"]);
    }

    #[test]
    fn test_max_results_zero_is_always_empty() {
        let records = arc_records();
        let filter = SearchFilter::default();
        let mut inp = input("a", &records, &filter);
        inp.max_results = 0;

        let result = recompute(&inp);
        assert!(result.is_empty());
        assert!(!result.below_min_length());
    }

    #[test]
    fn test_ungrouped_results_use_all_bucket() {
        let records = arc_records();
        let filter = SearchFilter::default();

        let result = recompute(&input("a", &records, &filter));
        assert!(!result.is_empty());
        assert!(result.groups().is_ungrouped());
        assert_eq!(result.groups().keys().next(), Some(ALL_GROUP));
    }

    #[test]
    fn test_custom_filter_is_used() {
        let records = arc_records();
        let filter = SearchFilter::new(|_: &Record, _: &str| false);

        let result = recompute(&input("a", &records, &filter));
        assert!(result.is_empty());
        assert_eq!(result.matched(), 0);
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let records = arc_records();
        let filter = SearchFilter::default();
        let inp = input("a", &records, &filter);

        assert_eq!(recompute(&inp), recompute(&inp));
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let records: Vec<Arc<Record>> = vec![
            Arc::new(Record::new(1, "Same")),
            Arc::new(Record::new(1, "Same")),
        ];
        let filter = SearchFilter::default();

        assert_eq!(recompute(&input("same", &records, &filter)).len(), 2);
    }
}
