//! Search over an in-memory record set
//!
//! The pieces compose into one pure derivation:
//! 1. [`SearchFilter`] decides whether a record matches the query
//! 2. [`sort_results`] orders matches
//! 3. [`group_by`] buckets the ordered list
//!
//! [`recompute`] runs all three the way the search widget needs them.

pub mod error;
pub mod filter;
pub mod group;
pub mod highlight;
pub mod pipeline;
pub mod sort;

pub use error::SearchError;
pub use filter::{
    AmountRange, DateRange, FilterCriteria, SEARCHED_METADATA_KEYS, SearchFilter,
    default_search_filter,
};
pub use group::{
    ALL_GROUP, GroupedResults, OTHER_GROUP, ResultGroup, group_by, group_by_field,
    group_results_by_category,
};
pub use highlight::{Segment, highlight_segments};
pub use pipeline::{PipelineInput, ResultSet, recompute};
pub use sort::{SortOrder, SortStrategy, locale_compare, sort_results};
