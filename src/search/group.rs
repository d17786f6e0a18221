//! Grouping of ordered results into named buckets
//!
//! Groups appear in the order their first member is met and keep the input
//! order inside each bucket. Records without a key land in [`OTHER_GROUP`].
//! The ungrouped presentation is a single bucket named [`ALL_GROUP`], which
//! renderers print without a header; real group keys should not use it.

use crate::record::{GroupField, Record};

/// Fallback bucket for records with no group key
pub const OTHER_GROUP: &str = "other";

/// Key of the single synthetic bucket used when grouping is off
pub const ALL_GROUP: &str = "all";

/// One named bucket of records
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGroup<R> {
    pub key: String,
    pub items: Vec<R>,
}

/// Insertion-ordered mapping from group key to records
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedResults<R> {
    groups: Vec<ResultGroup<R>>,
}

impl<R> Default for GroupedResults<R> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<R> GroupedResults<R> {
    /// A single [`ALL_GROUP`] bucket, or no buckets when `items` is empty
    #[must_use]
    pub fn single(items: Vec<R>) -> Self {
        if items.is_empty() {
            return Self::default();
        }
        Self {
            groups: vec![ResultGroup {
                key: ALL_GROUP.to_string(),
                items,
            }],
        }
    }

    /// Records of one bucket
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[R]> {
        self.groups
            .iter()
            .find(|g| g.key == key)
            .map(|g| g.items.as_slice())
    }

    /// Group keys in order of first appearance
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResultGroup<R>> {
        self.groups.iter()
    }

    /// Number of buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all buckets
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// Whether this is the ungrouped single-bucket shape
    #[must_use]
    pub fn is_ungrouped(&self) -> bool {
        self.groups.len() == 1 && self.groups[0].key == ALL_GROUP
    }
}

impl<R: Clone> GroupedResults<R> {
    /// Records in bucket order, the sequence keyboard navigation indexes
    #[must_use]
    pub fn flatten(&self) -> Vec<R> {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter().cloned())
            .collect()
    }
}

impl<'a, R> IntoIterator for &'a GroupedResults<R> {
    type Item = &'a ResultGroup<R>;
    type IntoIter = std::slice::Iter<'a, ResultGroup<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition `items` by `key_of`, preserving order
///
/// A `None` or empty key goes to [`OTHER_GROUP`]. Empty input yields no
/// buckets.
pub fn group_by<R, F>(items: &[R], mut key_of: F) -> GroupedResults<R>
where
    R: AsRef<Record> + Clone,
    F: FnMut(&Record) -> Option<String>,
{
    let mut groups: Vec<ResultGroup<R>> = Vec::new();
    for item in items {
        let key = key_of(item.as_ref())
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| OTHER_GROUP.to_string());
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(ResultGroup {
                key,
                items: vec![item.clone()],
            }),
        }
    }
    GroupedResults { groups }
}

/// Partition by a record field
pub fn group_by_field<R>(items: &[R], field: &GroupField) -> GroupedResults<R>
where
    R: AsRef<Record> + Clone,
{
    group_by(items, |record| field.key_of(record))
}

/// Partition by category
pub fn group_results_by_category<R>(items: &[R]) -> GroupedResults<R>
where
    R: AsRef<Record> + Clone,
{
    group_by_field(items, &GroupField::Category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Category;

    fn ids<R: AsRef<Record>>(items: &[R]) -> Vec<String> {
        items.iter().map(|r| r.as_ref().id.to_string()).collect()
    }

    #[test]
    fn test_groups_in_first_appearance_order() {
        let records = vec![
            Record::new(1, "a").with_category(Category::Transaction),
            Record::new(2, "b").with_category(Category::Account),
            Record::new(3, "c").with_category(Category::Transaction),
        ];
        let grouped = group_results_by_category(&records);

        assert_eq!(grouped.keys().collect::<Vec<_>>(), ["transaction", "account"]);
        assert_eq!(ids(grouped.get("transaction").unwrap()), ["1", "3"]);
        assert_eq!(ids(grouped.get("account").unwrap()), ["2"]);
        assert_eq!(grouped.total(), 3);
    }

    #[test]
    fn test_missing_key_falls_back_to_other() {
        let records = vec![
            Record::new(1, "a"),
            Record::new(2, "b").with_category(Category::Card),
        ];
        let grouped = group_results_by_category(&records);

        assert_eq!(grouped.keys().collect::<Vec<_>>(), ["other", "card"]);
        assert_eq!(ids(grouped.get(OTHER_GROUP).unwrap()), ["1"]);
    }

    #[test]
    fn test_empty_input_has_no_groups() {
        let grouped = group_results_by_category::<Record>(&[]);
        assert!(grouped.is_empty());
        assert!(grouped.get(OTHER_GROUP).is_none());
    }

    #[test]
    fn test_group_by_metadata_field() {
        let records = vec![
            Record::new(1, "a").with_metadata("branch", "Wall Street"),
            Record::new(2, "b"),
            Record::new(3, "c").with_metadata("branch", "Wall Street"),
        ];
        let grouped = group_by_field(&records, &GroupField::Metadata("branch".into()));

        assert_eq!(grouped.keys().collect::<Vec<_>>(), ["Wall Street", "other"]);
    }

    #[test]
    fn test_flatten_follows_group_order() {
        let records = vec![
            Record::new(1, "a").with_category(Category::Transaction),
            Record::new(2, "b").with_category(Category::Account),
            Record::new(3, "c").with_category(Category::Transaction),
        ];
        let flat = group_results_by_category(&records).flatten();
        assert_eq!(ids(&flat), ["1", "3", "2"]);
    }

    #[test]
    fn test_single_bucket_shape() {
        let grouped = GroupedResults::single(vec![Record::new(1, "a")]);
        assert!(grouped.is_ungrouped());
        assert_eq!(grouped.keys().collect::<Vec<_>>(), [ALL_GROUP]);

        let empty = GroupedResults::<Record>::single(Vec::new());
        assert!(empty.is_empty());
        assert!(!empty.is_ungrouped());
    }

    #[test]
    fn test_grouping_does_not_mutate_input() {
        let records = vec![
            Record::new(1, "a").with_category(Category::Card),
            Record::new(2, "b").with_category(Category::Account),
        ];
        let before = records.clone();
        let _ = group_results_by_category(&records);
        assert_eq!(records, before);
    }
}
