//! Testing utilities for smartsearch
//!
//! Record fixtures shared by the unit tests. Only available when compiled
//! with `cfg(test)`.

use crate::record::{Category, Record, Status};
use std::sync::Arc;

/// A small, varied record set
///
/// Covers every category, records with and without amounts, statuses,
/// timestamps and priorities, and one record with a malformed timestamp.
#[must_use]
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("acc-001", "Premium Savings Account")
            .with_subtitle("Account Number: ****4521")
            .with_description("High-yield savings with 4.5% APY")
            .with_category(Category::Account)
            .with_status(Status::Active)
            .with_amount(125_000.5, "USD")
            .with_created_at("2019-03-15T10:00:00Z")
            .with_priority(10)
            .with_metadata("accountType", "savings"),
        Record::new("acc-002", "Business Checking")
            .with_subtitle("Account Number: ****7890")
            .with_category(Category::Account)
            .with_status(Status::Active)
            .with_amount(45_320.75, "USD")
            .with_created_at("2020-07-22T09:15:00Z")
            .with_priority(8)
            .with_metadata("accountType", "checking"),
        Record::new("txn-001", "Wire Transfer to John Smith")
            .with_subtitle("Reference: WT2024001")
            .with_category(Category::Transaction)
            .with_status(Status::Completed)
            .with_amount(-5000.0, "USD")
            .with_created_at("2024-12-15T14:30:00Z")
            .with_priority(5)
            .with_metadata("reference", "WT2024001"),
        Record::new("txn-002", "Coffee Shop Purchase")
            .with_category(Category::Transaction)
            .with_status(Status::Pending)
            .with_amount(-4.5, "USD")
            .with_created_at("not a timestamp"),
        Record::new("cust-001", "John Smith")
            .with_subtitle("Premium Customer")
            .with_searchable_text("john.smith@example.com vip")
            .with_category(Category::Customer)
            .with_status(Status::Active)
            .with_priority(7),
        Record::new("card-001", "Platinum Credit Card")
            .with_subtitle("Card ending in 8842")
            .with_category(Category::Card)
            .with_status(Status::Active)
            .with_amount(2_500.0, "USD")
            .with_created_at("2021-01-10T00:00:00Z")
            .with_priority(6),
        Record::new("card-002", "Debit Card")
            .with_category(Category::Card)
            .with_status(Status::Blocked)
            .with_priority(2),
        Record::new("inv-001", "Growth Portfolio")
            .with_description("Diversified equity fund")
            .with_category(Category::Investment)
            .with_status(Status::Active)
            .with_amount(250_000.0, "EUR")
            .with_created_at("2022-05-05"),
        Record::new(9, "Miscellaneous Note").with_category(Category::Other),
        Record::new(10, "Uncategorized Entry"),
    ]
}

/// [`sample_records`] behind shared pointers, the shape the widget stores
#[must_use]
pub fn shared_records() -> Vec<Arc<Record>> {
    sample_records().into_iter().map(Arc::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_records_cover_categories() {
        let records = sample_records();
        for category in [
            Category::Account,
            Category::Transaction,
            Category::Customer,
            Category::Card,
            Category::Investment,
            Category::Other,
        ] {
            assert!(
                records.iter().any(|r| r.category.as_ref() == Some(&category)),
                "missing {category}"
            );
        }
        assert!(records.iter().any(|r| r.category.is_none()));
    }

    #[test]
    fn test_shared_records_match() {
        assert_eq!(shared_records().len(), sample_records().len());
    }
}
