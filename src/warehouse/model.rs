use crate::error::{Result, WarehouseError};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric key of a stock location.
pub type WarehouseId = u32;

/// A single stocked unit. Items have no identity beyond their position in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub state: String,
    pub category: String,
    pub warehouse: WarehouseId,
    pub date_of_stock: DateTime<Utc>,
}

impl Item {
    pub fn new(
        state: impl Into<String>,
        category: impl Into<String>,
        warehouse: WarehouseId,
        date_of_stock: DateTime<Utc>,
    ) -> Self {
        Self {
            state: state.into(),
            category: category.into(),
            warehouse,
            date_of_stock,
        }
    }

    pub fn key(&self) -> ItemKey<'_> {
        ItemKey {
            state: &self.state,
            category: &self.category,
        }
    }

    /// Whole calendar days between the stock date and `now`, counted on local day boundaries.
    pub fn days_in_stock(&self, now: DateTime<Local>) -> i64 {
        let stocked = self.date_of_stock.with_timezone(&Local).date_naive();
        (now.date_naive() - stocked).num_days()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.state, self.category)
    }
}

/// The name an item is searched by: its state and category, compared case-insensitively.
///
/// A "brand new" item of category "Laptop" is found with the query `brand new laptop`.
/// There is no structured identifier; two items with the same key are the same product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemKey<'a> {
    pub state: &'a str,
    pub category: &'a str,
}

impl ItemKey<'_> {
    pub fn name(&self) -> String {
        format!(
            "{} {}",
            self.state.to_lowercase(),
            self.category.to_lowercase()
        )
    }

    pub fn matches(&self, query: &ItemQuery) -> bool {
        self.name() == query.as_str()
    }
}

/// A trimmed, lower-cased item name as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemQuery(String);

impl ItemQuery {
    pub fn new(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(WarehouseError::InvalidQuery(
                "item name cannot be empty".to_string(),
            ));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn item(state: &str, category: &str) -> Item {
        Item::new(state, category, 1, Utc::now())
    }

    #[test]
    fn key_matches_state_and_category_case_insensitively() {
        let laptop = item("Brand New", "Laptop");
        let query = ItemQuery::new("  brand NEW laptop ").unwrap();
        assert!(laptop.key().matches(&query));
    }

    #[test]
    fn key_does_not_match_category_alone() {
        let laptop = item("Brand New", "Laptop");
        let query = ItemQuery::new("laptop").unwrap();
        assert!(!laptop.key().matches(&query));
    }

    #[test]
    fn empty_query_is_rejected() {
        assert!(matches!(
            ItemQuery::new("   "),
            Err(WarehouseError::InvalidQuery(_))
        ));
    }

    #[test]
    fn displays_state_then_category() {
        assert_eq!(item("Used", "Mouse").to_string(), "Used Mouse");
    }

    #[test]
    fn days_in_stock_counts_calendar_days() {
        let now = Local.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let stocked = (now - Duration::days(3)).with_timezone(&Utc);
        let it = Item::new("Used", "Mouse", 2, stocked);
        assert_eq!(it.days_in_stock(now), 3);
    }

    #[test]
    fn days_in_stock_is_zero_on_the_same_day() {
        let now = Local.with_ymd_and_hms(2024, 3, 10, 23, 0, 0).unwrap();
        let stocked = Local
            .with_ymd_and_hms(2024, 3, 10, 1, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let it = Item::new("Used", "Mouse", 2, stocked);
        assert_eq!(it.days_in_stock(now), 0);
    }
}
