use super::DataStore;
use crate::error::Result;
use crate::model::{Item, WarehouseId};
use std::collections::BTreeSet;

/// Inventory held in memory. Never mutated after construction.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    items: Vec<Item>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl DataStore for InMemoryStore {
    fn warehouses(&self) -> Result<Vec<WarehouseId>> {
        let ids: BTreeSet<WarehouseId> = self.items.iter().map(|i| i.warehouse).collect();
        Ok(ids.into_iter().collect())
    }

    fn items_in_warehouse(&self, warehouse: WarehouseId) -> Result<Vec<Item>> {
        Ok(self
            .items
            .iter()
            .filter(|i| i.warehouse == warehouse)
            .cloned()
            .collect())
    }

    fn categories(&self) -> Result<Vec<String>> {
        let names: BTreeSet<&str> = self.items.iter().map(|i| i.category.as_str()).collect();
        Ok(names.into_iter().map(str::to_string).collect())
    }

    fn items_in_category(&self, category: &str) -> Result<Vec<Item>> {
        Ok(self
            .items
            .iter()
            .filter(|i| i.category == category)
            .cloned()
            .collect())
    }

    fn all_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{Duration, Utc};

    pub struct StoreFixture {
        items: Vec<Item>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self { items: Vec::new() }
        }

        /// Adds `count` copies of an item stocked `days_ago` days before now.
        pub fn with_items(
            mut self,
            state: &str,
            category: &str,
            warehouse: WarehouseId,
            count: usize,
            days_ago: i64,
        ) -> Self {
            let stocked = Utc::now() - Duration::days(days_ago);
            for _ in 0..count {
                self.items.push(Item::new(state, category, warehouse, stocked));
            }
            self
        }

        pub fn with_item(self, state: &str, category: &str, warehouse: WarehouseId) -> Self {
            self.with_items(state, category, warehouse, 1, 0)
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::from_items(self.items)
        }
    }
}
