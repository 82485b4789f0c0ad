//! # Storage Layer
//!
//! The [`DataStore`] trait is the data accessor the rest of the crate is written
//! against. The inventory is read-only for the lifetime of the program, so the
//! trait exposes views only: warehouse ids, category names, and items filtered by
//! either of them.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a list of items held in memory. Used both in
//!   production and in tests.
//! - [`fs::load`]: reads a JSON inventory file into an `InMemoryStore`.
//! - [`sample::sample_store`]: the stock bundled into the binary.
//!
//! ## Inventory Format
//!
//! ```text
//! [
//!   { "state": "Brand new", "category": "Laptop", "warehouse": 1,
//!     "date_of_stock": "2024-01-15T09:30:00Z" },
//!   ...
//! ]
//! ```

use crate::error::Result;
use crate::model::{Item, WarehouseId};

pub mod fs;
pub mod memory;
pub mod sample;

/// Read-only access to the inventory.
///
/// Ordering contract: `warehouses` and `categories` are ascending; item lists keep
/// the store's load order.
pub trait DataStore {
    /// All warehouse ids that hold at least one item
    fn warehouses(&self) -> Result<Vec<WarehouseId>>;

    /// Items stocked in the given warehouse
    fn items_in_warehouse(&self, warehouse: WarehouseId) -> Result<Vec<Item>>;

    /// Distinct category names
    fn categories(&self) -> Result<Vec<String>>;

    /// Items of the given category (exact match)
    fn items_in_category(&self, category: &str) -> Result<Vec<Item>>;

    /// Every item in the inventory
    fn all_items(&self) -> Result<Vec<Item>>;
}
