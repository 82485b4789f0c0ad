//! Stock bundled into the binary, used when no inventory file is configured.

use super::fs;
use super::memory::InMemoryStore;
use crate::error::Result;

const SAMPLE_STOCK: &str = include_str!("../data/stock.json");

pub fn sample_store() -> Result<InMemoryStore> {
    fs::parse(SAMPLE_STOCK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;

    #[test]
    fn sample_spans_two_warehouses() {
        let store = sample_store().unwrap();
        assert_eq!(store.warehouses().unwrap(), vec![1, 2]);
        assert_eq!(store.len(), 48);
    }

    #[test]
    fn sample_has_eight_categories() {
        let store = sample_store().unwrap();
        let categories = store.categories().unwrap();
        assert_eq!(categories.len(), 8);
        assert_eq!(categories[0], "Headphones");
    }
}
