use super::memory::InMemoryStore;
use crate::error::{Result, WarehouseError};
use crate::model::Item;
use std::fs;
use std::path::Path;

/// Loads a JSON inventory file (an array of items) into memory.
pub fn load<P: AsRef<Path>>(path: P) -> Result<InMemoryStore> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(WarehouseError::Io)?;
    let store = parse(&content)?;
    tracing::debug!(path = %path.display(), items = store.len(), "loaded inventory file");
    Ok(store)
}

pub fn parse(content: &str) -> Result<InMemoryStore> {
    let items: Vec<Item> = serde_json::from_str(content).map_err(WarehouseError::Serialization)?;
    if items.iter().any(|i| i.category.trim().is_empty()) {
        return Err(WarehouseError::Store(
            "inventory contains an item without a category".to_string(),
        ));
    }
    Ok(InMemoryStore::from_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;

    const INVENTORY: &str = r#"[
        {"state": "Used", "category": "Mouse", "warehouse": 1, "date_of_stock": "2023-05-01T10:00:00Z"},
        {"state": "Brand new", "category": "Laptop", "warehouse": 2, "date_of_stock": "2023-06-12T08:15:00Z"}
    ]"#;

    #[test]
    fn parses_items_in_order() {
        let store = parse(INVENTORY).unwrap();
        let items = store.all_items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].to_string(), "Used Mouse");
        assert_eq!(items[1].warehouse, 2);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse("[{\"state\": \"Used\"}]"),
            Err(WarehouseError::Serialization(_))
        ));
    }

    #[test]
    fn rejects_blank_category() {
        let content = r#"[{"state": "Used", "category": " ", "warehouse": 1, "date_of_stock": "2023-05-01T10:00:00Z"}]"#;
        assert!(matches!(parse(content), Err(WarehouseError::Store(_))));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock.json");
        std::fs::write(&path, INVENTORY).unwrap();

        let store = load(&path).unwrap();
        assert_eq!(store.warehouses().unwrap(), vec![1, 2]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load(dir.path().join("nope.json")),
            Err(WarehouseError::Io(_))
        ));
    }
}
