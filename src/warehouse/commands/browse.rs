use crate::commands::{CategorySummary, CmdMessage, CmdResult};
use crate::error::{Result, WarehouseError};
use crate::session::SessionLog;
use crate::store::DataStore;

/// Every category with its item count, in the order used for 1-based selection.
pub fn categories<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut summaries = Vec::new();
    for name in store.categories()? {
        let count = store.items_in_category(&name)?.len();
        summaries.push(CategorySummary { name, count });
    }
    Ok(CmdResult::default().with_categories(summaries))
}

/// Lists the items of the category at 1-based `position`.
pub fn run<S: DataStore>(
    store: &S,
    position: usize,
    session: &mut SessionLog,
) -> Result<CmdResult> {
    let categories = store.categories()?;
    let category = position
        .checked_sub(1)
        .and_then(|i| categories.get(i))
        .ok_or_else(|| {
            WarehouseError::InvalidQuery(format!(
                "Enter an integer between 1 and {}",
                categories.len()
            ))
        })?;

    let items = store.items_in_category(category)?;
    session.record_browsed(category);
    tracing::info!(category = %category, items = items.len(), "browsed category");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "List of {}s available:",
        category.to_lowercase()
    )));
    Ok(result
        .with_categories(vec![CategorySummary {
            name: category.clone(),
            count: items.len(),
        }])
        .with_listed_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn store() -> InMemoryStore {
        StoreFixture::new()
            .with_items("Used", "Tablet", 1, 2, 0)
            .with_item("Cheap", "Laptop", 2)
            .with_item("Refurbished", "Tablet", 2)
            .build()
    }

    #[test]
    fn summarizes_categories_with_counts() {
        let result = categories(&store()).unwrap();
        assert_eq!(
            result.categories,
            vec![
                CategorySummary {
                    name: "Laptop".into(),
                    count: 1
                },
                CategorySummary {
                    name: "Tablet".into(),
                    count: 3
                },
            ]
        );
    }

    #[test]
    fn lists_only_the_selected_category() {
        let mut session = SessionLog::new();
        let result = run(&store(), 2, &mut session).unwrap();

        assert_eq!(result.listed_items.len(), 3);
        assert!(result.listed_items.iter().all(|i| i.category == "Tablet"));
        let warehouses: Vec<u32> = result.listed_items.iter().map(|i| i.warehouse).collect();
        assert_eq!(warehouses, vec![1, 1, 2]);
        assert_eq!(result.messages[0].content, "List of tablets available:");
    }

    #[test]
    fn logs_browsed_category() {
        let mut session = SessionLog::new();
        run(&store(), 1, &mut session).unwrap();
        assert_eq!(session.entries(), ["Browsed the category laptop"]);
    }

    #[test]
    fn rejects_out_of_range_positions() {
        let mut session = SessionLog::new();
        assert!(run(&store(), 0, &mut session).is_err());
        assert!(run(&store(), 3, &mut session).is_err());
        assert!(session.is_empty());
    }
}
