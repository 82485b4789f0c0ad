use crate::commands::{CmdMessage, CmdResult, WarehouseListing};
use crate::error::Result;
use crate::session::SessionLog;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, session: &mut SessionLog) -> Result<CmdResult> {
    let mut listings = Vec::new();
    for warehouse in store.warehouses()? {
        let items = store.items_in_warehouse(warehouse)?;
        listings.push(WarehouseListing { warehouse, items });
    }

    let mut result = CmdResult::default();
    for listing in &listings {
        result.add_message(CmdMessage::info(format!(
            "Total items in warehouse {}: {}",
            listing.warehouse,
            listing.items.len()
        )));
    }

    let total = store.all_items()?.len();
    session.record_listed(total);
    tracing::info!(total, warehouses = listings.len(), "listed inventory");

    Ok(result.with_warehouses(listings))
}
