use crate::commands::{Availability, CmdMessage, CmdResult, StockMatch};
use crate::error::Result;
use crate::model::{ItemQuery, WarehouseId};
use crate::session::SessionLog;
use crate::store::DataStore;
use chrono::{DateTime, Local};

/// Looks up how many units match `query` across all warehouses.
///
/// Warehouses are scanned in ascending id order. The max-availability warehouse is
/// only replaced on a strictly greater count, so the first of several tied
/// warehouses is reported. The search is logged whether or not anything matched.
pub fn run<S: DataStore>(
    store: &S,
    query: &ItemQuery,
    now: DateTime<Local>,
    session: &mut SessionLog,
) -> Result<CmdResult> {
    let availability = availability(store, query, now)?;
    session.record_searched(query);

    let mut result = CmdResult::default();
    match availability.max {
        None => result.add_message(CmdMessage::warning("Not in stock")),
        Some((warehouse, count)) => {
            result.add_message(CmdMessage::info(format!(
                "Amount available: {}",
                availability.total
            )));
            result.add_message(CmdMessage::info(format!(
                "Maximum availability: {} in Warehouse {}",
                count, warehouse
            )));
        }
    }

    tracing::info!(query = %query, total = availability.total, "searched item");
    Ok(result.with_availability(availability))
}

pub fn availability<S: DataStore>(
    store: &S,
    query: &ItemQuery,
    now: DateTime<Local>,
) -> Result<Availability> {
    let mut total = 0;
    let mut per_warehouse = Vec::new();
    let mut max: Option<(WarehouseId, usize)> = None;
    let mut matches = Vec::new();

    for warehouse in store.warehouses()? {
        let mut count = 0;
        for item in store.items_in_warehouse(warehouse)? {
            if item.key().matches(query) {
                matches.push(StockMatch {
                    warehouse: item.warehouse,
                    days_in_stock: item.days_in_stock(now),
                });
                count += 1;
            }
        }

        total += count;
        per_warehouse.push((warehouse, count));
        if count > max.map_or(0, |(_, best)| best) {
            max = Some((warehouse, count));
        }
    }

    Ok(Availability {
        total,
        per_warehouse,
        max,
        matches,
    })
}
