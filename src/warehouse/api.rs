//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! warehouse operation, whatever UI drives it.
//!
//! The facade normalizes raw user input (item names become [`ItemQuery`]s) and
//! dispatches to `commands/*.rs`. It never prints and never decides how results
//! are presented.
//!
//! `WarehouseApi<S: DataStore>` is generic over the data accessor so tests can
//! run it against a fixture store.

use crate::commands;
use crate::error::Result;
use crate::model::ItemQuery;
use crate::session::SessionLog;
use crate::store::DataStore;
use chrono::{DateTime, Local};

pub struct WarehouseApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> WarehouseApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_by_warehouse(&self, session: &mut SessionLog) -> Result<CmdResult> {
        commands::list::run(&self.store, session)
    }

    pub fn search(
        &self,
        name: &str,
        now: DateTime<Local>,
        session: &mut SessionLog,
    ) -> Result<CmdResult> {
        let query = ItemQuery::new(name)?;
        commands::search::run(&self.store, &query, now, session)
    }

    pub fn categories(&self) -> Result<CmdResult> {
        commands::browse::categories(&self.store)
    }

    pub fn browse(&self, position: usize, session: &mut SessionLog) -> Result<CmdResult> {
        commands::browse::run(&self.store, position, session)
    }

    pub fn start_order(&self, available: usize) -> Result<OrderFlow> {
        let available = u32::try_from(available).unwrap_or(u32::MAX);
        OrderFlow::new(available)
    }
}

pub use commands::order::{confirmation, OrderFlow, OrderState, QuantityOutcome};
pub use commands::{
    Availability, CategorySummary, CmdMessage, CmdResult, MessageLevel, StockMatch,
    WarehouseListing,
};
