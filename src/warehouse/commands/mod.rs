use crate::model::{Item, WarehouseId};

pub mod browse;
pub mod list;
pub mod order;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The items of one warehouse, in store order.
#[derive(Debug, Clone)]
pub struct WarehouseListing {
    pub warehouse: WarehouseId,
    pub items: Vec<Item>,
}

/// A category with the number of items filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
}

/// One matching unit found by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockMatch {
    pub warehouse: WarehouseId,
    pub days_in_stock: i64,
}

/// Outcome of an availability lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub total: usize,
    pub per_warehouse: Vec<(WarehouseId, usize)>,
    /// Warehouse with the strictly highest count, first one wins ties. `None` when out of stock.
    pub max: Option<(WarehouseId, usize)>,
    pub matches: Vec<StockMatch>,
}

impl Availability {
    pub fn in_stock(&self) -> bool {
        self.total > 0
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub warehouses: Vec<WarehouseListing>,
    pub categories: Vec<CategorySummary>,
    pub listed_items: Vec<Item>,
    pub availability: Option<Availability>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_warehouses(mut self, warehouses: Vec<WarehouseListing>) -> Self {
        self.warehouses = warehouses;
        self
    }

    pub fn with_categories(mut self, categories: Vec<CategorySummary>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }
}
