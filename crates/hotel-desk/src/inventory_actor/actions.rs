//! Stock requests and custom actions for the inventory.

use crate::model::CatalogItem;

/// Asks for `quantity` units of the item with this name and kind.
///
/// Only the item's name and variant are matched; its price and label are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct StockRequest {
    pub item: CatalogItem,
    pub quantity: u32,
}

impl StockRequest {
    pub fn new(item: impl Into<CatalogItem>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone)]
pub enum InventoryAction {
    /// Reports availability without changing stock.
    CheckAvailability(StockRequest),
    /// Renders the current stock as text.
    DisplayStock,
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryActionResult {
    CheckAvailability(bool),
    DisplayStock(String),
}
