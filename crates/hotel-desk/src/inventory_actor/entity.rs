//! [`RecordEntity`] implementation for the in-memory [`Inventory`].
//!
//! `append` adds to the list matching the item's kind, `remove` is a stock
//! reduction that removes at most one entry, and `list` returns food before drinks.

use super::actions::{InventoryAction, InventoryActionResult, StockRequest};
use crate::model::{CatalogItem, Inventory};
use async_trait::async_trait;
use record_actor::RecordEntity;
use std::convert::Infallible;
use tracing::debug;

#[async_trait]
impl RecordEntity for Inventory {
    type Record = CatalogItem;
    type Selector = StockRequest;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Error = Infallible;

    async fn on_append(&mut self, record: CatalogItem) -> Result<(), Infallible> {
        self.add(record);
        Ok(())
    }

    async fn on_list(&self) -> Result<Vec<CatalogItem>, Infallible> {
        Ok(self.items())
    }

    async fn on_remove(&mut self, request: StockRequest) -> Result<usize, Infallible> {
        let reduced = self.reduce_stock(&request.item, request.quantity);
        debug!(item = request.item.name(), quantity = request.quantity, reduced, "Reduce stock");
        Ok(usize::from(reduced))
    }

    async fn handle_action(
        &mut self,
        action: InventoryAction,
    ) -> Result<InventoryActionResult, Infallible> {
        Ok(match action {
            InventoryAction::CheckAvailability(request) => InventoryActionResult::CheckAvailability(
                self.check_availability(&request.item, request.quantity),
            ),
            InventoryAction::DisplayStock => InventoryActionResult::DisplayStock(self.display_stock()),
        })
    }
}
