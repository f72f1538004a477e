//! # Inventory Actor
//!
//! Serves the kitchen's [`Inventory`](crate::model::Inventory) from memory. Stock
//! is tracked by presence: every listed entry is one unit, and requests for more
//! than [`MAX_UNITS_PER_REQUEST`](crate::model::MAX_UNITS_PER_REQUEST) are refused.
//!
//! ```rust,ignore
//! let burger = StockRequest::new(FoodItem::new("Burger", 0.0, ""), 1);
//! if inventory_client.check_availability(burger.clone()).await? {
//!     inventory_client.reduce_stock(burger).await?;
//! }
//! ```

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::InventoryClient;
use crate::model::{CatalogItem, Inventory};
use record_actor::RecordActor;

/// Creates an inventory actor holding `opening_stock`, and its client.
pub fn new(
    opening_stock: impl IntoIterator<Item = CatalogItem>,
    buffer_size: usize,
) -> (RecordActor<Inventory>, InventoryClient) {
    let (actor, generic_client) =
        RecordActor::new(Inventory::from_items(opening_stock), buffer_size);
    (actor, InventoryClient::new(generic_client))
}
