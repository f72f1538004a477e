//! # Inventory Client
//!
//! Stock operations against the in-memory [`Inventory`] actor.
use crate::inventory_actor::{
    InventoryAction, InventoryActionResult, InventoryError, StockRequest,
};
use crate::model::{CatalogItem, DrinkItem, FoodItem, Inventory};
use async_trait::async_trait;
use record_actor::{ActorClient, FrameworkError, RecordClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct InventoryClient {
    inner: RecordClient<Inventory>,
}

impl InventoryClient {
    pub fn new(inner: RecordClient<Inventory>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Inventory> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &RecordClient<Inventory> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        InventoryError::ActorCommunicationError(e.to_string())
    }
}

impl InventoryClient {
    #[instrument(skip(self))]
    pub async fn add_food(&self, item: FoodItem) -> Result<(), InventoryError> {
        debug!("Sending request");
        self.inner.append(item.into()).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn add_drink(&self, item: DrinkItem) -> Result<(), InventoryError> {
        debug!("Sending request");
        self.inner.append(item.into()).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn check_availability(&self, request: StockRequest) -> Result<bool, InventoryError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(InventoryAction::CheckAvailability(request))
            .await
        {
            Ok(InventoryActionResult::CheckAvailability(available)) => Ok(available),
            Ok(_) => Err(InventoryError::UnexpectedResponse("CheckAvailability")),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Removes one unit; `false` when the request could not be met.
    #[instrument(skip(self))]
    pub async fn reduce_stock(&self, request: StockRequest) -> Result<bool, InventoryError> {
        debug!("Sending request");
        self.remove(request).await.map(|removed| removed > 0)
    }

    pub async fn display_stock(&self) -> Result<String, InventoryError> {
        match self.inner.perform_action(InventoryAction::DisplayStock).await {
            Ok(InventoryActionResult::DisplayStock(text)) => Ok(text),
            Ok(_) => Err(InventoryError::UnexpectedResponse("DisplayStock")),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Food first, then drinks, each in insertion order.
    pub async fn items(&self) -> Result<Vec<CatalogItem>, InventoryError> {
        self.list().await
    }
}
