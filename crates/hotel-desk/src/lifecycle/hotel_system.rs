use crate::clients::{CredentialClient, InventoryClient, RosterClient};
use crate::config::DeskConfig;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

/// The running front desk: one actor per store and a client for each.
///
/// # Example
///
/// ```ignore
/// let system = HotelSystem::new(&DeskConfig::default());
///
/// system.roster_client.add_employee("Alice", 1, "Receptionist").await?;
/// let stock = system.inventory_client.display_stock().await?;
///
/// system.shutdown().await?;
/// ```
pub struct HotelSystem {
    pub credential_client: CredentialClient,
    pub roster_client: RosterClient,
    pub inventory_client: InventoryClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl HotelSystem {
    /// Spawns every store actor on the current tokio runtime.
    pub fn new(config: &DeskConfig) -> Self {
        let capacity = config.channel_capacity;
        let (credential_actor, credential_client) =
            crate::credential_actor::new(config.credential_path(), capacity);
        let (roster_actor, roster_client) = crate::roster_actor::new(config.roster_path(), capacity);
        let (inventory_actor, inventory_client) =
            crate::inventory_actor::new(config.opening_stock.clone(), capacity);

        let handles = vec![
            tokio::spawn(credential_actor.run()),
            tokio::spawn(roster_actor.run()),
            tokio::spawn(inventory_actor.run()),
        ];
        info!(data_dir = %config.data_dir().display(), "Hotel system started");

        Self {
            credential_client,
            roster_client,
            inventory_client,
            handles,
        }
    }

    /// Drops the system's clients and waits for every actor to stop.
    ///
    /// Every task is awaited even after a failure; the first failure is returned.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");

        drop(self.credential_client);
        drop(self.roster_client);
        drop(self.inventory_client);

        let mut first_failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                first_failure.get_or_insert(e);
            }
        }

        match first_failure {
            Some(e) => Err(e.into()),
            None => {
                info!("System shutdown complete.");
                Ok(())
            }
        }
    }
}
