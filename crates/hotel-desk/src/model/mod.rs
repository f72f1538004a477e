//! Pure data structures; the inventory aggregate is served by
//! [`inventory_actor`](crate::inventory_actor) as a [`RecordEntity`](record_actor::RecordEntity).

pub mod catalog;
pub mod credential;
pub mod employee;
pub mod inventory;

pub use catalog::*;
pub use credential::*;
pub use employee::*;
pub use inventory::*;
