//! # Hotel Desk
//!
//! A console front desk for a small hotel: managers sign up and log in, then keep
//! the employee roster, look at the kitchen's stock and check the room count.
//!
//! ## Layers
//!
//! - [`model`]: plain data ([`Credential`](model::Credential),
//!   [`EmployeeRecord`](model::EmployeeRecord), [`CatalogItem`](model::CatalogItem),
//!   [`Inventory`](model::Inventory)).
//! - [`storage`]: the one-record-per-line file format and the files themselves.
//! - [`credential_actor`], [`roster_actor`], [`inventory_actor`]: each store served
//!   by a [`RecordActor`](record_actor::RecordActor), so operations on one store
//!   never interleave.
//! - [`clients`]: typed handles onto those actors.
//! - [`lifecycle`]: [`HotelSystem`](lifecycle::HotelSystem) starts and stops the actors.
//! - [`session`]: the interactive menu driven from `main`.
//!
//! ## Persistence
//!
//! Credentials live in `managers.txt` and the roster in `employees.txt`, both in the
//! configured data directory (see [`config::DeskConfig`]). Inventory is rebuilt from
//! the opening stock on every start.

pub mod clients;
pub mod config;
pub mod credential_actor;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod roster_actor;
pub mod session;
pub mod storage;
