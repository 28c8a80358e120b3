//! Capacity-bounded inventory of weighted items.
//!
//! The [`Inventory`] is a name-keyed collection whose total weight never
//! exceeds a fixed capacity. It is safe to share across threads; every
//! operation runs under a single exclusive lock and every read hands back an
//! owned copy of the stored items.

pub mod config;
pub mod inventory;
pub mod item;

pub use config::{CAPACITY_ENV, DEFAULT_CAPACITY, InventoryConfig};
pub use inventory::Inventory;
pub use item::Item;
