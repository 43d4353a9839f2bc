//! In-memory storage
//!
//! The inventory lives in process memory for the lifetime of the service.
//! `InventoryStore` is the handle shared with request handlers.

pub mod ids;
pub mod inventory_store;
pub mod seed;

pub use inventory_store::*;
