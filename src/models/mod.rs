//! Domain models
//!
//! This module contains the records kept by the inventory.

pub mod car;

pub use car::*;
