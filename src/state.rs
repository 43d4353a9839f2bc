//! Shared application state
//!
//! Defines the state handed to every axum handler.

use crate::config::environment::EnvironmentConfig;
use crate::store::InventoryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: InventoryStore,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: InventoryStore, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }

    /// Build the state described by `config`, seeding the store if asked to.
    pub fn from_config(config: EnvironmentConfig) -> Self {
        let store = if config.seed_data {
            InventoryStore::seeded()
        } else {
            InventoryStore::new()
        };
        Self::new(store, config)
    }
}
