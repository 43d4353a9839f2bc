use tracing::info;

use crate::models::{Car, CarChanges, NewCar};
use crate::store::InventoryStore;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};

pub struct CarRepository {
    store: InventoryStore,
}

impl CarRepository {
    pub fn new(store: InventoryStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<Car>, AppError> {
        let inventory = self.store.read().await;
        Ok(inventory.cars().to_vec())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Car>, AppError> {
        let inventory = self.store.read().await;
        Ok(inventory.find(id).cloned())
    }

    pub async fn create(&self, new_car: NewCar) -> Result<Car, AppError> {
        let mut inventory = self.store.write().await;
        let car = inventory.insert(new_car);
        info!("Car created: {} ({})", car.id, car.name);
        Ok(car)
    }

    /// Apply `changes` to the car under a single write lock. An error already
    /// found in the request body is reported only once the car is known to exist.
    pub async fn update(
        &self,
        id: &str,
        changes: Result<CarChanges, AppError>,
    ) -> Result<Car, AppError> {
        let mut inventory = self.store.write().await;
        let car = inventory
            .find_mut(id)
            .ok_or_else(|| not_found_error("Car"))?;

        let changes = changes?;
        if changes.is_empty() {
            return Err(bad_request_error("Nothing to update"));
        }

        changes.apply_to(car);
        info!("Car updated: {}", car.id);
        Ok(car.clone())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut inventory = self.store.write().await;
        let car = inventory.remove(id).ok_or_else(|| not_found_error("Car"))?;
        info!("Car deleted: {} ({})", car.id, car.name);
        Ok(())
    }
}
