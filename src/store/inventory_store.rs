use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{Car, NewCar};
use crate::store::{ids, seed};

/// The collection itself. Only reachable through an `InventoryStore` lock.
#[derive(Debug, Default)]
pub struct Inventory {
    cars: Vec<Car>,
    // Every id handed out so far, including deleted ones, so none is reused
    issued_ids: HashSet<String>,
}

impl Inventory {
    /// Live cars in insertion order
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Car> {
        self.cars.iter_mut().find(|car| car.id == id)
    }

    /// Append a car under a freshly issued id.
    pub fn insert(&mut self, new_car: NewCar) -> Car {
        let id = self.issue_id();
        let car = new_car.into_car(id);
        self.cars.push(car.clone());
        car
    }

    pub fn remove(&mut self, id: &str) -> Option<Car> {
        let index = self.cars.iter().position(|car| car.id == id)?;
        Some(self.cars.remove(index))
    }

    fn issue_id(&mut self) -> String {
        loop {
            let id = ids::random_id();
            if self.issued_ids.insert(id.clone()) {
                return id;
            }
        }
    }
}

/// Shared handle to the inventory. Clones point at the same collection.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    inner: Arc<RwLock<Inventory>>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the example cars
    pub fn seeded() -> Self {
        let mut inventory = Inventory::default();
        for new_car in seed::example_cars() {
            inventory.insert(new_car);
        }
        Self {
            inner: Arc::new(RwLock::new(inventory)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Inventory> {
        self.inner.read().await
    }

    /// Exclusive access. All mutations go through this guard.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Inventory> {
        self.inner.write().await
    }
}
