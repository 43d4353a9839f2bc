//! Car model
//!
//! This module contains the `Car` record held by the inventory and the typed
//! inputs used to create and update it.

use validator::Validate;

/// A car in the inventory. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: u64,
    pub stock: u64,
}

/// Fields of a car about to be created, already trimmed and coerced.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewCar {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,

    pub description: String,
    pub price: u64,
    pub stock: u64,
}

impl NewCar {
    pub fn into_car(self, id: String) -> Car {
        Car {
            id,
            name: self.name,
            category: self.category,
            description: self.description,
            price: self.price,
            stock: self.stock,
        }
    }
}

/// Partial update. `None` means the field was not supplied and stays as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct CarChanges {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: Option<String>,

    pub description: Option<String>,
    pub price: Option<u64>,
    pub stock: Option<u64>,
}

impl CarChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock.is_none()
    }

    /// Overwrite the supplied fields of `car`. The id is left untouched.
    pub fn apply_to(self, car: &mut Car) {
        if let Some(name) = self.name {
            car.name = name;
        }
        if let Some(category) = self.category {
            car.category = category;
        }
        if let Some(description) = self.description {
            car.description = description;
        }
        if let Some(price) = self.price {
            car.price = price;
        }
        if let Some(stock) = self.stock {
            car.stock = stock;
        }
    }
}
