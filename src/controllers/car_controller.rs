use validator::Validate;

use crate::dto::car_dto::{CarResponse, CreateCarRequest, UpdateCarRequest};
use crate::models::{CarChanges, NewCar};
use crate::repositories::car_repository::CarRepository;
use crate::store::InventoryStore;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{quantity_or_zero, required_amount, required_text, text_or_empty};

pub struct CarController {
    repository: CarRepository,
}

impl CarController {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            repository: CarRepository::new(store),
        }
    }

    pub async fn list(&self) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.repository.find_all().await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<CarResponse, AppError> {
        let car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car"))?;

        Ok(car.into())
    }

    pub async fn create(&self, request: CreateCarRequest) -> Result<CarResponse, AppError> {
        let new_car = NewCar {
            name: required_text("name", request.name)?,
            category: required_text("category", request.category)?,
            description: text_or_empty("description", request.description)?,
            price: required_amount("price", request.price)?,
            stock: quantity_or_zero("stock", request.stock)?,
        };
        new_car.validate()?;

        let car = self.repository.create(new_car).await?;
        Ok(car.into())
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateCarRequest,
    ) -> Result<CarResponse, AppError> {
        let changes = Self::parse_changes(request);
        let car = self.repository.update(id, changes).await?;
        Ok(car.into())
    }

    fn parse_changes(request: UpdateCarRequest) -> Result<CarChanges, AppError> {
        let changes = CarChanges {
            name: request
                .name
                .map(|value| required_text("name", Some(value)))
                .transpose()?,
            category: request
                .category
                .map(|value| required_text("category", Some(value)))
                .transpose()?,
            description: request
                .description
                .map(|value| text_or_empty("description", Some(value)))
                .transpose()?,
            price: request
                .price
                .map(|value| required_amount("price", Some(value)))
                .transpose()?,
            stock: request
                .stock
                .map(|value| quantity_or_zero("stock", Some(value)))
                .transpose()?,
        };
        changes.validate()?;
        Ok(changes)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
