use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::models::car::Car;
use crate::utils::errors::{AppError, AppResult};

// Request to create a car. Values stay raw JSON until the controller
// coerces them, so "2500000" and 2500000 are both accepted as a price.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCarRequest {
    pub name: Option<Value>,
    pub category: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub stock: Option<Value>,
}

// Request to update a car. A key that is present (even with `null`) counts
// as supplied; a missing key leaves the field unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCarRequest {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub stock: Option<Value>,
}

impl CreateCarRequest {
    pub fn from_body(body: Map<String, Value>) -> AppResult<Self> {
        from_object(body)
    }
}

impl UpdateCarRequest {
    pub fn from_body(body: Map<String, Value>) -> AppResult<Self> {
        from_object(body)
    }
}

// Taking a map keeps derived positional (array) decoding out of reach
fn from_object<T: DeserializeOwned>(body: Map<String, Value>) -> AppResult<T> {
    serde_json::from_value(Value::Object(body))
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

// Car as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: u64,
    pub stock: u64,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            name: car.name,
            category: car.category,
            description: car.description,
            price: car.price,
            stock: car.stock,
        }
    }
}
