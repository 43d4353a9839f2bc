//! Thin client over the car inventory HTTP API.

use anyhow::{anyhow, Result};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: u64,
    pub stock: u64,
}

pub struct CarsApi {
    client: Client,
    base_url: String,
}

impl CarsApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/cars{}", self.base_url, path)
    }

    pub async fn get_cars(&self) -> Result<Vec<Car>> {
        let response = self.client.get(self.url("")).send().await?;
        Ok(expect_status(response, StatusCode::OK).await?.json().await?)
    }

    pub async fn get_car(&self, id: &str) -> Result<Car> {
        let response = self.client.get(self.url(&format!("/{}", id))).send().await?;
        Ok(expect_status(response, StatusCode::OK).await?.json().await?)
    }

    pub async fn create_car(&self, car: &Value) -> Result<Car> {
        let response = self.client.post(self.url("")).json(car).send().await?;
        Ok(expect_status(response, StatusCode::CREATED).await?.json().await?)
    }

    pub async fn update_car(&self, id: &str, changes: &Value) -> Result<Car> {
        let response = self
            .client
            .patch(self.url(&format!("/{}", id)))
            .json(changes)
            .send()
            .await?;
        Ok(expect_status(response, StatusCode::OK).await?.json().await?)
    }

    pub async fn delete_car(&self, id: &str) -> Result<()> {
        let response = self.client.delete(self.url(&format!("/{}", id))).send().await?;
        expect_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }
}

async fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(anyhow!("{} {}", status.as_u16(), error_message(&body)))
}

/// Pull the `error` field out of an error body, falling back to the raw text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
