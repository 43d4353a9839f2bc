use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};

use crate::controllers::car_controller::CarController;
use crate::dto::car_dto::{CarResponse, CreateCarRequest, UpdateCarRequest};
use crate::routes::status_routes::route_not_found;
use crate::state::AppState;
use crate::utils::errors::AppError;

// Unsupported methods answer like unknown routes
pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_cars).post(create_car).fallback(route_not_found),
        )
        .route(
            "/:id",
            get(get_car)
                .patch(update_car)
                .delete(delete_car)
                .fallback(route_not_found),
        )
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<CarResponse>>, AppError> {
    let controller = CarController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CarResponse>, AppError> {
    let controller = CarController::new(state.store.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn create_car(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<CarResponse>), AppError> {
    let Json(body) = payload?;
    let request = CreateCarRequest::from_body(body)?;
    let controller = CarController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<CarResponse>, AppError> {
    let Json(body) = payload?;
    let request = UpdateCarRequest::from_body(body)?;
    let controller = CarController::new(state.store.clone());
    let response = controller.update(&id, request).await?;
    Ok(Json(response))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let controller = CarController::new(state.store.clone());
    controller.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
