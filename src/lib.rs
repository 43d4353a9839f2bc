//! Car inventory service
//!
//! A REST API over an in-memory collection of cars: list, fetch, create,
//! partially update and delete records under `/api/cars` (and the legacy
//! `/cars` prefix).

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use middleware::{cors::cors_middleware, request_log::request_log};
use routes::{car_routes::create_car_router, status_routes};
use state::AppState;
use utils::errors::panic_response;

/// Build the full HTTP application around `state`.
pub fn create_app(state: AppState) -> Router {
    let cors_origins = state.config.cors_origins.clone();

    let router = Router::new()
        .merge(status_routes::create_status_router())
        .nest("/api/cars", create_car_router())
        // Legacy prefix kept for older clients
        .nest("/cars", create_car_router())
        .fallback(status_routes::route_not_found)
        .with_state(state);

    with_middleware(router, &cors_origins)
}

/// Panic recovery, request logging and CORS, innermost first.
pub fn with_middleware(router: Router, cors_origins: &[String]) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(axum::middleware::from_fn(request_log))
        .layer(cors_middleware(cors_origins))
}
