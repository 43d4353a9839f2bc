//! Request logging middleware
//!
//! Logs one line per request once the response is ready, plus the body of
//! requests that carry one.

use std::time::Instant;

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};
use tracing::{debug, info};

use crate::utils::errors::AppError;

/// Same ceiling axum applies to JSON bodies by default
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

fn carries_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

pub async fn request_log(request: Request, next: Next) -> Result<Response, AppError> {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let request = if carries_body(&method) {
        let (parts, body) = request.into_parts();
        let bytes = to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| AppError::BadRequest(format!("Unreadable request body: {}", e)))?;
        debug!(%method, %path, body = %String::from_utf8_lossy(&bytes), "request body");
        Request::from_parts(parts, Body::from(bytes))
    } else {
        request
    };

    let response = next.run(request).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request completed"
    );

    Ok(response)
}
