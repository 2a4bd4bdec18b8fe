use std::{any::Any, path::Path};

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir};

use crate::core::Services;

pub(crate) mod research;

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Unknown error".to_string()
    };

    log::error!("Request handler panicked: {}", message);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}

pub(crate) fn router(services: Services, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/company", post(research::company))
        .route("/api/news", post(research::news))
        .route("/api/lead", post(research::lead))
        .route("/health", get(research::health))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .with_state(services)
}
