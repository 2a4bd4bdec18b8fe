use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    core::{Pipeline, Services, research},
    error::ApiError,
    models::Briefing,
};

#[derive(Debug, Deserialize)]
pub(crate) struct QueryRequest {
    #[serde(default)]
    query: Option<String>,
}

async fn handle(
    pipeline: Pipeline,
    services: Services,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<Briefing>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        log::warn!("Rejected {} request: {}", pipeline, rejection.body_text());
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    })?;

    let query = match request.query {
        Some(query) if !query.trim().is_empty() => query,
        _ => return Err(ApiError::MissingQuery),
    };

    Ok(Json(research(pipeline, &query, &services).await))
}

pub(crate) async fn company(
    State(services): State<Services>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<Briefing>, ApiError> {
    handle(Pipeline::Company, services, payload).await
}

pub(crate) async fn news(
    State(services): State<Services>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<Briefing>, ApiError> {
    handle(Pipeline::News, services, payload).await
}

pub(crate) async fn lead(
    State(services): State<Services>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<Briefing>, ApiError> {
    handle(Pipeline::Lead, services, payload).await
}

pub(crate) async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
