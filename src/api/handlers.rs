//! Request handlers for the transformation API

use axum::{
    extract::{Path, State},
    Json,
};
use serde::de::DeserializeOwned;

use super::error::AppError;
use super::models::{
    DeleteResponse, HealthResponse, TransformationCreateResponse, TransformationListItem,
    TransformationListResponse, TransformationStateResponse, TransformationUpdateModel,
    TransformationUpdateResponse,
};
use super::AppState;
use crate::error::TransformationError;
use crate::transformation::{
    Transformation, TransformationInput, TransformationOutput, TransformationState,
};

/// Parse a JSON request body, reporting malformed input as a validation error
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body)
        .map_err(|e| AppError::ValidationError(format!("Invalid JSON: {}", e)))
}

/// Liveness message
pub async fn heartbeat() -> &'static str {
    "Simple transformation app up and running"
}

/// Health check with registry size
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        transformations: state.registry.len().await,
    })
}

/// Create a new transformation
///
/// The body is optional; missing parameters take their defaults.
pub async fn new_transformation(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<TransformationCreateResponse>, AppError> {
    let parameters: TransformationInput = if body.trim().is_empty() {
        TransformationInput::default()
    } else {
        parse_body(&body)?
    };

    let id = state.registry.insert(Transformation::new(parameters)).await;

    Ok(Json(TransformationCreateResponse { id }))
}

/// Update the state of a transformation
///
/// Only `RUNNING` is accepted; it runs the computation to completion.
pub async fn update_transformation_state(
    State(state): State<AppState>,
    Path(transformation_id): Path<String>,
    body: String,
) -> Result<Json<TransformationUpdateResponse>, AppError> {
    let payload: TransformationUpdateModel = parse_body(&body)?;

    let requested = payload.state.parse::<TransformationState>()?;
    if requested != TransformationState::Running {
        return Err(TransformationError::UnsupportedState(payload.state).into());
    }

    state.registry.run(&transformation_id).await?;

    Ok(Json(TransformationUpdateResponse {
        id: transformation_id,
        state: requested,
    }))
}

/// Get the state of a transformation
pub async fn get_transformation_state(
    State(state): State<AppState>,
    Path(transformation_id): Path<String>,
) -> Result<Json<TransformationStateResponse>, AppError> {
    let current = state.registry.state(&transformation_id).await?;

    Ok(Json(TransformationStateResponse {
        id: transformation_id,
        state: current,
    }))
}

/// List all transformations
pub async fn get_transformations(State(state): State<AppState>) -> Json<TransformationListResponse> {
    let items = state
        .registry
        .list()
        .await
        .iter()
        .map(TransformationListItem::from)
        .collect();

    Json(TransformationListResponse { items })
}

/// Delete a transformation
pub async fn delete_transformation(
    State(state): State<AppState>,
    Path(transformation_id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.registry.remove(&transformation_id).await?;

    Ok(Json(DeleteResponse {
        status: format!("Transformation '{}' deleted successfully!", transformation_id),
    }))
}

/// Get a transformation's result
pub async fn get_results(
    State(state): State<AppState>,
    Path(transformation_id): Path<String>,
) -> Result<Json<TransformationOutput>, AppError> {
    let output = state.registry.result(&transformation_id).await?;
    tracing::debug!("Serving result of '{}'", transformation_id);

    Ok(Json(output))
}
