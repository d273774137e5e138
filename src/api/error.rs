//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::TransformationError;

#[derive(Debug)]
pub enum AppError {
    Transformation(TransformationError),
    ValidationError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Transformation(e) => match e {
                TransformationError::NotFound(_) => StatusCode::NOT_FOUND,
                TransformationError::UnsupportedState(_) => StatusCode::BAD_REQUEST,
                TransformationError::AlreadyRun(_) => StatusCode::CONFLICT,
                TransformationError::NotReady(_) => StatusCode::CONFLICT,
            },
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Transformation(e) => e.to_string(),
            AppError::ValidationError(msg) => format!("Validation error: {}", msg),
        };

        tracing::warn!("Request failed with {}: {}", status, message);

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<TransformationError> for AppError {
    fn from(e: TransformationError) -> Self {
        AppError::Transformation(e)
    }
}
