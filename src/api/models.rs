//! Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};

use crate::transformation::{Transformation, TransformationInput, TransformationState};

#[derive(Debug, Serialize, Deserialize)]
pub struct TransformationCreateResponse {
    pub id: String,
}

/// Body of `PATCH /transformations/{id}`
///
/// The state is kept as a raw label so unsupported values can be reported
/// as such instead of failing body extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransformationUpdateModel {
    pub state: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransformationUpdateResponse {
    pub id: String,
    pub state: TransformationState,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransformationStateResponse {
    pub id: String,
    pub state: TransformationState,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransformationListItem {
    pub id: String,
    pub parameters: TransformationInput,
    pub state: TransformationState,
}

impl From<&Transformation> for TransformationListItem {
    fn from(transformation: &Transformation) -> Self {
        Self {
            id: transformation.id().to_string(),
            parameters: *transformation.parameters(),
            state: transformation.state(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransformationListResponse {
    pub items: Vec<TransformationListItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub transformations: usize,
}
