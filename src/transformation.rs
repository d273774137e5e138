//! Hooke's Law transformation: parameters, lifecycle state and result.
//!
//! A transformation is created with a stiffness and a displacement, runs
//! exactly once, and afterwards holds `force = stiffness * displacement`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::TransformationError;

/// Default stiffness coefficient.
pub const DEFAULT_STIFFNESS: f64 = 78.0;

/// Default displacement.
pub const DEFAULT_DISPLACEMENT: f64 = 3.0;

/// Lifecycle marker of a transformation
///
/// `Running` is only ever used as a requested target state; a run completes
/// synchronously, so no stored transformation is observed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransformationState {
    Created,
    Running,
    Completed,
}

impl TransformationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransformationState::Created => "CREATED",
            TransformationState::Running => "RUNNING",
            TransformationState::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for TransformationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransformationState {
    type Err = TransformationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(TransformationState::Created),
            "RUNNING" => Ok(TransformationState::Running),
            "COMPLETED" => Ok(TransformationState::Completed),
            other => Err(TransformationError::UnsupportedState(other.to_string())),
        }
    }
}

/// Input parameters of a transformation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformationInput {
    #[serde(default = "default_stiffness", deserialize_with = "number_or_numeric_string")]
    pub stiffness: f64,

    #[serde(default = "default_displacement", deserialize_with = "number_or_numeric_string")]
    pub displacement: f64,
}

impl Default for TransformationInput {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            displacement: DEFAULT_DISPLACEMENT,
        }
    }
}

fn default_stiffness() -> f64 {
    DEFAULT_STIFFNESS
}

fn default_displacement() -> f64 {
    DEFAULT_DISPLACEMENT
}

/// Accept `3.0` as well as `"3.0"`; HTML form values arrive as strings.
///
/// Strings must parse to a finite number; `"NaN"` and `"inf"` are rejected.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| serde::de::Error::custom(format!("invalid number: {:?}", s))),
    }
}

/// Result of a completed transformation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformationOutput {
    pub result: f64,
}

/// Compute the force from Hooke's Law (F = k * x).
pub fn compute_hookes_law(stiffness: f64, displacement: f64) -> f64 {
    stiffness * displacement
}

/// A single Hooke's Law computation request.
///
/// The state is derived from the stored output, so a result exists exactly
/// when the transformation is `COMPLETED`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformation {
    id: String,
    parameters: TransformationInput,
    output: Option<TransformationOutput>,
}

impl Transformation {
    /// Create a new transformation with a fresh identifier.
    ///
    /// The transformation is not registered anywhere; the caller inserts it.
    pub fn new(parameters: TransformationInput) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            parameters,
            output: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parameters(&self) -> &TransformationInput {
        &self.parameters
    }

    pub fn state(&self) -> TransformationState {
        match self.output {
            Some(_) => TransformationState::Completed,
            None => TransformationState::Created,
        }
    }

    /// Run the computation.
    ///
    /// Fails with `AlreadyRun` if the transformation has completed before; in
    /// that case nothing is modified.
    pub fn run(&mut self) -> Result<&TransformationOutput, TransformationError> {
        if self.output.is_some() {
            tracing::warn!("Transformation '{}' already run", self.id);
            return Err(TransformationError::AlreadyRun(self.id.clone()));
        }

        let result = compute_hookes_law(self.parameters.stiffness, self.parameters.displacement);
        let output = self.output.insert(TransformationOutput { result });
        tracing::info!("Transformation '{}' completed with result {}", self.id, result);

        Ok(&*output)
    }

    /// Get the stored result, or `NotReady` before the first run.
    pub fn result(&self) -> Result<&TransformationOutput, TransformationError> {
        self.output
            .as_ref()
            .ok_or_else(|| TransformationError::NotReady(self.id.clone()))
    }
}
