//! # Hooke's Law: Transformation Service
//!
//! Exposes a single physics calculation, `force = stiffness * displacement`,
//! as a REST resource with a create / run / read / list / delete lifecycle.
//!
//! ## Lifecycle
//!
//! ```text
//! POST   /transformations              -> {"id": "..."}          (CREATED)
//! PATCH  /transformations/{id}          {"state": "RUNNING"}      (COMPLETED)
//! GET    /datasets/{id}                -> {"result": 234.0}
//! DELETE /transformations/{id}
//! ```
//!
//! ## Example
//!
//! ```
//! use hookes_law::{Transformation, TransformationInput, TransformationState};
//!
//! let mut t = Transformation::new(TransformationInput { stiffness: 78.0, displacement: 3.0 });
//! assert_eq!(t.run().unwrap().result, 234.0);
//! assert_eq!(t.state(), TransformationState::Completed);
//! ```

// Core modules
pub mod error;
pub mod transformation;
pub mod registry;

// HTTP surface
pub mod api;
pub mod config;

// Re-export key types
pub use error::TransformationError;
pub use transformation::{
    compute_hookes_law, Transformation, TransformationInput, TransformationOutput,
    TransformationState,
};
pub use registry::TransformationRegistry;
pub use api::{router, AppError, AppState};
pub use config::ServerConfig;
