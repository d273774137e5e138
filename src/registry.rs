//! In-memory registry of live transformations.
//!
//! The registry is an explicitly owned handle passed to request handlers
//! through application state. Clones share the same underlying map.

use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::TransformationError;
use crate::transformation::{Transformation, TransformationOutput, TransformationState};

/// Registry of transformations keyed by identifier, in insertion order
#[derive(Debug, Clone, Default)]
pub struct TransformationRegistry {
    transformations: Arc<RwLock<IndexMap<String, Transformation>>>,
}

impl TransformationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transformation, keyed by its identifier.
    ///
    /// Returns the identifier for convenience.
    pub async fn insert(&self, transformation: Transformation) -> String {
        let id = transformation.id().to_string();
        self.transformations
            .write()
            .await
            .insert(id.clone(), transformation);
        tracing::info!("Transformation '{}' registered", id);
        id
    }

    /// Get a snapshot of a transformation
    pub async fn get(&self, id: &str) -> Result<Transformation, TransformationError> {
        self.transformations
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| TransformationError::NotFound(id.to_string()))
    }

    /// Snapshot of all transformations, in insertion order
    pub async fn list(&self) -> Vec<Transformation> {
        let transformations: Vec<Transformation> =
            self.transformations.read().await.values().cloned().collect();
        tracing::debug!("Listing {} transformations", transformations.len());
        transformations
    }

    /// Remove a transformation irreversibly
    pub async fn remove(&self, id: &str) -> Result<Transformation, TransformationError> {
        let removed = self
            .transformations
            .write()
            .await
            .shift_remove(id)
            .ok_or_else(|| TransformationError::NotFound(id.to_string()))?;
        tracing::info!("Transformation '{}' deleted", id);
        Ok(removed)
    }

    /// Run a registered transformation.
    ///
    /// Lookup, state check and state change all happen under one write lock,
    /// so concurrent requests for the same id cannot both succeed.
    pub async fn run(&self, id: &str) -> Result<TransformationOutput, TransformationError> {
        let mut transformations = self.transformations.write().await;
        let transformation = transformations
            .get_mut(id)
            .ok_or_else(|| TransformationError::NotFound(id.to_string()))?;

        transformation.run().copied()
    }

    /// Current state of a registered transformation
    pub async fn state(&self, id: &str) -> Result<TransformationState, TransformationError> {
        self.transformations
            .read()
            .await
            .get(id)
            .map(Transformation::state)
            .ok_or_else(|| TransformationError::NotFound(id.to_string()))
    }

    /// Result of a registered transformation; `NotReady` until it has run
    pub async fn result(&self, id: &str) -> Result<TransformationOutput, TransformationError> {
        let transformations = self.transformations.read().await;
        let transformation = transformations
            .get(id)
            .ok_or_else(|| TransformationError::NotFound(id.to_string()))?;

        transformation.result().copied()
    }

    pub async fn len(&self) -> usize {
        self.transformations.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.transformations.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformation::TransformationInput;

    fn input(stiffness: f64, displacement: f64) -> TransformationInput {
        TransformationInput { stiffness, displacement }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let registry = TransformationRegistry::new();
        assert!(registry.is_empty().await);

        let id = registry.insert(Transformation::new(input(2.0, 4.0))).await;
        let t = registry.get(&id).await.unwrap();

        assert_eq!(t.id(), id);
        assert_eq!(t.parameters(), &input(2.0, 4.0));
        assert_eq!(t.state(), TransformationState::Created);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let registry = TransformationRegistry::new();
        let missing = || TransformationError::NotFound("missing".to_string());

        assert_eq!(registry.get("missing").await.unwrap_err(), missing());
        assert_eq!(registry.state("missing").await.unwrap_err(), missing());
        assert_eq!(registry.result("missing").await.unwrap_err(), missing());
        assert_eq!(registry.run("missing").await.unwrap_err(), missing());
        assert_eq!(registry.remove("missing").await.unwrap_err(), missing());
    }

    #[tokio::test]
    async fn test_run_then_result() {
        let registry = TransformationRegistry::new();
        let id = registry.insert(Transformation::new(TransformationInput::default())).await;

        assert!(matches!(
            registry.result(&id).await,
            Err(TransformationError::NotReady(_))
        ));

        let output = registry.run(&id).await.unwrap();
        assert_eq!(output.result, 234.0);
        assert_eq!(registry.state(&id).await.unwrap(), TransformationState::Completed);
        assert_eq!(registry.result(&id).await.unwrap().result, 234.0);
    }

    #[tokio::test]
    async fn test_second_run_is_rejected() {
        let registry = TransformationRegistry::new();
        let id = registry.insert(Transformation::new(input(5.0, 5.0))).await;

        registry.run(&id).await.unwrap();
        assert_eq!(
            registry.run(&id).await.unwrap_err(),
            TransformationError::AlreadyRun(id.clone())
        );
        assert_eq!(registry.result(&id).await.unwrap().result, 25.0);
    }

    #[tokio::test]
    async fn test_concurrent_runs_succeed_once() {
        let registry = TransformationRegistry::new();
        let id = registry.insert(Transformation::new(TransformationInput::default())).await;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let registry = registry.clone();
            let id = id.clone();
            handles.push(tokio::spawn(async move { registry.run(&id).await }));
        }

        let mut succeeded = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                succeeded += 1;
            }
        }
        assert_eq!(succeeded, 1);
    }

    #[tokio::test]
    async fn test_remove_twice() {
        let registry = TransformationRegistry::new();
        let id = registry.insert(Transformation::new(TransformationInput::default())).await;

        assert_eq!(registry.remove(&id).await.unwrap().id(), id);
        assert!(matches!(registry.get(&id).await, Err(TransformationError::NotFound(_))));
        assert!(matches!(registry.remove(&id).await, Err(TransformationError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order_after_remove() {
        let registry = TransformationRegistry::new();
        let mut ids = Vec::new();
        for i in 0..4 {
            ids.push(registry.insert(Transformation::new(input(i as f64, 1.0))).await);
        }

        registry.remove(&ids[1]).await.unwrap();
        let listed: Vec<String> = registry
            .list()
            .await
            .iter()
            .map(|t| t.id().to_string())
            .collect();

        assert_eq!(listed, vec![ids[0].clone(), ids[2].clone(), ids[3].clone()]);
    }
}
