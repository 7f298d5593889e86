//! Regression model seam and its source

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Descriptive metadata of a loaded model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub kind: String,
    pub format_version: u32,
    pub n_features: usize,
    pub degree: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_with: Option<String>,
}

/// A fitted model mapping feature rows to scalar prices
#[cfg_attr(test, automock)]
pub trait RegressionModel: Send + Sync {
    /// Predict one value per row of the batch
    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<f64>, DomainError>;

    fn info(&self) -> ModelInfo;
}

/// Read-only access to the trained model
///
/// Implementations must return the same model on every successful call.
#[async_trait]
pub trait ModelSource: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn RegressionModel>, DomainError>;
}

/// In-memory implementation of ModelSource
pub mod in_memory {
    use super::*;

    /// Serves a pre-built model, or a fixed error
    #[derive(Clone)]
    pub struct StaticModelSource {
        model: Result<Arc<dyn RegressionModel>, DomainError>,
    }

    impl StaticModelSource {
        pub fn new(model: Arc<dyn RegressionModel>) -> Self {
            Self { model: Ok(model) }
        }

        pub fn failing(error: DomainError) -> Self {
            Self { model: Err(error) }
        }
    }

    #[async_trait]
    impl ModelSource for StaticModelSource {
        async fn load(&self) -> Result<Arc<dyn RegressionModel>, DomainError> {
            self.model.clone()
        }
    }
}
