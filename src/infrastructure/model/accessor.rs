//! Memoized model artifact source

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{error, info};

use super::artifact::PolynomialRegression;
use crate::domain::{DomainError, ModelSource, RegressionModel};

/// Deserializes the model artifact at most once per process
///
/// A failed load is kept; later calls get the same error without touching the file.
pub struct JsonModelAccessor {
    path: PathBuf,
    model: OnceCell<Result<Arc<dyn RegressionModel>, DomainError>>,
}

impl JsonModelAccessor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            model: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a load has been attempted
    pub fn is_initialized(&self) -> bool {
        self.model.initialized()
    }

    async fn read(&self) -> Result<Arc<dyn RegressionModel>, DomainError> {
        let result = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => PolynomialRegression::from_json(&json),
            Err(e) => Err(DomainError::model_unavailable(format!(
                "cannot read '{}': {}",
                self.path.display(),
                e
            ))),
        };

        match &result {
            Ok(model) => info!(
                path = %self.path.display(),
                degree = model.degree,
                terms = model.coefficients.len(),
                "Regression model loaded"
            ),
            Err(e) => error!(path = %self.path.display(), error = %e, "Regression model load failed"),
        }

        result.map(|model| Arc::new(model) as Arc<dyn RegressionModel>)
    }
}

impl std::fmt::Debug for JsonModelAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonModelAccessor")
            .field("path", &self.path)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

#[async_trait]
impl ModelSource for JsonModelAccessor {
    async fn load(&self) -> Result<Arc<dyn RegressionModel>, DomainError> {
        self.model.get_or_init(|| self.read()).await.clone()
    }
}
