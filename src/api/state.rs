//! Application state for shared services

use std::sync::Arc;

use crate::domain::{
    CategoryCount, ColumnSummary, DatasetOverview, DomainError, Estimate, EstimateRequest,
    Listing, ListingsSource, ModelInfo, ModelSource,
};
use crate::infrastructure::services::{AnalyticsService, PredictionService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
    pub prediction_service: Arc<dyn PredictionServiceTrait>,
}

impl AppState {
    pub fn new(
        analytics_service: Arc<dyn AnalyticsServiceTrait>,
        prediction_service: Arc<dyn PredictionServiceTrait>,
    ) -> Self {
        Self {
            analytics_service,
            prediction_service,
        }
    }
}

/// Trait for descriptive analytics operations
#[async_trait::async_trait]
pub trait AnalyticsServiceTrait: Send + Sync {
    async fn median(&self, column: &str) -> Result<Option<f64>, DomainError>;
    async fn fraction_matching(&self, column: &str, value: &str) -> Result<f64, DomainError>;
    async fn top_categories(&self, column: &str, k: i64)
        -> Result<Vec<CategoryCount>, DomainError>;
    async fn summary_table(&self) -> Result<Vec<ColumnSummary>, DomainError>;
    async fn overview(&self) -> Result<DatasetOverview, DomainError>;
    async fn preview(&self, limit: Option<usize>) -> Result<Vec<Listing>, DomainError>;
    async fn distinct_values(&self, column: &str) -> Result<Vec<String>, DomainError>;
}

/// Trait for price estimation operations
#[async_trait::async_trait]
pub trait PredictionServiceTrait: Send + Sync {
    async fn estimate(&self, request: &EstimateRequest) -> Result<Estimate, DomainError>;
    async fn model_info(&self) -> Result<ModelInfo, DomainError>;
}

#[async_trait::async_trait]
impl<D: ListingsSource + 'static> AnalyticsServiceTrait for AnalyticsService<D> {
    async fn median(&self, column: &str) -> Result<Option<f64>, DomainError> {
        AnalyticsService::median(self, column).await
    }

    async fn fraction_matching(&self, column: &str, value: &str) -> Result<f64, DomainError> {
        AnalyticsService::fraction_matching(self, column, value).await
    }

    async fn top_categories(
        &self,
        column: &str,
        k: i64,
    ) -> Result<Vec<CategoryCount>, DomainError> {
        AnalyticsService::top_categories(self, column, k).await
    }

    async fn summary_table(&self) -> Result<Vec<ColumnSummary>, DomainError> {
        AnalyticsService::summary_table(self).await
    }

    async fn overview(&self) -> Result<DatasetOverview, DomainError> {
        AnalyticsService::overview(self).await
    }

    async fn preview(&self, limit: Option<usize>) -> Result<Vec<Listing>, DomainError> {
        AnalyticsService::preview(self, limit).await
    }

    async fn distinct_values(&self, column: &str) -> Result<Vec<String>, DomainError> {
        AnalyticsService::distinct_values(self, column).await
    }
}

#[async_trait::async_trait]
impl<D: ListingsSource + 'static, M: ModelSource + 'static> PredictionServiceTrait
    for PredictionService<D, M>
{
    async fn estimate(&self, request: &EstimateRequest) -> Result<Estimate, DomainError> {
        PredictionService::estimate(self, request).await
    }

    async fn model_info(&self) -> Result<ModelInfo, DomainError> {
        PredictionService::model_info(self).await
    }
}
