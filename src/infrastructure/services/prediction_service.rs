//! Prediction service - price estimates from the trained model

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::domain::analytics;
use crate::domain::{
    DomainError, Estimate, EstimateRequest, FeatureVector, ListingsSource, ModelInfo, ModelSource,
};
use crate::infrastructure::observability::record_prediction;

/// Turns property attributes into a price estimate and a regional benchmark
#[derive(Debug)]
pub struct PredictionService<D: ListingsSource, M: ModelSource> {
    listings: Arc<D>,
    models: Arc<M>,
}

impl<D: ListingsSource, M: ModelSource> PredictionService<D, M> {
    pub fn new(listings: Arc<D>, models: Arc<M>) -> Self {
        Self { listings, models }
    }

    /// Estimate the price of one property
    pub async fn estimate(&self, request: &EstimateRequest) -> Result<Estimate, DomainError> {
        let start = Instant::now();
        let result = self.run_estimate(request).await;

        record_prediction(result.is_ok(), start.elapsed());
        result
    }

    async fn run_estimate(&self, request: &EstimateRequest) -> Result<Estimate, DomainError> {
        request.validate()?;

        let table = self.listings.load().await?;

        if !table.has_region(&request.region) {
            return Err(DomainError::invalid_input(format!(
                "unknown region '{}'",
                request.region
            )));
        }

        let features = FeatureVector::new(request.area_sqft, request.floor_no, request.bedroom);
        let model = self.models.load().await?;

        let predicted_price = model
            .predict(&[features.to_row()])
            .map_err(|e| match e {
                DomainError::PredictionFailed { .. } => e,
                other => DomainError::prediction_failed(other.to_string()),
            })?
            .first()
            .copied()
            .ok_or_else(|| DomainError::prediction_failed("model returned no prediction"))?;

        if !predicted_price.is_finite() {
            return Err(DomainError::prediction_failed(format!(
                "model returned a non-finite prediction ({})",
                predicted_price
            )));
        }

        let region_median = analytics::region_median(&table, &request.region);

        debug!(
            region = %request.region,
            predicted_price,
            region_median = ?region_median,
            "Estimate computed"
        );

        Ok(Estimate {
            predicted_price,
            region_median,
        })
    }

    /// Metadata of the loaded model
    pub async fn model_info(&self) -> Result<ModelInfo, DomainError> {
        Ok(self.models.load().await?.info())
    }
}
