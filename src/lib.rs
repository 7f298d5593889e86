//! Realty Price Lab
//!
//! Descriptive analytics over a residential listings dataset and price
//! estimates from a pre-trained regression model:
//! - Lazily loaded, cached dataset and model accessors
//! - Column statistics, frequency rankings and summary tables
//! - Price estimates with the regional median as context

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{
    dataset::CsvListingsAccessor,
    model::JsonModelAccessor,
    services::{AnalyticsService, PredictionService},
};
use tracing::{info, warn};

/// Create the application state with custom configuration.
///
/// Nothing is read here; the accessors load on first use.
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    if config.analytics.max_preview_rows == 0 {
        anyhow::bail!("analytics.max_preview_rows must be at least 1");
    }

    let listings = Arc::new(CsvListingsAccessor::new(config.dataset.path.clone()));
    let models = Arc::new(JsonModelAccessor::new(config.model.path.clone()));

    info!(
        dataset = %listings.path().display(),
        model = %models.path().display(),
        "Configured data sources"
    );

    let analytics_service = AnalyticsService::new(listings.clone(), config.analytics.max_preview_rows);
    let prediction_service = PredictionService::new(listings, models);

    Ok(AppState::new(
        Arc::new(analytics_service),
        Arc::new(prediction_service),
    ))
}

/// Load the dataset and the model up front; failures are logged, not fatal
pub async fn warm_up(state: &AppState) {
    match state.analytics_service.overview().await {
        Ok(overview) => info!(listings = overview.listings, "Dataset ready"),
        Err(e) => warn!(error = %e, "Dataset unavailable"),
    }

    match state.prediction_service.model_info().await {
        Ok(model) => info!(kind = %model.kind, degree = model.degree, "Model ready"),
        Err(e) => warn!(error = %e, "Model unavailable"),
    }
}
