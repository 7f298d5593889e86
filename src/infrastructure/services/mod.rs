//! Infrastructure services

mod analytics_service;
mod prediction_service;

pub use analytics_service::{AnalyticsService, DEFAULT_PREVIEW_ROWS};
pub use prediction_service::PredictionService;
