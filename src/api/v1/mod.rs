//! Versioned analytics and prediction endpoints

pub mod dataset;
pub mod model;
pub mod predictions;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/dataset/overview", get(dataset::get_overview))
        .route("/dataset/preview", get(dataset::get_preview))
        .route("/dataset/summary", get(dataset::get_summary))
        .route("/dataset/columns/{column}/median", get(dataset::get_median))
        .route(
            "/dataset/columns/{column}/fraction",
            get(dataset::get_fraction),
        )
        .route("/dataset/columns/{column}/top", get(dataset::get_top_categories))
        .route("/dataset/columns/{column}/values", get(dataset::get_values))
        .route("/predictions", post(predictions::create_estimate))
        .route("/model", get(model::get_model_info))
}
