//! Price estimate handler

use axum::extract::State;
use tracing::{debug, warn};
use validator::Validate;

use crate::api::state::AppState;
use crate::api::types::{ApiError, EstimateBody, EstimateResponse, Json};
use crate::domain::{DomainError, EstimateRequest};

/// POST /v1/predictions
pub async fn create_estimate(
    State(state): State<AppState>,
    Json(body): Json<EstimateBody>,
) -> Result<Json<EstimateResponse>, ApiError> {
    body.validate()?;

    let request: EstimateRequest = body.into();
    debug!(region = %request.region, area_sqft = request.area_sqft, "Estimating price");

    let estimate = state
        .prediction_service
        .estimate(&request)
        .await
        .inspect_err(|e| {
            if matches!(e, DomainError::PredictionFailed { .. }) {
                warn!(error = %e, "Price estimate failed");
            }
        })?;

    Ok(Json(estimate.into()))
}
