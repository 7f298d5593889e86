//! Model metadata handler

use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::ModelInfo;

/// GET /v1/model
pub async fn get_model_info(State(state): State<AppState>) -> Result<Json<ModelInfo>, ApiError> {
    let info = state.prediction_service.model_info().await?;

    Ok(Json(info))
}
