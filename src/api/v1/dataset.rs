//! Dataset analytics handlers

use axum::extract::{Path, Query, State};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, FractionQuery, FractionResponse, Json, MedianResponse, PreviewQuery,
    PreviewResponse, SummaryResponse, TopCategoriesResponse, TopQuery, ValuesResponse,
};
use crate::domain::DatasetOverview;

/// GET /v1/dataset/overview
pub async fn get_overview(State(state): State<AppState>) -> Result<Json<DatasetOverview>, ApiError> {
    let overview = state.analytics_service.overview().await?;

    Ok(Json(overview))
}

/// GET /v1/dataset/preview
pub async fn get_preview(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<PreviewResponse>, ApiError> {
    debug!(limit = ?query.limit, "Previewing listings");

    let rows = state.analytics_service.preview(query.limit).await?;

    Ok(Json(PreviewResponse::new(rows)))
}

/// GET /v1/dataset/summary
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, ApiError> {
    let columns = state.analytics_service.summary_table().await?;

    Ok(Json(SummaryResponse { columns }))
}

/// GET /v1/dataset/columns/{column}/median
pub async fn get_median(
    State(state): State<AppState>,
    Path(column): Path<String>,
) -> Result<Json<MedianResponse>, ApiError> {
    debug!(column = %column, "Computing median");

    let median = state.analytics_service.median(&column).await?;

    Ok(Json(MedianResponse { column, median }))
}

/// GET /v1/dataset/columns/{column}/fraction?value=
pub async fn get_fraction(
    State(state): State<AppState>,
    Path(column): Path<String>,
    Query(query): Query<FractionQuery>,
) -> Result<Json<FractionResponse>, ApiError> {
    debug!(column = %column, value = %query.value, "Computing fraction");

    let fraction = state
        .analytics_service
        .fraction_matching(&column, &query.value)
        .await?;

    Ok(Json(FractionResponse {
        column,
        value: query.value,
        fraction,
    }))
}

/// GET /v1/dataset/columns/{column}/top?k=
pub async fn get_top_categories(
    State(state): State<AppState>,
    Path(column): Path<String>,
    Query(query): Query<TopQuery>,
) -> Result<Json<TopCategoriesResponse>, ApiError> {
    let k = query.k();
    debug!(column = %column, k, "Ranking categories");

    let categories = state.analytics_service.top_categories(&column, k).await?;

    Ok(Json(TopCategoriesResponse { column, categories }))
}

/// GET /v1/dataset/columns/{column}/values
pub async fn get_values(
    State(state): State<AppState>,
    Path(column): Path<String>,
) -> Result<Json<ValuesResponse>, ApiError> {
    let values = state.analytics_service.distinct_values(&column).await?;

    Ok(Json(ValuesResponse { column, values }))
}
