//! Health, readiness and liveness probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::api::types::Json;
use serde::Serialize;

use super::state::AppState;
use crate::domain::DomainError;

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Simple health check - returns 200 if the service is running
/// Used for basic liveness probes
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check with dependency verification
/// Reports whether the dataset and the model can be loaded
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let checks = vec![check_dataset(&state).await, check_model(&state).await];
    let overall_status = overall_status(&checks);

    let latency = start.elapsed().as_millis() as u64;
    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
        latency_ms: Some(latency),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded => StatusCode::OK, // Analytics still served
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check - simple check to verify the service is running
/// Used for Kubernetes liveness probes to detect crashes
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Without the dataset nothing works; without the model only estimates fail
fn overall_status(checks: &[HealthCheck]) -> HealthStatus {
    let dataset_down = checks
        .iter()
        .any(|c| c.name == DATASET_CHECK && c.status != HealthStatus::Healthy);
    let any_down = checks.iter().any(|c| c.status != HealthStatus::Healthy);

    if dataset_down {
        HealthStatus::Unhealthy
    } else if any_down {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    }
}

const DATASET_CHECK: &str = "dataset";
const MODEL_CHECK: &str = "model";

async fn check_dataset(state: &AppState) -> HealthCheck {
    let start = Instant::now();
    let result = state.analytics_service.overview().await.map(|_| ());

    to_check(DATASET_CHECK, result, start)
}

async fn check_model(state: &AppState) -> HealthCheck {
    let start = Instant::now();
    let result = state.prediction_service.model_info().await.map(|_| ());

    to_check(MODEL_CHECK, result, start)
}

fn to_check(name: &str, result: Result<(), DomainError>, start: Instant) -> HealthCheck {
    let (status, message) = match result {
        Ok(()) => (HealthStatus::Healthy, None),
        Err(e) => (HealthStatus::Unhealthy, Some(e.to_string())),
    };

    HealthCheck {
        name: name.to_string(),
        status,
        message,
        latency_ms: Some(start.elapsed().as_millis() as u64),
    }
}
