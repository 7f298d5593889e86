//! Observability infrastructure - Tracing and Metrics

mod metrics;
mod tracing_setup;

pub use metrics::{
    create_metrics_router, init_metrics, record_http_request, record_prediction, PrometheusMetrics,
};
pub use tracing_setup::{init_tracing, shutdown_tracing};
