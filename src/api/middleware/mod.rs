//! API middleware components

pub mod logging;
pub mod metrics;

pub use logging::logging_middleware;
pub use metrics::metrics_middleware;

use axum::{body::Body, extract::MatchedPath, http::Request};

/// Route template when matched, raw path otherwise
fn matched_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}
