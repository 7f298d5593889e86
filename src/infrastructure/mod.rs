//! Infrastructure layer - Dataset and model loading, services, observability

pub mod dataset;
pub mod logging;
pub mod model;
pub mod observability;
pub mod services;
