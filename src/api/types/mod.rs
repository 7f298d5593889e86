//! HTTP request/response types

pub mod dataset;
pub mod error;
pub mod json;
pub mod prediction;

pub use dataset::{
    FractionQuery, FractionResponse, MedianResponse, PreviewQuery, PreviewResponse,
    SummaryResponse, TopCategoriesResponse, TopQuery, ValuesResponse,
};
pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use prediction::{EstimateBody, EstimateResponse};
