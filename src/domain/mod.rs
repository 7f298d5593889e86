//! Domain layer - Core business logic and entities

pub mod analytics;
pub mod error;
pub mod listing;
pub mod prediction;

pub use analytics::{CategoryCount, ColumnSummary, DatasetOverview};
pub use error::DomainError;
pub use listing::{
    Column, ColumnKind, InMemoryListingsSource, Listing, ListingsSource, ListingsTable,
};
pub use prediction::{
    Estimate, EstimateRequest, FeatureVector, ModelInfo, ModelSource, RegressionModel,
    StaticModelSource, FEATURE_VECTOR_LEN,
};
