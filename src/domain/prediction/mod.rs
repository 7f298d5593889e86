//! Prediction domain - feature assembly and the model seam

mod estimate;
mod feature;
mod model;

pub use estimate::{Estimate, EstimateRequest};
pub use feature::{FeatureVector, FEATURE_VECTOR_LEN};
pub use model::{in_memory::StaticModelSource, ModelInfo, ModelSource, RegressionModel};

#[cfg(test)]
pub use model::MockRegressionModel;
