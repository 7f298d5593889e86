//! Price estimate request and response types

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{Estimate, EstimateRequest};

/// POST /v1/predictions body
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EstimateBody {
    #[validate(range(exclusive_min = 0.0))]
    pub area_sqft: f64,
    pub floor_no: f64,
    pub bedroom: u32,
    #[validate(length(min = 1))]
    pub region: String,
}

impl From<EstimateBody> for EstimateRequest {
    fn from(body: EstimateBody) -> Self {
        EstimateRequest::new(body.area_sqft, body.floor_no, body.bedroom, body.region)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub predicted_price: f64,
    pub region_median: Option<f64>,
}

impl From<Estimate> for EstimateResponse {
    fn from(estimate: Estimate) -> Self {
        Self {
            predicted_price: estimate.predicted_price,
            region_median: estimate.region_median,
        }
    }
}
