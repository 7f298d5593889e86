//! Estimate request and result

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Property attributes a price estimate is asked for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub area_sqft: f64,
    pub floor_no: f64,
    pub bedroom: u32,
    pub region: String,
}

impl EstimateRequest {
    pub fn new(area_sqft: f64, floor_no: f64, bedroom: u32, region: impl Into<String>) -> Self {
        Self {
            area_sqft,
            floor_no,
            bedroom,
            region: region.into(),
        }
    }

    /// Checks that need no dataset or model
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.area_sqft.is_finite() || self.area_sqft <= 0.0 {
            return Err(DomainError::invalid_input(format!(
                "area_sqft must be a positive number, got {}",
                self.area_sqft
            )));
        }

        if !self.floor_no.is_finite() {
            return Err(DomainError::invalid_input("floor_no must be a finite number"));
        }

        if self.region.trim().is_empty() {
            return Err(DomainError::invalid_input("region must not be empty"));
        }

        Ok(())
    }
}

/// Point estimate plus the contextual regional median
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub predicted_price: f64,
    pub region_median: Option<f64>,
}
