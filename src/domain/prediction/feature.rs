//! Fixed-order feature vector fed to the regression model

use serde::Serialize;

/// Number of slots the trained model expects
pub const FEATURE_VECTOR_LEN: usize = 7;

const AREA_SLOT: usize = 0;
const FLOOR_SLOT: usize = 1;
const BEDROOM_SLOT: usize = 2;

/// Positional model input: area, floor number, bedroom count, then zeros.
///
/// Slots 3..7 are always zero, matching the layout the model was fitted on.
/// Only the first three inputs are known here; whether the padding stands for
/// dropped features or hides an input mismatch cannot be told from the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector([f64; FEATURE_VECTOR_LEN]);

impl FeatureVector {
    pub fn new(area_sqft: f64, floor_no: f64, bedroom: u32) -> Self {
        let mut slots = [0.0; FEATURE_VECTOR_LEN];
        slots[AREA_SLOT] = area_sqft;
        slots[FLOOR_SLOT] = floor_no;
        slots[BEDROOM_SLOT] = f64::from(bedroom);
        Self(slots)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Owned row for a model batch
    pub fn to_row(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_layout() {
        let vector = FeatureVector::new(1000.0, 3.0, 2);
        assert_eq!(vector.as_slice(), &[1000.0, 3.0, 2.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_to_row_has_fixed_length() {
        assert_eq!(FeatureVector::new(1.0, 0.0, 0).to_row().len(), FEATURE_VECTOR_LEN);
    }
}
