//! Polynomial regression artifact exported by the training pipeline

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, ModelInfo, RegressionModel};

/// Artifact layout this build can evaluate
pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

pub const POLYNOMIAL_REGRESSION_KIND: &str = "polynomial_regression";

/// Linear model over polynomial terms.
///
/// Term `j` is `Π_i x[i]^powers[j][i]`; the prediction is
/// `intercept + Σ_j coefficients[j] * term_j`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialRegression {
    pub format_version: u32,
    pub kind: String,
    pub n_features: usize,
    pub degree: u32,
    pub powers: Vec<Vec<u32>>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub trained_with: Option<String>,
}

impl PolynomialRegression {
    /// Parse and check an artifact document
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let artifact: Self = serde_json::from_str(json)
            .map_err(|e| DomainError::model_unavailable(format!("invalid model artifact: {}", e)))?;

        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.format_version != SUPPORTED_FORMAT_VERSION {
            return Err(DomainError::model_unavailable(format!(
                "artifact format version {} is not supported (expected {}); re-export the model",
                self.format_version, SUPPORTED_FORMAT_VERSION
            )));
        }

        if self.kind != POLYNOMIAL_REGRESSION_KIND {
            return Err(DomainError::model_unavailable(format!(
                "unsupported model kind '{}'",
                self.kind
            )));
        }

        if self.powers.len() != self.coefficients.len() {
            return Err(DomainError::model_unavailable(format!(
                "artifact has {} terms but {} coefficients",
                self.powers.len(),
                self.coefficients.len()
            )));
        }

        if let Some(term) = self.powers.iter().find(|term| term.len() != self.n_features) {
            return Err(DomainError::model_unavailable(format!(
                "term {:?} does not cover {} features",
                term, self.n_features
            )));
        }

        for term in &self.powers {
            if term.iter().any(|&power| i32::try_from(power).is_err()) {
                return Err(DomainError::model_unavailable(format!(
                    "term {:?} has an exponent above {}",
                    term,
                    i32::MAX
                )));
            }

            let term_degree = term
                .iter()
                .try_fold(0u32, |total, &power| total.checked_add(power));

            if term_degree.is_none_or(|d| d > self.degree) {
                return Err(DomainError::model_unavailable(format!(
                    "term {:?} exceeds degree {}",
                    term, self.degree
                )));
            }
        }

        Ok(())
    }

    fn predict_row(&self, row: &[f64]) -> Result<f64, DomainError> {
        if row.len() != self.n_features {
            return Err(DomainError::prediction_failed(format!(
                "expected {} features, got {}",
                self.n_features,
                row.len()
            )));
        }

        let mut value = self.intercept;

        for (term, coefficient) in self.powers.iter().zip(&self.coefficients) {
            let mut product = 1.0;

            for (&power, &x) in term.iter().zip(row) {
                let exponent = i32::try_from(power).map_err(|_| {
                    DomainError::prediction_failed(format!("exponent {} is out of range", power))
                })?;
                product *= x.powi(exponent);
            }

            value += coefficient * product;
        }

        Ok(value)
    }
}

impl RegressionModel for PolynomialRegression {
    fn predict(&self, batch: &[Vec<f64>]) -> Result<Vec<f64>, DomainError> {
        batch.iter().map(|row| self.predict_row(row)).collect()
    }

    fn info(&self) -> ModelInfo {
        ModelInfo {
            kind: self.kind.clone(),
            format_version: self.format_version,
            n_features: self.n_features,
            degree: self.degree,
            trained_with: self.trained_with.clone(),
        }
    }
}
