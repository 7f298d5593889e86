use thiserror::Error;

/// Core domain errors
///
/// `Clone` so that a memoized load failure can be handed to every later caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Dataset unavailable: {message}")]
    DataUnavailable { message: String },

    #[error("Model unavailable: {message}")]
    ModelUnavailable { message: String },

    #[error("Column not found: {column}")]
    ColumnNotFound { column: String },

    #[error("Invalid k: {k} (must be greater than 0)")]
    InvalidK { k: i64 },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Prediction failed: {message}")]
    PredictionFailed { message: String },
}

impl DomainError {
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self::DataUnavailable {
            message: message.into(),
        }
    }

    pub fn model_unavailable(message: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            message: message.into(),
        }
    }

    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    pub fn invalid_k(k: i64) -> Self {
        Self::InvalidK { k }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn prediction_failed(message: impl Into<String>) -> Self {
        Self::PredictionFailed {
            message: message.into(),
        }
    }

    /// Stable snake_case code used in API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            Self::DataUnavailable { .. } => "data_unavailable",
            Self::ModelUnavailable { .. } => "model_unavailable",
            Self::ColumnNotFound { .. } => "column_not_found",
            Self::InvalidK { .. } => "invalid_k",
            Self::InvalidInput { .. } => "invalid_input",
            Self::PredictionFailed { .. } => "prediction_failed",
        }
    }
}
