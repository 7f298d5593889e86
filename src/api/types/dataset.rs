//! Dataset analytics request and response types

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryCount, ColumnSummary, Listing};

/// Ranking size when the caller does not give one
pub const DEFAULT_TOP_K: i64 = 12;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FractionQuery {
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopQuery {
    pub k: Option<i64>,
}

impl TopQuery {
    pub fn k(&self) -> i64 {
        self.k.unwrap_or(DEFAULT_TOP_K)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedianResponse {
    pub column: String,
    pub median: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractionResponse {
    pub column: String,
    pub value: String,
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopCategoriesResponse {
    pub column: String,
    pub categories: Vec<CategoryCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub columns: Vec<ColumnSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewResponse {
    pub count: usize,
    pub rows: Vec<Listing>,
}

impl PreviewResponse {
    pub fn new(rows: Vec<Listing>) -> Self {
        Self {
            count: rows.len(),
            rows,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuesResponse {
    pub column: String,
    pub values: Vec<String>,
}
