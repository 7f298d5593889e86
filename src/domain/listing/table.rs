//! Immutable in-memory listings table

use chrono::{DateTime, Utc};

use super::{Column, ColumnKind, Listing};
use crate::domain::DomainError;

/// The full listings dataset
///
/// Rows are fixed at construction; consumers only ever see shared references.
#[derive(Debug, Clone)]
pub struct ListingsTable {
    rows: Vec<Listing>,
    source: String,
    loaded_at: DateTime<Utc>,
}

impl ListingsTable {
    /// Build a table from parsed rows. An empty row set is rejected.
    pub fn new(rows: Vec<Listing>, source: impl Into<String>) -> Result<Self, DomainError> {
        let source = source.into();

        if rows.is_empty() {
            return Err(DomainError::data_unavailable(format!(
                "dataset '{}' contains no listings",
                source
            )));
        }

        Ok(Self {
            rows,
            source,
            loaded_at: Utc::now(),
        })
    }

    pub fn rows(&self) -> &[Listing] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Non-null values of a numeric column, in row order
    pub fn numeric_values(&self, column: Column) -> Result<Vec<f64>, DomainError> {
        require_kind(column, ColumnKind::Numeric)?;
        Ok(self.rows.iter().filter_map(|row| row.number(column)).collect())
    }

    /// Cells of a categorical column, nulls included, in row order
    pub fn text_values(
        &self,
        column: Column,
    ) -> Result<impl Iterator<Item = Option<&str>> + '_, DomainError> {
        require_kind(column, ColumnKind::Categorical)?;
        Ok(self.rows.iter().map(move |row| row.text(column)))
    }

    /// Whether any listing carries this region label
    pub fn has_region(&self, region: &str) -> bool {
        self.rows
            .iter()
            .any(|row| row.region.as_deref() == Some(region))
    }

    /// Non-null prices of the listings in one region
    pub fn prices_in_region(&self, region: &str) -> Vec<f64> {
        self.rows
            .iter()
            .filter(|row| row.region.as_deref() == Some(region))
            .filter_map(|row| row.price_lakh)
            .collect()
    }
}

fn require_kind(column: Column, expected: ColumnKind) -> Result<(), DomainError> {
    if column.kind() == expected {
        return Ok(());
    }

    let wanted = match expected {
        ColumnKind::Numeric => "numeric",
        ColumnKind::Categorical => "categorical",
    };

    Err(DomainError::invalid_input(format!(
        "column '{}' is not {}",
        column, wanted
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(region: &str, price: Option<f64>) -> Listing {
        Listing {
            region: Some(region.to_string()),
            price_lakh: price,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_table_is_data_unavailable() {
        let err = ListingsTable::new(vec![], "empty.csv").unwrap_err();
        assert!(matches!(err, DomainError::DataUnavailable { .. }));
    }

    #[test]
    fn test_numeric_values_skip_nulls() {
        let table = ListingsTable::new(
            vec![listing("A", Some(10.0)), listing("A", None), listing("B", Some(30.0))],
            "test",
        )
        .unwrap();

        assert_eq!(table.numeric_values(Column::PriceLakh).unwrap(), vec![10.0, 30.0]);
    }

    #[test]
    fn test_numeric_values_rejects_categorical_column() {
        let table = ListingsTable::new(vec![listing("A", Some(1.0))], "test").unwrap();
        let err = table.numeric_values(Column::Region).unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput { .. }));
    }

    #[test]
    fn test_region_lookup() {
        let table = ListingsTable::new(
            vec![listing("Thane", Some(80.0)), listing("Worli", None)],
            "test",
        )
        .unwrap();

        assert!(table.has_region("Worli"));
        assert!(!table.has_region("Andheri"));
        assert_eq!(table.prices_in_region("Thane"), vec![80.0]);
        assert!(table.prices_in_region("Worli").is_empty());
    }
}
