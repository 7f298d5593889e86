//! Listing entity and the closed column schema

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Availability label counted as move-in ready
pub const READY_TO_MOVE: &str = "Ready To Move";

/// One property record of the listings dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "Price_Lakh")]
    pub price_lakh: Option<f64>,

    #[serde(rename = "Area_SqFt")]
    pub area_sqft: Option<f64>,

    #[serde(rename = "Rate_SqFt")]
    pub rate_sqft: Option<f64>,

    #[serde(rename = "Availability")]
    pub availability: Option<String>,

    #[serde(rename = "Region")]
    pub region: Option<String>,

    #[serde(rename = "Floor_No")]
    pub floor_no: Option<f64>,

    #[serde(rename = "Bathroom")]
    pub bathroom: Option<f64>,

    #[serde(rename = "Bedroom")]
    pub bedroom: Option<f64>,

    #[serde(rename = "Property_Age")]
    pub property_age: Option<String>,
}

/// A single cell, typed by its column kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Number(Option<f64>),
    Text(Option<&'a str>),
}

impl Listing {
    /// Read the cell for a column
    pub fn value(&self, column: Column) -> CellValue<'_> {
        match column {
            Column::PriceLakh => CellValue::Number(self.price_lakh),
            Column::AreaSqFt => CellValue::Number(self.area_sqft),
            Column::RateSqFt => CellValue::Number(self.rate_sqft),
            Column::FloorNo => CellValue::Number(self.floor_no),
            Column::Bathroom => CellValue::Number(self.bathroom),
            Column::Bedroom => CellValue::Number(self.bedroom),
            Column::Availability => CellValue::Text(self.availability.as_deref()),
            Column::Region => CellValue::Text(self.region.as_deref()),
            Column::PropertyAge => CellValue::Text(self.property_age.as_deref()),
        }
    }

    /// Numeric cell, `None` for nulls and for categorical columns
    pub fn number(&self, column: Column) -> Option<f64> {
        match self.value(column) {
            CellValue::Number(value) => value,
            CellValue::Text(_) => None,
        }
    }

    /// Text cell, `None` for nulls and for numeric columns
    pub fn text(&self, column: Column) -> Option<&str> {
        match self.value(column) {
            CellValue::Text(value) => value,
            CellValue::Number(_) => None,
        }
    }
}

/// Whether a column holds numbers or category labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// The columns the service knows about, in dataset order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "Price_Lakh")]
    PriceLakh,
    #[serde(rename = "Area_SqFt")]
    AreaSqFt,
    #[serde(rename = "Rate_SqFt")]
    RateSqFt,
    #[serde(rename = "Availability")]
    Availability,
    #[serde(rename = "Region")]
    Region,
    #[serde(rename = "Floor_No")]
    FloorNo,
    #[serde(rename = "Bathroom")]
    Bathroom,
    #[serde(rename = "Bedroom")]
    Bedroom,
    #[serde(rename = "Property_Age")]
    PropertyAge,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::PriceLakh,
        Column::AreaSqFt,
        Column::RateSqFt,
        Column::Availability,
        Column::Region,
        Column::FloorNo,
        Column::Bathroom,
        Column::Bedroom,
        Column::PropertyAge,
    ];

    /// Header name as it appears in the CSV source
    pub fn name(&self) -> &'static str {
        match self {
            Column::PriceLakh => "Price_Lakh",
            Column::AreaSqFt => "Area_SqFt",
            Column::RateSqFt => "Rate_SqFt",
            Column::Availability => "Availability",
            Column::Region => "Region",
            Column::FloorNo => "Floor_No",
            Column::Bathroom => "Bathroom",
            Column::Bedroom => "Bedroom",
            Column::PropertyAge => "Property_Age",
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Availability | Column::Region | Column::PropertyAge => ColumnKind::Categorical,
            _ => ColumnKind::Numeric,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind() == ColumnKind::Numeric
    }

    /// Numeric columns, in schema order
    pub fn numeric() -> impl Iterator<Item = Column> {
        Self::ALL.into_iter().filter(Column::is_numeric)
    }
}

impl FromStr for Column {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.name() == s)
            .ok_or_else(|| DomainError::column_not_found(s))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_from_header_name() {
        assert_eq!("Price_Lakh".parse::<Column>().unwrap(), Column::PriceLakh);
        assert_eq!("Property_Age".parse::<Column>().unwrap(), Column::PropertyAge);
    }

    #[test]
    fn test_unknown_column_is_column_not_found() {
        let err = "price_lakh".parse::<Column>().unwrap_err();
        assert_eq!(err, DomainError::column_not_found("price_lakh"));
    }

    #[test]
    fn test_column_kinds() {
        assert!(Column::AreaSqFt.is_numeric());
        assert!(Column::Bedroom.is_numeric());
        assert_eq!(Column::Region.kind(), ColumnKind::Categorical);
        assert_eq!(Column::numeric().count(), 6);
    }

    #[test]
    fn test_listing_value_by_kind() {
        let listing = Listing {
            price_lakh: Some(120.0),
            region: Some("Thane".to_string()),
            ..Default::default()
        };

        assert_eq!(listing.number(Column::PriceLakh), Some(120.0));
        assert_eq!(listing.number(Column::Region), None);
        assert_eq!(listing.text(Column::Region), Some("Thane"));
        assert_eq!(listing.value(Column::Availability), CellValue::Text(None));
    }
}
