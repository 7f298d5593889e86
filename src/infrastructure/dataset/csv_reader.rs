//! CSV parsing for the listings dataset

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::domain::{Column, DomainError, Listing, ListingsTable};

/// Read and parse the listings file at `path`
pub fn read_listings_file(path: &Path) -> Result<ListingsTable, DomainError> {
    let file = File::open(path).map_err(|e| {
        DomainError::data_unavailable(format!("cannot open '{}': {}", path.display(), e))
    })?;

    parse_listings(file, path.display().to_string())
}

/// Parse listings from any CSV reader. Every known column must be present
/// in the header; extra columns are ignored.
pub fn parse_listings<R: Read>(
    reader: R,
    source: impl Into<String>,
) -> Result<ListingsTable, DomainError> {
    let source = source.into();
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = reader.headers().map_err(|e| {
        DomainError::data_unavailable(format!("cannot read header of '{}': {}", source, e))
    })?;

    let missing: Vec<&str> = Column::ALL
        .iter()
        .map(Column::name)
        .filter(|name| !headers.iter().any(|header| header == *name))
        .collect();

    if !missing.is_empty() {
        return Err(DomainError::data_unavailable(format!(
            "'{}' is missing columns: {}",
            source,
            missing.join(", ")
        )));
    }

    let mut rows = Vec::new();

    for result in reader.deserialize::<Listing>() {
        let listing = result.map_err(|e| {
            DomainError::data_unavailable(format!("malformed row in '{}': {}", source, e))
        })?;
        rows.push(listing);
    }

    ListingsTable::new(rows, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Price_Lakh,Area_SqFt,Rate_SqFt,Availability,Region,Floor_No,Bathroom,Bedroom,Property_Age";

    #[test]
    fn test_parse_listings() {
        let csv = format!(
            "{}\n\
             150,1000,15000,Ready To Move,Thane,3,2,2,1 to 5 Year Old\n\
             ,650,,Under Construction,Worli,12,1,1,\n",
            HEADER
        );

        let table = parse_listings(csv.as_bytes(), "inline").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.source(), "inline");

        let first = &table.rows()[0];
        assert_eq!(first.price_lakh, Some(150.0));
        assert_eq!(first.region.as_deref(), Some("Thane"));
        assert_eq!(first.property_age.as_deref(), Some("1 to 5 Year Old"));

        let second = &table.rows()[1];
        assert_eq!(second.price_lakh, None);
        assert_eq!(second.rate_sqft, None);
        assert_eq!(second.floor_no, Some(12.0));
        assert_eq!(second.property_age, None);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = format!(",{}\n0,90,700,12857,Ready To Move,Thane,1,1,1,New\n", HEADER);

        let table = parse_listings(csv.as_bytes(), "indexed").unwrap();
        assert_eq!(table.rows()[0].area_sqft, Some(700.0));
    }

    #[test]
    fn test_missing_column_is_data_unavailable() {
        let csv = "Price_Lakh,Area_SqFt\n10,500\n";

        let err = parse_listings(csv.as_bytes(), "partial").unwrap_err();

        match err {
            DomainError::DataUnavailable { message } => {
                assert!(message.contains("Region"));
                assert!(!message.contains("Area_SqFt"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unparsable_number_is_data_unavailable() {
        let csv = format!("{}\nlots,1000,15000,Ready To Move,Thane,3,2,2,New\n", HEADER);

        let err = parse_listings(csv.as_bytes(), "bad").unwrap_err();
        assert!(matches!(err, DomainError::DataUnavailable { .. }));
    }

    #[test]
    fn test_header_only_is_data_unavailable() {
        let err = parse_listings(format!("{}\n", HEADER).as_bytes(), "empty").unwrap_err();
        assert!(matches!(err, DomainError::DataUnavailable { .. }));
    }

    #[test]
    fn test_missing_file_is_data_unavailable() {
        let err = read_listings_file(Path::new("/nonexistent/listings.csv")).unwrap_err();
        assert!(matches!(err, DomainError::DataUnavailable { .. }));
    }
}
