//! Descriptive statistics over the listings table
//!
//! Every function here is pure: same table in, same result out.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::stats;
use crate::domain::listing::{CellValue, Column, Listing, ListingsTable, READY_TO_MOVE};
use crate::domain::DomainError;

/// Per-column statistics in the usual describe() layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: Column,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub p25: Option<f64>,
    #[serde(rename = "50%")]
    pub p50: Option<f64>,
    #[serde(rename = "75%")]
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

/// One entry of a frequency ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Headline figures for the dataset landing view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetOverview {
    pub listings: usize,
    pub median_price_lakh: Option<f64>,
    pub median_area_sqft: Option<f64>,
    pub median_rate_sqft: Option<f64>,
    pub ready_to_move_ratio: f64,
    pub loaded_at: DateTime<Utc>,
}

/// Median of the non-null values of a numeric column
pub fn median(table: &ListingsTable, column: Column) -> Result<Option<f64>, DomainError> {
    Ok(stats::median(&table.numeric_values(column)?))
}

/// Share of all rows whose categorical cell equals `value`
pub fn fraction_matching(
    table: &ListingsTable,
    column: Column,
    value: &str,
) -> Result<f64, DomainError> {
    let matching = table
        .text_values(column)?
        .filter(|cell| *cell == Some(value))
        .count();

    Ok(matching as f64 / table.len() as f64)
}

/// Frequency ranking, count descending, ties kept in first-seen order
pub fn top_categories(
    table: &ListingsTable,
    column: Column,
    k: i64,
) -> Result<Vec<CategoryCount>, DomainError> {
    if k <= 0 {
        return Err(DomainError::invalid_k(k));
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for row in table.rows() {
        let Some(category) = render_cell(row, column) else {
            continue;
        };

        match index.get(&category) {
            Some(&position) => counts[position].count += 1,
            None => {
                index.insert(category.clone(), counts.len());
                counts.push(CategoryCount { category, count: 1 });
            }
        }
    }

    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(usize::try_from(k).unwrap_or(usize::MAX));

    Ok(counts)
}

/// describe()-style statistics for every numeric column, in schema order
pub fn summary_table(table: &ListingsTable) -> Vec<ColumnSummary> {
    Column::numeric()
        .map(|column| {
            let values: Vec<f64> = table.rows().iter().filter_map(|r| r.number(column)).collect();
            summarize(column, &values)
        })
        .collect()
}

fn summarize(column: Column, values: &[f64]) -> ColumnSummary {
    let sorted = stats::sorted(values);

    ColumnSummary {
        column,
        count: values.len(),
        mean: stats::mean(values),
        std: stats::std_dev(values),
        min: sorted.first().copied(),
        p25: stats::quantile_sorted(&sorted, 0.25),
        p50: stats::quantile_sorted(&sorted, 0.5),
        p75: stats::quantile_sorted(&sorted, 0.75),
        max: sorted.last().copied(),
    }
}

/// Sorted distinct non-null values, numerically for numeric columns
pub fn distinct_values(table: &ListingsTable, column: Column) -> Vec<String> {
    if column.is_numeric() {
        let mut values = stats::sorted(
            &table
                .rows()
                .iter()
                .filter_map(|row| row.number(column))
                .collect::<Vec<_>>(),
        );
        values.dedup();
        return values.into_iter().map(|v| v.to_string()).collect();
    }

    let mut values: Vec<String> = table
        .rows()
        .iter()
        .filter_map(|row| row.text(column).map(str::to_string))
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Median price among listings of one region; `None` when none are priced
pub fn region_median(table: &ListingsTable, region: &str) -> Option<f64> {
    stats::median(&table.prices_in_region(region))
}

/// First `limit` rows of the table
pub fn preview(table: &ListingsTable, limit: usize) -> Vec<Listing> {
    table.rows().iter().take(limit).cloned().collect()
}

pub fn overview(table: &ListingsTable) -> Result<DatasetOverview, DomainError> {
    Ok(DatasetOverview {
        listings: table.len(),
        median_price_lakh: median(table, Column::PriceLakh)?,
        median_area_sqft: median(table, Column::AreaSqFt)?,
        median_rate_sqft: median(table, Column::RateSqFt)?,
        ready_to_move_ratio: fraction_matching(table, Column::Availability, READY_TO_MOVE)?,
        loaded_at: table.loaded_at(),
    })
}

fn render_cell(row: &Listing, column: Column) -> Option<String> {
    match row.value(column) {
        CellValue::Number(value) => value.map(|v| v.to_string()),
        CellValue::Text(value) => value.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Listing>) -> ListingsTable {
        ListingsTable::new(rows, "test").unwrap()
    }

    fn priced(price: f64) -> Listing {
        Listing {
            price_lakh: Some(price),
            ..Default::default()
        }
    }

    fn in_region(region: &str) -> Listing {
        Listing {
            region: Some(region.to_string()),
            ..Default::default()
        }
    }

    fn with_availability(availability: &str) -> Listing {
        Listing {
            availability: Some(availability.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_median_of_three() {
        let table = table(vec![priced(10.0), priced(20.0), priced(30.0)]);
        assert_eq!(median(&table, Column::PriceLakh).unwrap(), Some(20.0));
    }

    #[test]
    fn test_median_of_all_null_column_is_none() {
        let table = table(vec![in_region("A")]);
        assert_eq!(median(&table, Column::Bathroom).unwrap(), None);
    }

    #[test]
    fn test_median_rejects_categorical_column() {
        let table = table(vec![in_region("A")]);
        let err = median(&table, Column::Region).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput { .. }));
    }

    #[test]
    fn test_fraction_matching_three_of_four() {
        let table = table(vec![
            with_availability("Ready To Move"),
            with_availability("Under Construction"),
            with_availability("Ready To Move"),
            with_availability("Ready To Move"),
        ]);

        let ratio = fraction_matching(&table, Column::Availability, "Ready To Move").unwrap();
        assert_eq!(ratio, 0.75);
    }

    #[test]
    fn test_fraction_matching_counts_nulls_as_non_matching() {
        let table = table(vec![with_availability("Ready To Move"), priced(1.0)]);

        let ratio = fraction_matching(&table, Column::Availability, "Ready To Move").unwrap();
        assert_eq!(ratio, 0.5);
    }

    #[test]
    fn test_top_categories_ties_follow_first_seen_order() {
        let mut rows = Vec::new();
        rows.push(in_region("A"));
        rows.push(in_region("C"));
        for _ in 0..5 {
            rows.push(in_region("B"));
        }
        for _ in 0..4 {
            rows.push(in_region("A"));
        }

        let top = top_categories(&table(rows), Column::Region, 2).unwrap();

        assert_eq!(
            top,
            vec![
                CategoryCount { category: "A".to_string(), count: 5 },
                CategoryCount { category: "B".to_string(), count: 5 },
            ]
        );
    }

    #[test]
    fn test_top_categories_k_larger_than_categories() {
        let top = top_categories(&table(vec![in_region("A"), in_region("B")]), Column::Region, 10)
            .unwrap();
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_top_categories_rejects_non_positive_k() {
        let table = table(vec![in_region("A")]);

        assert_eq!(
            top_categories(&table, Column::Region, 0).unwrap_err(),
            DomainError::invalid_k(0)
        );
        assert_eq!(
            top_categories(&table, Column::Region, -3).unwrap_err(),
            DomainError::invalid_k(-3)
        );
    }

    #[test]
    fn test_top_categories_numeric_column() {
        let rows = vec![
            Listing { bedroom: Some(2.0), ..Default::default() },
            Listing { bedroom: Some(3.0), ..Default::default() },
            Listing { bedroom: Some(2.0), ..Default::default() },
        ];

        let top = top_categories(&table(rows), Column::Bedroom, 1).unwrap();
        assert_eq!(top, vec![CategoryCount { category: "2".to_string(), count: 2 }]);
    }

    #[test]
    fn test_summary_table_layout() {
        let table = table(vec![priced(1.0), priced(2.0), priced(3.0), priced(4.0)]);
        let summary = summary_table(&table);

        assert_eq!(summary.len(), 6);
        assert_eq!(summary[0].column, Column::PriceLakh);

        let price = &summary[0];
        assert_eq!(price.count, 4);
        assert_eq!(price.mean, Some(2.5));
        assert_eq!(price.min, Some(1.0));
        assert_eq!(price.p25, Some(1.75));
        assert_eq!(price.p50, Some(2.5));
        assert_eq!(price.p75, Some(3.25));
        assert_eq!(price.max, Some(4.0));

        let area = &summary[1];
        assert_eq!(area.count, 0);
        assert_eq!(area.mean, None);
        assert_eq!(area.std, None);
    }

    #[test]
    fn test_summary_table_is_deterministic() {
        let table = table(vec![priced(0.1), priced(0.7), priced(1.3), priced(2.9), priced(0.2)]);

        let first = summary_table(&table);
        let second = summary_table(&table);

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.mean.map(f64::to_bits), b.mean.map(f64::to_bits));
            assert_eq!(a.std.map(f64::to_bits), b.std.map(f64::to_bits));
            assert_eq!(a.p25.map(f64::to_bits), b.p25.map(f64::to_bits));
            assert_eq!(a.p75.map(f64::to_bits), b.p75.map(f64::to_bits));
        }
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_values_sorted_numerically() {
        let rows = vec![
            Listing { floor_no: Some(10.0), ..Default::default() },
            Listing { floor_no: Some(2.0), ..Default::default() },
            Listing { floor_no: Some(10.0), ..Default::default() },
            Listing::default(),
        ];

        assert_eq!(distinct_values(&table(rows), Column::FloorNo), vec!["2", "10"]);
    }

    #[test]
    fn test_distinct_values_categorical() {
        let rows = vec![in_region("Worli"), in_region("Andheri"), in_region("Worli")];
        assert_eq!(distinct_values(&table(rows), Column::Region), vec!["Andheri", "Worli"]);
    }

    #[test]
    fn test_region_median_without_priced_rows() {
        let rows = vec![
            Listing { region: Some("A".into()), price_lakh: Some(50.0), ..Default::default() },
            Listing { region: Some("B".into()), price_lakh: None, ..Default::default() },
        ];
        let table = table(rows);

        assert_eq!(region_median(&table, "A"), Some(50.0));
        assert_eq!(region_median(&table, "B"), None);
    }

    #[test]
    fn test_overview() {
        let rows = vec![
            Listing {
                price_lakh: Some(100.0),
                area_sqft: Some(800.0),
                rate_sqft: Some(12500.0),
                availability: Some(READY_TO_MOVE.to_string()),
                ..Default::default()
            },
            Listing {
                price_lakh: Some(200.0),
                area_sqft: Some(1200.0),
                rate_sqft: Some(16666.0),
                availability: Some("Under Construction".to_string()),
                ..Default::default()
            },
        ];
        let table = table(rows);
        let overview = overview(&table).unwrap();

        assert_eq!(overview.listings, 2);
        assert_eq!(overview.median_price_lakh, Some(150.0));
        assert_eq!(overview.median_area_sqft, Some(1000.0));
        assert_eq!(overview.ready_to_move_ratio, 0.5);
        assert_eq!(overview.loaded_at, table.loaded_at());
    }

    #[test]
    fn test_preview_takes_leading_rows() {
        let table = table(vec![priced(1.0), priced(2.0), priced(3.0)]);
        let rows = preview(&table, 2);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].price_lakh, Some(2.0));
    }
}
