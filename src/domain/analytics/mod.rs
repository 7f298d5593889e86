//! Analytics domain - descriptive statistics over the listings table

mod descriptive;
pub mod stats;

pub use descriptive::{
    distinct_values, fraction_matching, median, overview, preview, region_median, summary_table,
    top_categories, CategoryCount, ColumnSummary, DatasetOverview,
};
