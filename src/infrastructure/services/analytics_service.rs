//! Analytics service - descriptive statistics over the shared listings table

use std::sync::Arc;

use tracing::debug;

use crate::domain::analytics;
use crate::domain::{
    CategoryCount, Column, ColumnSummary, DatasetOverview, DomainError, Listing, ListingsSource,
};

/// Rows returned by a preview when the caller does not ask for a size
pub const DEFAULT_PREVIEW_ROWS: usize = 30;

/// Descriptive analytics, recomputed per call over the cached table
#[derive(Debug)]
pub struct AnalyticsService<D: ListingsSource> {
    listings: Arc<D>,
    max_preview_rows: usize,
}

impl<D: ListingsSource> AnalyticsService<D> {
    pub fn new(listings: Arc<D>, max_preview_rows: usize) -> Self {
        Self {
            listings,
            max_preview_rows,
        }
    }

    /// Median of a numeric column
    pub async fn median(&self, column: &str) -> Result<Option<f64>, DomainError> {
        let column: Column = column.parse()?;
        let table = self.listings.load().await?;

        debug!(column = %column, "Computing median");
        analytics::median(&table, column)
    }

    /// Share of rows whose categorical column equals `value`
    pub async fn fraction_matching(&self, column: &str, value: &str) -> Result<f64, DomainError> {
        let column: Column = column.parse()?;
        let table = self.listings.load().await?;

        debug!(column = %column, value = %value, "Computing matching fraction");
        analytics::fraction_matching(&table, column, value)
    }

    /// The `k` most frequent values of a column
    pub async fn top_categories(
        &self,
        column: &str,
        k: i64,
    ) -> Result<Vec<CategoryCount>, DomainError> {
        let column: Column = column.parse()?;

        if k <= 0 {
            return Err(DomainError::invalid_k(k));
        }

        let table = self.listings.load().await?;

        debug!(column = %column, k, "Ranking categories");
        analytics::top_categories(&table, column, k)
    }

    pub async fn summary_table(&self) -> Result<Vec<ColumnSummary>, DomainError> {
        let table = self.listings.load().await?;
        Ok(analytics::summary_table(&table))
    }

    pub async fn overview(&self) -> Result<DatasetOverview, DomainError> {
        let table = self.listings.load().await?;
        analytics::overview(&table)
    }

    /// Leading rows of the table, capped at the configured maximum
    pub async fn preview(&self, limit: Option<usize>) -> Result<Vec<Listing>, DomainError> {
        let limit = limit.unwrap_or(DEFAULT_PREVIEW_ROWS);

        if limit == 0 {
            return Err(DomainError::invalid_input("preview limit must be greater than 0"));
        }

        let table = self.listings.load().await?;
        Ok(analytics::preview(&table, limit.min(self.max_preview_rows)))
    }

    /// Sorted distinct values of a column
    pub async fn distinct_values(&self, column: &str) -> Result<Vec<String>, DomainError> {
        let column: Column = column.parse()?;
        let table = self.listings.load().await?;

        Ok(analytics::distinct_values(&table, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InMemoryListingsSource, ListingsTable};

    fn listing(region: &str, availability: &str, price: f64) -> Listing {
        Listing {
            region: Some(region.to_string()),
            availability: Some(availability.to_string()),
            price_lakh: Some(price),
            ..Default::default()
        }
    }

    fn create_service() -> AnalyticsService<InMemoryListingsSource> {
        let table = ListingsTable::new(
            vec![
                listing("A", "Ready To Move", 10.0),
                listing("B", "Ready To Move", 20.0),
                listing("A", "Under Construction", 30.0),
                listing("C", "Ready To Move", 40.0),
            ],
            "test",
        )
        .unwrap();

        AnalyticsService::new(Arc::new(InMemoryListingsSource::new(table)), 3)
    }

    fn create_failing_service() -> AnalyticsService<InMemoryListingsSource> {
        AnalyticsService::new(
            Arc::new(InMemoryListingsSource::failing(DomainError::data_unavailable(
                "missing file",
            ))),
            3,
        )
    }

    #[tokio::test]
    async fn test_median() {
        let service = create_service();
        assert_eq!(service.median("Price_Lakh").await.unwrap(), Some(25.0));
    }

    #[tokio::test]
    async fn test_median_unknown_column() {
        let service = create_service();
        let err = service.median("Garden").await.unwrap_err();

        assert_eq!(err, DomainError::column_not_found("Garden"));
    }

    #[tokio::test]
    async fn test_fraction_matching() {
        let service = create_service();
        let ratio = service
            .fraction_matching("Availability", "Ready To Move")
            .await
            .unwrap();

        assert_eq!(ratio, 0.75);
    }

    #[tokio::test]
    async fn test_top_categories() {
        let service = create_service();
        let top = service.top_categories("Region", 1).await.unwrap();

        assert_eq!(top, vec![CategoryCount { category: "A".to_string(), count: 2 }]);
    }

    #[tokio::test]
    async fn test_top_categories_invalid_k_checked_before_load() {
        let service = create_failing_service();
        let err = service.top_categories("Region", 0).await.unwrap_err();

        assert_eq!(err, DomainError::invalid_k(0));
    }

    #[tokio::test]
    async fn test_preview_is_capped() {
        let service = create_service();

        assert_eq!(service.preview(Some(2)).await.unwrap().len(), 2);
        assert_eq!(service.preview(Some(50)).await.unwrap().len(), 3);
        assert_eq!(service.preview(None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_preview_zero_rejected() {
        let service = create_service();
        let err = service.preview(Some(0)).await.unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn test_summary_is_repeatable() {
        let service = create_service();

        let first = service.summary_table().await.unwrap();
        let second = service.summary_table().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first[0].count, 4);
    }

    #[tokio::test]
    async fn test_distinct_values() {
        let service = create_service();

        assert_eq!(
            service.distinct_values("Region").await.unwrap(),
            vec!["A", "B", "C"]
        );
    }

    #[tokio::test]
    async fn test_data_unavailable_propagates() {
        let service = create_failing_service();

        let err = service.summary_table().await.unwrap_err();
        assert!(matches!(err, DomainError::DataUnavailable { .. }));
    }
}
