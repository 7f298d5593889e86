//! Memoized CSV-backed listings source

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{error, info};

use super::csv_reader::read_listings_file;
use crate::domain::{DomainError, ListingsSource, ListingsTable};

/// Loads the listings file at most once per process.
///
/// The outcome of the first load, success or failure, is kept and returned
/// to every later caller.
#[derive(Debug)]
pub struct CsvListingsAccessor {
    path: PathBuf,
    table: OnceCell<Result<Arc<ListingsTable>, DomainError>>,
}

impl CsvListingsAccessor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a load has been attempted
    pub fn is_initialized(&self) -> bool {
        self.table.initialized()
    }

    async fn read(&self) -> Result<Arc<ListingsTable>, DomainError> {
        let path = self.path.clone();

        let result = tokio::task::spawn_blocking(move || read_listings_file(&path))
            .await
            .map_err(|e| DomainError::data_unavailable(format!("dataset load task failed: {}", e)))
            .and_then(|loaded| loaded);

        match &result {
            Ok(table) => info!(
                path = %self.path.display(),
                listings = table.len(),
                "Listings dataset loaded"
            ),
            Err(e) => error!(path = %self.path.display(), error = %e, "Listings dataset load failed"),
        }

        result.map(Arc::new)
    }
}

#[async_trait]
impl ListingsSource for CsvListingsAccessor {
    async fn load(&self) -> Result<Arc<ListingsTable>, DomainError> {
        self.table.get_or_init(|| self.read()).await.clone()
    }
}
