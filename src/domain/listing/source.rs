//! Listings source trait

use std::sync::Arc;

use async_trait::async_trait;

use super::ListingsTable;
use crate::domain::DomainError;

/// Read-only access to the listings table
///
/// Implementations must return the same table on every successful call.
#[async_trait]
pub trait ListingsSource: Send + Sync {
    async fn load(&self) -> Result<Arc<ListingsTable>, DomainError>;
}

/// In-memory implementation of ListingsSource
pub mod in_memory {
    use super::*;

    /// Serves a pre-built table, or a fixed error, for testing and embedding
    #[derive(Debug, Clone)]
    pub struct InMemoryListingsSource {
        table: Result<Arc<ListingsTable>, DomainError>,
    }

    impl InMemoryListingsSource {
        pub fn new(table: ListingsTable) -> Self {
            Self {
                table: Ok(Arc::new(table)),
            }
        }

        pub fn failing(error: DomainError) -> Self {
            Self { table: Err(error) }
        }
    }

    #[async_trait]
    impl ListingsSource for InMemoryListingsSource {
        async fn load(&self) -> Result<Arc<ListingsTable>, DomainError> {
            self.table.clone()
        }
    }
}
