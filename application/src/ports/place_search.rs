//! Place search port
//!
//! Geocoded keyword search. Pagination, if the backing service has any, stays
//! inside the adapter.

use async_trait::async_trait;
use concierge_domain::{SearchQuery, SpotResult};
use thiserror::Error;

/// Errors that can occur while searching for places
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    Request(String),

    #[error("Search service returned status {status}: {message}")]
    Status { status: String, message: String },

    #[error("Invalid search response: {0}")]
    InvalidResponse(String),
}

/// Port for place search
#[async_trait]
pub trait PlaceSearchClient: Send + Sync {
    /// Run a search; an empty vector means nothing matched
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SpotResult>, SearchError>;
}
