//! Session store port
//!
//! Holds each user's pending category selection.

use async_trait::async_trait;
use concierge_domain::{CategoryLabel, UserId};
use thiserror::Error;

/// Errors that can occur during session store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Keyed store of pending category selections
///
/// Every operation is atomic per user. In particular [`consume`](Self::consume)
/// must read and remove in one step, so two concurrent or retried location
/// events can never both observe the same pending category.
///
/// The store owns the entries; the conversation handler only borrows access.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Peek at the pending category without consuming it
    async fn get(&self, user_id: &UserId) -> Result<Option<CategoryLabel>, SessionStoreError>;

    /// Record a selection, replacing any pending one. Returns the replaced label.
    async fn set(
        &self,
        user_id: &UserId,
        category: CategoryLabel,
    ) -> Result<Option<CategoryLabel>, SessionStoreError>;

    /// Take the pending category, leaving the user idle
    async fn consume(&self, user_id: &UserId) -> Result<Option<CategoryLabel>, SessionStoreError>;
}
