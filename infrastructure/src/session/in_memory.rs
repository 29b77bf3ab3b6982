//! In-process session store for single-instance deployments

use async_trait::async_trait;
use concierge_application::{SessionStore, SessionStoreError};
use concierge_domain::{CategoryLabel, UserId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Pending selections held in a mutex-guarded map
///
/// Each operation takes the lock once, so `consume` is a single atomic
/// remove. Entries vanish on restart.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: Mutex<HashMap<UserId, CategoryLabel>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Users with a pending selection
    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<UserId, CategoryLabel>>, SessionStoreError> {
        self.entries
            .lock()
            .map_err(|_| SessionStoreError::Unavailable("session map lock poisoned".to_string()))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &UserId) -> Result<Option<CategoryLabel>, SessionStoreError> {
        Ok(self.lock()?.get(user_id).cloned())
    }

    async fn set(
        &self,
        user_id: &UserId,
        category: CategoryLabel,
    ) -> Result<Option<CategoryLabel>, SessionStoreError> {
        Ok(self.lock()?.insert(user_id.clone(), category))
    }

    async fn consume(&self, user_id: &UserId) -> Result<Option<CategoryLabel>, SessionStoreError> {
        Ok(self.lock()?.remove(user_id))
    }
}
