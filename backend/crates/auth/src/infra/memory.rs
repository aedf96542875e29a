//! In-Memory Session Store Implementation
//!
//! Token → payload map guarded by an async RwLock. Volatile: sessions
//! do not survive a process restart. Expiry is left to the store; this
//! engine keeps entries until they are deleted.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// In-memory session store
///
/// Cloning shares the underlying map, so one store can serve every
/// handler. "Connecting" is a no-op and trivially idempotent.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active sessions (diagnostics)
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    async fn set(&self, token: &str, payload: &str) -> AuthResult<()> {
        self.entries
            .write()
            .await
            .insert(token.to_string(), payload.to_string());
        Ok(())
    }

    async fn get(&self, token: &str) -> AuthResult<Option<String>> {
        Ok(self.entries.read().await.get(token).cloned())
    }

    async fn del(&self, token: &str) -> AuthResult<()> {
        // Removing an absent token is not an error.
        self.entries.write().await.remove(token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_del() {
        let store = InMemorySessionStore::new();

        store.set("token-1", "payload-1").await.unwrap();
        assert_eq!(
            store.get("token-1").await.unwrap(),
            Some("payload-1".to_string())
        );

        store.del("token-1").await.unwrap();
        assert_eq!(store.get("token-1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_del_absent_token_is_ok() {
        let store = InMemorySessionStore::new();
        store.del("never-existed").await.unwrap();
        store.del("never-existed").await.unwrap();
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = InMemorySessionStore::new();
        let clone = store.clone();

        store.set("token-1", "payload-1").await.unwrap();
        assert_eq!(
            clone.get("token-1").await.unwrap(),
            Some("payload-1".to_string())
        );
        assert_eq!(clone.len().await, 1);
    }
}
