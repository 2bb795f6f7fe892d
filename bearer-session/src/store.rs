use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

#[cfg(test)]
use mockall::automock;

use crate::error::StorageUnavailableError;

/// Key under which the session token is persisted by default.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Persisted token store.
///
/// Implementations decide where the token lives (browser storage bridge,
/// keychain, database row) and thereby how long a session survives.
/// All operations may fail with [StorageUnavailableError], which the
/// session propagates to its caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageUnavailableError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageUnavailableError>;
    /// Remove the value stored under `key`.
    ///
    /// Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageUnavailableError>;
}

/// In-memory [TokenStore].
///
/// Sessions backed by this store last until the process exits.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageUnavailableError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageUnavailableError> {
        self.values
            .write()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageUnavailableError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_absent_key() {
        let store = InMemoryTokenStore::new();

        assert_eq!(store.get(DEFAULT_TOKEN_KEY).await, Ok(None));
    }

    #[tokio::test]
    async fn set_then_get() {
        let store = InMemoryTokenStore::new();

        store.set(DEFAULT_TOKEN_KEY, "a.b.c").await.unwrap();

        assert_eq!(
            store.get(DEFAULT_TOKEN_KEY).await,
            Ok(Some("a.b.c".to_owned()))
        );
    }

    #[tokio::test]
    async fn set_replaces_existing_value() {
        let store = InMemoryTokenStore::new();

        store.set(DEFAULT_TOKEN_KEY, "first").await.unwrap();
        store.set(DEFAULT_TOKEN_KEY, "second").await.unwrap();

        assert_eq!(
            store.get(DEFAULT_TOKEN_KEY).await,
            Ok(Some("second".to_owned()))
        );
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let store = InMemoryTokenStore::new();

        store.set(DEFAULT_TOKEN_KEY, "a.b.c").await.unwrap();
        store.remove(DEFAULT_TOKEN_KEY).await.unwrap();
        store.remove(DEFAULT_TOKEN_KEY).await.unwrap();

        assert_eq!(store.get(DEFAULT_TOKEN_KEY).await, Ok(None));
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let store = InMemoryTokenStore::new();

        store.set("token", "a.b.c").await.unwrap();
        store.set("refresh", "x.y.z").await.unwrap();
        store.remove("token").await.unwrap();

        assert_eq!(store.get("refresh").await, Ok(Some("x.y.z".to_owned())));
    }
}
