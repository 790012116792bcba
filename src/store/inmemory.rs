//! In-memory local store (thread-safe, async).
//!
//! Uses DashMap for concurrent access with per-key sharding. Values live for
//! the lifetime of the store and its clones; nothing survives a restart.

use super::LocalStore;
use crate::error::Result;
use dashmap::DashMap;
use std::sync::Arc;

/// Thread-safe async in-memory store.
///
/// Clones share the same map, so a store handed to a cache and kept by a test
/// observe the same values.
///
/// # Example
///
/// ```no_run
/// use offline_lists::store::{InMemoryStore, LocalStore};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = InMemoryStore::new();
///
///     store.set("orders", b"[]".to_vec()).await?;
///
///     let value = store.get("orders").await?;
///     assert_eq!(value.as_deref(), Some(&b"[]"[..]));
///
///     Ok(())
/// }
/// ```
#[derive(Clone, Default)]
pub struct InMemoryStore {
    values: Arc<DashMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        InMemoryStore {
            values: Arc::new(DashMap::new()),
        }
    }

    /// Get the current number of stored values.
    pub async fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get storage statistics.
    pub async fn stats(&self) -> StoreStats {
        let total_bytes: usize = self.values.iter().map(|entry| entry.value().len()).sum();

        StoreStats {
            total_entries: self.values.len(),
            total_bytes,
        }
    }

    /// Print store statistics to debug log.
    pub async fn log_stats(&self) {
        let stats = self.stats().await;
        debug!(
            "Store stats: {} entries, {} bytes",
            stats.total_entries, stats.total_bytes
        );
    }
}

impl LocalStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self.values.get(key).map(|entry| entry.value().clone());
        debug!(
            "InMemory GET {} -> {}",
            key,
            if value.is_some() { "HIT" } else { "MISS" }
        );
        Ok(value)
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        debug!("InMemory SET {} ({} bytes)", key, value.len());
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.values.remove(key);
        debug!("InMemory DELETE {}", key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.values.contains_key(key))
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.values.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        Ok(keys)
    }

    async fn clear_all(&self) -> Result<()> {
        self.values.clear();
        warn!("InMemory CLEAR_ALL executed - all cached lists removed");
        Ok(())
    }
}

/// Store statistics.
#[derive(Clone, Debug)]
pub struct StoreStats {
    pub total_entries: usize,
    pub total_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_inmemory_store_set_get() {
        let store = InMemoryStore::new();

        store
            .set("users", b"[{\"id\":\"1\"}]".to_vec())
            .await
            .expect("Failed to set");

        let result = store.get("users").await.expect("Failed to get");
        assert_eq!(result, Some(b"[{\"id\":\"1\"}]".to_vec()));
    }

    #[tokio::test]
    async fn test_inmemory_store_miss() {
        let store = InMemoryStore::new();

        let result = store.get("nonexistent").await.expect("Failed to get");
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_inmemory_store_overwrite() {
        let store = InMemoryStore::new();

        store.set("orders", b"[1]".to_vec()).await.expect("Failed to set");
        store.set("orders", b"[2]".to_vec()).await.expect("Failed to set");

        assert_eq!(
            store.get("orders").await.expect("Failed to get"),
            Some(b"[2]".to_vec())
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_inmemory_store_delete() {
        let store = InMemoryStore::new();

        store.set("cms", b"[]".to_vec()).await.expect("Failed to set");
        assert!(store.exists("cms").await.expect("Failed to check exists"));

        store.delete("cms").await.expect("Failed to delete");
        assert!(!store.exists("cms").await.expect("Failed to check exists"));

        // Deleting again is fine
        store.delete("cms").await.expect("Failed to delete");
    }

    #[tokio::test]
    async fn test_inmemory_store_keys_sorted() {
        let store = InMemoryStore::new();

        store.set("users", b"[]".to_vec()).await.expect("Failed to set");
        store.set("cms", b"[]".to_vec()).await.expect("Failed to set");
        store.set("orders", b"[]".to_vec()).await.expect("Failed to set");

        let keys = store.keys().await.expect("Failed to list keys");
        assert_eq!(keys, vec!["cms", "orders", "users"]);
    }

    #[tokio::test]
    async fn test_inmemory_store_clear_all() {
        let store = InMemoryStore::new();

        store.set("users", b"[]".to_vec()).await.expect("Failed to set");
        store.set("orders", b"[]".to_vec()).await.expect("Failed to set");
        assert_eq!(store.len().await, 2);

        store.clear_all().await.expect("Failed to clear");

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_inmemory_store_stats() {
        let store = InMemoryStore::new();

        store.set("users", b"[1,2,3]".to_vec()).await.expect("Failed to set");
        store.set("orders", b"[]".to_vec()).await.expect("Failed to set");

        let stats = store.stats().await;
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.total_bytes, 9);
    }

    #[tokio::test]
    async fn test_inmemory_store_clone_shares_values() {
        let store1 = InMemoryStore::new();
        store1.set("key", b"value".to_vec()).await.expect("Failed to set");

        let store2 = store1.clone();

        let value = store2.values.get("key").map(|e| e.value().clone());
        assert_eq!(value, Some(b"value".to_vec()));
    }

    #[tokio::test]
    async fn test_inmemory_store_shared_across_tasks() {
        let store = InMemoryStore::new();
        let mut handles = vec![];

        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let key = format!("key_{}", i);
                store
                    .set(&key, format!("[{}]", i).into_bytes())
                    .await
                    .expect("Failed to set");
            }));
        }

        for handle in handles {
            handle.await.expect("Task failed");
        }

        assert_eq!(store.len().await, 10);
    }
}
