//! Local cache store implementations.

use crate::error::Result;

#[cfg(feature = "file")]
pub mod file;
pub mod inmemory;

#[cfg(feature = "file")]
pub use file::FileStore;
pub use inmemory::InMemoryStore;

/// Trait for local key-value stores holding cached lists.
///
/// Values are opaque byte strings (JSON text in practice), keyed by
/// collection name. There is no expiry and no size bound: a value stays until
/// it is overwritten or explicitly deleted.
///
/// Implementations: InMemory (tests, ephemeral sessions), File (durable).
///
/// **IMPORTANT:** All methods use `&self` instead of `&mut self` to allow shared access.
/// Store implementations should use interior mutability or external storage.
#[allow(async_fn_in_trait)]
pub trait LocalStore: Send + Sync + Clone {
    /// Retrieve the raw value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - Value present
    /// - `Ok(None)` - Nothing stored under this key
    ///
    /// # Errors
    /// Returns `Err` if the store cannot be read
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns `Err` if the store cannot be written
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns `Err` if the store cannot be written
    async fn delete(&self, key: &str) -> Result<()>;

    /// Check if a value exists under `key`.
    ///
    /// # Errors
    /// Returns `Err` if the store cannot be read
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// List every key currently holding a value.
    ///
    /// # Errors
    /// Returns `Err` if not implemented or the store cannot be read
    async fn keys(&self) -> Result<Vec<String>> {
        Err(crate::error::Error::NotImplemented(
            "keys not implemented for this store".to_string(),
        ))
    }

    /// Health check - verify the store is accessible.
    ///
    /// # Errors
    /// Returns `Err` if the store is not accessible
    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    /// Optional: Remove every value (use with caution).
    ///
    /// # Errors
    /// Returns `Err` if operation is not implemented or fails
    async fn clear_all(&self) -> Result<()> {
        Err(crate::error::Error::NotImplemented(
            "clear_all not implemented for this store".to_string(),
        ))
    }
}
