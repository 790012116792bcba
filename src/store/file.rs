//! Durable on-disk local store.
//!
//! One file per key, `<dir>/<key>.json`. Every write goes to its own temporary
//! file in the same directory and is renamed into place, so a crash mid-write
//! or a concurrent write to the same key leaves one complete value, never a
//! torn one. Concurrent writers resolve as last rename wins.

use super::LocalStore;
use crate::error::{Error, Result};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

const VALUE_EXTENSION: &str = "json";

/// Directory-backed store that survives process restarts.
///
/// # Example
///
/// ```no_run
/// use offline_lists::store::{FileStore, LocalStore};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = FileStore::open("/var/lib/backoffice/lists")?;
///     store.set("users", b"[]".to_vec()).await?;
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: Arc<PathBuf>,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    ///
    /// # Errors
    /// Returns `Error::StoreError` if the directory cannot be created
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            Error::StoreError(format!(
                "Failed to create store directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        debug!("FileStore opened at {}", dir.display());
        Ok(FileStore { dir: Arc::new(dir) })
    }

    /// Open the store at the platform data directory
    /// (`$XDG_DATA_HOME/offline-lists` on Linux).
    ///
    /// # Errors
    /// Returns `Error::ConfigError` if no data directory can be determined
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_dir()?)
    }

    /// Platform data directory used by [`FileStore::open_default`].
    ///
    /// # Errors
    /// Returns `Error::ConfigError` if no data directory can be determined
    pub fn default_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|p| p.join(".local/share")))
            .ok_or_else(|| Error::ConfigError("Could not determine data directory".to_string()))?;

        Ok(data_dir.join("offline-lists"))
    }

    /// Directory holding the stored values.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn value_path(&self, key: &str) -> Result<PathBuf> {
        validate_file_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, VALUE_EXTENSION)))
    }
}

/// Write `value` to a fresh temporary file in `dir`, then rename it over
/// `path`. Temporary names start with `.tmp` and never end in `.json`, so they
/// are invisible to `keys`.
fn write_replace(dir: &Path, path: &Path, value: &[u8]) -> Result<()> {
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| {
        Error::StoreError(format!(
            "Failed to create temporary file in {}: {}",
            dir.display(),
            e
        ))
    })?;
    temp.write_all(value).map_err(|e| {
        Error::StoreError(format!(
            "Failed to write {}: {}",
            temp.path().display(),
            e
        ))
    })?;
    temp.persist(path).map_err(|e| {
        Error::StoreError(format!("Failed to replace {}: {}", path.display(), e.error))
    })?;
    Ok(())
}

/// Keys become file names, so they must not escape the store directory.
fn validate_file_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::InvalidKey("empty key".to_string()));
    }
    if key.starts_with('.') || key.contains(['/', '\\', '\0']) {
        return Err(Error::InvalidKey(format!(
            "key {:?} cannot be used as a file name",
            key
        )));
    }
    Ok(())
}

impl LocalStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.value_path(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                debug!("File GET {} -> HIT ({} bytes)", key, bytes.len());
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("File GET {} -> MISS", key);
                Ok(None)
            }
            Err(e) => Err(Error::StoreError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let path = self.value_path(key)?;
        let dir = Arc::clone(&self.dir);
        let len = value.len();

        tokio::task::spawn_blocking(move || write_replace(&dir, &path, &value))
            .await
            .map_err(|e| Error::StoreError(format!("Write task for {} failed: {}", key, e)))??;

        debug!("File SET {} ({} bytes)", key, len);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let path = self.value_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!("File DELETE {}", key);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let path = self.value_path(key)?;
        Ok(tokio::fs::try_exists(&path).await?)
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(self.dir.as_path()).await?;
        let mut keys = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(VALUE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }

        keys.sort();
        Ok(keys)
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(tokio::fs::metadata(self.dir.as_path())
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false))
    }

    async fn clear_all(&self) -> Result<()> {
        for key in self.keys().await? {
            self.delete(&key).await?;
        }
        warn!("File CLEAR_ALL executed in {}", self.dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_store_set_get() {
        let dir = tempdir().expect("tempdir");
        let store = FileStore::open(dir.path()).expect("Failed to open");

        store
            .set("users", b"[{\"id\":\"1\"}]".to_vec())
            .await
            .expect("Failed to set");

        let value = store.get("users").await.expect("Failed to get");
        assert_eq!(value, Some(b"[{\"id\":\"1\"}]".to_vec()));
        assert!(dir.path().join("users.json").is_file());
    }

    #[tokio::test]
    async fn test_file_store_miss() {
        let dir = tempdir().expect("tempdir");
        let store = FileStore::open(dir.path()).expect("Failed to open");

        assert_eq!(store.get("orders").await.expect("Failed to get"), None);
        assert!(!store.exists("orders").await.expect("Failed to check"));
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = tempdir().expect("tempdir");

        {
            let store = FileStore::open(dir.path()).expect("Failed to open");
            store
                .set("payments", b"[{\"id\":\"7\"}]".to_vec())
                .await
                .expect("Failed to set");
        }

        let reopened = FileStore::open(dir.path()).expect("Failed to reopen");
        assert_eq!(
            reopened.get("payments").await.expect("Failed to get"),
            Some(b"[{\"id\":\"7\"}]".to_vec())
        );
    }

    #[tokio::test]
    async fn test_file_store_overwrite_leaves_no_temp_file() {
        let dir = tempdir().expect("tempdir");
        let store = FileStore::open(dir.path()).expect("Failed to open");

        store.set("cms", b"[1]".to_vec()).await.expect("Failed to set");
        store.set("cms", b"[2]".to_vec()).await.expect("Failed to set");

        assert_eq!(
            store.get("cms").await.expect("Failed to get"),
            Some(b"[2]".to_vec())
        );
        let names: Vec<String> = std::fs::read_dir(dir.path())
            .expect("read_dir")
            .map(|e| e.expect("entry").file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["cms.json"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_file_store_concurrent_sets_same_key() {
        let dir = tempdir().expect("tempdir");
        let store = FileStore::open(dir.path()).expect("Failed to open");

        for round in 0..50 {
            let mut handles = Vec::new();
            for writer in 0..8usize {
                let store = store.clone();
                // Arrays of different lengths so interleaved bytes cannot
                // still parse as one of them
                let value: Vec<serde_json::Value> = (0..(writer + 1) * 50)
                    .map(|i| serde_json::json!({ "id": format!("{}-{}", writer, i) }))
                    .collect();
                let bytes = serde_json::to_vec(&value).expect("serialize");
                handles.push(tokio::spawn(async move { store.set("users", bytes).await }));
            }

            for handle in handles {
                handle
                    .await
                    .expect("Task failed")
                    .unwrap_or_else(|e| panic!("round {}: concurrent set failed: {}", round, e));
            }

            let stored = store
                .get("users")
                .await
                .expect("Failed to get")
                .expect("value present");
            let list: Vec<serde_json::Value> = serde_json::from_slice(&stored)
                .unwrap_or_else(|e| panic!("round {}: torn value: {}", round, e));
            assert_eq!(list.len() % 50, 0);
        }

        assert_eq!(store.keys().await.expect("Failed to list"), vec!["users"]);
    }

    #[tokio::test]
    async fn test_file_store_delete() {
        let dir = tempdir().expect("tempdir");
        let store = FileStore::open(dir.path()).expect("Failed to open");

        store.set("support", b"[]".to_vec()).await.expect("Failed to set");
        store.delete("support").await.expect("Failed to delete");
        store.delete("support").await.expect("Second delete is a no-op");

        assert_eq!(store.get("support").await.expect("Failed to get"), None);
    }

    #[tokio::test]
    async fn test_file_store_keys_and_clear_all() {
        let dir = tempdir().expect("tempdir");
        let store = FileStore::open(dir.path()).expect("Failed to open");

        store.set("users", b"[]".to_vec()).await.expect("Failed to set");
        store.set("orders", b"[]".to_vec()).await.expect("Failed to set");
        std::fs::write(dir.path().join("notes.txt"), b"ignored").expect("write");

        assert_eq!(
            store.keys().await.expect("Failed to list"),
            vec!["orders", "users"]
        );

        store.clear_all().await.expect("Failed to clear");
        assert!(store.keys().await.expect("Failed to list").is_empty());
        assert!(dir.path().join("notes.txt").exists());
    }

    #[tokio::test]
    async fn test_file_store_rejects_path_keys() {
        let dir = tempdir().expect("tempdir");
        let store = FileStore::open(dir.path()).expect("Failed to open");

        for key in ["", "../escape", "a/b", "a\\b", ".hidden", "nul\0key"] {
            let result = store.set(key, b"[]".to_vec()).await;
            assert!(
                matches!(result, Err(Error::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[tokio::test]
    async fn test_file_store_health_check() {
        let dir = tempdir().expect("tempdir");
        let store = FileStore::open(dir.path().join("nested")).expect("Failed to open");
        assert!(store.health_check().await.expect("Failed health check"));
    }
}
