//! Persistence configuration.

use crate::entity::Collection;
use crate::error::{Error, Result};
use crate::key::{CollectionKey, SeedLocation};
use std::collections::HashMap;
use std::path::PathBuf;

/// Environment variable overriding [`PersistenceConfig::seed_base`].
pub const ENV_SEED_BASE: &str = "OFFLINE_LISTS_SEED_BASE";

/// Environment variable overriding [`PersistenceConfig::store_dir`].
pub const ENV_STORE_DIR: &str = "OFFLINE_LISTS_STORE_DIR";

/// Seed base used when nothing else is configured: the local dev server
/// that serves the `/data/*.json` fixtures.
pub const DEFAULT_SEED_BASE: &str = "http://localhost:4200";

/// Where seeds come from and where lists are kept.
///
/// # Example
///
/// ```
/// use offline_lists::config::PersistenceConfig;
/// use offline_lists::collections::Order;
///
/// let config = PersistenceConfig::default()
///     .with_seed_base("https://fixtures.example.com")
///     .with_store_dir("/var/lib/backoffice/lists")
///     .with_seed_override("orders", "/fixtures/orders-2024.json");
///
/// assert_eq!(
///     config.seed_location_for::<Order>().as_str(),
///     "/fixtures/orders-2024.json"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct PersistenceConfig {
    /// HTTP base URL, or fixture directory for a file seed.
    pub seed_base: String,
    /// Store directory. `None` means the platform data directory.
    pub store_dir: Option<PathBuf>,
    /// Seed locations replacing the `/data/<name>.json` default, by
    /// collection name.
    pub seed_overrides: HashMap<String, SeedLocation>,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        PersistenceConfig {
            seed_base: DEFAULT_SEED_BASE.to_string(),
            store_dir: None,
            seed_overrides: HashMap::new(),
        }
    }
}

impl PersistenceConfig {
    /// Defaults, overridden by `OFFLINE_LISTS_SEED_BASE` and
    /// `OFFLINE_LISTS_STORE_DIR` when set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = PersistenceConfig::default();

        if let Some(base) = lookup(ENV_SEED_BASE).filter(|v| !v.trim().is_empty()) {
            debug!("Seed base from {}: {}", ENV_SEED_BASE, base);
            config.seed_base = base;
        }
        if let Some(dir) = lookup(ENV_STORE_DIR).filter(|v| !v.trim().is_empty()) {
            debug!("Store directory from {}: {}", ENV_STORE_DIR, dir);
            config.store_dir = Some(PathBuf::from(dir));
        }

        config
    }

    pub fn with_seed_base(mut self, base: impl Into<String>) -> Self {
        self.seed_base = base.into();
        self
    }

    pub fn with_store_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store_dir = Some(dir.into());
        self
    }

    /// Fetch `collection`'s seed from `location` instead of the default.
    pub fn with_seed_override(
        mut self,
        collection: impl Into<String>,
        location: impl Into<SeedLocation>,
    ) -> Self {
        self.seed_overrides
            .insert(collection.into(), location.into());
        self
    }

    /// Seed location for `T`, honoring overrides.
    pub fn seed_location_for<T: Collection>(&self) -> SeedLocation {
        self.seed_overrides
            .get(T::NAME)
            .cloned()
            .unwrap_or_else(T::seed_location)
    }

    /// Store directory, falling back to the platform data directory.
    ///
    /// # Errors
    /// Returns `Error::ConfigError` if no directory is configured and none can
    /// be determined
    #[cfg(feature = "file")]
    pub fn resolved_store_dir(&self) -> Result<PathBuf> {
        match &self.store_dir {
            Some(dir) => Ok(dir.clone()),
            None => crate::store::FileStore::default_dir(),
        }
    }

    /// Check the configuration before building a service from it.
    ///
    /// # Errors
    /// - `Error::ConfigError`: empty seed base or empty override location
    /// - `Error::InvalidKey`: an override names an invalid collection
    pub fn validate(&self) -> Result<()> {
        if self.seed_base.trim().is_empty() {
            return Err(Error::ConfigError("seed base is empty".to_string()));
        }
        for (collection, location) in &self.seed_overrides {
            CollectionKey::new(collection.as_str())?;
            if location.as_str().trim().is_empty() {
                return Err(Error::ConfigError(format!(
                    "seed override for {} is empty",
                    collection
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{Order, User};

    #[test]
    fn test_default_config() {
        let config = PersistenceConfig::default();
        assert_eq!(config.seed_base, DEFAULT_SEED_BASE);
        assert!(config.store_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = PersistenceConfig::default()
            .with_seed_base("https://cdn.example.com/app")
            .with_store_dir("/tmp/lists");

        assert_eq!(config.seed_base, "https://cdn.example.com/app");
        assert_eq!(config.store_dir, Some(PathBuf::from("/tmp/lists")));
    }

    #[test]
    fn test_seed_override() {
        let config =
            PersistenceConfig::default().with_seed_override("orders", "/fixtures/orders.json");

        assert_eq!(
            config.seed_location_for::<Order>().as_str(),
            "/fixtures/orders.json"
        );
        assert_eq!(
            config.seed_location_for::<User>().as_str(),
            "/data/users.json"
        );
    }

    #[test]
    fn test_from_lookup() {
        let config = PersistenceConfig::from_lookup(|name| match name {
            ENV_SEED_BASE => Some("http://127.0.0.1:8080".to_string()),
            ENV_STORE_DIR => Some("/srv/lists".to_string()),
            _ => None,
        });

        assert_eq!(config.seed_base, "http://127.0.0.1:8080");
        assert_eq!(config.store_dir, Some(PathBuf::from("/srv/lists")));
    }

    #[test]
    fn test_from_lookup_ignores_blank_values() {
        let config = PersistenceConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.seed_base, DEFAULT_SEED_BASE);
        assert!(config.store_dir.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let empty_base = PersistenceConfig::default().with_seed_base("");
        assert!(matches!(empty_base.validate(), Err(Error::ConfigError(_))));

        let bad_key = PersistenceConfig::default().with_seed_override(" ", "/data/x.json");
        assert!(matches!(bad_key.validate(), Err(Error::InvalidKey(_))));

        let empty_location = PersistenceConfig::default().with_seed_override("users", "");
        assert!(matches!(
            empty_location.validate(),
            Err(Error::ConfigError(_))
        ));
    }

    #[cfg(feature = "file")]
    #[test]
    fn test_resolved_store_dir_prefers_explicit() {
        let config = PersistenceConfig::default().with_store_dir("/tmp/explicit");
        assert_eq!(
            config.resolved_store_dir().expect("Failed to resolve"),
            PathBuf::from("/tmp/explicit")
        );
    }
}
