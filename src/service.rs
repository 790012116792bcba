//! High-level persistence service for applications.
//!
//! Provides a convenient wrapper around ListCache with Arc for easy sharing.

use crate::adapter::CollectionAdapter;
use crate::cache::ListCache;
use crate::entity::{Collection, Record};
use crate::error::Result;
use crate::key::{CollectionKey, SeedLocation};
use crate::observability::{ListMetrics, LoadOutcome};
use crate::seed::SeedSource;
use crate::store::LocalStore;
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "file")]
use crate::config::PersistenceConfig;
#[cfg(feature = "file")]
use crate::store::FileStore;

/// High-level persistence service.
///
/// Wraps `ListCache` in `Arc` for easy sharing across tasks without
/// requiring external `Arc<Mutex<>>` wrappers.
///
/// # Design
///
/// Stores use interior mutability and `ListCache` only has `&self` methods,
/// so the cache can be shared behind a plain `Arc`.
///
/// # Example
///
/// ```ignore
/// use offline_lists::{PersistenceService, collections::Order};
/// use offline_lists::config::PersistenceConfig;
///
/// let service = PersistenceService::from_config(&PersistenceConfig::from_env())?;
///
/// let mut orders = service.adapter::<Order>();
/// orders.activate().await;
/// orders
///     .patch(&order_id, |order| order.set_status("shipped"))
///     .await;
/// ```
pub struct PersistenceService<S: LocalStore, F: SeedSource> {
    cache: Arc<ListCache<S, F>>,
    seed_overrides: Arc<HashMap<String, SeedLocation>>,
}

impl<S: LocalStore, F: SeedSource> Clone for PersistenceService<S, F> {
    fn clone(&self) -> Self {
        PersistenceService {
            cache: Arc::clone(&self.cache),
            seed_overrides: Arc::clone(&self.seed_overrides),
        }
    }
}

impl<S: LocalStore, F: SeedSource> PersistenceService<S, F> {
    /// Create a new service over the given store and seed.
    pub fn new(store: S, seed: F) -> Self {
        Self::from_cache(ListCache::new(store, seed))
    }

    /// Create a new service with custom metrics.
    pub fn with_metrics(store: S, seed: F, metrics: Box<dyn ListMetrics>) -> Self {
        Self::from_cache(ListCache::new(store, seed).with_metrics(metrics))
    }

    /// Wrap an already configured cache.
    pub fn from_cache(cache: ListCache<S, F>) -> Self {
        PersistenceService {
            cache: Arc::new(cache),
            seed_overrides: Arc::new(HashMap::new()),
        }
    }

    /// Replace the per-collection seed locations used by
    /// [`load_collection`](Self::load_collection) and adapters.
    pub fn with_seed_overrides(mut self, overrides: HashMap<String, SeedLocation>) -> Self {
        self.seed_overrides = Arc::new(overrides);
        self
    }

    /// Load the list stored under `key`, bootstrapping from `seed` on a miss.
    ///
    /// See [`ListCache::load_list`].
    pub async fn load_list<T: Record>(&self, key: &CollectionKey, seed: &SeedLocation) -> Vec<T> {
        self.cache.load_list(key, seed).await
    }

    /// See [`ListCache::load_list_detailed`].
    pub async fn load_list_detailed<T: Record>(
        &self,
        key: &CollectionKey,
        seed: &SeedLocation,
    ) -> LoadOutcome<T> {
        self.cache.load_list_detailed(key, seed).await
    }

    /// Replace the list stored under `key`. `None` stores the empty list.
    ///
    /// See [`ListCache::save_list`].
    pub async fn save_list<T: Record>(&self, key: &CollectionKey, list: Option<&[T]>) {
        self.cache.save_list(key, list).await
    }

    /// See [`ListCache::try_save_list`].
    ///
    /// # Errors
    /// Returns `Err` if the list cannot be serialized or stored
    pub async fn try_save_list<T: Record>(
        &self,
        key: &CollectionKey,
        list: Option<&[T]>,
    ) -> Result<()> {
        self.cache.try_save_list(key, list).await
    }

    /// Seed location for `T`, honoring overrides.
    pub fn seed_location_for<T: Collection>(&self) -> SeedLocation {
        self.seed_overrides
            .get(T::NAME)
            .cloned()
            .unwrap_or_else(T::seed_location)
    }

    /// Load `T`'s collection under its own key and seed location.
    pub async fn load_collection<T: Collection>(&self) -> Vec<T> {
        self.cache
            .load_list(&T::collection_key(), &self.seed_location_for::<T>())
            .await
    }

    /// Replace `T`'s collection.
    pub async fn save_collection<T: Collection>(&self, list: Option<&[T]>) {
        self.cache.save_list(&T::collection_key(), list).await
    }

    /// New adapter for `T`, sharing this service's cache.
    pub fn adapter<T: Collection>(&self) -> CollectionAdapter<T, S, F> {
        CollectionAdapter::new(self.clone())
    }

    /// Get a reference to the underlying cache.
    pub fn cache(&self) -> &ListCache<S, F> {
        &self.cache
    }
}

#[cfg(all(feature = "file", feature = "http"))]
impl PersistenceService<FileStore, crate::seed::HttpSeedSource> {
    /// Durable store plus HTTP seed, both taken from `config`.
    ///
    /// # Errors
    /// - `Error::ConfigError`: invalid seed base or no usable store directory
    /// - `Error::StoreError`: the store directory cannot be created
    pub fn from_config(config: &PersistenceConfig) -> Result<Self> {
        config.validate()?;
        let store = FileStore::open(config.resolved_store_dir()?)?;
        let seed = crate::seed::HttpSeedSource::new(&config.seed_base)?;

        info!(
            "✓ Persistence initialized: store {}, seed {}",
            store.dir().display(),
            seed.base_url()
        );

        Ok(Self::new(store, seed).with_seed_overrides(config.seed_overrides.clone()))
    }
}

#[cfg(feature = "file")]
impl PersistenceService<FileStore, crate::seed::FileSeedSource> {
    /// Durable store plus fixture files under `config.seed_base`, for running
    /// without a server.
    ///
    /// # Errors
    /// - `Error::ConfigError`: no usable store directory
    /// - `Error::StoreError`: the store directory cannot be created
    pub fn from_config_offline(config: &PersistenceConfig) -> Result<Self> {
        config.validate()?;
        let store = FileStore::open(config.resolved_store_dir()?)?;
        let seed = crate::seed::FileSeedSource::new(&config.seed_base);

        info!(
            "✓ Persistence initialized: store {}, fixtures {}",
            store.dir().display(),
            seed.root().display()
        );

        Ok(Self::new(store, seed).with_seed_overrides(config.seed_overrides.clone()))
    }
}
