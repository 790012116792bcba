//! List cache - read-through on first load, write-through on every save.

use crate::codec;
use crate::entity::Record;
use crate::error::Result;
use crate::key::{CollectionKey, SeedLocation};
use crate::observability::{FallbackReason, ListMetrics, LoadOutcome, LoadSource, LogMetrics};
use crate::seed::SeedSource;
use crate::store::LocalStore;
use std::time::Instant;

/// Core list cache - decides between the local store and the seed, and
/// mediates every write-back.
///
/// This is a **read-once-then-trust-local** cache:
///
/// - A usable stored list always wins. The seed is a bootstrap, never a
///   refresh source, even if the seed changes later.
/// - A write always replaces the stored list wholesale and never touches the
///   seed.
///
/// There is no TTL, no invalidation and no merge. Failures never reach the
/// caller of [`load_list`](Self::load_list) or [`save_list`](Self::save_list);
/// use [`load_list_detailed`](Self::load_list_detailed) and
/// [`try_save_list`](Self::try_save_list) to observe them.
///
/// # Example
///
/// ```ignore
/// use offline_lists::{ListCache, store::InMemoryStore, seed::HttpSeedSource};
///
/// let cache = ListCache::new(InMemoryStore::new(), HttpSeedSource::new("http://localhost:4200")?);
/// let users: Vec<User> = cache.load_list(&User::collection_key(), &User::seed_location()).await;
/// ```
pub struct ListCache<S: LocalStore, F: SeedSource> {
    store: S,
    seed: F,
    metrics: Box<dyn ListMetrics>,
}

impl<S: LocalStore, F: SeedSource> ListCache<S, F> {
    /// Create a new cache over `store`, bootstrapping from `seed`.
    pub fn new(store: S, seed: F) -> Self {
        ListCache {
            store,
            seed,
            metrics: Box::new(LogMetrics),
        }
    }

    /// Set custom metrics handler.
    pub fn with_metrics(mut self, metrics: Box<dyn ListMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Load the list for `key`.
    ///
    /// 1. A stored value that decodes into `Vec<T>` is returned as-is; the
    ///    seed is not consulted.
    /// 2. Otherwise `seed` is fetched. On success the list is stored under
    ///    `key` and returned; an empty payload is the empty list.
    /// 3. Any failure on the seed path yields an empty list and stores nothing.
    ///
    /// Never fails. Use [`load_list_detailed`](Self::load_list_detailed) to
    /// tell a genuinely empty collection from a failed seed.
    pub async fn load_list<T: Record>(&self, key: &CollectionKey, seed: &SeedLocation) -> Vec<T> {
        self.load_list_detailed(key, seed).await.records
    }

    /// Load the list for `key` and report which path produced it.
    ///
    /// Same behavior as [`load_list`](Self::load_list); the returned
    /// [`LoadOutcome`] additionally carries the [`LoadSource`] and any decode
    /// error of a stored value that was skipped.
    pub async fn load_list_detailed<T: Record>(
        &self,
        key: &CollectionKey,
        seed: &SeedLocation,
    ) -> LoadOutcome<T> {
        let timer = Instant::now();
        let mut skipped_cached = None;

        debug!("» Load list {} (seed: {})", key, seed);

        match self.store.get(key.as_str()).await {
            Ok(Some(bytes)) if !bytes.is_empty() => match codec::decode_list::<T>(&bytes) {
                Ok(records) => {
                    self.metrics.record_hit(key.as_str(), timer.elapsed());
                    return LoadOutcome {
                        records,
                        source: LoadSource::Cache,
                        skipped_cached: None,
                    };
                }
                Err(e) => {
                    warn!("Stored list for {} is unreadable, using seed: {}", key, e);
                    skipped_cached = Some(e);
                }
            },
            Ok(_) => {
                debug!("No stored list for {}, using seed", key);
            }
            Err(e) => {
                warn!("Store read for {} failed, using seed: {}", key, e);
                self.metrics.record_error(key.as_str(), &e.to_string());
                skipped_cached = Some(e);
            }
        }

        let source = match self.read_through::<T>(key, seed).await {
            Ok(records) => {
                self.metrics
                    .record_seeded(key.as_str(), records.len(), timer.elapsed());
                return LoadOutcome {
                    records,
                    source: LoadSource::Seed,
                    skipped_cached,
                };
            }
            Err(reason) => {
                self.metrics.record_fallback(key.as_str(), &reason);
                LoadSource::Fallback(reason)
            }
        };

        LoadOutcome {
            records: Vec::new(),
            source,
            skipped_cached,
        }
    }

    /// Seed path: fetch, decode, store. Nothing is stored unless every step
    /// before the write succeeded.
    async fn read_through<T: Record>(
        &self,
        key: &CollectionKey,
        seed: &SeedLocation,
    ) -> std::result::Result<Vec<T>, FallbackReason> {
        let payload = self
            .seed
            .fetch(seed)
            .await
            .map_err(FallbackReason::SeedUnavailable)?;

        let records =
            codec::decode_seed::<T>(&payload).map_err(FallbackReason::MalformedSeed)?;

        let bytes = codec::encode_list(&records).map_err(FallbackReason::StoreWriteFailed)?;
        self.store
            .set(key.as_str(), bytes)
            .await
            .map_err(FallbackReason::StoreWriteFailed)?;

        debug!("✓ Seeded {} with {} records", key, records.len());
        Ok(records)
    }

    /// Replace the stored list for `key`.
    ///
    /// `None` stores the empty list. Last writer wins; there is no merge, no
    /// diff and no version check. Failures are logged and swallowed.
    pub async fn save_list<T: Record>(&self, key: &CollectionKey, list: Option<&[T]>) {
        if let Err(e) = self.try_save_list(key, list).await {
            warn!("Save of {} dropped: {}", key, e);
        }
    }

    /// Replace the stored list for `key`, reporting failures.
    ///
    /// # Errors
    ///
    /// - `Error::SerializationError`: a record cannot be serialized
    /// - `Error::StoreError` / `Error::InvalidKey`: the store refused the write
    pub async fn try_save_list<T: Record>(
        &self,
        key: &CollectionKey,
        list: Option<&[T]>,
    ) -> Result<()> {
        let timer = Instant::now();
        let list = list.unwrap_or(&[]);

        let result: Result<()> = async {
            let bytes = codec::encode_list(list)?;
            self.store.set(key.as_str(), bytes).await
        }
        .await;

        match result {
            Ok(()) => {
                self.metrics
                    .record_save(key.as_str(), list.len(), timer.elapsed());
                Ok(())
            }
            Err(e) => {
                self.metrics.record_error(key.as_str(), &e.to_string());
                Err(e)
            }
        }
    }

    /// Get store reference (for advanced use).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get seed source reference (for advanced use).
    pub fn seed(&self) -> &F {
        &self.seed
    }
}

impl<S: LocalStore, F: SeedSource> std::fmt::Debug for ListCache<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListCache").finish_non_exhaustive()
    }
}
