//! Observability for list loads and saves.
//!
//! The list cache never reports failures to its callers: a failed seed fetch
//! looks exactly like an empty collection. This module is where those
//! failures become visible again.
//!
//! - **Load diagnostics (`LoadOutcome`, `LoadSource`)**: which path produced a
//!   list and, for the empty fallback, why.
//! - **Metrics (`ListMetrics`)**: per-event hooks for monitoring.
//!
//! # Metrics
//!
//! ```ignore
//! use offline_lists::observability::ListMetrics;
//! use std::time::Duration;
//!
//! struct Counters;
//!
//! impl ListMetrics for Counters {
//!     fn record_hit(&self, _key: &str, _duration: Duration) {
//!         // counter!("list_cache_hits").inc();
//!     }
//! }
//!
//! // let cache = ListCache::new(store, seed).with_metrics(Box::new(Counters));
//! ```
//!
//! Default behavior uses `LogMetrics`, which writes every event to the `log`
//! crate. Use `NoOpMetrics` to silence them.

use crate::error::Error;
use std::fmt;
use std::time::Duration;

/// Trait for list cache metrics collection.
pub trait ListMetrics: Send + Sync {
    /// Record a load served from the local store.
    fn record_hit(&self, key: &str, duration: Duration) {
        debug!("List HIT: {} took {:?}", key, duration);
    }

    /// Record a load served from the seed and written to the store.
    fn record_seeded(&self, key: &str, records: usize, duration: Duration) {
        info!(
            "List SEEDED: {} with {} records in {:?}",
            key, records, duration
        );
    }

    /// Record a load that degraded to an empty list.
    fn record_fallback(&self, key: &str, reason: &FallbackReason) {
        warn!("List FALLBACK: {} served empty ({})", key, reason);
    }

    /// Record a full-list write.
    fn record_save(&self, key: &str, records: usize, duration: Duration) {
        debug!("List SAVE: {} ({} records) took {:?}", key, records, duration);
    }

    /// Record a store error.
    fn record_error(&self, key: &str, error: &str) {
        error!("List ERROR for {}: {}", key, error);
    }
}

/// Default metrics implementation: every event goes to the `log` facade.
#[derive(Clone, Default)]
pub struct LogMetrics;

impl ListMetrics for LogMetrics {}

/// Metrics implementation that discards every event.
#[derive(Clone, Default)]
pub struct NoOpMetrics;

impl ListMetrics for NoOpMetrics {
    fn record_hit(&self, _key: &str, _duration: Duration) {}
    fn record_seeded(&self, _key: &str, _records: usize, _duration: Duration) {}
    fn record_fallback(&self, _key: &str, _reason: &FallbackReason) {}
    fn record_save(&self, _key: &str, _records: usize, _duration: Duration) {}
    fn record_error(&self, _key: &str, _error: &str) {}
}

/// Why a load fell back to the empty list.
#[derive(Clone, Debug)]
pub enum FallbackReason {
    /// The seed could not be fetched (transport error, non-success status).
    SeedUnavailable(Error),

    /// The seed answered with something that is not a list of records.
    MalformedSeed(Error),

    /// The seed list was decoded but could not be written to the store.
    ///
    /// The list is still discarded so no partial state is ever returned
    /// without being stored.
    StoreWriteFailed(Error),
}

impl FallbackReason {
    /// Underlying error.
    pub fn error(&self) -> &Error {
        match self {
            FallbackReason::SeedUnavailable(e)
            | FallbackReason::MalformedSeed(e)
            | FallbackReason::StoreWriteFailed(e) => e,
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::SeedUnavailable(e) => write!(f, "seed unavailable: {}", e),
            FallbackReason::MalformedSeed(e) => write!(f, "malformed seed: {}", e),
            FallbackReason::StoreWriteFailed(e) => write!(f, "store write failed: {}", e),
        }
    }
}

/// Which path produced a loaded list.
#[derive(Clone, Debug)]
pub enum LoadSource {
    /// Decoded from the local store; the seed was not consulted.
    Cache,

    /// Fetched from the seed and written to the local store.
    Seed,

    /// Empty list returned after a failure on the seed path.
    Fallback(FallbackReason),
}

impl LoadSource {
    pub fn is_cache(&self) -> bool {
        matches!(self, LoadSource::Cache)
    }

    pub fn is_seed(&self) -> bool {
        matches!(self, LoadSource::Seed)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadSource::Fallback(_))
    }
}

impl fmt::Display for LoadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadSource::Cache => write!(f, "Cache"),
            LoadSource::Seed => write!(f, "Seed"),
            LoadSource::Fallback(reason) => write!(f, "Fallback({})", reason),
        }
    }
}

/// A loaded list plus how it was obtained.
#[derive(Clone, Debug)]
pub struct LoadOutcome<T> {
    /// The list a plain `load_list` call would have returned
    pub records: Vec<T>,

    /// Which path produced `records`
    pub source: LoadSource,

    /// Decode error of a stored value that was skipped, if any
    pub skipped_cached: Option<Error>,
}

impl<T> LoadOutcome<T> {
    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}
