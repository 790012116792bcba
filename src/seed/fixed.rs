//! In-memory seed source.

use super::SeedSource;
use crate::error::{Error, Result};
use crate::key::SeedLocation;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Registered outcome for one location.
#[derive(Clone, Debug)]
enum SeedEntry {
    Payload(Vec<u8>),
    Failure(String),
}

/// Seed source serving payloads registered in memory.
///
/// Unregistered locations answer like a missing resource (status 404).
/// Every call to `fetch` is counted, so tests can assert the seed was never
/// consulted.
///
/// # Example
///
/// ```ignore
/// let mut seed = StaticSeedSource::new();
/// seed.insert_json("/data/users.json", &[user])?;
/// seed.fail("/data/orders.json", "connection refused");
/// ```
#[derive(Clone, Default)]
pub struct StaticSeedSource {
    entries: HashMap<String, SeedEntry>,
    fetches: Arc<AtomicUsize>,
}

impl StaticSeedSource {
    /// Create a source with no registered locations.
    pub fn new() -> Self {
        StaticSeedSource::default()
    }

    /// Register a raw payload for `location`.
    pub fn insert_raw(&mut self, location: impl Into<SeedLocation>, payload: impl Into<Vec<u8>>) {
        self.entries.insert(
            location.into().as_str().to_string(),
            SeedEntry::Payload(payload.into()),
        );
    }

    /// Register `records` serialized as a JSON array for `location`.
    ///
    /// # Errors
    /// Returns `Error::SerializationError` if the records cannot be serialized
    pub fn insert_json<T: Serialize>(
        &mut self,
        location: impl Into<SeedLocation>,
        records: &[T],
    ) -> Result<()> {
        let payload = crate::codec::encode_list(records)?;
        self.insert_raw(location, payload);
        Ok(())
    }

    /// Make every fetch of `location` fail with `message`.
    pub fn fail(&mut self, location: impl Into<SeedLocation>, message: impl Into<String>) {
        self.entries.insert(
            location.into().as_str().to_string(),
            SeedEntry::Failure(message.into()),
        );
    }

    /// Number of fetches served so far, across clones.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Number of registered locations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if no location is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SeedSource for StaticSeedSource {
    async fn fetch(&self, location: &SeedLocation) -> Result<Vec<u8>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        debug!("Static seed FETCH {}", location);

        match self.entries.get(location.as_str()) {
            Some(SeedEntry::Payload(bytes)) => Ok(bytes.clone()),
            Some(SeedEntry::Failure(message)) => Err(Error::SeedError(message.clone())),
            None => Err(Error::SeedStatus {
                status: 404,
                location: location.to_string(),
            }),
        }
    }
}
