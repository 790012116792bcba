//! Per-collection working copy with write-back on every mutation.

use crate::entity::Collection;
use crate::filter::{self, ListFilter, Searchable};
use crate::key::{CollectionKey, SeedLocation};
use crate::seed::SeedSource;
use crate::service::PersistenceService;
use crate::store::LocalStore;
use std::collections::BTreeMap;

/// In-memory mirror of one collection.
///
/// [`activate`](Self::activate) loads the list once; every mutation then
/// edits the mirror and saves the whole recomputed list. There is no diffing:
/// a save always replaces the stored list wholesale, even when the mutation
/// matched nothing.
///
/// Two adapters over the same collection do not see each other's changes
/// until re-activated; the last save wins.
///
/// # Example
///
/// ```ignore
/// let mut tickets = service.adapter::<SupportTicket>();
/// tickets.activate().await;
///
/// let ticket = SupportTicket::new(tickets.len(), "Refund", "high", "Ann", None);
/// tickets.create(ticket).await;
/// ```
pub struct CollectionAdapter<T: Collection, S: LocalStore, F: SeedSource> {
    service: PersistenceService<S, F>,
    key: CollectionKey,
    seed: SeedLocation,
    records: Vec<T>,
}

impl<T: Collection, S: LocalStore, F: SeedSource> CollectionAdapter<T, S, F> {
    /// Adapter for `T` with an empty mirror. Call
    /// [`activate`](Self::activate) before reading.
    pub fn new(service: PersistenceService<S, F>) -> Self {
        let seed = service.seed_location_for::<T>();
        CollectionAdapter {
            service,
            key: T::collection_key(),
            seed,
            records: Vec::new(),
        }
    }

    /// Load the collection and replace the mirror with it.
    pub async fn activate(&mut self) -> &[T] {
        self.records = self.service.load_list(&self.key, &self.seed).await;
        debug!("Activated {} with {} records", self.key, self.records.len());
        &self.records
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn key(&self) -> &CollectionKey {
        &self.key
    }

    pub fn seed_location(&self) -> &SeedLocation {
        &self.seed
    }

    /// Append `record` and save.
    pub async fn create(&mut self, record: T) {
        self.records.push(record);
        self.persist().await;
    }

    /// Replace every record with `record`'s id and save.
    ///
    /// Ids are not unique; all matches are replaced. Returns `false` if no
    /// record matched; the list is saved anyway.
    pub async fn update(&mut self, record: T) -> bool {
        let mut found = false;
        for existing in self.records.iter_mut().filter(|r| r.id() == record.id()) {
            *existing = record.clone();
            found = true;
        }
        if !found {
            debug!("Update on {}: no record matched", self.key);
        }
        self.persist().await;
        found
    }

    /// Apply `change` to every record with `id` and save.
    ///
    /// Returns `false` if no record matched; the list is saved anyway.
    pub async fn patch(&mut self, id: &str, mut change: impl FnMut(&mut T)) -> bool {
        let mut found = false;
        for record in self.records.iter_mut().filter(|r| r.id() == id) {
            change(record);
            found = true;
        }
        if !found {
            debug!("Patch on {}: no record {}", self.key, id);
        }
        self.persist().await;
        found
    }

    /// Remove every record with `id` and save.
    ///
    /// Returns `false` if no record matched; the list is saved anyway.
    pub async fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        let found = self.records.len() != before;
        if !found {
            debug!("Delete on {}: no record {}", self.key, id);
        }
        self.persist().await;
        found
    }

    async fn persist(&self) {
        self.service
            .save_list(&self.key, Some(self.records.as_slice()))
            .await;
    }
}

impl<T: Collection + Searchable, S: LocalStore, F: SeedSource> CollectionAdapter<T, S, F> {
    /// Records matching `filter`, in list order.
    pub fn filtered(&self, filter: &ListFilter) -> Vec<&T> {
        filter.apply(&self.records)
    }

    /// Records per status, plus `"all"`.
    pub fn status_counts(&self) -> BTreeMap<String, usize> {
        filter::status_counts(&self.records)
    }
}
