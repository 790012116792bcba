//! Core record traits that every cached collection element implements.

use crate::error::Result;
use crate::key::{CollectionKey, SeedLocation};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Trait that all records stored in a cached list must implement.
///
/// The cache never allocates or checks identifiers; `id()` is only used by
/// [`CollectionAdapter`](crate::adapter::CollectionAdapter) to match records
/// for update and delete.
///
/// # Example
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use offline_lists::Record;
///
/// #[derive(Clone, Serialize, Deserialize)]
/// pub struct Coupon {
///     pub id: String,
///     pub code: String,
/// }
///
/// impl Record for Coupon {
///     fn id(&self) -> &str {
///         &self.id
///     }
/// }
/// ```
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Identifier of this record within its collection.
    fn id(&self) -> &str;

    /// Optional: Validate a record after deserialization.
    ///
    /// A failing record makes the whole stored list count as undecodable,
    /// which sends the load down the seed path.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// A record type bound to a fixed collection key and seed location.
///
/// Implemented by the built-in entity types in [`crate::collections`].
pub trait Collection: Record {
    /// Collection name, used as the store key. Must be non-empty.
    const NAME: &'static str;

    fn collection_key() -> CollectionKey {
        CollectionKey::from_static(Self::NAME)
    }

    /// Default seed location: `/data/<NAME>.json`.
    fn seed_location() -> SeedLocation {
        SeedLocation::data_file(Self::NAME)
    }
}
