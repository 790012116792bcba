//! Collection keys and seed locations.

use crate::error::{Error, Result};
use std::fmt;

/// Identifier of one entity collection in the local store.
///
/// One per entity type (`users`, `orders`, ...). Always non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectionKey(String);

impl CollectionKey {
    /// Build a key, rejecting empty or whitespace-only names.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidKey("collection key must not be empty".to_string()));
        }
        Ok(CollectionKey(name))
    }

    /// Key for a name known at compile time to be non-empty.
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert!(!name.is_empty());
        CollectionKey(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CollectionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CollectionKey {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        CollectionKey::new(value)
    }
}

/// Static resource a collection bootstraps from, e.g. `/data/orders.json`.
///
/// Resolved against the configured seed source only on a cache miss.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeedLocation(String);

impl SeedLocation {
    pub fn new(location: impl Into<String>) -> Self {
        SeedLocation(location.into())
    }

    /// Conventional `/data/<name>.json` location.
    pub fn data_file(name: &str) -> Self {
        SeedLocation(format!("/data/{}.json", name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Location without leading slashes, for joining onto a base.
    pub fn relative(&self) -> &str {
        self.0.trim_start_matches('/')
    }
}

impl fmt::Display for SeedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeedLocation {
    fn from(value: &str) -> Self {
        SeedLocation::new(value)
    }
}

impl From<String> for SeedLocation {
    fn from(value: String) -> Self {
        SeedLocation(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_key_valid() {
        let key = CollectionKey::new("orders").unwrap();
        assert_eq!(key.as_str(), "orders");
        assert_eq!(key.to_string(), "orders");
    }

    #[test]
    fn test_collection_key_rejects_empty() {
        assert!(matches!(CollectionKey::new(""), Err(Error::InvalidKey(_))));
        assert!(matches!(CollectionKey::new("   "), Err(Error::InvalidKey(_))));
    }

    #[test]
    fn test_collection_key_try_from() {
        let key: CollectionKey = "cms".try_into().unwrap();
        assert_eq!(key, CollectionKey::from_static("cms"));
    }

    #[test]
    fn test_seed_location_data_file() {
        let loc = SeedLocation::data_file("payments");
        assert_eq!(loc.as_str(), "/data/payments.json");
        assert_eq!(loc.relative(), "data/payments.json");
    }

    #[test]
    fn test_seed_location_relative_without_slash() {
        let loc = SeedLocation::from("fixtures/users.json");
        assert_eq!(loc.relative(), "fixtures/users.json");
    }
}
