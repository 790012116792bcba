//! Seed sources: the read-only origin an empty collection bootstraps from.
//!
//! The [`SeedSource`] trait decouples the list cache from how seed fixtures
//! are served. A seed is consulted only when the local store holds no usable
//! value for a collection; once a list is stored, the seed is never read for
//! that collection again.
//!
//! # Implementations
//!
//! - [`HttpSeedSource`]: GET against a base URL (feature `http`)
//! - [`FileSeedSource`]: reads fixture files from a directory
//! - [`StaticSeedSource`]: payloads registered in memory, for tests and demos
//!
//! # Error Handling
//!
//! Return `Err` for anything that should count as "seed unavailable":
//! - Transport failures
//! - Non-success status codes
//! - Missing fixture files
//!
//! The list cache turns every such error into an empty list.

use crate::error::Result;
use crate::key::SeedLocation;

mod file;
mod fixed;
#[cfg(feature = "http")]
mod http;

pub use file::FileSeedSource;
pub use fixed::StaticSeedSource;
#[cfg(feature = "http")]
pub use http::HttpSeedSource;

/// Trait for seed origins.
///
/// A fetch returns the raw payload; decoding and the "empty body means empty
/// list" rule live in the cache, so every source behaves the same way.
#[allow(async_fn_in_trait)]
pub trait SeedSource: Send + Sync {
    /// Fetch the raw payload at `location`.
    ///
    /// # Errors
    /// Returns `Err` if the seed is unavailable
    async fn fetch(&self, location: &SeedLocation) -> Result<Vec<u8>>;
}

impl<S: SeedSource> SeedSource for std::sync::Arc<S> {
    async fn fetch(&self, location: &SeedLocation) -> Result<Vec<u8>> {
        (**self).fetch(location).await
    }
}
