//! # offline-lists
//!
//! Offline-first list persistence for back-office style applications.
//!
//! Every entity collection (users, products, orders, ...) is kept as one
//! whole list in a local key-value store. The first load of a collection
//! bootstraps it from a static seed resource; from then on the local copy is
//! authoritative and the seed is never consulted again.
//!
//! ## Features
//!
//! - **Read-through once:** a usable stored list always wins over the seed
//! - **Write-through always:** every save replaces the stored list wholesale
//! - **Never fails at the boundary:** seed and store failures degrade to an
//!   empty list and are reported through logs and [`observability`]
//! - **Store Agnostic:** in-memory and on-disk stores, or your own [`LocalStore`]
//! - **Seed Agnostic:** HTTP, fixture directory, or your own [`SeedSource`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use offline_lists::{
//!     PersistenceService,
//!     collections::User,
//!     seed::StaticSeedSource,
//!     store::InMemoryStore,
//! };
//!
//! let service = PersistenceService::new(InMemoryStore::new(), StaticSeedSource::new());
//!
//! // Typed access to one collection
//! let mut users = service.adapter::<User>();
//! users.activate().await;
//! users
//!     .create(User::new("Ann", "ann@example.com", "admin", "active"))
//!     .await;
//! ```
//!
//! ### Lower-level API
//!
//! Use [`ListCache`] directly for arbitrary keys and record types:
//!
//! ```ignore
//! use offline_lists::{ListCache, CollectionKey, SeedLocation};
//!
//! let cache = ListCache::new(store, seed);
//! let key = CollectionKey::new("coupons")?;
//!
//! let coupons: Vec<Coupon> = cache
//!     .load_list(&key, &SeedLocation::data_file("coupons"))
//!     .await;
//! cache.save_list(&key, Some(coupons.as_slice())).await;
//! ```

#[macro_use]
extern crate log;

pub mod adapter;
pub mod cache;
pub mod codec;
pub mod collections;
pub mod config;
pub mod entity;
pub mod error;
pub mod filter;
pub mod ids;
pub mod key;
pub mod observability;
pub mod seed;
pub mod service;
pub mod store;

// Re-exports for convenience
pub use adapter::CollectionAdapter;
pub use cache::ListCache;
pub use config::PersistenceConfig;
pub use entity::{Collection, Record};
pub use error::{Error, Result};
pub use filter::{ListFilter, Searchable};
pub use key::{CollectionKey, SeedLocation};
pub use observability::{LoadOutcome, LoadSource};
pub use seed::SeedSource;
pub use service::PersistenceService;
pub use store::LocalStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
