//! Type-safe key-value persistence for the shop storefront.
//!
//! Provides a small API for keeping JSON values in the browser's
//! `localStorage`, behind a [`KeyValueStore`] trait so the same code runs
//! against an in-memory map in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_cache::{Cache, LocalStorage};
//!
//! let cache = Cache::new(LocalStorage::new());
//!
//! // Store a value
//! cache.set("cart", &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<CartItem>> = cache.get("cart")?;
//! ```

mod error;
mod kv;
mod local;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use local::LocalStorage;
pub use store::{KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, KeyValueStore, LocalStorage, MemoryStore};
}
