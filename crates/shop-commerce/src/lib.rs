//! Catalog, cart and search logic for the shop storefront.
//!
//! Everything here is synchronous and UI-agnostic:
//!
//! - **Catalog**: the product type, form mapping, and the local catalog state
//! - **Cart**: the cart reducer and its persistent store
//! - **Search**: the name/price filter, sort modes, and match highlighting
//!
//! # Example
//!
//! ```rust
//! use shop_cache::MemoryStore;
//! use shop_commerce::prelude::*;
//!
//! let mut cart = CartStore::load(MemoryStore::new(), LogNotifier, DEFAULT_CART_KEY);
//! let watch = Product::new("1", "Apple Watch", 399.0);
//!
//! cart.add(watch.clone());
//! cart.add(watch);
//! assert_eq!(cart.cart().len(), 1);
//! assert_eq!(cart.cart().item_count(), 2);
//! ```

pub mod error;
pub mod ids;
pub mod notify;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::notify::{LogNotifier, Notifier, RecordingNotifier};

    // Catalog
    pub use crate::catalog::{format_price, CatalogState, Product, ProductDraft, ProductForm};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartStore, DEFAULT_CART_KEY};

    // Search
    pub use crate::search::{apply, highlight, CatalogQuery, PriceRange, Segment, SortMode};
}
