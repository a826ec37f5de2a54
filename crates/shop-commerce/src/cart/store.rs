//! Persistent cart state.

use crate::cart::{Cart, CartItem};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::notify::Notifier;
use shop_cache::{Cache, KeyValueStore};

/// Storage key used when none is configured.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Owns the cart and mirrors it to a key-value store.
///
/// Every mutation rewrites the whole cart under one key. Storage failures
/// never touch the in-memory cart; they are logged and shown to the user.
#[derive(Debug)]
pub struct CartStore<S, N> {
    cart: Cart,
    cache: Cache<S>,
    notifier: N,
    key: String,
}

impl<S: KeyValueStore, N: Notifier> CartStore<S, N> {
    /// Rehydrate the cart from `store`.
    ///
    /// A missing entry yields an empty cart. An unreadable or corrupt entry
    /// also yields an empty cart, after alerting the user.
    pub fn load(store: S, notifier: N, key: impl Into<String>) -> Self {
        let key = key.into();
        let cache = Cache::new(store);

        let cart = match cache.get::<Vec<CartItem>>(&key) {
            Ok(Some(items)) => {
                let cart = Cart::from_items(items);
                tracing::info!(key = %key, items = cart.len(), "cart restored");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::error!(key = %key, error = %e, "failed to read stored cart");
                notifier.alert("Could not load your saved cart. Starting with an empty cart.");
                Cart::new()
            }
        };

        Self {
            cart,
            cache,
            notifier,
            key,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Add one unit of `product`.
    pub fn add(&mut self, product: Product) {
        tracing::debug!(product = %product.id, "cart add");
        self.cart.add(product);
        self.persist();
    }

    /// Remove a product. Returns false if it was not in the cart.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        tracing::debug!(product = %product_id, "cart remove");
        let removed = self.cart.remove(product_id);
        self.persist();
        removed
    }

    /// Overwrite a quantity; zero or less removes the item.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        tracing::debug!(product = %product_id, quantity, "cart set quantity");
        let changed = self.cart.set_quantity(product_id, quantity);
        self.persist();
        changed
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        tracing::debug!("cart clear");
        self.cart.clear();
        self.persist();
    }

    /// Write the whole cart.
    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::error!(key = %self.key, error = %e, "failed to save cart");
            self.notifier
                .alert("Could not save your cart. Changes will be lost on reload.");
        }
    }

    fn save(&self) -> Result<(), CommerceError> {
        self.cache.set(&self.key, &self.cart)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use shop_cache::{LocalStorage, MemoryStore};

    fn watch() -> Product {
        Product::new("1", "Apple Watch", 399.0)
    }

    fn open(store: &MemoryStore) -> (CartStore<MemoryStore, RecordingNotifier>, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let cart = CartStore::load(store.clone(), notifier.clone(), DEFAULT_CART_KEY);
        (cart, notifier)
    }

    #[test]
    fn test_load_missing_is_empty() {
        let (cart, notifier) = open(&MemoryStore::new());
        assert!(cart.cart().is_empty());
        assert_eq!(notifier.count(), 0);
    }

    #[test]
    fn test_load_corrupt_is_empty_and_alerts() {
        let store = MemoryStore::with_entry(DEFAULT_CART_KEY, "{{definitely not json");
        let (cart, notifier) = open(&store);
        assert!(cart.cart().is_empty());
        assert_eq!(notifier.count(), 1);
    }

    #[test]
    fn test_load_wrong_shape_is_empty_and_alerts() {
        let store = MemoryStore::with_entry(DEFAULT_CART_KEY, r#"{"items": 3}"#);
        let (cart, notifier) = open(&store);
        assert!(cart.cart().is_empty());
        assert_eq!(notifier.count(), 1);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_unreadable_storage_is_empty_and_alerts() {
        // Outside a browser localStorage always reports Unavailable.
        let notifier = RecordingNotifier::new();
        let cart = CartStore::load(LocalStorage::new(), notifier.clone(), DEFAULT_CART_KEY);

        assert!(cart.cart().is_empty());
        assert_eq!(notifier.count(), 1);
        assert!(notifier.messages()[0].contains("saved cart"));
    }

    #[test]
    fn test_every_mutation_persists() {
        let store = MemoryStore::new();
        let (mut cart, _) = open(&store);

        cart.add(watch());
        cart.add(watch());
        let stored: Vec<CartItem> =
            serde_json::from_str(&store.raw(DEFAULT_CART_KEY).unwrap()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].quantity, 2);

        cart.set_quantity(&"1".into(), 5);
        let stored: Vec<CartItem> =
            serde_json::from_str(&store.raw(DEFAULT_CART_KEY).unwrap()).unwrap();
        assert_eq!(stored[0].quantity, 5);
    }

    #[test]
    fn test_reload_restores_cart() {
        let store = MemoryStore::new();
        {
            let (mut cart, _) = open(&store);
            cart.add(watch());
            cart.add(Product::new("2", "Banana", 1.0));
            cart.set_quantity(&"2".into(), 3);
        }

        let (cart, _) = open(&store);
        assert_eq!(cart.cart().len(), 2);
        assert_eq!(cart.cart().item_count(), 4);
    }

    #[test]
    fn test_clear_empties_storage() {
        let store = MemoryStore::new();
        let (mut cart, _) = open(&store);
        cart.add(watch());

        cart.clear();
        assert_eq!(store.raw(DEFAULT_CART_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_write_failure_alerts_and_keeps_memory() {
        let store = MemoryStore::new();
        let (mut cart, notifier) = open(&store);
        cart.add(watch());

        store.fail_writes(true);
        cart.add(watch());

        assert_eq!(cart.cart().get(&"1".into()).unwrap().quantity, 2);
        assert_eq!(notifier.count(), 1);

        let stored: Vec<CartItem> =
            serde_json::from_str(&store.raw(DEFAULT_CART_KEY).unwrap()).unwrap();
        assert_eq!(stored[0].quantity, 1);
    }

    #[test]
    fn test_custom_key() {
        let store = MemoryStore::new();
        let mut cart = CartStore::load(store.clone(), RecordingNotifier::new(), "shop:cart");
        cart.add(watch());
        assert!(store.raw("shop:cart").is_some());
        assert!(store.raw(DEFAULT_CART_KEY).is_none());
        assert_eq!(cart.key(), "shop:cart");
    }
}
