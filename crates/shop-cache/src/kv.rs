//! Key-value store wrapper with automatic serialization.

use crate::{CacheError, KeyValueStore};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over any [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and
    /// [`CacheError::SerializeError`] if the stored text is not valid JSON
    /// for `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let items: Option<Vec<CartItem>> = cache.get("cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(text) => {
                let value: T = serde_json::from_str(&text)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let text = serde_json::to_string(value)?;
        tracing::trace!(key, bytes = text.len(), "cache write");
        self.store.set(key, &text)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
        count: u32,
    }

    #[test]
    fn test_get_missing_is_none() {
        let cache = Cache::new(MemoryStore::new());
        let value: Option<Entry> = cache.get("missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_writes_json() {
        let store = MemoryStore::new();
        let cache = Cache::new(store.clone());
        cache
            .set("entry", &Entry { name: "a".to_string(), count: 2 })
            .unwrap();

        assert_eq!(store.raw("entry").unwrap(), r#"{"name":"a","count":2}"#);
        let back: Entry = cache.get("entry").unwrap().unwrap();
        assert_eq!(back.count, 2);
    }

    #[test]
    fn test_get_corrupt_value_is_serialize_error() {
        let cache = Cache::new(MemoryStore::with_entry("entry", "{not json"));
        let result: Result<Option<Entry>, _> = cache.get("entry");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_set_propagates_store_failure() {
        let store = MemoryStore::new();
        store.fail_writes(true);
        let cache = Cache::new(store);
        let result = cache.set("entry", &Entry { name: "a".to_string(), count: 1 });
        assert!(matches!(result, Err(CacheError::StoreError(_))));
    }
}
