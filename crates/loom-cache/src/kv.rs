//! Typed JSON access over a [`SessionStorage`] backend.

use crate::{CacheError, SessionStorage};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over a session storage backend.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    storage: S,
}

impl<S: SessionStorage> Cache<S> {
    /// Wrap a storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and
    /// [`CacheError::Serialize`] if the stored text does not parse as `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let items: Option<Vec<CartLineItem>> = cache.get("session:abc:cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.storage.get_item(key)? {
            Some(text) => {
                let value: T = serde_json::from_str(&text)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache, replacing whatever was there.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let text = serde_json::to_string(value)?;
        self.storage.set_item(key, &text)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.storage.remove_item(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.storage.get_item(key)?.is_some())
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.storage.keys()
    }

    /// Borrow the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the cache and return the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```rust
/// let session = "sess_abc";
/// let key = loom_cache::cache_key!("session", session, "cart");
/// assert_eq!(key, "session:sess_abc:cart");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Slot {
        label: String,
        count: u32,
    }

    #[test]
    fn test_set_then_get() {
        let cache = Cache::new(MemoryStorage::new());
        let slot = Slot {
            label: "scarf".to_string(),
            count: 2,
        };
        cache.set("slot", &slot).unwrap();

        assert_eq!(cache.get::<Slot>("slot").unwrap(), Some(slot));
        assert!(cache.exists("slot").unwrap());
    }

    #[test]
    fn test_get_missing_is_none() {
        let cache = Cache::new(MemoryStorage::new());
        assert_eq!(cache.get::<Slot>("slot").unwrap(), None);
        assert!(!cache.exists("slot").unwrap());
    }

    #[test]
    fn test_get_unparseable_is_serialize_error() {
        let storage = MemoryStorage::new();
        storage.set_item("slot", "{not json").unwrap();
        let cache = Cache::new(storage);

        let err = cache.get::<Slot>("slot").unwrap_err();
        assert!(matches!(err, CacheError::Serialize(_)));
    }

    #[test]
    fn test_delete() {
        let cache = Cache::new(MemoryStorage::new());
        cache.set("slot", &1u32).unwrap();
        cache.delete("slot").unwrap();
        assert!(cache.keys().unwrap().is_empty());
    }

    #[test]
    fn test_cache_key_macro() {
        let id = 42;
        assert_eq!(cache_key!("session", id), "session:42");
        assert_eq!(cache_key!("session", "abc", "cart"), "session:abc:cart");
    }
}
