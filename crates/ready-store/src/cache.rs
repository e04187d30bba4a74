//! JSON-typed view over a raw backend.
//!
//! Reads fall back to a caller-supplied default on absence, unreadable
//! storage, or undecodable JSON. Writes that fail are logged and dropped.
//! Neither direction ever surfaces an error to the checklist.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::KeyValueBackend;
use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct JsonCache<B> {
    backend: B,
}

impl<B: KeyValueBackend> JsonCache<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Decode the value under `key`, or return `default`.
    pub fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.backend.get_raw(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(error) => {
                    tracing::warn!(key, %error, "stored value is not valid JSON; using default");
                    default
                }
            },
            Ok(None) => {
                tracing::debug!(key, "no stored value; using default");
                default
            }
            Err(error) => {
                tracing::warn!(key, %error, "failed to read stored value; using default");
                default
            }
        }
    }

    /// Encode and store `value` under `key`, swallowing any failure.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        if let Err(error) = self.try_save(key, value) {
            tracing::warn!(key, %error, "failed to persist value");
        }
    }

    /// Like [`Self::save`] but reports the failure.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] when `value` cannot be encoded, or the
    /// backend's error when the write fails.
    pub fn try_save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.backend.set_raw(key, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::backend::MemoryBackend;

    /// Backend whose every operation fails.
    struct BrokenBackend;

    impl KeyValueBackend for BrokenBackend {
        fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::InvalidKey(key.to_string()))
        }

        fn set_raw(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }

    #[test]
    fn corrupt_json_falls_back_to_default() {
        let cache = JsonCache::new(MemoryBackend::new().with_raw("answers", "{not json"));
        let loaded: BTreeMap<String, String> = cache.load_or("answers", BTreeMap::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn wrong_type_falls_back_to_default() {
        let cache = JsonCache::new(MemoryBackend::new().with_raw("consent", "\"yes\""));
        assert!(!cache.load_or("consent", false));
    }

    #[test]
    fn missing_key_uses_default() {
        let cache = JsonCache::new(MemoryBackend::new());
        assert_eq!(cache.load_or("name", String::from("fallback")), "fallback");
    }

    #[test]
    fn saved_values_are_plain_json() {
        let mut cache = JsonCache::new(MemoryBackend::new());
        cache.save("name", "Jane");
        cache.save("step", &3_usize);
        cache.save("consent", &true);

        let backend = cache.backend();
        assert_eq!(backend.get_raw("name").expect("read").as_deref(), Some("\"Jane\""));
        assert_eq!(backend.get_raw("step").expect("read").as_deref(), Some("3"));
        assert_eq!(backend.get_raw("consent").expect("read").as_deref(), Some("true"));
        assert_eq!(cache.load_or("step", 0_usize), 3);
    }

    #[test]
    fn broken_backend_never_panics_or_errors() {
        let mut cache = JsonCache::new(BrokenBackend);
        cache.save("name", "Jane");
        assert_eq!(cache.load_or("name", String::new()), "");
        assert!(cache.try_save("name", "Jane").is_err());
    }
}
