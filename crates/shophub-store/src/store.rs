//! Typed store with automatic serialization and schema versioning.

use crate::{Backend, StoreError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Shared handle to a session store.
///
/// All aggregates of one session hold clones of the same handle.
pub type StoreHandle = Arc<Store>;

/// Persisted representation: the state wrapped with a schema version tag.
#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    state: T,
}

/// A typed session store over a raw [`Backend`].
///
/// Values are persisted as JSON, wrapped in an envelope carrying a schema
/// version. Loading checks the stored version first: a mismatch reads as
/// `None`, so callers rebuild fresh state instead of misinterpreting an
/// older layout.
pub struct Store {
    backend: Box<dyn Backend>,
}

impl Store {
    /// Create a store over the given backend.
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Create a store over a fresh in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(crate::MemoryBackend::new())
    }

    /// Wrap this store in a shareable handle.
    pub fn into_handle(self) -> StoreHandle {
        Arc::new(self)
    }

    /// Load the state persisted under `name`.
    ///
    /// Returns `Ok(None)` if nothing is stored or if the stored envelope
    /// carries a different schema version.
    pub fn load<T: DeserializeOwned>(
        &self,
        name: &str,
        version: u32,
    ) -> Result<Option<T>, StoreError> {
        let Some(bytes) = self.backend.get(name)? else {
            return Ok(None);
        };

        // Probe the version before committing to the state's shape.
        let envelope: Envelope<serde_json::Value> = serde_json::from_slice(&bytes)?;
        if envelope.version != version {
            return Ok(None);
        }

        Ok(Some(serde_json::from_value(envelope.state)?))
    }

    /// Persist `state` under `name`, tagged with `version`.
    pub fn save<T: Serialize>(&self, name: &str, version: u32, state: &T) -> Result<(), StoreError> {
        let envelope = Envelope { version, state };
        let bytes = serde_json::to_vec(&envelope)?;
        self.backend.set(name, &bytes)
    }

    /// Remove the state persisted under `name`.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        self.backend.delete(name)
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;

    #[test]
    fn roundtrip() {
        let store = Store::in_memory();
        store.save("wishlist", 1, &vec![3_i64, 5, 8]).unwrap();

        let ids: Option<Vec<i64>> = store.load("wishlist", 1).unwrap();
        assert_eq!(ids, Some(vec![3, 5, 8]));
    }

    #[test]
    fn missing_key_is_none() {
        let store = Store::in_memory();
        let ids: Option<Vec<i64>> = store.load("cart", 1).unwrap();
        assert_eq!(ids, None);
    }

    #[test]
    fn version_mismatch_is_none() {
        let store = Store::in_memory();
        store.save("cart", 1, &vec![1_i64]).unwrap();

        let ids: Option<Vec<i64>> = store.load("cart", 2).unwrap();
        assert_eq!(ids, None);
    }

    #[test]
    fn envelope_wire_shape() {
        let backend = MemoryBackend::new();
        backend
            .set("compare", br#"{"version":1,"state":[4,9]}"#)
            .unwrap();

        let store = Store::new(backend);
        let ids: Option<Vec<i64>> = store.load("compare", 1).unwrap();
        assert_eq!(ids, Some(vec![4, 9]));
    }

    #[test]
    fn corrupt_payload_is_error() {
        let backend = MemoryBackend::new();
        backend.set("cart", b"not json").unwrap();

        let store = Store::new(backend);
        let result: Result<Option<Vec<i64>>, _> = store.load("cart", 1);
        assert!(result.is_err());
    }

    #[test]
    fn delete_clears_state() {
        let store = Store::in_memory();
        store.save("cart", 1, &vec![1_i64]).unwrap();
        store.delete("cart").unwrap();

        let ids: Option<Vec<i64>> = store.load("cart", 1).unwrap();
        assert_eq!(ids, None);
    }
}
