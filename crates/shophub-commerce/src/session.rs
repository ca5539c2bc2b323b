//! Shared load/persist plumbing for session-scoped aggregates.
//!
//! Persistence failures are non-fatal: the in-memory aggregate remains
//! authoritative for the session, and the failure is logged.

use serde::{de::DeserializeOwned, Serialize};
use shophub_store::Store;

/// Read persisted state once, falling back to the default on any failure.
pub(crate) fn load_state<T>(store: &Store, name: &str, version: u32) -> T
where
    T: DeserializeOwned + Default,
{
    match store.load(name, version) {
        Ok(Some(state)) => state,
        Ok(None) => T::default(),
        Err(err) => {
            tracing::warn!(store = name, %err, "failed to load persisted state, starting empty");
            T::default()
        }
    }
}

/// Write state through to the store.
pub(crate) fn save_state<T: Serialize>(store: &Store, name: &str, version: u32, state: &T) {
    if let Err(err) = store.save(name, version, state) {
        tracing::warn!(store = name, %err, "failed to persist state, in-memory copy kept");
    }
}
