//! Pluggable key-value session persistence for ShopHub.
//!
//! Storefront aggregates (cart, wishlist, compare) survive across sessions
//! by writing their state through to a key-value store on every mutation
//! and reading it back once on construction. This crate provides the port
//! they write through: a [`Backend`] trait over raw bytes, an in-memory and
//! a file-backed implementation, and a typed [`Store`] wrapper that handles
//! JSON serialization and schema versioning.
//!
//! # Example
//!
//! ```rust,ignore
//! use shophub_store::{MemoryBackend, Store};
//!
//! let store = Store::new(MemoryBackend::new());
//!
//! // Persist state under a store name, tagged with a schema version
//! store.save("cart", 1, &items)?;
//!
//! // Read it back; a missing key or a different schema version reads as None
//! let items: Option<Vec<CartItem>> = store.load("cart", 1)?;
//! ```

mod backend;
mod error;
mod store;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use error::StoreError;
pub use store::{Store, StoreHandle};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Backend, FileBackend, MemoryBackend, Store, StoreError, StoreHandle};
}
