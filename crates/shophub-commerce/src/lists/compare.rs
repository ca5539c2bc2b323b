//! Product comparison aggregate.

use crate::ids::ProductId;
use crate::session;
use shophub_store::StoreHandle;

const STORE_NAME: &str = "compare";
const SCHEMA_VERSION: u32 = 1;

/// Maximum number of products in a comparison.
pub const MAX_COMPARE_PRODUCTS: usize = 3;

/// A persistent, ordered comparison list of at most three product ids.
///
/// Insertion order matters: when a fourth id is added, the oldest entry
/// (position 0) is evicted before the new id is appended.
#[derive(Debug)]
pub struct Compare {
    ids: Vec<ProductId>,
    store: StoreHandle,
}

impl Compare {
    /// Open the comparison list for a session, reading any persisted state.
    pub fn load(store: StoreHandle) -> Self {
        let ids = session::load_state(&store, STORE_NAME, SCHEMA_VERSION);
        Self { ids, store }
    }

    /// Add an id; no-op if already present. At capacity, evicts the
    /// oldest entry first.
    pub fn add(&mut self, id: ProductId) {
        if self.ids.contains(&id) {
            return;
        }
        if self.ids.len() >= MAX_COMPARE_PRODUCTS {
            self.ids.remove(0);
        }
        self.ids.push(id);
        self.persist();
    }

    /// Remove an id; no-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        let before = self.ids.len();
        self.ids.retain(|existing| *existing != id);
        if self.ids.len() != before {
            self.persist();
        }
    }

    /// Check membership.
    pub fn has(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Current ids in insertion order, oldest first.
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Number of products being compared.
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Check if the comparison is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Check if the comparison is at capacity.
    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE_PRODUCTS
    }

    /// Empty the comparison.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.persist();
    }

    fn persist(&self) {
        session::save_state(&self.store, STORE_NAME, SCHEMA_VERSION, &self.ids);
    }
}
