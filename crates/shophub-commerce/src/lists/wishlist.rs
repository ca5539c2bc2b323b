//! Wishlist aggregate.

use crate::ids::ProductId;
use crate::session;
use shophub_store::StoreHandle;

const STORE_NAME: &str = "wishlist";
const SCHEMA_VERSION: u32 = 1;

/// A persistent set of wished-for product ids.
///
/// Membership is flipped by [`toggle`](Wishlist::toggle); ids are kept in
/// insertion order but no ordering is guaranteed to consumers.
#[derive(Debug)]
pub struct Wishlist {
    ids: Vec<ProductId>,
    store: StoreHandle,
}

impl Wishlist {
    /// Open the wishlist for a session, reading any persisted state.
    pub fn load(store: StoreHandle) -> Self {
        let ids = session::load_state(&store, STORE_NAME, SCHEMA_VERSION);
        Self { ids, store }
    }

    /// Flip membership for `id`. Returns whether the id is now present.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        let present = if let Some(position) = self.ids.iter().position(|existing| *existing == id) {
            self.ids.remove(position);
            false
        } else {
            self.ids.push(id);
            true
        };
        self.persist();
        present
    }

    /// Check membership.
    pub fn has(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Current ids.
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Number of wished-for products.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Empty the wishlist.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.persist();
    }

    fn persist(&self) {
        session::save_state(&self.store, STORE_NAME, SCHEMA_VERSION, &self.ids);
    }
}
