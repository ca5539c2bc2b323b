//! Recently-viewed products aggregate.

use crate::ids::ProductId;
use crate::session;
use shophub_store::StoreHandle;

const STORE_NAME: &str = "recently-viewed";
const SCHEMA_VERSION: u32 = 1;

/// Maximum number of recently-viewed products retained.
pub const MAX_RECENT_PRODUCTS: usize = 8;

/// A persistent most-recent-first list of viewed product ids.
#[derive(Debug)]
pub struct RecentlyViewed {
    ids: Vec<ProductId>,
    store: StoreHandle,
}

impl RecentlyViewed {
    /// Open the list for a session, reading any persisted state.
    pub fn load(store: StoreHandle) -> Self {
        let ids = session::load_state(&store, STORE_NAME, SCHEMA_VERSION);
        Self { ids, store }
    }

    /// Record a view. An id already present moves to the front; the list
    /// is truncated to capacity.
    pub fn push(&mut self, id: ProductId) {
        self.ids.retain(|existing| *existing != id);
        self.ids.insert(0, id);
        self.ids.truncate(MAX_RECENT_PRODUCTS);
        self.persist();
    }

    /// Current ids, most recent first.
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Number of retained ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing has been viewed.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Forget all views.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.persist();
    }

    fn persist(&self) {
        session::save_state(&self.store, STORE_NAME, SCHEMA_VERSION, &self.ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_store::Store;

    fn recent() -> RecentlyViewed {
        RecentlyViewed::load(Store::in_memory().into_handle())
    }

    fn ids(recent: &RecentlyViewed) -> Vec<i64> {
        recent.ids().iter().map(|id| id.value()).collect()
    }

    #[test]
    fn most_recent_first() {
        let mut recent = recent();
        recent.push(ProductId::new(1));
        recent.push(ProductId::new(2));
        recent.push(ProductId::new(3));
        assert_eq!(ids(&recent), vec![3, 2, 1]);
    }

    #[test]
    fn revisit_moves_to_front() {
        let mut recent = recent();
        recent.push(ProductId::new(1));
        recent.push(ProductId::new(2));
        recent.push(ProductId::new(1));
        assert_eq!(ids(&recent), vec![1, 2]);
        assert_eq!(recent.len(), 2);
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut recent = recent();
        for id in 1..=10 {
            recent.push(ProductId::new(id));
        }
        assert_eq!(ids(&recent), vec![10, 9, 8, 7, 6, 5, 4, 3]);
        assert_eq!(recent.len(), MAX_RECENT_PRODUCTS);
    }

    #[test]
    fn clear_and_reload() {
        let store = Store::in_memory().into_handle();

        let mut recent = RecentlyViewed::load(store.clone());
        recent.push(ProductId::new(1));
        recent.push(ProductId::new(2));

        let reloaded = RecentlyViewed::load(store.clone());
        assert_eq!(
            reloaded.ids().iter().map(|id| id.value()).collect::<Vec<_>>(),
            vec![2, 1]
        );

        recent.clear();
        let cleared = RecentlyViewed::load(store);
        assert!(cleared.is_empty());
    }
}
