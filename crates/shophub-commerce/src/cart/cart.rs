//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::price::Price;
use crate::session;
use serde::{Deserialize, Serialize};
use shophub_store::StoreHandle;

const STORE_NAME: &str = "cart";
const SCHEMA_VERSION: u32 = 1;

/// A chosen product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Variant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// One line in the cart: a product with the price captured at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product id.
    pub id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price at time of add; not re-fetched if the catalog changes.
    pub price: Price,
    /// Quantity, at least 1 once stored.
    pub qty: u32,
    /// Image URL for display.
    pub image: String,
    /// Chosen variant, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
}

impl CartItem {
    /// Create a line item with quantity 1.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            qty: 1,
            image: image.into(),
            variant: None,
        }
    }

    /// Capture a product as a line item at its current effective price.
    pub fn from_product(product: &Product) -> Self {
        Self::new(
            product.id,
            product.title.clone(),
            product.effective_price(),
            product.primary_image().unwrap_or_default(),
        )
    }

    /// Set the quantity.
    pub fn with_qty(mut self, qty: u32) -> Self {
        self.qty = qty;
        self
    }

    /// Set the chosen variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Line total: captured price times quantity.
    pub fn line_total(&self) -> Price {
        self.price.saturating_mul(self.qty)
    }
}

/// The shopping cart aggregate.
///
/// The single source of truth for what is in the cart. State is read from
/// the session store once at construction and written through on every
/// mutation; store failures leave the in-memory state authoritative.
#[derive(Debug)]
pub struct Cart {
    items: Vec<CartItem>,
    store: StoreHandle,
}

impl Cart {
    /// Open the cart for a session, reading any persisted state.
    pub fn load(store: StoreHandle) -> Self {
        let items = session::load_state(&store, STORE_NAME, SCHEMA_VERSION);
        Self { items, store }
    }

    /// Add an item to the cart.
    ///
    /// Lines are keyed on product id alone: adding an id already present
    /// increments that line's quantity, keeping its captured price and
    /// variant; a differing variant on the incoming item does not split
    /// the line. A zero incoming quantity counts as 1.
    pub fn add(&mut self, item: CartItem) {
        let qty = item.qty.max(1);
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(existing) => {
                existing.qty = existing.qty.saturating_add(qty);
            }
            None => {
                self.items.push(CartItem { qty, ..item });
            }
        }
        self.persist();
    }

    /// Remove the line with this product id; no-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        let before = self.items.len();
        self.items.retain(|line| line.id != id);
        if self.items.len() != before {
            self.persist();
        }
    }

    /// Set the quantity for a line; zero removes it. No-op if absent.
    pub fn update_qty(&mut self, id: ProductId, qty: u32) {
        if qty == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|line| line.id == id) {
            line.qty = qty;
            self.persist();
        }
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Current lines, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up a line by product id.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|line| line.id == id)
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn unique_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of captured price times quantity over all lines.
    ///
    /// Recomputed on every call; never cached.
    pub fn subtotal(&self) -> Price {
        self.items
            .iter()
            .fold(Price::zero(), |total, line| {
                total.saturating_add(line.line_total())
            })
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count, line| count.saturating_add(line.qty))
    }

    fn persist(&self) {
        session::save_state(&self.store, STORE_NAME, SCHEMA_VERSION, &self.items);
    }
}
