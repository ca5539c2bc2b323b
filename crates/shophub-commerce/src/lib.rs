//! Storefront domain types and logic for ShopHub.
//!
//! This crate provides the core of the ShopHub storefront:
//!
//! - **Catalog**: the immutable product dataset, loaded once at startup
//! - **Query**: filter / sort / limit views over the catalog, plus text
//!   search and related-product lookup
//! - **Cart**: line items with captured prices and derived totals
//! - **Lists**: wishlist, comparison (max 3, FIFO eviction), and
//!   recently-viewed collections
//! - **Account**: session profile and order history
//!
//! Aggregates persist through an injected [`shophub_store::Store`]; the
//! in-memory copy stays authoritative when the store misbehaves.
//!
//! # Example
//!
//! ```rust,ignore
//! use shophub_commerce::prelude::*;
//! use shophub_store::Store;
//!
//! let catalog = Catalog::from_json_file("data/products.json")?;
//! let store = Store::in_memory().into_handle();
//!
//! // Browse: cheapest in-stock electronics
//! let options = QueryOptions::new()
//!     .with_category("electronics")
//!     .in_stock_only()
//!     .with_sort(SortKey::PriceAsc);
//! let results = catalog.query(&options);
//!
//! // Add the first hit to the cart
//! let mut cart = Cart::load(store.clone());
//! if let Some(product) = results.first() {
//!     cart.add(CartItem::from_product(product));
//! }
//! println!("subtotal: {}", cart.subtotal());
//! ```

pub mod account;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod lists;
pub mod price;
pub mod query;

mod session;

pub use error::CommerceError;
pub use ids::ProductId;
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::price::Price;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Query
    pub use crate::query::{QueryOptions, SortKey};

    // Cart
    pub use crate::cart::{Cart, CartItem, Variant};

    // Lists
    pub use crate::lists::{Compare, RecentlyViewed, Wishlist, MAX_COMPARE_PRODUCTS};

    // Account
    pub use crate::account::{Account, Address, Order, OrderStatus, Profile};
}
