//! Wishlist, comparison, and recently-viewed collections.
//!
//! Small persistent id lists with per-collection invariants: the wishlist
//! is an unbounded toggle set, the compare list holds at most three ids
//! with FIFO eviction, and recently-viewed keeps the last eight in
//! most-recent-first order.

mod compare;
mod recent;
mod wishlist;

pub use compare::{Compare, MAX_COMPARE_PRODUCTS};
pub use recent::{RecentlyViewed, MAX_RECENT_PRODUCTS};
pub use wishlist::Wishlist;
