//! Catalog query engine.
//!
//! Pure filter / sort / limit views over the product dataset, plus text
//! search and related-product lookup. Nothing here mutates the dataset or
//! fails: identical inputs always produce identical outputs.

mod engine;
mod options;
mod sort;

pub use engine::{query, related, search};
pub use options::QueryOptions;
pub use sort::SortKey;
