//! The product dataset.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::query::{self, QueryOptions};
use std::fs;
use std::path::Path;

/// The immutable, ordered product dataset.
///
/// Loaded once at process start and shared read-only from then on. All
/// derived views (queries, search, related products) are computed fresh
/// from the stored order; nothing here mutates after construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an already-loaded product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    /// Load a catalog from a JSON dataset file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Number of products in the dataset.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, in dataset order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Look up a product by id. Unknown ids are an absence, not an error.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Look up a product by slug.
    pub fn get_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.slug == slug)
    }

    /// Derive a filtered, sorted, limited view of the dataset.
    pub fn query(&self, options: &QueryOptions) -> Vec<Product> {
        query::query(&self.products, options)
    }

    /// Case-insensitive text search over title, description, brand,
    /// category, and tags.
    pub fn search(&self, text: &str) -> Vec<Product> {
        query::search(&self.products, text)
    }

    /// Up to `limit` products sharing `product`'s category, excluding the
    /// product itself, in dataset order.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<Product> {
        query::related(&self.products, product, limit)
    }
}
