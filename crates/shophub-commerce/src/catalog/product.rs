//! Product record.

use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Loaded once from the dataset and never mutated. Field names on the wire
/// are camelCase (`salePrice`, `reviewCount`, ...), matching the dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Product title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Base price.
    pub price: Price,
    /// Sale price, if the product is discounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Price>,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Brand name.
    pub brand: String,
    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Category slug.
    pub category: String,
    /// Tags for search.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Units in stock.
    pub stock: u32,
    /// Available colors, if the product has color variants.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    /// Available sizes, if the product has size variants.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    /// Featured on the storefront home page.
    #[serde(default)]
    pub is_featured: bool,
    /// Flagged as a new arrival.
    #[serde(default)]
    pub is_new: bool,
}

impl Product {
    /// The price a buyer actually pays: sale price if present, else base.
    ///
    /// Every price comparison in the crate (filters, sorting, cart capture)
    /// goes through this single definition.
    pub fn effective_price(&self) -> Price {
        self.sale_price.unwrap_or(self.price)
    }

    /// Check if the product is discounted below its base price.
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some_and(|sale| sale < self.price)
    }

    /// Discount percentage when on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.sale_price.and_then(|sale| {
            if sale < self.price && !self.price.is_zero() {
                let savings = (self.price.cents() - sale.cents()) as f64;
                Some(savings / self.price.cents() as f64 * 100.0)
            } else {
                None
            }
        })
    }

    /// Check if the product can be added to the cart.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// First image URL, for listings and cart lines.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
