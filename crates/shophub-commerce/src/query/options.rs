//! Query options.

use crate::price::Price;
use crate::query::SortKey;
use serde::{Deserialize, Serialize};

/// Filter, sort, and limit parameters for a catalog query.
///
/// Every field defaults to "no filter". Options are transient: they are
/// built per request (typically from URL query parameters) and never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryOptions {
    /// Exact category match.
    pub category: Option<String>,
    /// Inclusive lower bound on the effective price.
    pub min_price: Option<Price>,
    /// Inclusive upper bound on the effective price.
    pub max_price: Option<Price>,
    /// Brand must be one of these.
    pub brands: Option<Vec<String>>,
    /// Minimum rating threshold.
    pub rating: Option<f64>,
    /// Only in-stock products. `Some(false)` does not filter.
    pub in_stock: Option<bool>,
    /// Only featured products. `Some(false)` does not filter.
    pub featured: Option<bool>,
    /// Only new arrivals. `Some(false)` does not filter.
    pub is_new: Option<bool>,
    /// Sort order; unset preserves dataset order.
    pub sort: Option<SortKey>,
    /// Truncate results to this many products.
    pub limit: Option<usize>,
}

impl QueryOptions {
    /// Options with no filters set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Bound the effective price (inclusive on both ends).
    pub fn with_price_range(mut self, min: Option<Price>, max: Option<Price>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Filter to these brands.
    pub fn with_brands(mut self, brands: Vec<String>) -> Self {
        self.brands = Some(brands);
        self
    }

    /// Require a minimum rating.
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Only in-stock products.
    pub fn in_stock_only(mut self) -> Self {
        self.in_stock = Some(true);
        self
    }

    /// Only featured products.
    pub fn featured_only(mut self) -> Self {
        self.featured = Some(true);
        self
    }

    /// Only new arrivals.
    pub fn new_only(mut self) -> Self {
        self.is_new = Some(true);
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Truncate results.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build options from URL-style query parameters.
    ///
    /// Accepts the storefront's parameter vocabulary: `category`,
    /// `minPrice`, `maxPrice`, `brands` (comma-separated), `rating`,
    /// `inStock`, `featured`, `new`, `sort`, `limit`. Values that fail to
    /// parse are treated as unset; boolean parameters filter only when
    /// literally `"true"`; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "category" => {
                    if !value.is_empty() {
                        options.category = Some(value.to_string());
                    }
                }
                "minPrice" => {
                    options.min_price = parse_finite(value).map(Price::from_decimal);
                }
                "maxPrice" => {
                    options.max_price = parse_finite(value).map(Price::from_decimal);
                }
                "brands" => {
                    let brands: Vec<String> = value
                        .split(',')
                        .map(str::trim)
                        .filter(|brand| !brand.is_empty())
                        .map(String::from)
                        .collect();
                    if !brands.is_empty() {
                        options.brands = Some(brands);
                    }
                }
                "rating" => {
                    options.rating = parse_finite(value);
                }
                "inStock" => {
                    if value == "true" {
                        options.in_stock = Some(true);
                    }
                }
                "featured" => {
                    if value == "true" {
                        options.featured = Some(true);
                    }
                }
                "new" => {
                    if value == "true" {
                        options.is_new = Some(true);
                    }
                }
                "sort" => {
                    options.sort = SortKey::from_str(value);
                }
                "limit" => {
                    options.limit = value.parse().ok();
                }
                _ => {}
            }
        }
        options
    }
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
