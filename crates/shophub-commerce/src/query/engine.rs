//! Filter, sort, limit, and search over the product dataset.

use crate::catalog::Product;
use crate::query::{QueryOptions, SortKey};
use std::cmp::Reverse;

/// Derive a filtered, sorted, size-limited view of `products`.
///
/// Filters are AND-combined and each applies only when its option is set.
/// Sorting is stable, so ties keep dataset order; with no sort key the
/// result preserves dataset order outright. The input is never mutated.
pub fn query(products: &[Product], options: &QueryOptions) -> Vec<Product> {
    let mut results: Vec<Product> = products
        .iter()
        .filter(|product| matches(product, options))
        .cloned()
        .collect();

    if let Some(sort) = options.sort {
        sort_products(&mut results, sort);
    }

    if let Some(limit) = options.limit {
        results.truncate(limit);
    }

    results
}

/// Case-insensitive substring search over title, description, brand,
/// category, and tags. A blank query yields nothing, not everything.
pub fn search(products: &[Product], text: &str) -> Vec<Product> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    products
        .iter()
        .filter(|product| haystack(product).contains(&needle))
        .cloned()
        .collect()
}

/// Up to `limit` products sharing `product`'s category, excluding the
/// product itself, in dataset order. No relevance ranking.
pub fn related(products: &[Product], product: &Product, limit: usize) -> Vec<Product> {
    products
        .iter()
        .filter(|candidate| candidate.category == product.category && candidate.id != product.id)
        .take(limit)
        .cloned()
        .collect()
}

fn matches(product: &Product, options: &QueryOptions) -> bool {
    if let Some(category) = &options.category {
        if product.category != *category {
            return false;
        }
    }

    let price = product.effective_price();
    if let Some(min) = options.min_price {
        if price < min {
            return false;
        }
    }
    if let Some(max) = options.max_price {
        if price > max {
            return false;
        }
    }

    if let Some(brands) = &options.brands {
        if !brands.iter().any(|brand| *brand == product.brand) {
            return false;
        }
    }

    if let Some(rating) = options.rating {
        if product.rating < rating {
            return false;
        }
    }

    if options.in_stock == Some(true) && product.stock == 0 {
        return false;
    }
    if options.featured == Some(true) && !product.is_featured {
        return false;
    }
    if options.is_new == Some(true) && !product.is_new {
        return false;
    }

    true
}

fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::PriceAsc => products.sort_by_key(|p| p.effective_price()),
        SortKey::PriceDesc => products.sort_by_key(|p| Reverse(p.effective_price())),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Newest => products.sort_by_key(|p| Reverse(p.is_new)),
        SortKey::Popularity => products.sort_by_key(|p| Reverse(p.review_count)),
    }
}

fn haystack(product: &Product) -> String {
    let mut parts: Vec<&str> = vec![
        &product.title,
        &product.description,
        &product.brand,
        &product.category,
    ];
    parts.extend(product.tags.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}
