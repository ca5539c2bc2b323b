//! Sort keys for catalog queries.

use serde::{Deserialize, Serialize};

/// Sort order for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Effective price, low to high.
    PriceAsc,
    /// Effective price, high to low.
    PriceDesc,
    /// Highest rated first.
    Rating,
    /// New arrivals first. This orders on the `isNew` flag, not on a
    /// timestamp: all flagged products tie and keep dataset order.
    Newest,
    /// Most reviewed first.
    Popularity,
}

impl SortKey {
    /// The wire string (URL `sort` parameter value).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
            SortKey::Popularity => "popularity",
        }
    }

    /// Parse a wire string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "price_asc" => Some(SortKey::PriceAsc),
            "price_desc" => Some(SortKey::PriceDesc),
            "rating" => Some(SortKey::Rating),
            "newest" => Some(SortKey::Newest),
            "popularity" => Some(SortKey::Popularity),
            _ => None,
        }
    }

    /// Human-readable label for sort dropdowns.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Newest => "Newest",
            SortKey::Popularity => "Most Popular",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_roundtrip() {
        for key in [
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::Rating,
            SortKey::Newest,
            SortKey::Popularity,
        ] {
            assert_eq!(SortKey::from_str(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::from_str("relevance"), None);
    }

    #[test]
    fn serde_uses_wire_strings() {
        assert_eq!(
            serde_json::to_string(&SortKey::PriceAsc).unwrap(),
            r#""price_asc""#
        );
        let key: SortKey = serde_json::from_str(r#""popularity""#).unwrap();
        assert_eq!(key, SortKey::Popularity);
    }
}
