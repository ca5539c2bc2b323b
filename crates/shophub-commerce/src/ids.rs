//! Newtype product identifier.
//!
//! The dataset identifies products by integer id; wrapping it keeps ids
//! from being confused with quantities or other numeric fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product's unique identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Create an id from its integer value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the integer value.
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ProductId> for i64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
