//! Price type for monetary values.
//!
//! Amounts are stored as integer cents so comparisons, sorting, and totals
//! stay exact. On the wire (the product dataset, persisted cart state) a
//! price is a plain decimal number like `49.99`, so serde converts at the
//! boundary.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A monetary value in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    cents: i64,
}

impl Price {
    /// Create a price from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a price from a decimal amount.
    ///
    /// ```
    /// use shophub_commerce::Price;
    /// assert_eq!(Price::from_decimal(49.99).cents(), 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    /// A zero price.
    pub const fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Amount in cents.
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Amount as a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Check if this is zero.
    pub const fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Format for display (e.g. `$49.99`).
    pub fn display(&self) -> String {
        format!("${:.2}", self.to_decimal())
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn checked_mul(&self, qty: u32) -> Option<Price> {
        self.cents
            .checked_mul(i64::from(qty))
            .map(Price::from_cents)
    }

    /// Multiply by a quantity, clamping on overflow.
    pub fn saturating_mul(&self, qty: u32) -> Price {
        Price::from_cents(self.cents.saturating_mul(i64::from(qty)))
    }

    /// Add another price, clamping on overflow.
    pub fn saturating_add(&self, other: Price) -> Price {
        Price::from_cents(self.cents.saturating_add(other.cents))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Price::from_decimal)
    }
}
