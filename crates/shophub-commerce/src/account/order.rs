//! Order types.

use crate::account::profile::current_timestamp;
use crate::cart::Cart;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, not yet picked up for processing.
    Pending,
    /// Being prepared.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Delivered to the customer.
    Delivered,
    /// Cancelled before delivery.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order has reached a final state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// A placed order, as shown in the account's order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier (e.g. `ORD-1024`).
    pub id: String,
    /// Unix timestamp of placement.
    pub placed_at: i64,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// Order total at placement.
    pub total: Price,
    /// Number of items (sum of quantities).
    pub items: u32,
    /// Carrier tracking number, once shipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

impl Order {
    /// Capture a cart as a pending order, stamped with the current time.
    ///
    /// The cart is not cleared here: recording the order and emptying the
    /// cart are independent aggregate operations, and the caller sequences
    /// them.
    pub fn from_cart(id: impl Into<String>, cart: &Cart) -> Self {
        Self {
            id: id.into(),
            placed_at: current_timestamp(),
            status: OrderStatus::Pending,
            total: cart.subtotal(),
            items: cart.item_count(),
            tracking_number: None,
        }
    }

    /// Set the tracking number.
    pub fn with_tracking_number(mut self, tracking_number: impl Into<String>) -> Self {
        self.tracking_number = Some(tracking_number.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;
    use crate::ids::ProductId;
    use shophub_store::Store;

    #[test]
    fn status_strings_roundtrip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::from_str("refunded"), None);
    }

    #[test]
    fn terminal_statuses() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn from_cart_captures_totals() {
        let mut cart = Cart::load(Store::in_memory().into_handle());
        cart.add(
            CartItem::new(
                ProductId::new(1),
                "Product 1",
                Price::from_decimal(50.0),
                "a.jpg",
            )
            .with_qty(2),
        );
        cart.add(CartItem::new(
            ProductId::new(2),
            "Product 2",
            Price::from_decimal(30.0),
            "b.jpg",
        ));

        let order = Order::from_cart("ORD-001", &cart);
        assert_eq!(order.total, Price::from_decimal(130.0));
        assert_eq!(order.items, 3);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.tracking_number.is_none());

        // Capturing an order leaves the cart untouched
        assert_eq!(cart.item_count(), 3);
    }
}
