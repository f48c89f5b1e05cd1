//! # Domain Types
//!
//! Core domain types for the cart engine.
//!
//! ## Identity
//! A product is identified by an integer `id`. The cart itself never
//! assigns ids; the catalog that feeds the UI owns them, and the cart
//! only uses them to match rows on removal.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::DEFAULT_QUANTITY;

// =============================================================================
// Cart Item
// =============================================================================

/// One distinct product as it appears in the cart.
///
/// The descriptive fields are a snapshot of the catalog entry at the
/// time the caller built the item. The cart treats them as opaque; only
/// `id` (row matching) and `price` (totals) participate in cart logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Unique integer product identifier.
    pub id: u64,

    /// Display name shown in the cart panel.
    pub name: String,

    /// Product category.
    pub category: String,

    /// Longer product description.
    pub description: String,

    /// Image URL (may be empty).
    pub image: String,

    /// Unit price in minor currency units.
    pub price: Money,

    /// Units of this item in the row, >= 1. Defaults to 1 when the
    /// serialized input omits it.
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    DEFAULT_QUANTITY
}

impl CartItem {
    /// Creates a cart item with quantity 1 and empty descriptive fields.
    ///
    /// Convenience constructor for callers (and tests) that only care
    /// about the fields cart logic reads.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{CartItem, Money};
    ///
    /// let item = CartItem::new(1, "Americano", Money::from_minor(1000));
    /// assert_eq!(item.quantity, 1);
    /// ```
    pub fn new(id: u64, name: impl Into<String>, price: Money) -> Self {
        CartItem {
            id,
            name: name.into(),
            category: String::new(),
            description: String::new(),
            image: String::new(),
            price,
            quantity: DEFAULT_QUANTITY,
        }
    }

    /// Sets the quantity, builder style.
    #[must_use]
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Line total if the row's own quantity is honored
    /// (unit price × quantity).
    ///
    /// Note: the cart-wide `total` does NOT use this; see
    /// [`crate::cart::Cart::total`].
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let item = CartItem::new(7, "test", Money::from_minor(1000));
        assert_eq!(item.id, 7);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.category, "");
        assert_eq!(item.image, "");
    }

    #[test]
    fn test_with_quantity() {
        let item = CartItem::new(7, "test", Money::from_minor(1000)).with_quantity(3);
        assert_eq!(item.quantity, 3);
        assert_eq!(item.line_total().minor(), 3000);
    }

    #[test]
    fn test_deserialize_fills_default_quantity() {
        let json = r#"{
            "id": 1,
            "name": "test",
            "category": "test",
            "description": "test",
            "image": "",
            "price": 1000
        }"#;

        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, Money::from_minor(1000));
    }

    #[test]
    fn test_serialize_price_as_plain_integer() {
        let item = CartItem::new(1, "test", Money::from_minor(1000));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["price"], 1000);
        assert_eq!(value["quantity"], 1);
    }
}
