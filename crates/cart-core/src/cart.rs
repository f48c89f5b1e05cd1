//! # Cart Module
//!
//! The cart collection and its operations.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                            │
//! │                                                                 │
//! │  UI Action               Operation            State Change      │
//! │  ─────────               ─────────            ────────────      │
//! │                                                                 │
//! │  Click "Add" ──────────► add(item) ─────────► rows.push(item)   │
//! │                                                                 │
//! │  Click "Remove" ───────► remove(id) ────────► rows.retain(..)   │
//! │                                                                 │
//! │  Click "Clear" ────────► clear() ───────────► rows.clear()      │
//! │                                                                 │
//! │  Totals display ───────► total() ───────────► (read only)       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Duplicate Semantics
//! Adding the same product id twice appends a second row; rows are never
//! merged and a row keeps the quantity it was added with. `total` sums
//! the unit price of every row, so an item added N times contributes
//! N × price regardless of the rows' `quantity` fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::CartItem;
use crate::validation::validate_cart_item;
use crate::MAX_CART_ENTRIES;

// =============================================================================
// Cart
// =============================================================================

/// An ordered collection of cart rows belonging to one shopping session.
///
/// ## Invariants
/// - Rows keep insertion order
/// - A row is never mutated after insertion; removal is by product id
/// - `add`, `remove` and `clear` are total functions: they never fail
///   over the documented input domain
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Rows in the cart, in insertion order.
    rows: Vec<CartItem>,

    /// When the cart was created or last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart (session start).
    pub fn new() -> Self {
        Cart {
            rows: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends an item to the cart.
    ///
    /// ## Behavior
    /// - Always appends a new row, even when a row with the same id
    ///   already exists
    /// - Never fails
    pub fn add(&mut self, item: CartItem) {
        self.rows.push(item);
    }

    /// Appends an item after enforcing the caller contract.
    ///
    /// Layered above [`Cart::add`] for callers that cannot trust their
    /// input (e.g. items deserialized straight from the wire).
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] when the item violates the input
    ///   contract (quantity < 1, negative price, empty name)
    /// - [`CoreError::CartTooLarge`] when the cart already holds
    ///   [`MAX_CART_ENTRIES`] rows
    pub fn add_checked(&mut self, item: CartItem) -> CoreResult<()> {
        validate_cart_item(&item)?;

        if self.rows.len() >= MAX_CART_ENTRIES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ENTRIES,
            });
        }

        self.add(item);
        Ok(())
    }

    /// Removes all rows whose product id matches.
    ///
    /// ## Behavior
    /// - Removes every matching row, not just the first
    /// - No-op (not an error) when no row matches
    ///
    /// ## Returns
    /// The number of rows removed.
    pub fn remove(&mut self, id: u64) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        before - self.rows.len()
    }

    /// Clears all rows unconditionally and starts a fresh session.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.created_at = Utc::now();
    }

    /// The current rows, in insertion order.
    pub fn rows(&self) -> &[CartItem] {
        &self.rows
    }

    /// Checks whether any row carries the given product id.
    pub fn contains(&self, id: u64) -> bool {
        self.rows.iter().any(|row| row.id == id)
    }

    /// Number of rows in the cart.
    pub fn entry_count(&self) -> usize {
        self.rows.len()
    }

    /// Sum of the `quantity` fields across all rows.
    ///
    /// Useful for a UI badge; independent of [`Cart::total`].
    pub fn total_quantity(&self) -> i64 {
        self.rows.iter().map(|row| row.quantity).sum()
    }

    /// The derived cart total: sum of the unit price of every row.
    ///
    /// An item added N times contributes N × price. The rows' `quantity`
    /// fields do not participate.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{Cart, CartItem, Money};
    ///
    /// let item = CartItem::new(1, "test", Money::from_minor(1000));
    ///
    /// let mut cart = Cart::new();
    /// for _ in 0..4 {
    ///     cart.add(item.clone());
    /// }
    /// assert_eq!(cart.total(), Money::from_minor(4000));
    /// ```
    pub fn total(&self) -> Money {
        self.rows.iter().map(|row| row.price).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
