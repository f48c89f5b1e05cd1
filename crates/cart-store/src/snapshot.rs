//! # Cart Read Models
//!
//! Serializable snapshots of cart state for the consuming frontend.
//!
//! ## Shape
//! ```json
//! {
//!   "items": [{ "id": 1, "name": "test", "price": 1000, "quantity": 1, ... }],
//!   "totals": { "entryCount": 1, "totalQuantity": 1, "total": 1000 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use cart_core::{Cart, CartItem, Money};

// =============================================================================
// Cart Totals
// =============================================================================

/// Aggregate cart figures for display.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Number of rows in the cart.
    pub entry_count: usize,

    /// Sum of the rows' `quantity` fields (badge count).
    pub total_quantity: i64,

    /// Sum of unit prices across rows. A row added N times contributes
    /// N × price; the `quantity` field does not participate.
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            entry_count: cart.entry_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Cart Snapshot
// =============================================================================

/// Full cart read model: rows plus totals, captured in one go.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    /// Rows in insertion order.
    pub items: Vec<CartItem>,

    /// Aggregate figures over the same rows.
    pub totals: CartTotals,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.rows().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
