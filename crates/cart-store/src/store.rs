//! # Cart Store Contract
//!
//! The subscription contract a UI consumes: read the items and the
//! total, invoke the three mutating operations in response to user
//! actions.
//!
//! ## Why a Trait?
//! Consumers declare a dependency on `&dyn CartStore` (or a generic
//! bound) and receive the concrete store by injection. That keeps the
//! UI decoupled from the state container and lets tests substitute
//! their own store.

use cart_core::{CartItem, CoreResult, Money};

use crate::snapshot::{CartSnapshot, CartTotals};

/// The contract between the cart state container and its consumers.
///
/// ## Contract
/// - [`add_to_cart`](CartStore::add_to_cart) appends a row and never fails
/// - [`remove_from_cart`](CartStore::remove_from_cart) drops every row
///   with the given id; unknown ids are a no-op
/// - [`clear_cart`](CartStore::clear_cart) empties the cart unconditionally
/// - [`total`](CartStore::total) sums the unit price of every row: an
///   item added N times contributes N × price
pub trait CartStore {
    /// Appends an item to the cart.
    fn add_to_cart(&self, item: CartItem);

    /// Appends an item after enforcing the caller contract.
    ///
    /// For input that arrives from the wire. Returns the post-add
    /// snapshot so the UI can re-render from the same call.
    fn try_add_to_cart(&self, item: CartItem) -> CoreResult<CartSnapshot>;

    /// Removes every row carrying the given product id. No-op when the
    /// id is not in the cart.
    fn remove_from_cart(&self, id: u64);

    /// Empties the cart unconditionally.
    fn clear_cart(&self);

    /// The current rows, in insertion order.
    fn items(&self) -> Vec<CartItem>;

    /// The derived cart total (sum of unit prices across rows).
    fn total(&self) -> Money;

    /// The aggregate figures the UI renders next to the cart.
    fn totals(&self) -> CartTotals;

    /// Full read model: rows plus totals, captured atomically.
    fn snapshot(&self) -> CartSnapshot;
}
