//! # Shared Cart Store
//!
//! The in-memory [`CartStore`] implementation.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>`:
//! 1. Multiple consumers may hold a clone of the handle
//! 2. Only one of them mutates the cart at a time
//! 3. Reads copy a snapshot out and release the lock immediately
//!
//! ## Why Not RwLock?
//! Cart operations are quick and most of them mutate state. A RwLock
//! would add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use tracing::debug;

use cart_core::{Cart, CartItem, CoreResult, Money};

use crate::snapshot::{CartSnapshot, CartTotals};
use crate::store::CartStore;

// =============================================================================
// Shared Cart Store
// =============================================================================

/// Thread-safe, clonable handle to one shopping session's cart.
///
/// Created by whoever owns the session and handed to consumers; clones
/// share the same underlying cart.
///
/// ## Example
/// ```rust
/// use cart_core::{CartItem, Money};
/// use cart_store::{CartStore, SharedCartStore};
///
/// let store = SharedCartStore::new();
/// let handle = store.clone();
///
/// store.add_to_cart(CartItem::new(1, "test", Money::from_minor(1000)));
/// assert_eq!(handle.total(), Money::from_minor(1000));
/// ```
#[derive(Debug, Clone)]
pub struct SharedCartStore {
    cart: Arc<Mutex<Cart>>,
}

impl SharedCartStore {
    /// Creates a store with a new empty cart (session start).
    pub fn new() -> Self {
        SharedCartStore {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = store.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for SharedCartStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// CartStore Implementation
// =============================================================================

impl CartStore for SharedCartStore {
    fn add_to_cart(&self, item: CartItem) {
        debug!(id = item.id, price = %item.price, quantity = item.quantity, "add_to_cart");
        self.with_cart_mut(|cart| cart.add(item));
    }

    fn try_add_to_cart(&self, item: CartItem) -> CoreResult<CartSnapshot> {
        debug!(id = item.id, price = %item.price, quantity = item.quantity, "try_add_to_cart");
        self.with_cart_mut(|cart| {
            cart.add_checked(item)?;
            Ok(CartSnapshot::from(&*cart))
        })
    }

    fn remove_from_cart(&self, id: u64) {
        let removed = self.with_cart_mut(|cart| cart.remove(id));
        debug!(id, removed, "remove_from_cart");
    }

    fn clear_cart(&self) {
        debug!("clear_cart");
        self.with_cart_mut(Cart::clear);
    }

    fn items(&self) -> Vec<CartItem> {
        self.with_cart(|cart| cart.rows().to_vec())
    }

    fn total(&self) -> Money {
        self.with_cart(Cart::total)
    }

    fn totals(&self) -> CartTotals {
        self.with_cart(|cart| CartTotals::from(cart))
    }

    fn snapshot(&self) -> CartSnapshot {
        self.with_cart(|cart| CartSnapshot::from(cart))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, price_minor: i64) -> CartItem {
        CartItem::new(id, format!("Product {}", id), Money::from_minor(price_minor))
    }

    #[test]
    fn test_clones_share_state() {
        let store = SharedCartStore::new();
        let handle = store.clone();

        store.add_to_cart(item(1, 1000));

        assert_eq!(handle.items().len(), 1);
        assert_eq!(handle.total(), Money::from_minor(1000));
    }

    #[test]
    fn test_try_add_returns_snapshot() {
        let store = SharedCartStore::new();

        let snapshot = store.try_add_to_cart(item(1, 1000)).unwrap();

        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.totals.total, Money::from_minor(1000));
    }

    #[test]
    fn test_try_add_rejects_and_leaves_cart_untouched() {
        let store = SharedCartStore::new();

        let bad = item(1, 1000).with_quantity(0);
        assert!(store.try_add_to_cart(bad).is_err());
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_with_cart_mut_exposes_cart_api() {
        let store = SharedCartStore::new();
        store.with_cart_mut(|cart| {
            cart.add(item(1, 250));
            cart.add(item(2, 750));
        });

        let totals = store.totals();
        assert_eq!(totals.entry_count, 2);
        assert_eq!(totals.total, Money::from_minor(1000));
    }

    #[test]
    fn test_concurrent_adds_are_all_counted() {
        let store = SharedCartStore::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..10 {
                        store.add_to_cart(item(i, 100));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("worker thread panicked");
        }

        assert_eq!(store.items().len(), 80);
        assert_eq!(store.total(), Money::from_minor(8000));
    }
}
