//! # cart-store: Injectable Cart Store
//!
//! The state layer of the cart engine. A consuming UI never touches
//! [`cart_core::Cart`] directly; it receives a store handle by injection
//! and talks to it through the [`CartStore`] contract.
//!
//! ## Module Organization
//! ```text
//! cart_store/
//! ├── lib.rs          ◄─── Exports
//! ├── store.rs        ◄─── CartStore contract (what the UI consumes)
//! ├── shared.rs       ◄─── SharedCartStore (Arc<Mutex<Cart>>)
//! └── snapshot.rs     ◄─── Read models serialized for the frontend
//! ```
//!
//! ## No Global Singleton
//! State propagation is explicit: whoever owns the session creates a
//! [`SharedCartStore`], and every consumer gets a clone of the handle
//! (or a `&dyn CartStore`). Nothing in this crate is `static`.
//!
//! ## Example
//! ```rust
//! use cart_core::{CartItem, Money};
//! use cart_store::{CartStore, SharedCartStore};
//!
//! fn cart_badge(store: &dyn CartStore) -> String {
//!     format!("{} items", store.totals().entry_count)
//! }
//!
//! let store = SharedCartStore::new();
//! store.add_to_cart(CartItem::new(1, "Americano", Money::from_minor(1000)));
//!
//! assert_eq!(cart_badge(&store), "1 items");
//! ```

mod shared;
mod snapshot;
mod store;

pub use shared::SharedCartStore;
pub use snapshot::{CartSnapshot, CartTotals};
pub use store::CartStore;
