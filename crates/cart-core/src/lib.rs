//! # cart-core: Pure Business Logic for the Cart Engine
//!
//! This crate is the heart of the cart engine. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Cart Engine Architecture                   │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                    Frontend (UI layer)                    │  │
//! │  │    Product list ──► Cart panel ──► Totals display         │  │
//! │  └───────────────────────────┬───────────────────────────────┘  │
//! │                              │ injected store handle            │
//! │  ┌───────────────────────────▼───────────────────────────────┐  │
//! │  │                  cart-store (store layer)                 │  │
//! │  │    CartStore trait, SharedCartStore, snapshots            │  │
//! │  └───────────────────────────┬───────────────────────────────┘  │
//! │                              │                                  │
//! │  ┌───────────────────────────▼───────────────────────────────┐  │
//! │  │               ★ cart-core (THIS CRATE) ★                  │  │
//! │  │                                                           │  │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌────────────┐   │  │
//! │  │   │  types  │  │  money  │  │  cart   │  │ validation │   │  │
//! │  │   │CartItem │  │  Money  │  │  Cart   │  │   rules    │   │  │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └────────────┘   │  │
//! │  │                                                           │  │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                    │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CartItem)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart collection and its operations
//! - [`error`] - Domain error types
//! - [`validation`] - Caller-contract validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor units (i64), never floats
//! 4. **Explicit Errors**: Checked paths return typed errors, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{Cart, CartItem, Money};
//!
//! let item = CartItem::new(1, "Americano", Money::from_minor(1000));
//!
//! let mut cart = Cart::new();
//! cart.add(item.clone());
//! cart.add(item);
//!
//! // Each added row contributes its unit price to the total.
//! assert_eq!(cart.total(), Money::from_minor(2000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cart_core::Money` instead of
// `use cart_core::money::Money`.

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::CartItem;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of rows allowed in a single cart.
///
/// Enforced only on the checked add path; the plain operations are total
/// functions over their documented input domain.
pub const MAX_CART_ENTRIES: usize = 100;

/// Maximum quantity of a single cart row.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Quantity filled in when a serialized item omits the field.
pub const DEFAULT_QUANTITY: i64 = 1;
