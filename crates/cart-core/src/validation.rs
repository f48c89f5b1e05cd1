//! # Validation Module
//!
//! Caller-contract validation for items entering the cart.
//!
//! ## Validation Strategy
//! The plain cart operations trust their input: a malformed item is a
//! caller contract violation, not a runtime failure the cart detects.
//! These validators exist for the checked entry points, which sit in
//! front of untrusted input (items deserialized from the wire).
//!
//! ## Usage
//! ```rust
//! use cart_core::validation::{validate_quantity, validate_price};
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_quantity(0).is_err());
//! assert!(validate_price(-100).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::CartItem;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Must be at most 200 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (>= 1)
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in minor units.
///
/// ## Rules
/// - Must be non-negative (zero allowed: free items)
pub fn validate_price(minor: i64) -> ValidationResult<()> {
    if minor < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Item Validator
// =============================================================================

/// Validates a full cart item against the caller contract.
///
/// Runs every field validator; the first violation wins.
pub fn validate_cart_item(item: &CartItem) -> ValidationResult<()> {
    validate_name(&item.name)?;
    validate_quantity(item.quantity)?;
    validate_price(item.price.minor())?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
