//! # Validation Module
//!
//! Input validation utilities for Boutique.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Rendering layer                                           │
//! │  ├── Basic format checks (empty, length)                            │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Command boundary (Rust)                                   │
//! │  ├── Type coercion (Money::parse, enum FromStr)                     │
//! │  └── THIS MODULE: field-level rule validation                       │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Store slices                                              │
//! │  ├── Identifier uniqueness                                          │
//! │  └── Stock sufficiency                                              │
//! │                                                                     │
//! │  Defense in depth: each layer catches different errors              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use boutique_core::validation::{validate_record_id, validate_sale_quantity};
//!
//! // Validate a caller-supplied id before insert
//! validate_record_id("P1").unwrap();
//!
//! // Validate a sale quantity before touching the ledger
//! validate_sale_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_NAME_LEN, MAX_RECORD_ID_LEN, MAX_SALE_QUANTITY, MAX_SEARCH_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a caller-supplied record identifier (product or supplier).
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
///
/// ## Returns
/// The trimmed id.
///
/// ## Example
/// ```rust
/// use boutique_core::validation::validate_record_id;
///
/// assert_eq!(validate_record_id(" P1 ").unwrap(), "P1");
/// assert!(validate_record_id("").is_err());
/// ```
pub fn validate_record_id(id: &str) -> ValidationResult<String> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_RECORD_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_RECORD_ID_LEN,
        });
    }

    Ok(id.to_string())
}

/// Validates a product or supplier name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches all records)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates a supplier email.
///
/// ## Rules
/// - Can be empty (supplier contact details are optional)
/// - If present: one `@` with something on both sides
///
/// Deliberately shallow. Full RFC 5322 validation rejects real addresses;
/// delivery is the only true validator.
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = email.trim();

    if email.is_empty() {
        return Ok(String::new());
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            Ok(email.to_string())
        }
        _ => Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected local@domain".to_string(),
        }),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a sale quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_SALE_QUANTITY (999)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │  Sales: Record Sale                                                 │
/// │                                                                     │
/// │  User enters quantity: 5                                            │
/// │       │                                                             │
/// │       ▼                                                             │
/// │  validate_sale_quantity(5) ← THIS FUNCTION                          │
/// │       │                                                             │
/// │       ├── qty == 0? → Error: "quantity must be positive"            │
/// │       │                                                             │
/// │       ├── qty > 999? → Error: "quantity must be between 1 and 999"  │
/// │       │                                                             │
/// │       └── OK → Proceed with record_sale                             │
/// │                                                                     │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_sale_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_SALE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_SALE_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates a product price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (giveaway items)
///
/// ## Example
/// ```rust
/// use boutique_core::money::Money;
/// use boutique_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: crate::Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
