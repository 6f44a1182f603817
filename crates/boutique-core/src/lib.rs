//! # boutique-core: Pure Business Logic for Boutique
//!
//! This crate is the **heart** of Boutique. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Boutique Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  Rendering Layer (external)                   │  │
//! │  │    Product Form ──► Sale Form ──► Tables ──► Charts           │  │
//! │  └────────────────────────────┬──────────────────────────────────┘  │
//! │                               │ command calls                       │
//! │  ┌────────────────────────────▼──────────────────────────────────┐  │
//! │  │                  boutique-store commands                      │  │
//! │  │    add_product, record_sale, search_suppliers, etc.           │  │
//! │  └────────────────────────────┬──────────────────────────────────┘  │
//! │                               │                                     │
//! │  ┌────────────────────────────▼──────────────────────────────────┐  │
//! │  │               ★ boutique-core (THIS CRATE) ★                  │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │  │
//! │  │   │   types   │  │   money   │  │ validation│                 │  │
//! │  │   │  Product  │  │   Money   │  │   rules   │                 │  │
//! │  │   │  Sale     │  │  parsing  │  │  checks   │                 │  │
//! │  │   │  Supplier │  │           │  │           │                 │  │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, Supplier, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use boutique_core::money::Money;
//!
//! // Parse money from a decimal string (never from floats!)
//! let price = Money::parse("10.99").unwrap();
//! assert_eq!(price.cents(), 1099);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use boutique_core::Money` instead of
// `use boutique_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a caller-supplied record identifier.
///
/// ## Business Reason
/// Record ids double as labels in the rendering layer; an unbounded id is
/// almost certainly a paste mistake.
pub const MAX_RECORD_ID_LEN: usize = 50;

/// Maximum length of a product or supplier name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a search query.
pub const MAX_SEARCH_LEN: usize = 100;

/// Maximum quantity of a single product in one sale.
///
/// ## Business Reason
/// Prevents accidental over-selling (e.g., typing 1000 instead of 10).
/// Configurable per-shop in future versions.
pub const MAX_SALE_QUANTITY: u32 = 999;
