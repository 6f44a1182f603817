//! # boutique-store: In-Memory Store for Boutique
//!
//! This crate owns all mutable application state for the Boutique
//! inventory/sales screen. State is transient: nothing is persisted, and
//! everything is lost when the process exits.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Boutique Data Flow                             │
//! │                                                                     │
//! │  Rendering layer (external)                                         │
//! │       │ add_product / record_sale / search_suppliers / ...          │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  boutique-store (THIS CRATE)                  │  │
//! │  │                                                               │  │
//! │  │   ┌───────────────┐    ┌───────────────┐   ┌──────────────┐   │  │
//! │  │   │   commands    │    │     Store     │   │    stats     │   │  │
//! │  │   │ (boundary:    │───►│  ┌─────────┐  │◄──│ (chart-ready │   │  │
//! │  │   │  parse, log,  │    │  │ Catalog │  │   │  series)     │   │  │
//! │  │   │  snapshot)    │    │  │ Ledger  │  │   └──────────────┘   │  │
//! │  │   └───────────────┘    │  │ Directory│ │                      │  │
//! │  │                        │  │ View    │  │                      │  │
//! │  │                        │  └─────────┘  │                      │  │
//! │  │                        └───────────────┘                      │  │
//! │  │                                                               │  │
//! │  │   All state in memory • No persistence • No I/O               │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  boutique-core (types, money, validation, domain errors)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Product catalog slice (CRUD + search)
//! - [`ledger`] - Append-only sales ledger + stock decrement
//! - [`directory`] - Supplier directory slice (CRUD + search)
//! - [`view`] - Transient view state (section, search term, edit marker)
//! - [`store`] - `Store` façade + thread-safe `StoreState` wrapper
//! - [`commands`] - The boundary the rendering layer calls
//! - [`stats`] - Chart-ready statistics series
//! - [`error`] - Serializable command-boundary errors
//!
//! ## Usage
//!
//! ```rust
//! use boutique_store::commands::{add_product, record_sale};
//! use boutique_store::commands::{NewProductRequest, RecordSaleRequest};
//! use boutique_store::StoreState;
//!
//! let state = StoreState::new();
//!
//! add_product(&state, NewProductRequest {
//!     id: "P1".to_string(),
//!     name: "Camisa Azul".to_string(),
//!     brand: "Norte".to_string(),
//!     size: "M".to_string(),
//!     price: "24.99".to_string(),
//!     quantity: 10,
//!     category: "shirts".to_string(),
//! }).unwrap();
//!
//! let response = record_sale(&state, RecordSaleRequest {
//!     product_id: "P1".to_string(),
//!     quantity: 3,
//! }).unwrap();
//! assert_eq!(response.product.quantity, 7);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod commands;
pub mod directory;
pub mod error;
pub mod ledger;
pub mod stats;
pub mod store;
pub mod view;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::ProductCatalog;
pub use directory::SupplierDirectory;
pub use error::{ApiError, ErrorCode};
pub use ledger::{DayTotal, ProductTotal, SalesLedger};
pub use store::{Store, StoreState};
pub use view::{EditTarget, ViewState};
