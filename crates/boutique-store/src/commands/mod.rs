//! # Store Commands
//!
//! The boundary the rendering layer calls. One module per screen concern.
//!
//! ## Command Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Command Contract                               │
//! │                                                                     │
//! │  Every command:                                                     │
//! │  1. Takes &StoreState plus plain arguments (raw form text)          │
//! │  2. Parses + validates HERE - loose input never reaches the core    │
//! │  3. Runs synchronously to completion under the store lock           │
//! │  4. Returns an immutable snapshot of the relevant collection, or a  │
//! │     typed ApiError (commands with no failure path return the        │
//! │     snapshot directly)                                              │
//! │  5. On failure, leaves every collection exactly as it was           │
//! │                                                                     │
//! │  The rendering layer redraws from the returned snapshot; it never   │
//! │  holds a reference into the store.                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
pub mod sale;
pub mod stats;
pub mod supplier;
pub mod view;

pub use product::{
    add_product, delete_product, edit_product_field, search_products, NewProductRequest,
    ProductDto,
};
pub use sale::{list_sales, record_sale, RecordSaleRequest, RecordSaleResponse, SaleDto};
pub use stats::{daily_sales_chart, product_sales_chart, stock_chart};
pub use supplier::{
    add_supplier, delete_supplier, edit_supplier_field, search_suppliers, NewSupplierRequest,
    SupplierDto,
};
pub use view::{begin_edit, commit_edit, set_active_section, set_search_term, ViewDto};
