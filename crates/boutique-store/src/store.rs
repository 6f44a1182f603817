//! # Store Façade
//!
//! One owner for all four state slices, plus the thread-safe wrapper a UI
//! shell manages.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Store Ownership                             │
//! │                                                                     │
//! │  StoreState (Arc<Mutex<Store>>)                                     │
//! │      │                                                              │
//! │      ▼ exclusive lock per command                                   │
//! │  Store                                                              │
//! │  ├── ProductCatalog     (products)                                  │
//! │  ├── SalesLedger        (sales history + receipt counter)           │
//! │  ├── SupplierDirectory  (suppliers)                                 │
//! │  └── ViewState          (section, search term, edit marker)         │
//! │                                                                     │
//! │  The ONLY cross-slice operation is record_sale: the ledger reads    │
//! │  and decrements catalog stock in one logical step. No other slice   │
//! │  touches another.                                                   │
//! │                                                                     │
//! │  No external component holds a mutable reference to any collection; │
//! │  callers get snapshots (clones) or short-lived borrows.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use boutique_core::{CoreResult, Sale};

use crate::catalog::ProductCatalog;
use crate::directory::SupplierDirectory;
use crate::ledger::SalesLedger;
use crate::view::ViewState;

/// The complete in-memory application state.
///
/// Everything here is transient: nothing is persisted, and all of it is
/// lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct Store {
    catalog: ProductCatalog,
    ledger: SalesLedger,
    directory: SupplierDirectory,
    view: ViewState,
}

impl Store {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Store {
            catalog: ProductCatalog::new(),
            ledger: SalesLedger::new(),
            directory: SupplierDirectory::new(),
            view: ViewState::new(),
        }
    }

    /// The product catalog slice.
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Mutable access to the product catalog slice.
    pub fn catalog_mut(&mut self) -> &mut ProductCatalog {
        &mut self.catalog
    }

    /// The sales ledger slice.
    ///
    /// Read-only on purpose: the ledger is append-only and the only way
    /// to append is [`Store::record_sale`].
    pub fn ledger(&self) -> &SalesLedger {
        &self.ledger
    }

    /// The supplier directory slice.
    pub fn directory(&self) -> &SupplierDirectory {
        &self.directory
    }

    /// Mutable access to the supplier directory slice.
    pub fn directory_mut(&mut self) -> &mut SupplierDirectory {
        &mut self.directory
    }

    /// The view state slice.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Mutable access to the view state slice.
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Records a sale and decrements the matching product's stock in the
    /// same logical step. See [`SalesLedger::record_sale`] for the error
    /// contract; a failing call mutates nothing.
    pub fn record_sale(&mut self, product_id: &str, quantity: u32) -> CoreResult<&Sale> {
        self.ledger
            .record_sale(&mut self.catalog, product_id, quantity)
    }
}

/// Shared store handle for a UI shell.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Store>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one command touches the store at a time
///
/// Commands themselves are synchronous and run to completion, so the lock
/// is held only for the duration of one command.
///
/// ## Why Not RwLock?
/// Store operations are quick, and most commands modify state. A RwLock
/// would add complexity with minimal benefit.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    /// Creates a new empty store state.
    pub fn new() -> Self {
        StoreState {
            store: Arc::new(Mutex::new(Store::new())),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use boutique_store::StoreState;
    ///
    /// let state = StoreState::new();
    /// let count = state.with_store(|store| store.catalog().len());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_store_mut(|store| store.record_sale("P1", 3))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boutique_core::{Money, Product, ProductCategory};

    fn test_product(id: &str, quantity: u32) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            brand: "Norte".to_string(),
            size: "M".to_string(),
            price: Money::from_cents(2500),
            quantity,
            category: ProductCategory::Shirts,
        }
    }

    #[test]
    fn test_record_sale_through_facade() {
        let mut store = Store::new();
        store.catalog_mut().add(test_product("P1", 10)).unwrap();

        store.record_sale("P1", 3).unwrap();

        assert_eq!(store.catalog().get("P1").unwrap().quantity, 7);
        assert_eq!(store.ledger().len(), 1);
    }

    #[test]
    fn test_store_state_closure_access() {
        let state = StoreState::new();

        state.with_store_mut(|store| {
            store.catalog_mut().add(test_product("P1", 5)).unwrap();
            store.record_sale("P1", 2).unwrap();
        });

        let (stock, sales) = state.with_store(|store| {
            (
                store.catalog().get("P1").unwrap().quantity,
                store.ledger().len(),
            )
        });
        assert_eq!(stock, 3);
        assert_eq!(sales, 1);
    }

    #[test]
    fn test_store_state_clones_share_the_store() {
        let state = StoreState::new();
        let other = state.clone();

        state.with_store_mut(|store| {
            store.catalog_mut().add(test_product("P1", 5)).unwrap();
        });

        assert_eq!(other.with_store(|store| store.catalog().len()), 1);
    }
}
