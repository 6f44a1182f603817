//! # Sales Ledger State
//!
//! Append-only sales history plus the stock-decrementing sale command.
//!
//! ## Sale Recording Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Record Sale Flow                                │
//! │                                                                     │
//! │  record_sale(product_id, quantity)                                  │
//! │       │                                                             │
//! │       ├── quantity == 0? ──────────► Validation error, no mutation  │
//! │       │                                                             │
//! │       ├── product missing? ────────► ProductNotFound, no mutation   │
//! │       │                                                             │
//! │       ├── stock < quantity? ───────► InsufficientStock, no mutation │
//! │       │                                                             │
//! │       ▼ all checks passed                                           │
//! │  ┌───────────────────────────────────────────────┐                  │
//! │  │  ONE LOGICAL STEP (no observable in-between)  │                  │
//! │  │  product.quantity -= quantity                 │                  │
//! │  │  sales.push(Sale { snapshots, timestamp })    │                  │
//! │  └───────────────────────────────────────────────┘                  │
//! │                                                                     │
//! │  No rollback path exists once committed: the ledger is append-only. │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Each sale freezes the product's name and unit price at recording time.
//! Later edits or deletion of the product never rewrite history, and the
//! statistics series keep meaningful labels for products that are gone.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use boutique_core::{CoreError, CoreResult, Sale, ValidationError};

use crate::catalog::ProductCatalog;

/// Aggregated quantity sold for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTotal {
    pub product_id: String,
    /// Name snapshot from the first sale of this product.
    pub product_name: String,
    pub total_quantity: u64,
}

/// Aggregated quantity sold on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTotal {
    pub date: NaiveDate,
    pub total_quantity: u64,
}

/// The sales ledger.
///
/// ## Invariants
/// - Append-only: sales are never mutated or deleted
/// - Receipt numbers strictly increase in recording order
/// - Every sale referenced a product that existed at recording time
#[derive(Debug, Clone)]
pub struct SalesLedger {
    sales: Vec<Sale>,
    next_receipt: u64,
}

impl Default for SalesLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl SalesLedger {
    /// Creates a new empty ledger. Receipt numbering starts at 1.
    pub fn new() -> Self {
        SalesLedger {
            sales: Vec::new(),
            next_receipt: 1,
        }
    }

    /// Records a sale of `quantity` units of `product_id`, decrementing the
    /// product's stock in the same logical step.
    ///
    /// All validation happens before the first mutation, so a failing call
    /// leaves both the ledger and the catalog exactly as they were. There
    /// is no state in which the sale exists but stock was not decremented,
    /// or vice versa.
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] if `quantity` is zero
    /// - [`CoreError::ProductNotFound`] if no product has `product_id`
    /// - [`CoreError::InsufficientStock`] if stock cannot cover `quantity`
    pub fn record_sale(
        &mut self,
        catalog: &mut ProductCatalog,
        product_id: &str,
        quantity: u32,
    ) -> CoreResult<&Sale> {
        if quantity == 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        let product = catalog
            .get_mut(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        if !product.can_sell(quantity) {
            return Err(CoreError::InsufficientStock {
                product_id: product_id.to_string(),
                available: product.quantity,
                requested: quantity,
            });
        }

        // Committed from here on: decrement and append together.
        product.quantity -= quantity;

        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            receipt_number: self.next_receipt,
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            unit_price: product.price,
            quantity,
            recorded_at: Utc::now(),
        };
        self.next_receipt += 1;
        self.sales.push(sale);

        Ok(self.sales.last().expect("just pushed"))
    }

    /// Aggregates recorded sales by the product they reference, summing
    /// quantities.
    ///
    /// One entry per distinct product with at least one sale, ordered by
    /// first occurrence in the ledger; entries are never re-sorted, so two
    /// products tied on name keep their ledger order.
    pub fn totals_by_product(&self) -> Vec<ProductTotal> {
        totals_by_product_of(&self.sales)
    }

    /// Aggregates recorded sales by the calendar day they were recorded
    /// on, summing quantities. Ordered by first occurrence.
    pub fn totals_by_day(&self) -> Vec<DayTotal> {
        totals_by_day_of(&self.sales)
    }

    /// All sales, in recording order.
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Number of recorded sales.
    pub fn len(&self) -> usize {
        self.sales.len()
    }

    /// Checks if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}

/// Keyed first-occurrence aggregation over product ids.
fn totals_by_product_of(sales: &[Sale]) -> Vec<ProductTotal> {
    let mut totals: Vec<ProductTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for sale in sales {
        match index.get(sale.product_id.as_str()) {
            Some(&i) => totals[i].total_quantity += sale.quantity as u64,
            None => {
                index.insert(sale.product_id.as_str(), totals.len());
                totals.push(ProductTotal {
                    product_id: sale.product_id.clone(),
                    product_name: sale.product_name.clone(),
                    total_quantity: sale.quantity as u64,
                });
            }
        }
    }

    totals
}

/// Keyed first-occurrence aggregation over calendar days.
fn totals_by_day_of(sales: &[Sale]) -> Vec<DayTotal> {
    let mut totals: Vec<DayTotal> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for sale in sales {
        let date = sale.recorded_at.date_naive();
        match index.get(&date) {
            Some(&i) => totals[i].total_quantity += sale.quantity as u64,
            None => {
                index.insert(date, totals.len());
                totals.push(DayTotal {
                    date,
                    total_quantity: sale.quantity as u64,
                });
            }
        }
    }

    totals
}
