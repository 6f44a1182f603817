//! # Statistics Commands
//!
//! Read-only commands feeding the statistics section's charts. Each
//! returns a series the rendering layer can hand to its chart widget
//! unmodified.

use tracing::debug;

use crate::stats::{self, DailyPoint, SeriesPoint};
use crate::store::StoreState;

/// Current stock level per product (inventory bar chart).
pub fn stock_chart(state: &StoreState) -> Vec<SeriesPoint> {
    let series = state.with_store(|store| stats::stock_levels(store.catalog()));
    debug!(points = series.len(), "stock_chart command");
    series
}

/// Units sold per calendar day (daily sales line chart).
pub fn daily_sales_chart(state: &StoreState) -> Vec<DailyPoint> {
    let series = state.with_store(|store| stats::daily_sales(store.ledger()));
    debug!(points = series.len(), "daily_sales_chart command");
    series
}

/// Units sold per product (per-product totals bar chart).
pub fn product_sales_chart(state: &StoreState) -> Vec<SeriesPoint> {
    let series = state.with_store(|store| stats::product_sales(store.ledger()));
    debug!(points = series.len(), "product_sales_chart command");
    series
}
