//! # Statistics Series
//!
//! Chart-ready aggregations over the store. Pure reads: nothing here
//! mutates state, and the rendering layer consumes the series unmodified
//! (axis titles, colors, and locale formatting are its problem).
//!
//! ## Series
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Statistics Section                             │
//! │                                                                     │
//! │  stock_levels    ──► bar chart   (one bar per product, stock qty)   │
//! │  daily_sales     ──► line chart  (one point per day, units sold)    │
//! │  product_sales   ──► bar chart   (one bar per sold product)         │
//! │                                                                     │
//! │  All series preserve first-occurrence order; nothing is re-sorted.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::ProductCatalog;
use crate::ledger::SalesLedger;

/// One labeled point of a categorical series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub label: String,
    pub value: u64,
}

/// One dated point of a time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub value: u64,
}

/// Current stock level per product, in catalog insertion order.
pub fn stock_levels(catalog: &ProductCatalog) -> Vec<SeriesPoint> {
    catalog
        .products()
        .iter()
        .map(|p| SeriesPoint {
            label: p.name.clone(),
            value: p.quantity as u64,
        })
        .collect()
}

/// Units sold per calendar day, in first-occurrence order.
pub fn daily_sales(ledger: &SalesLedger) -> Vec<DailyPoint> {
    ledger
        .totals_by_day()
        .into_iter()
        .map(|t| DailyPoint {
            date: t.date,
            value: t.total_quantity,
        })
        .collect()
}

/// Units sold per product, in first-occurrence order. Labels come from
/// the sale snapshots, so deleted products keep their names.
pub fn product_sales(ledger: &SalesLedger) -> Vec<SeriesPoint> {
    ledger
        .totals_by_product()
        .into_iter()
        .map(|t| SeriesPoint {
            label: t.product_name,
            value: t.total_quantity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use boutique_core::{Money, Product, ProductCategory};

    fn test_product(id: &str, name: &str, quantity: u32) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            brand: "Norte".to_string(),
            size: "M".to_string(),
            price: Money::from_cents(2500),
            quantity,
            category: ProductCategory::Shirts,
        }
    }

    #[test]
    fn test_stock_levels_in_catalog_order() {
        let mut catalog = ProductCatalog::new();
        catalog.add(test_product("P1", "Camisa Azul", 10)).unwrap();
        catalog
            .add(test_product("P2", "Pantalón Negro", 4))
            .unwrap();

        let series = stock_levels(&catalog);
        assert_eq!(
            series,
            vec![
                SeriesPoint {
                    label: "Camisa Azul".to_string(),
                    value: 10,
                },
                SeriesPoint {
                    label: "Pantalón Negro".to_string(),
                    value: 4,
                },
            ]
        );
    }

    #[test]
    fn test_sales_series_follow_ledger() {
        let mut catalog = ProductCatalog::new();
        let mut ledger = SalesLedger::new();
        catalog.add(test_product("P1", "Camisa Azul", 10)).unwrap();
        catalog
            .add(test_product("P2", "Pantalón Negro", 10))
            .unwrap();

        ledger.record_sale(&mut catalog, "P2", 2).unwrap();
        ledger.record_sale(&mut catalog, "P1", 3).unwrap();
        ledger.record_sale(&mut catalog, "P2", 1).unwrap();

        let series = product_sales(&ledger);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Pantalón Negro");
        assert_eq!(series[0].value, 3);
        assert_eq!(series[1].label, "Camisa Azul");
        assert_eq!(series[1].value, 3);

        // recorded just now: a single bucket holding every unit
        let daily = daily_sales(&ledger);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].value, 6);
    }

    #[test]
    fn test_empty_store_yields_empty_series() {
        let catalog = ProductCatalog::new();
        let ledger = SalesLedger::new();
        assert!(stock_levels(&catalog).is_empty());
        assert!(daily_sales(&ledger).is_empty());
        assert!(product_sales(&ledger).is_empty());
    }
}
