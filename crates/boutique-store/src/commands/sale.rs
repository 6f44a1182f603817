//! # Sale Commands
//!
//! Ledger commands for the sales section.
//!
//! ## Record Sale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Record Sale Flow                                │
//! │                                                                     │
//! │  User picks product, enters quantity, clicks "Record"               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  record_sale(state, { productId, quantity })                        │
//! │       │                                                             │
//! │       ├── quantity 0 or > 999? ─────► VALIDATION_ERROR              │
//! │       ├── product missing? ─────────► NOT_FOUND                     │
//! │       ├── stock < quantity? ────────► INSUFFICIENT_STOCK            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Sale appended + stock decremented in one logical step;             │
//! │  response carries the new sale and the updated product              │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use boutique_core::validation::validate_sale_quantity;
use boutique_core::Sale;

use crate::commands::product::ProductDto;
use crate::error::ApiError;
use crate::store::StoreState;

/// Sale DTO for the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDto {
    pub id: String,
    pub receipt_number: u64,
    pub product_id: String,
    pub product_name: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
    pub recorded_at: DateTime<Utc>,
}

impl From<&Sale> for SaleDto {
    fn from(s: &Sale) -> Self {
        SaleDto {
            id: s.id.clone(),
            receipt_number: s.receipt_number,
            product_id: s.product_id.clone(),
            product_name: s.product_name.clone(),
            unit_price_cents: s.unit_price.cents(),
            quantity: s.quantity,
            recorded_at: s.recorded_at,
        }
    }
}

/// Raw input for recording a sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSaleRequest {
    pub product_id: String,
    pub quantity: u32,
}

/// What the rendering layer needs to redraw after a sale: the new ledger
/// entry and the product with its decremented stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSaleResponse {
    pub sale: SaleDto,
    pub product: ProductDto,
}

/// Records a sale against a product, decrementing its stock.
pub fn record_sale(
    state: &StoreState,
    request: RecordSaleRequest,
) -> Result<RecordSaleResponse, ApiError> {
    debug!(product_id = %request.product_id, quantity = request.quantity, "record_sale command");

    validate_sale_quantity(request.quantity)?;

    let response = state.with_store_mut(|store| {
        let sale = SaleDto::from(store.record_sale(&request.product_id, request.quantity)?);
        let product = store
            .catalog()
            .get(&request.product_id)
            .map(ProductDto::from)
            .ok_or_else(|| ApiError::not_found("Product", &request.product_id))?;
        Ok::<_, ApiError>(RecordSaleResponse { sale, product })
    })?;

    info!(
        receipt = response.sale.receipt_number,
        product_id = %response.sale.product_id,
        quantity = response.sale.quantity,
        remaining_stock = response.product.quantity,
        "Sale recorded"
    );

    Ok(response)
}

/// All recorded sales, in recording order.
pub fn list_sales(state: &StoreState) -> Vec<SaleDto> {
    state.with_store(|store| store.ledger().sales().iter().map(SaleDto::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::product::{add_product, NewProductRequest};
    use crate::error::ErrorCode;

    fn seed_product(state: &StoreState, id: &str, quantity: u32) {
        add_product(
            state,
            NewProductRequest {
                id: id.to_string(),
                name: "Camisa Azul".to_string(),
                brand: "Norte".to_string(),
                size: "M".to_string(),
                price: "25.00".to_string(),
                quantity,
                category: "shirts".to_string(),
            },
        )
        .unwrap();
    }

    fn request(product_id: &str, quantity: u32) -> RecordSaleRequest {
        RecordSaleRequest {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_record_sale_decrements_and_snapshots() {
        let state = StoreState::new();
        seed_product(&state, "P1", 10);

        let response = record_sale(&state, request("P1", 3)).unwrap();
        assert_eq!(response.product.quantity, 7);
        assert_eq!(response.sale.quantity, 3);
        assert_eq!(response.sale.product_name, "Camisa Azul");
        assert_eq!(response.sale.unit_price_cents, 2500);

        let sales = list_sales(&state);
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].product_id, "P1");
    }

    #[test]
    fn test_record_sale_insufficient_stock() {
        let state = StoreState::new();
        seed_product(&state, "P1", 2);

        let err = record_sale(&state, request("P1", 5)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);

        // nothing mutated
        assert!(list_sales(&state).is_empty());
        let response = record_sale(&state, request("P1", 2)).unwrap();
        assert_eq!(response.product.quantity, 0);
    }

    #[test]
    fn test_record_sale_unknown_product() {
        let state = StoreState::new();
        let err = record_sale(&state, request("P9", 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_record_sale_rejects_zero_and_oversize_quantity() {
        let state = StoreState::new();
        seed_product(&state, "P1", 10);

        let err = record_sale(&state, request("P1", 0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = record_sale(&state, request("P1", 1000)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(list_sales(&state).is_empty());
    }
}
