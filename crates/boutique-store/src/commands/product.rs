//! # Product Commands
//!
//! Catalog commands for the products and inventory sections.
//!
//! ## Add Product Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Add Product Flow                                 │
//! │                                                                     │
//! │  User fills form: name, brand, size, price "24.99", quantity, id    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  add_product(state, NewProductRequest)                              │
//! │       │                                                             │
//! │       ├── id empty/too long? ───────► VALIDATION_ERROR              │
//! │       ├── price not a 2-dec number? ► VALIDATION_ERROR              │
//! │       ├── category unknown? ────────► VALIDATION_ERROR              │
//! │       ├── id collides? ─────────────► DUPLICATE_ID                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Catalog grows by one; full catalog snapshot returned               │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use boutique_core::validation::{
    validate_name, validate_price, validate_record_id, validate_search_query,
};
use boutique_core::{Money, Product, ProductCategory, ProductField};

use crate::error::ApiError;
use crate::store::StoreState;

/// Product DTO (Data Transfer Object) for the rendering layer.
///
/// ## Why DTO?
/// - Decouples internal domain model from the call contract
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub size: String,
    pub price_cents: i64,
    pub quantity: u32,
    pub category: ProductCategory,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id.clone(),
            name: p.name.clone(),
            brand: p.brand.clone(),
            size: p.size.clone(),
            price_cents: p.price.cents(),
            quantity: p.quantity,
            category: p.category,
        }
    }
}

/// Raw form input for a new product. Price arrives as the text the user
/// typed; it is parsed here, once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductRequest {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub size: String,
    pub price: String,
    pub quantity: u32,
    pub category: String,
}

/// Adds a product to the catalog.
///
/// ## Returns
/// The full catalog snapshot after the insert, in insertion order.
pub fn add_product(
    state: &StoreState,
    request: NewProductRequest,
) -> Result<Vec<ProductDto>, ApiError> {
    debug!(id = %request.id, name = %request.name, "add_product command");

    let id = validate_record_id(&request.id)?;
    let name = validate_name(&request.name)?;
    let price = Money::parse(&request.price)
        .map_err(|e| ApiError::validation(format!("price has invalid format: {}", e)))?;
    validate_price(price)?;
    let category: ProductCategory = request.category.parse()?;

    let snapshot = state.with_store_mut(|store| {
        store.catalog_mut().add(Product {
            id,
            name,
            brand: request.brand.trim().to_string(),
            size: request.size.trim().to_string(),
            price,
            quantity: request.quantity,
            category,
        })?;
        Ok::<_, ApiError>(catalog_snapshot(store))
    })?;

    info!(count = snapshot.len(), "Product added");
    Ok(snapshot)
}

/// Replaces one field on one product.
///
/// `field`/`value` arrive as raw strings from the rendering layer and are
/// coerced here. The editing marker is a caller-side convention; it is
/// logged but not enforced.
///
/// ## Returns
/// The full catalog snapshot after the edit.
pub fn edit_product_field(
    state: &StoreState,
    id: &str,
    field: &str,
    value: &str,
) -> Result<Vec<ProductDto>, ApiError> {
    let field = ProductField::parse(field, value)?;

    state.with_store_mut(|store| {
        debug!(
            id = %id,
            field = field.name(),
            editing = ?store.view().editing(),
            "edit_product_field command"
        );

        store.catalog_mut().edit_field(id, field)?;
        info!(id = %id, "Product field updated");
        Ok(catalog_snapshot(store))
    })
}

/// Deletes a product by id. No-op (not an error) when absent; historical
/// sales keep their snapshots either way.
///
/// ## Returns
/// The full catalog snapshot after the delete.
pub fn delete_product(state: &StoreState, id: &str) -> Vec<ProductDto> {
    state.with_store_mut(|store| {
        let removed = store.catalog_mut().remove(id).is_some();
        info!(id = %id, removed, "delete_product command");
        catalog_snapshot(store)
    })
}

/// Searches products by name, brand, or size (case-insensitive substring).
/// An empty query returns the whole catalog.
pub fn search_products(state: &StoreState, query: &str) -> Result<Vec<ProductDto>, ApiError> {
    let query = validate_search_query(query)?;
    debug!(query = %query, "search_products command");

    let hits = state.with_store(|store| {
        store
            .catalog()
            .search(&query)
            .map(ProductDto::from)
            .collect::<Vec<_>>()
    });

    debug!(count = hits.len(), "search_products complete");
    Ok(hits)
}

fn catalog_snapshot(store: &crate::store::Store) -> Vec<ProductDto> {
    store.catalog().products().iter().map(ProductDto::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn test_request(id: &str, name: &str) -> NewProductRequest {
        NewProductRequest {
            id: id.to_string(),
            name: name.to_string(),
            brand: "Norte".to_string(),
            size: "M".to_string(),
            price: "24.99".to_string(),
            quantity: 10,
            category: "shirts".to_string(),
        }
    }

    #[test]
    fn test_add_product_returns_snapshot() {
        let state = StoreState::new();

        let snapshot = add_product(&state, test_request("P1", "Camisa Azul")).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, "P1");
        assert_eq!(snapshot[0].price_cents, 2499);
    }

    #[test]
    fn test_add_product_duplicate_id() {
        let state = StoreState::new();
        add_product(&state, test_request("P1", "Camisa Azul")).unwrap();

        let err = add_product(&state, test_request("P1", "Otra")).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateId);

        // store untouched by the failing call
        let snapshot = search_products(&state, "").unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name, "Camisa Azul");
    }

    #[test]
    fn test_add_product_rejects_malformed_price() {
        let state = StoreState::new();
        let mut request = test_request("P1", "Camisa Azul");
        request.price = "24.999".to_string();

        let err = add_product(&state, request).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(search_products(&state, "").unwrap().is_empty());
    }

    #[test]
    fn test_add_product_rejects_unknown_category() {
        let state = StoreState::new();
        let mut request = test_request("P1", "Camisa Azul");
        request.category = "hats".to_string();

        let err = add_product(&state, request).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_edit_product_field_coerces_raw_text() {
        let state = StoreState::new();
        add_product(&state, test_request("P1", "Camisa Azul")).unwrap();

        let snapshot = edit_product_field(&state, "P1", "price", "30").unwrap();
        assert_eq!(snapshot[0].price_cents, 3000);

        let err = edit_product_field(&state, "P1", "quantity", "lots").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = edit_product_field(&state, "P9", "name", "X").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_delete_product_absent_is_noop() {
        let state = StoreState::new();
        add_product(&state, test_request("P1", "Camisa Azul")).unwrap();

        let snapshot = delete_product(&state, "P9");
        assert_eq!(snapshot.len(), 1);

        let snapshot = delete_product(&state, "P1");
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_search_products_filters() {
        let state = StoreState::new();
        add_product(&state, test_request("P1", "Camisa Azul")).unwrap();
        add_product(&state, test_request("P2", "Pantalón Negro")).unwrap();

        let hits = search_products(&state, "azul").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "P1");
    }

    #[test]
    fn test_dto_serializes_camel_case() {
        let state = StoreState::new();
        let snapshot = add_product(&state, test_request("P1", "Camisa Azul")).unwrap();

        let json = serde_json::to_value(&snapshot[0]).unwrap();
        assert_eq!(json["priceCents"], 2499);
        assert_eq!(json["category"], "shirts");
    }
}
