//! # Supplier Commands
//!
//! Directory commands for the suppliers section. Same contract as the
//! product commands: parse raw input here, return full snapshots, never
//! leave partial mutations behind.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use boutique_core::validation::{
    validate_email, validate_name, validate_record_id, validate_search_query,
};
use boutique_core::{Supplier, SupplierField};

use crate::error::ApiError;
use crate::store::StoreState;

/// Supplier DTO for the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDto {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl From<&Supplier> for SupplierDto {
    fn from(s: &Supplier) -> Self {
        SupplierDto {
            id: s.id.clone(),
            name: s.name.clone(),
            contact: s.contact.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            address: s.address.clone(),
        }
    }
}

/// Raw form input for a new supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSupplierRequest {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Adds a supplier to the directory.
///
/// ## Returns
/// The full directory snapshot after the insert, in insertion order.
pub fn add_supplier(
    state: &StoreState,
    request: NewSupplierRequest,
) -> Result<Vec<SupplierDto>, ApiError> {
    debug!(id = %request.id, name = %request.name, "add_supplier command");

    let id = validate_record_id(&request.id)?;
    let name = validate_name(&request.name)?;
    let email = validate_email(&request.email)?;

    let snapshot = state.with_store_mut(|store| {
        store.directory_mut().add(Supplier {
            id,
            name,
            contact: request.contact.trim().to_string(),
            email,
            phone: request.phone.trim().to_string(),
            address: request.address.trim().to_string(),
        })?;
        Ok::<_, ApiError>(directory_snapshot(store))
    })?;

    info!(count = snapshot.len(), "Supplier added");
    Ok(snapshot)
}

/// Replaces one field on one supplier. `field`/`value` arrive as raw
/// strings and are coerced here; the editing marker is logged, not
/// enforced.
///
/// ## Returns
/// The full directory snapshot after the edit.
pub fn edit_supplier_field(
    state: &StoreState,
    id: &str,
    field: &str,
    value: &str,
) -> Result<Vec<SupplierDto>, ApiError> {
    let field = SupplierField::parse(field, value)?;

    state.with_store_mut(|store| {
        debug!(
            id = %id,
            field = field.name(),
            editing = ?store.view().editing(),
            "edit_supplier_field command"
        );

        store.directory_mut().edit_field(id, field)?;
        info!(id = %id, "Supplier field updated");
        Ok(directory_snapshot(store))
    })
}

/// Deletes a supplier by id. No-op (not an error) when absent.
///
/// ## Returns
/// The full directory snapshot after the delete.
pub fn delete_supplier(state: &StoreState, id: &str) -> Vec<SupplierDto> {
    state.with_store_mut(|store| {
        let removed = store.directory_mut().remove(id).is_some();
        info!(id = %id, removed, "delete_supplier command");
        directory_snapshot(store)
    })
}

/// Searches suppliers by name, contact, or email (case-insensitive
/// substring). An empty query returns the whole directory.
pub fn search_suppliers(state: &StoreState, query: &str) -> Result<Vec<SupplierDto>, ApiError> {
    let query = validate_search_query(query)?;
    debug!(query = %query, "search_suppliers command");

    let hits = state.with_store(|store| {
        store
            .directory()
            .search(&query)
            .map(SupplierDto::from)
            .collect::<Vec<_>>()
    });

    debug!(count = hits.len(), "search_suppliers complete");
    Ok(hits)
}

fn directory_snapshot(store: &crate::store::Store) -> Vec<SupplierDto> {
    store
        .directory()
        .suppliers()
        .iter()
        .map(SupplierDto::from)
        .collect()
}
