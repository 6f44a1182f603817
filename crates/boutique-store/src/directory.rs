//! # Supplier Directory State
//!
//! Manages the supplier collection. Mirrors the product catalog's
//! add / edit / delete / search contract with [`Supplier`] records:
//! same identifier-uniqueness rule on add, same no-op delete-on-missing,
//! and the same case-insensitive substring search — here across name,
//! contact, and email.

use boutique_core::{CoreError, CoreResult, Supplier, SupplierField};

/// The supplier directory.
///
/// ## Invariants
/// - Supplier ids are unique (enforced at creation)
/// - Insertion order is preserved; search and snapshots iterate in it
#[derive(Debug, Clone, Default)]
pub struct SupplierDirectory {
    suppliers: Vec<Supplier>,
}

impl SupplierDirectory {
    /// Creates a new empty directory.
    pub fn new() -> Self {
        SupplierDirectory {
            suppliers: Vec::new(),
        }
    }

    /// Adds a supplier to the directory.
    ///
    /// ## Behavior
    /// - Fails with `DuplicateId` if the id is empty after trimming, or if
    ///   another supplier already uses it
    /// - On success the directory grows by one, at the end
    ///
    /// ## Errors
    /// [`CoreError::DuplicateId`] — nothing is mutated on failure.
    pub fn add(&mut self, mut supplier: Supplier) -> CoreResult<&Supplier> {
        supplier.id = supplier.id.trim().to_string();

        if supplier.id.is_empty() || self.get(&supplier.id).is_some() {
            return Err(CoreError::DuplicateId(supplier.id));
        }

        self.suppliers.push(supplier);
        Ok(self.suppliers.last().expect("just pushed"))
    }

    /// Replaces exactly one field on the supplier with `id`.
    ///
    /// ## Errors
    /// [`CoreError::SupplierNotFound`] — nothing is mutated on failure.
    pub fn edit_field(&mut self, id: &str, field: SupplierField) -> CoreResult<&Supplier> {
        let supplier = self
            .suppliers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CoreError::SupplierNotFound(id.to_string()))?;

        match field {
            SupplierField::Name(name) => supplier.name = name,
            SupplierField::Contact(contact) => supplier.contact = contact,
            SupplierField::Email(email) => supplier.email = email,
            SupplierField::Phone(phone) => supplier.phone = phone,
            SupplierField::Address(address) => supplier.address = address,
        }

        Ok(supplier)
    }

    /// Removes the supplier with `id`.
    ///
    /// ## Behavior
    /// - Returns the removed supplier if it was present
    /// - No-op (not an error) if absent
    pub fn remove(&mut self, id: &str) -> Option<Supplier> {
        let index = self.suppliers.iter().position(|s| s.id == id)?;
        Some(self.suppliers.remove(index))
    }

    /// Searches suppliers whose name, contact, or email contains `term`,
    /// case-insensitively.
    ///
    /// ## Behavior
    /// - Substring match, not prefix
    /// - Empty term matches every supplier
    /// - Lazy and restartable: each call returns a fresh iterator over the
    ///   current collection, in insertion order
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Supplier> + 'a {
        let needle = term.to_lowercase();
        self.suppliers.iter().filter(move |s| {
            s.name.to_lowercase().contains(&needle)
                || s.contact.to_lowercase().contains(&needle)
                || s.email.to_lowercase().contains(&needle)
        })
    }

    /// Looks up a supplier by id.
    pub fn get(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    /// All suppliers, in insertion order.
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Number of suppliers in the directory.
    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    /// Checks if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }
}
