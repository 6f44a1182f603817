//! # Product Catalog State
//!
//! Manages the product collection: create, field-level edit, delete, search.
//!
//! ## Catalog Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Product Catalog Operations                         │
//! │                                                                     │
//! │  Rendering Action         Command              Catalog Change       │
//! │  ────────────────         ─────────            ──────────────       │
//! │                                                                     │
//! │  Submit Product Form ───► add_product() ─────► products.push(p)     │
//! │                                                                     │
//! │  Edit Cell ─────────────► edit_product_field()► products[i].f = v   │
//! │                                                                     │
//! │  Click Delete ──────────► delete_product() ──► products.remove(i)   │
//! │                                                                     │
//! │  Type in Search Box ────► search_products() ─► (read only filter)   │
//! │                                                                     │
//! │  Record Sale ───────────► (via SalesLedger) ─► products[i].qty -= n │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use boutique_core::{CoreError, CoreResult, Product, ProductField};

/// The product catalog.
///
/// ## Invariants
/// - Product ids are unique (enforced at creation)
/// - Quantities are never negative (`u32` by construction)
/// - Insertion order is preserved; search and snapshots iterate in it
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        ProductCatalog {
            products: Vec::new(),
        }
    }

    /// Adds a product to the catalog.
    ///
    /// ## Behavior
    /// - Fails with `DuplicateId` if the id is empty after trimming, or if
    ///   another product already uses it
    /// - On success the catalog grows by one, at the end (insertion order)
    ///
    /// ## Errors
    /// [`CoreError::DuplicateId`] — nothing is mutated on failure.
    pub fn add(&mut self, mut product: Product) -> CoreResult<&Product> {
        product.id = product.id.trim().to_string();

        if product.id.is_empty() || self.get(&product.id).is_some() {
            return Err(CoreError::DuplicateId(product.id));
        }

        self.products.push(product);
        Ok(self.products.last().expect("just pushed"))
    }

    /// Replaces exactly one field on the product with `id`.
    ///
    /// Type coercion happened at the command boundary; here the field is
    /// already typed, so the only failure mode left is a missing record.
    ///
    /// ## Errors
    /// [`CoreError::ProductNotFound`] — nothing is mutated on failure.
    pub fn edit_field(&mut self, id: &str, field: ProductField) -> CoreResult<&Product> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        match field {
            ProductField::Name(name) => product.name = name,
            ProductField::Brand(brand) => product.brand = brand,
            ProductField::Size(size) => product.size = size,
            ProductField::Price(price) => product.price = price,
            ProductField::Quantity(quantity) => product.quantity = quantity,
            ProductField::Category(category) => product.category = category,
        }

        Ok(product)
    }

    /// Removes the product with `id`.
    ///
    /// ## Behavior
    /// - Returns the removed product if it was present
    /// - No-op (not an error) if absent
    ///
    /// Historical sales referencing the product are untouched; they carry
    /// their own name/price snapshots.
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    /// Searches products whose name, brand, or size contains `term`,
    /// case-insensitively.
    ///
    /// ## Behavior
    /// - Substring match, not prefix
    /// - Empty term matches every product
    /// - Lazy and restartable: each call returns a fresh iterator over the
    ///   current collection, in insertion order
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Product> + 'a {
        let needle = term.to_lowercase();
        self.products.iter().filter(move |p| {
            p.name.to_lowercase().contains(&needle)
                || p.brand.to_lowercase().contains(&needle)
                || p.size.to_lowercase().contains(&needle)
        })
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Mutable lookup by id. Crate-internal: only the sales ledger may
    /// decrement stock directly.
    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boutique_core::{Money, ProductCategory};

    fn test_product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            brand: format!("Brand {}", id),
            size: "M".to_string(),
            price: Money::from_cents(2500),
            quantity: 10,
            category: ProductCategory::Shirts,
        }
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut catalog = ProductCatalog::new();
        catalog.add(test_product("P1", "Camisa Azul")).unwrap();
        catalog.add(test_product("P2", "Pantalón Negro")).unwrap();
        catalog.add(test_product("P3", "Vestido Rojo")).unwrap();

        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P1", "P2", "P3"]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut catalog = ProductCatalog::new();
        catalog.add(test_product("P1", "Camisa Azul")).unwrap();

        let err = catalog.add(test_product("P1", "Otra Camisa")).unwrap_err();
        assert_eq!(err, CoreError::DuplicateId("P1".to_string()));

        // failed add must not mutate
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("P1").unwrap().name, "Camisa Azul");
    }

    #[test]
    fn test_add_rejects_empty_id() {
        let mut catalog = ProductCatalog::new();
        let err = catalog.add(test_product("   ", "Camisa")).unwrap_err();
        assert_eq!(err, CoreError::DuplicateId(String::new()));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_trims_id() {
        let mut catalog = ProductCatalog::new();
        catalog.add(test_product(" P1 ", "Camisa Azul")).unwrap();
        assert!(catalog.get("P1").is_some());
    }

    #[test]
    fn test_edit_field_replaces_only_named_field() {
        let mut catalog = ProductCatalog::new();
        catalog.add(test_product("P1", "Camisa Azul")).unwrap();

        catalog
            .edit_field("P1", ProductField::Price(Money::from_cents(3000)))
            .unwrap();

        let product = catalog.get("P1").unwrap();
        assert_eq!(product.price, Money::from_cents(3000));
        assert_eq!(product.name, "Camisa Azul");
        assert_eq!(product.quantity, 10);
    }

    #[test]
    fn test_edit_field_missing_product() {
        let mut catalog = ProductCatalog::new();
        let err = catalog
            .edit_field("P9", ProductField::Name("X".to_string()))
            .unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound("P9".to_string()));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut catalog = ProductCatalog::new();
        catalog.add(test_product("P1", "Camisa Azul")).unwrap();

        assert!(catalog.remove("P9").is_none());
        assert_eq!(catalog.len(), 1);

        let removed = catalog.remove("P1").unwrap();
        assert_eq!(removed.id, "P1");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_search_empty_term_matches_all() {
        let mut catalog = ProductCatalog::new();
        catalog.add(test_product("P1", "Camisa Azul")).unwrap();
        catalog.add(test_product("P2", "Pantalón Negro")).unwrap();

        let all: Vec<&Product> = catalog.search("").collect();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "P1");
        assert_eq!(all[1].id, "P2");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut catalog = ProductCatalog::new();
        catalog.add(test_product("P1", "Camisa Azul")).unwrap();
        catalog.add(test_product("P2", "Pantalón Negro")).unwrap();

        let hits: Vec<&Product> = catalog.search("AZUL").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "P1");

        // substring, not prefix
        let hits: Vec<&Product> = catalog.search("misa").collect();
        assert_eq!(hits.len(), 1);

        // matches brand and size too
        let hits: Vec<&Product> = catalog.search("brand p2").collect();
        assert_eq!(hits.len(), 1);
        let hits: Vec<&Product> = catalog.search("m").collect();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_search_is_restartable() {
        let mut catalog = ProductCatalog::new();
        catalog.add(test_product("P1", "Camisa Azul")).unwrap();

        let first: Vec<&Product> = catalog.search("camisa").collect();
        let second: Vec<&Product> = catalog.search("camisa").collect();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }
}
