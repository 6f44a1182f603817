//! # Domain Types
//!
//! Core domain types used throughout Boutique.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │    Product      │   │      Sale       │   │    Supplier     │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  id (caller)    │   │  id (UUID)      │   │  id (caller)    │    │
//! │  │  name/brand/size│   │  receipt_number │   │  name/contact   │    │
//! │  │  price (Money)  │   │  product_id (FK)│   │  email/phone    │    │
//! │  │  quantity       │   │  qty + snapshot │   │  address        │    │
//! │  │  category       │   │  recorded_at    │   │                 │    │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘    │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │ ProductCategory │   │     Section     │   │    EditKind     │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  Shirts         │   │  Products       │   │  Product        │    │
//! │  │  Pants          │   │  Inventory      │   │  Supplier       │    │
//! │  │  Dresses        │   │  Sales          │   └─────────────────┘    │
//! │  │  Shoes          │   │  Suppliers      │                         │
//! │  │  Accessories    │   │  Statistics     │                         │
//! │  └─────────────────┘   └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Sales carry two identifiers:
//! - `id`: UUID v4 - immutable, globally unique
//! - `receipt_number`: store-generated monotonic sequence, human-readable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Product Category
// =============================================================================

/// The fixed set of product categories carried by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Shirts,
    Pants,
    Dresses,
    Shoes,
    Accessories,
}

impl ProductCategory {
    /// All categories, in display order.
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::Shirts,
        ProductCategory::Pants,
        ProductCategory::Dresses,
        ProductCategory::Shoes,
        ProductCategory::Accessories,
    ];

    /// Stable lowercase name, matching the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Shirts => "shirts",
            ProductCategory::Pants => "pants",
            ProductCategory::Dresses => "dresses",
            ProductCategory::Shoes => "shoes",
            ProductCategory::Accessories => "accessories",
        }
    }
}

impl FromStr for ProductCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shirts" => Ok(ProductCategory::Shirts),
            "pants" => Ok(ProductCategory::Pants),
            "dresses" => Ok(ProductCategory::Dresses),
            "shoes" => Ok(ProductCategory::Shoes),
            "accessories" => Ok(ProductCategory::Accessories),
            other => Err(ValidationError::InvalidFormat {
                field: "category".to_string(),
                reason: format!("unknown category '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the shop catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Caller-supplied identifier, unique among products.
    pub id: String,

    /// Display name shown in tables and on chart labels.
    pub name: String,

    /// Brand label.
    pub brand: String,

    /// Garment size ("S", "M", "38", ...). Free text by design: boutique
    /// sizing mixes letter, numeric, and vendor-specific scales.
    pub size: String,

    /// Unit price, fixed 2-decimal cents representation.
    pub price: Money,

    /// Units currently in stock. Never negative.
    pub quantity: u32,

    /// Category from the fixed set.
    pub category: ProductCategory,
}

impl Product {
    /// Checks whether this product can cover a sale of `quantity` units.
    #[inline]
    pub const fn can_sell(&self, quantity: u32) -> bool {
        self.quantity >= quantity
    }
}

/// One editable product field together with its replacement value.
///
/// Field existence is guaranteed by construction; the command boundary is
/// responsible for coercing raw form text into the typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductField {
    Name(String),
    Brand(String),
    Size(String),
    Price(Money),
    Quantity(u32),
    Category(ProductCategory),
}

impl ProductField {
    /// Coerces a `(field, value)` pair of raw strings into a typed field.
    ///
    /// This is the command-boundary entry point for field edits: the
    /// rendering layer sends the field name it bound the input to, plus
    /// whatever text the user typed.
    pub fn parse(field: &str, value: &str) -> Result<Self, ValidationError> {
        match field {
            "name" => Ok(ProductField::Name(value.to_string())),
            "brand" => Ok(ProductField::Brand(value.to_string())),
            "size" => Ok(ProductField::Size(value.to_string())),
            "price" => {
                let price = Money::parse(value).map_err(|e| ValidationError::InvalidFormat {
                    field: "price".to_string(),
                    reason: e.to_string(),
                })?;
                Ok(ProductField::Price(price))
            }
            "quantity" => {
                let qty = value
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| ValidationError::InvalidFormat {
                        field: "quantity".to_string(),
                        reason: e.to_string(),
                    })?;
                Ok(ProductField::Quantity(qty))
            }
            "category" => Ok(ProductField::Category(value.parse()?)),
            other => Err(ValidationError::InvalidFormat {
                field: "field".to_string(),
                reason: format!("unknown product field '{}'", other),
            }),
        }
    }

    /// The field name, for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            ProductField::Name(_) => "name",
            ProductField::Brand(_) => "brand",
            ProductField::Size(_) => "size",
            ProductField::Price(_) => "price",
            ProductField::Quantity(_) => "quantity",
            ProductField::Category(_) => "category",
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale. Append-only: never mutated or deleted once recorded.
///
/// Uses the snapshot pattern to freeze product data at time of sale, so
/// editing or deleting a product never rewrites sales history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sale {
    /// Unique identifier (UUID v4), system-generated.
    pub id: String,

    /// Monotonic sequence number, system-generated. Strictly increasing
    /// in recording order.
    pub receipt_number: u64,

    /// Non-owning reference to the product sold. Deleting the product
    /// later does not alter this sale.
    pub product_id: String,

    /// Product name at time of sale (frozen).
    pub product_name: String,

    /// Unit price at time of sale (frozen).
    pub unit_price: Money,

    /// Units sold. Always positive.
    pub quantity: u32,

    /// When the sale was recorded.
    #[ts(as = "String")]
    pub recorded_at: DateTime<Utc>,
}

impl Sale {
    /// Revenue for this sale (frozen unit price × quantity).
    #[inline]
    pub fn total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity as i64)
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier in the shop directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Supplier {
    /// Caller-supplied identifier, unique among suppliers.
    pub id: String,

    /// Company or person name.
    pub name: String,

    /// Contact person.
    pub contact: String,

    /// Contact email.
    pub email: String,

    /// Contact phone.
    pub phone: String,

    /// Postal address.
    pub address: String,
}

/// One editable supplier field together with its replacement value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupplierField {
    Name(String),
    Contact(String),
    Email(String),
    Phone(String),
    Address(String),
}

impl SupplierField {
    /// Coerces a `(field, value)` pair of raw strings into a typed field.
    pub fn parse(field: &str, value: &str) -> Result<Self, ValidationError> {
        match field {
            "name" => Ok(SupplierField::Name(value.to_string())),
            "contact" => Ok(SupplierField::Contact(value.to_string())),
            "email" => Ok(SupplierField::Email(value.to_string())),
            "phone" => Ok(SupplierField::Phone(value.to_string())),
            "address" => Ok(SupplierField::Address(value.to_string())),
            other => Err(ValidationError::InvalidFormat {
                field: "field".to_string(),
                reason: format!("unknown supplier field '{}'", other),
            }),
        }
    }

    /// The field name, for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            SupplierField::Name(_) => "name",
            SupplierField::Contact(_) => "contact",
            SupplierField::Email(_) => "email",
            SupplierField::Phone(_) => "phone",
            SupplierField::Address(_) => "address",
        }
    }
}

// =============================================================================
// View Enumerations
// =============================================================================

/// The screen section the user is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Products,
    Inventory,
    Sales,
    Suppliers,
    Statistics,
}

impl Section {
    /// Stable lowercase name, matching the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Section::Products => "products",
            Section::Inventory => "inventory",
            Section::Sales => "sales",
            Section::Suppliers => "suppliers",
            Section::Statistics => "statistics",
        }
    }
}

/// The screen opens on the product management section.
impl Default for Section {
    fn default() -> Self {
        Section::Products
    }
}

impl FromStr for Section {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "products" => Ok(Section::Products),
            "inventory" => Ok(Section::Inventory),
            "sales" => Ok(Section::Sales),
            "suppliers" => Ok(Section::Suppliers),
            "statistics" => Ok(Section::Statistics),
            other => Err(ValidationError::InvalidFormat {
                field: "section".to_string(),
                reason: format!("unknown section '{}'", other),
            }),
        }
    }
}

/// Which kind of record an editing marker points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    Product,
    Supplier,
}

impl EditKind {
    /// Stable lowercase name, matching the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EditKind::Product => "product",
            EditKind::Supplier => "supplier",
        }
    }
}

impl FromStr for EditKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "product" => Ok(EditKind::Product),
            "supplier" => Ok(EditKind::Supplier),
            other => Err(ValidationError::InvalidFormat {
                field: "kind".to_string(),
                reason: format!("unknown edit kind '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in ProductCategory::ALL {
            let parsed: ProductCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("hats".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn test_section_default_and_parse() {
        assert_eq!(Section::default(), Section::Products);
        assert_eq!("statistics".parse::<Section>().unwrap(), Section::Statistics);
        assert_eq!(" Sales ".parse::<Section>().unwrap(), Section::Sales);
        assert!("checkout".parse::<Section>().is_err());
    }

    #[test]
    fn test_product_field_parse() {
        let field = ProductField::parse("price", "10.99").unwrap();
        assert_eq!(field, ProductField::Price(Money::from_cents(1099)));

        let field = ProductField::parse("quantity", "7").unwrap();
        assert_eq!(field, ProductField::Quantity(7));

        let field = ProductField::parse("category", "shoes").unwrap();
        assert_eq!(field, ProductField::Category(ProductCategory::Shoes));

        assert!(ProductField::parse("price", "ten").is_err());
        assert!(ProductField::parse("quantity", "-3").is_err());
        assert!(ProductField::parse("sku", "X").is_err());
    }

    #[test]
    fn test_supplier_field_parse() {
        let field = SupplierField::parse("email", "v@tex.example").unwrap();
        assert_eq!(field, SupplierField::Email("v@tex.example".to_string()));
        assert!(SupplierField::parse("fax", "123").is_err());
    }

    #[test]
    fn test_can_sell() {
        let product = Product {
            id: "P1".to_string(),
            name: "Camisa Azul".to_string(),
            brand: "Norte".to_string(),
            size: "M".to_string(),
            price: Money::from_cents(2500),
            quantity: 3,
            category: ProductCategory::Shirts,
        };
        assert!(product.can_sell(3));
        assert!(!product.can_sell(4));
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: "P1".to_string(),
            name: "Camisa Azul".to_string(),
            brand: "Norte".to_string(),
            size: "M".to_string(),
            price: Money::from_cents(2500),
            quantity: 3,
            category: ProductCategory::Shirts,
        };

        let json = serde_json::to_value(&product).unwrap();
        // Money is a transparent cents integer on the wire
        assert_eq!(json["price"], 2500);
        assert_eq!(json["category"], "shirts");
    }

    #[test]
    fn test_sale_total() {
        let sale = Sale {
            id: "uuid".to_string(),
            receipt_number: 1,
            product_id: "P1".to_string(),
            product_name: "Camisa Azul".to_string(),
            unit_price: Money::from_cents(2500),
            quantity: 3,
            recorded_at: Utc::now(),
        };
        assert_eq!(sale.total(), Money::from_cents(7500));
    }
}
