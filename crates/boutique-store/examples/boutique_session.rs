//! A scripted session against the store, standing in for the rendering
//! layer: seed the catalog and directory, record some sales, then print
//! the snapshots a UI would redraw from.
//!
//! Run with:
//! ```text
//! RUST_LOG=debug cargo run --example boutique_session
//! ```

use boutique_store::commands::{
    add_product, add_supplier, daily_sales_chart, delete_product, record_sale, search_products,
    set_active_section, stock_chart, NewProductRequest, NewSupplierRequest, RecordSaleRequest,
};
use boutique_store::StoreState;
use tracing_subscriber::EnvFilter;

fn product(id: &str, name: &str, brand: &str, size: &str, price: &str, qty: u32, category: &str) -> NewProductRequest {
    NewProductRequest {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        size: size.to_string(),
        price: price.to_string(),
        quantity: qty,
        category: category.to_string(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let state = StoreState::new();

    // Seed the catalog the way the products form would
    add_product(&state, product("P1", "Camisa Azul", "Norte", "M", "24.99", 10, "shirts"))
        .expect("seed P1");
    add_product(&state, product("P2", "Pantalón Negro", "Sur", "38", "39.90", 6, "pants"))
        .expect("seed P2");
    add_product(&state, product("P3", "Vestido Rojo", "Norte", "S", "59.00", 3, "dresses"))
        .expect("seed P3");

    add_supplier(
        &state,
        NewSupplierRequest {
            id: "S1".to_string(),
            name: "Tejidos Norte".to_string(),
            contact: "Lucía Vega".to_string(),
            email: "ventas@norte.example".to_string(),
            phone: "+34 600 000 000".to_string(),
            address: "Calle Mayor 1".to_string(),
        },
    )
    .expect("seed S1");

    // Record a few sales; the second one must fail on stock
    let sale = record_sale(
        &state,
        RecordSaleRequest {
            product_id: "P1".to_string(),
            quantity: 3,
        },
    )
    .expect("sale of P1");
    println!(
        "recorded receipt #{}: {} x{} (stock left: {})",
        sale.sale.receipt_number, sale.sale.product_name, sale.sale.quantity, sale.product.quantity
    );

    let err = record_sale(
        &state,
        RecordSaleRequest {
            product_id: "P3".to_string(),
            quantity: 5,
        },
    )
    .expect_err("P3 only has 3 in stock");
    println!("rejected sale: {}", err);

    // Search the way the inventory search box would
    let hits = search_products(&state, "norte").expect("search");
    println!(
        "search 'norte' -> {:?}",
        hits.iter().map(|p| p.id.as_str()).collect::<Vec<_>>()
    );

    // Deleting a product keeps the sales history intact
    delete_product(&state, "P1");

    set_active_section(&state, "statistics").expect("switch section");
    let stock = serde_json::to_string_pretty(&stock_chart(&state)).expect("serialize");
    let daily = serde_json::to_string_pretty(&daily_sales_chart(&state)).expect("serialize");
    println!("stock chart:\n{}", stock);
    println!("daily sales chart:\n{}", daily);
}
