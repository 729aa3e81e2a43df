use chrono::NaiveDate;
use stockroom_core::{DomainError, Entity, ProductId};
use stockroom_inventory::Inventory;
use stockroom_products::Product;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn store_with_sample_catalog() -> Inventory {
    let mut inv = Inventory::new();
    for product in [
        Product::electronics("E001", "Laptop", 1500.0, 5, 2, "Dell"),
        Product::electronics("E002", "Computer", 1200.0, 12, 2, "Dell"),
        Product::grocery("G001", "Milk", 2.5, 10, date(2025, 1, 1)),
        Product::clothing("C001", "T-Shirt", 20.0, 15, "L", "Cotton"),
    ] {
        inv.add_product(product.unwrap()).unwrap();
    }
    inv
}

#[test]
fn sale_valuation_and_sweep() {
    let mut inv = store_with_sample_catalog();

    inv.sell_product("C001", 5).unwrap();
    assert_eq!(inv.get("C001").unwrap().quantity_in_stock(), 10);

    // 1500*5 + 1200*12 + 2.5*10 + 20*10
    assert_eq!(inv.total_inventory_value(), 22125.0);

    let removed = inv.remove_expired_products(date(2026, 10, 17));
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].id().as_str(), "G001");
    assert_eq!(inv.len(), 3);
    assert!(inv.search_by_type("grocery").is_empty());
}

#[test]
fn oversell_leaves_stock_unchanged() {
    let mut inv = store_with_sample_catalog();

    let err = inv.sell_product("C001", 1000).unwrap_err();
    assert!(matches!(err, DomainError::InsufficientStock { requested: 1000, available: 15, .. }));
    assert_eq!(inv.get("C001").unwrap().quantity_in_stock(), 15);
    assert_eq!(inv.total_inventory_value(), 7500.0 + 14400.0 + 25.0 + 300.0);
}

#[test]
fn duplicate_add_fails_second_time() {
    let mut inv = Inventory::new();
    inv.add_product(Product::electronics("E001", "Laptop", 1500.0, 5, 2, "Dell").unwrap())
        .unwrap();

    let err = inv
        .add_product(Product::electronics("E001", "Laptop", 1500.0, 5, 2, "Dell").unwrap())
        .unwrap_err();
    assert_eq!(err, DomainError::DuplicateId(ProductId::from("E001")));
    assert_eq!(inv.len(), 1);
}

#[test]
fn bulk_add_with_duplicate_reports_error() {
    let mut inv = store_with_sample_catalog();

    let err = inv
        .add_products([
            Product::clothing("C002", "Jeans", 60.0, 3, "32", "Denim").unwrap(),
            Product::clothing("C002", "Chinos", 55.0, 4, "32", "Cotton").unwrap(),
        ])
        .unwrap_err();
    assert_eq!(err, DomainError::DuplicateId(ProductId::from("C002")));
    assert_eq!(inv.len(), 4);
}

#[test]
fn timed_listing_flags_expired_grocery() {
    let inv = store_with_sample_catalog();

    let listing = inv.list_all_products_at(date(2026, 10, 17));
    assert_eq!(
        listing.last().unwrap(),
        "Grocery[ID: G001, Name: Milk, Price: 2.5, Stock: 10, Expiry Date: 2025-01-01, Expired: true]"
    );
    let listing = inv.list_all_products_at(date(2024, 12, 1));
    assert!(listing.last().unwrap().ends_with("Expired: false]"));
}

#[test]
fn restock_then_sell_round_trips_through_inventory() {
    let mut inv = store_with_sample_catalog();

    inv.restock_product("E002", 8).unwrap();
    assert_eq!(inv.get("E002").unwrap().quantity_in_stock(), 20);
    inv.sell_product("E002", 8).unwrap();
    assert_eq!(inv.get("E002").unwrap().quantity_in_stock(), 12);
}

#[test]
fn sweep_before_expiry_keeps_groceries() {
    let mut inv = store_with_sample_catalog();

    assert!(inv.remove_expired_products(date(2024, 6, 1)).is_empty());
    assert_eq!(inv.len(), 4);
}

#[test]
fn listing_renders_every_variant() {
    let inv = store_with_sample_catalog();

    assert_eq!(
        inv.list_all_products(),
        vec![
            "Clothing[ID: C001, Name: T-Shirt, Size: L, Material: Cotton, Price: 20.0, Stock: 15]",
            "Electronics[ID: E001, Name: Laptop, Brand: Dell, Price: 1500.0, Stock: 5, Warranty: 2 years]",
            "Electronics[ID: E002, Name: Computer, Brand: Dell, Price: 1200.0, Stock: 12, Warranty: 2 years]",
            "Grocery[ID: G001, Name: Milk, Price: 2.5, Stock: 10, Expiry Date: 2025-01-01]",
        ]
    );
}
