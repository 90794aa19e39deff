//! Cart persistence lifecycle through file-backed storage.
//!
//! Each test simulates a device: a temp data directory that outlives the
//! store instances mounted over it.

use rust_decimal::Decimal;

use localsza_core::{ProductKey, ProductRef};
use localsza_integration_tests::TempStorage;
use localsza_stores::{CartStore, StorageBackend, keys};

#[test]
fn cart_survives_remount() {
    let device = TempStorage::new();

    let mut cart = CartStore::load(device.open());
    cart.add_to_cart(ProductRef::new("p1").with_name("Widget").with_price(Decimal::from(10)));
    cart.add_to_cart(ProductRef::new("p1"));
    cart.add_to_cart(ProductRef::new("p2").with_price(Decimal::new(550, 2)));
    let entries = cart.entries().to_vec();
    drop(cart);

    let reloaded = CartStore::load(device.open());
    assert_eq!(reloaded.entries(), entries.as_slice());
    assert_eq!(reloaded.get_qty(&ProductKey::new("p1")), 2);
    assert_eq!(reloaded.subtotal(), Decimal::new(2550, 2));
}

#[test]
fn legacy_flat_cart_is_migrated_on_load() {
    let device = TempStorage::new();
    device.seed(
        keys::CART,
        r#"[{"id":"p1","name":"Widget","price":10,"quantity":3}]"#,
    );

    let cart = CartStore::load(device.open());
    assert_eq!(cart.len(), 1);
    let entry = cart.entries().first().expect("one entry");
    assert_eq!(entry.product.id, ProductKey::new("p1"));
    assert_eq!(entry.product.name.as_deref(), Some("Widget"));
    assert_eq!(entry.product.price, Decimal::from(10));
    assert_eq!(entry.product.image_url, "");
    assert_eq!(entry.qty, 3);
}

#[test]
fn migrated_cart_is_persisted_canonically_after_first_mutation() {
    let device = TempStorage::new();
    device.seed(keys::CART, r#"[{"id":"p1","quantity":2}]"#);

    let mut cart = CartStore::load(device.open());
    cart.increase_qty(&ProductKey::new("p1"));

    // The durable copy is now the canonical nested shape.
    let raw = device.open().get(keys::CART).expect("cart file written");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("canonical JSON");
    let first = value
        .as_array()
        .and_then(|a| a.first())
        .expect("one entry");
    assert!(first.get("product").is_some());
    assert_eq!(first.get("qty"), Some(&serde_json::json!(3)));
}

#[test]
fn unparseable_cart_loads_empty_and_recovers() {
    let device = TempStorage::new();
    device.seed(keys::CART, "not json");

    let mut cart = CartStore::load(device.open());
    assert!(cart.is_empty());

    // The first mutation replaces the bad durable copy.
    cart.add_to_cart(ProductRef::new("p1"));
    drop(cart);

    let reloaded = CartStore::load(device.open());
    assert_eq!(reloaded.len(), 1);
}
