//! Scope mount/unmount behavior across all three stores.

use localsza_core::{DeliveryAddress, OrderKey, ProductRef};
use localsza_integration_tests::TempStorage;
use localsza_stores::{ScopeHandle, StoreError, StoreScope};

#[test]
fn handle_works_while_scope_is_mounted() {
    let device = TempStorage::new();
    let scope = StoreScope::mount(device.open());
    let handle = ScopeHandle::new(&scope);

    handle
        .with_cart(|cart| cart.add_to_cart(ProductRef::new("p1")))
        .expect("scope is mounted");
    handle
        .with_favorites(|f| f.toggle_favorite(ProductRef::new("p2")))
        .expect("scope is mounted");
    handle
        .with_routes(|r| {
            r.add_address(DeliveryAddress::new("ord-1", "Thandi", "12 Kloof St, Cape Town"));
        })
        .expect("scope is mounted");

    let scope = scope.borrow();
    assert_eq!(scope.cart().len(), 1);
    assert_eq!(scope.favorites().len(), 1);
    assert!(scope.routes().has_address(&OrderKey::new("ord-1")));
}

#[test]
fn handle_fails_fast_after_unmount() {
    let device = TempStorage::new();
    let scope = StoreScope::mount(device.open());
    let handle = ScopeHandle::new(&scope);
    drop(scope);

    let err = handle
        .with_favorites(|f| f.is_favorite(&"p1".into()))
        .expect_err("scope was dropped");
    assert!(matches!(err, StoreError::ProviderMissing("FavoritesStore")));
}

#[test]
fn persisted_stores_survive_remount_but_route_list_does_not() {
    let device = TempStorage::new();

    let scope = StoreScope::mount(device.open());
    {
        let mut scope = scope.borrow_mut();
        scope.cart_mut().add_to_cart(ProductRef::new("p1"));
        scope
            .favorites_mut()
            .toggle_favorite(ProductRef::new("p2"));
        scope.routes_mut().add_address(DeliveryAddress::new(
            "ord-1",
            "Thandi",
            "12 Kloof St, Cape Town",
        ));
    }
    drop(scope);

    let remounted = StoreScope::mount(device.open());
    let remounted = remounted.borrow();
    assert_eq!(remounted.cart().len(), 1);
    assert_eq!(remounted.favorites().len(), 1);
    assert!(remounted.routes().is_empty());
}
