//! Store ownership and scoped access.
//!
//! A [`StoreScope`] owns one instance of each store for the lifetime of the
//! UI subtree it serves: stores load when the scope mounts and the route
//! list vanishes when it drops. Consumers never reach for stores ambiently;
//! they are handed a [`ScopeHandle`] at construction time, and a handle used
//! after its scope has been torn down fails immediately with
//! [`StoreError::ProviderMissing`] so integration mistakes surface early.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::cart::CartStore;
use crate::error::StoreError;
use crate::favorites::FavoritesStore;
use crate::route_list::RouteListStore;
use crate::storage::StorageBackend;

/// Owner of the three stores for one UI subtree.
pub struct StoreScope {
    cart: CartStore,
    favorites: FavoritesStore,
    routes: RouteListStore,
}

impl StoreScope {
    /// Mount a scope: load cart and favorites from `storage` and start an
    /// empty route list.
    ///
    /// Returned behind `Rc<RefCell<_>>` so the subtree can share it with the
    /// handles it hands out. All access is single-threaded by construction.
    #[must_use]
    pub fn mount(storage: Rc<dyn StorageBackend>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            cart: CartStore::load(Rc::clone(&storage)),
            favorites: FavoritesStore::load(storage),
            routes: RouteListStore::new(),
        }))
    }

    /// The cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart store, mutably.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The favorites store.
    #[must_use]
    pub const fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// The favorites store, mutably.
    pub const fn favorites_mut(&mut self) -> &mut FavoritesStore {
        &mut self.favorites
    }

    /// The route-list store.
    #[must_use]
    pub const fn routes(&self) -> &RouteListStore {
        &self.routes
    }

    /// The route-list store, mutably.
    pub const fn routes_mut(&mut self) -> &mut RouteListStore {
        &mut self.routes
    }
}

/// A consumer's capability to reach the stores of one scope.
///
/// Holds a weak reference: handles do not keep a torn-down scope alive, and
/// every accessor re-checks that the scope still exists.
#[derive(Clone)]
pub struct ScopeHandle {
    scope: Weak<RefCell<StoreScope>>,
}

impl ScopeHandle {
    /// Create a handle onto `scope`.
    #[must_use]
    pub fn new(scope: &Rc<RefCell<StoreScope>>) -> Self {
        Self {
            scope: Rc::downgrade(scope),
        }
    }

    /// Run `f` against the cart store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProviderMissing`] if the owning scope has been
    /// dropped.
    pub fn with_cart<R>(&self, f: impl FnOnce(&mut CartStore) -> R) -> Result<R, StoreError> {
        let scope = self.upgrade("CartStore")?;
        let result = f(scope.borrow_mut().cart_mut());
        Ok(result)
    }

    /// Run `f` against the favorites store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProviderMissing`] if the owning scope has been
    /// dropped.
    pub fn with_favorites<R>(
        &self,
        f: impl FnOnce(&mut FavoritesStore) -> R,
    ) -> Result<R, StoreError> {
        let scope = self.upgrade("FavoritesStore")?;
        let result = f(scope.borrow_mut().favorites_mut());
        Ok(result)
    }

    /// Run `f` against the route-list store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProviderMissing`] if the owning scope has been
    /// dropped.
    pub fn with_routes<R>(
        &self,
        f: impl FnOnce(&mut RouteListStore) -> R,
    ) -> Result<R, StoreError> {
        let scope = self.upgrade("RouteListStore")?;
        let result = f(scope.borrow_mut().routes_mut());
        Ok(result)
    }

    fn upgrade(&self, provider: &'static str) -> Result<Rc<RefCell<StoreScope>>, StoreError> {
        self.scope
            .upgrade()
            .ok_or(StoreError::ProviderMissing(provider))
    }
}
