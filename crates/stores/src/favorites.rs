//! The favorites store.

use std::rc::Rc;

use tracing::warn;

use localsza_core::{ProductKey, ProductRef};

use crate::storage::{StorageBackend, keys};

/// The set of products a buyer has marked as favorites.
///
/// Entries are plain product references with no quantity; at most one entry
/// exists per product key. Unlike the cart there is no legacy persisted
/// shape to migrate, so loading is a plain JSON parse that falls back to an
/// empty list.
pub struct FavoritesStore {
    products: Vec<ProductRef>,
    storage: Rc<dyn StorageBackend>,
}

impl FavoritesStore {
    /// Load favorites from `storage`. Never fails; unreadable data loads as
    /// an empty list.
    #[must_use]
    pub fn load(storage: Rc<dyn StorageBackend>) -> Self {
        let products = storage
            .get(keys::FAVORITES)
            .map_or_else(Vec::new, |raw| parse_favorites(&raw));
        Self { products, storage }
    }

    /// Read-only view of the favorites, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[ProductRef] {
        &self.products
    }

    /// Number of favorited products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether no products are favorited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Whether `id` is favorited.
    #[must_use]
    pub fn is_favorite(&self, id: &ProductKey) -> bool {
        self.products.iter().any(|p| &p.id == id)
    }

    /// Flip the favorite state of `product`: remove it when present, append
    /// it when not. Calling twice with the same product is a no-op overall.
    pub fn toggle_favorite(&mut self, product: ProductRef) {
        if self.is_favorite(&product.id) {
            self.products.retain(|p| p.id != product.id);
        } else {
            self.products.push(product);
        }
        self.persist();
    }

    /// Remove `id` from favorites. No-op if absent.
    pub fn remove_favorite(&mut self, id: &ProductKey) {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        if self.products.len() != before {
            self.persist();
        }
    }

    fn persist(&self) {
        match serde_json::to_string(&self.products) {
            Ok(json) => {
                if let Err(e) = self.storage.set(keys::FAVORITES, &json) {
                    warn!(error = %e, "Failed to persist favorites; keeping in-memory state");
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to serialize favorites; keeping in-memory state");
            }
        }
    }
}

/// Parse persisted favorites, deduplicating by product key.
///
/// First occurrence wins, matching the cart's load behavior.
fn parse_favorites(raw: &str) -> Vec<ProductRef> {
    let parsed = match serde_json::from_str::<Vec<ProductRef>>(raw) {
        Ok(products) => products,
        Err(e) => {
            warn!(error = %e, "Persisted favorites are not a product list; starting empty");
            return Vec::new();
        }
    };

    let mut products: Vec<ProductRef> = Vec::with_capacity(parsed.len());
    for product in parsed {
        if products.iter().any(|p| p.id == product.id) {
            warn!(id = %product.id, "Duplicate favorite in storage; keeping first");
            continue;
        }
        products.push(product);
    }
    products
}
