//! The cart store.

use std::rc::Rc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use localsza_core::{CartEntry, ProductKey, ProductRef};

use crate::normalize::load_cart_entries;
use crate::storage::{StorageBackend, keys};

/// Aggregate view of a cart for headers and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    /// Total units across all lines.
    pub item_count: u32,
    /// Sum of `price * qty` across all lines.
    pub subtotal: Decimal,
}

/// The authoritative, deduplicated list of items a buyer intends to purchase.
///
/// Loaded from durable storage at mount time (tolerating legacy and
/// malformed data, see [`crate::normalize`]) and re-persisted after every
/// mutation. At most one entry exists per product key; entry order is
/// insertion order.
pub struct CartStore {
    entries: Vec<CartEntry>,
    storage: Rc<dyn StorageBackend>,
}

impl CartStore {
    /// Load the cart from `storage`. Never fails; unreadable data loads as
    /// an empty cart.
    #[must_use]
    pub fn load(storage: Rc<dyn StorageBackend>) -> Self {
        let entries = load_cart_entries(storage.get(keys::CART).as_deref());
        Self { entries, storage }
    }

    /// Read-only view of the current entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct product lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the cart holds a line for `id`.
    #[must_use]
    pub fn is_in_cart(&self, id: &ProductKey) -> bool {
        self.entry(id).is_some()
    }

    /// Quantity for `id`, or 0 if absent.
    #[must_use]
    pub fn get_qty(&self, id: &ProductKey) -> u32 {
        self.entry(id).map_or(0, |e| e.qty)
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().map(|e| e.qty).sum()
    }

    /// Sum of `price * qty` across all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.entries
            .iter()
            .map(|e| e.product.price * Decimal::from(e.qty))
            .sum()
    }

    /// Aggregate view for UI badges.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            item_count: self.total_quantity(),
            subtotal: self.subtotal(),
        }
    }

    /// Add `product` to the cart.
    ///
    /// Increments the existing line's quantity if the product is already
    /// present; otherwise appends a new line with quantity 1.
    pub fn add_to_cart(&mut self, product: ProductRef) {
        if let Some(entry) = self.entry_mut(&product.id) {
            entry.qty = entry.qty.saturating_add(1);
        } else {
            self.entries.push(CartEntry::new(product));
        }
        self.persist();
    }

    /// Remove the line for `id`. No-op if absent.
    pub fn remove_from_cart(&mut self, id: &ProductKey) {
        let before = self.entries.len();
        self.entries.retain(|e| &e.product.id != id);
        if self.entries.len() != before {
            self.persist();
        }
    }

    /// Increment the quantity for `id` by 1. No-op if absent.
    pub fn increase_qty(&mut self, id: &ProductKey) {
        if let Some(entry) = self.entry_mut(id) {
            entry.qty = entry.qty.saturating_add(1);
            self.persist();
        }
    }

    /// Decrement the quantity for `id` by 1, clamping at 1. No-op if absent.
    ///
    /// Never removes the line; removal is explicit via
    /// [`remove_from_cart`](Self::remove_from_cart).
    pub fn decrease_qty(&mut self, id: &ProductKey) {
        if let Some(entry) = self.entry_mut(id) {
            entry.qty = entry.qty.saturating_sub(1).max(1);
            self.persist();
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn entry(&self, id: &ProductKey) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.product.id == id)
    }

    fn entry_mut(&mut self, id: &ProductKey) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| &e.product.id == id)
    }

    /// Write the full entry list back to storage, best effort.
    ///
    /// In-memory state stays authoritative for the session when the write
    /// fails; the durable copy may lag.
    fn persist(&self) {
        match serde_json::to_string(&self.entries) {
            Ok(json) => {
                if let Err(e) = self.storage.set(keys::CART, &json) {
                    warn!(error = %e, "Failed to persist cart; keeping in-memory state");
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to serialize cart; keeping in-memory state");
            }
        }
    }
}
