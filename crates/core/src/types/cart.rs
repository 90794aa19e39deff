//! Cart entry type.

use serde::{Deserialize, Serialize};

use super::product::ProductRef;

/// One line of the cart: a product and how many of it.
///
/// `qty` is always at least 1. The cart store enforces this: decrementing
/// clamps at 1 and removal is a separate explicit operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    /// The product being purchased.
    pub product: ProductRef,
    /// Quantity, >= 1.
    pub qty: u32,
}

impl CartEntry {
    /// Create an entry with quantity 1.
    #[must_use]
    pub const fn new(product: ProductRef) -> Self {
        Self { product, qty: 1 }
    }
}
