//! Core types for LocalsZA.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod cart;
pub mod key;
pub mod product;

pub use address::{Coordinates, DeliveryAddress};
pub use cart::CartEntry;
pub use key::*;
pub use product::ProductRef;
