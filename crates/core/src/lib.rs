//! LocalsZA Core - Shared types library.
//!
//! This crate provides common types used across all LocalsZA components:
//! - `stores` - Client-side cart/favorites/route-list state layer
//! - `integration-tests` - Cross-store integration tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! persistence logic. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype keys, product references, cart entries, and
//!   delivery addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
