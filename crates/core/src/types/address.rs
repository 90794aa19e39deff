//! Delivery address types for driver route planning.

use serde::{Deserialize, Serialize};

use super::key::OrderKey;

/// Geographic coordinates attached to a delivery address.
///
/// Either component may be absent when geocoding has not run yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Coordinates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// A delivery stop keyed by the order it fulfils.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    /// Order identifier, unique within a route list.
    pub id: OrderKey,
    /// Recipient name.
    pub name: String,
    /// Street address as entered by the buyer.
    pub address: String,
    /// Coordinates, when the address has been geocoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl DeliveryAddress {
    /// Create an address without coordinates.
    #[must_use]
    pub fn new(
        id: impl Into<OrderKey>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            coordinates: None,
        }
    }
}
