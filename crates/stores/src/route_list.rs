//! The driver route-list store.

use localsza_core::{DeliveryAddress, OrderKey};

/// Delivery stops a driver is assembling into a route.
///
/// Deliberately memory-only: the route list is a planning scratchpad for the
/// current session, so it carries no storage handle at all and vanishes when
/// the owning scope unmounts. Cart and favorites persist; this does not.
#[derive(Debug, Default)]
pub struct RouteListStore {
    addresses: Vec<DeliveryAddress>,
}

impl RouteListStore {
    /// Create an empty route list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the stops, in insertion order.
    #[must_use]
    pub fn addresses(&self) -> &[DeliveryAddress] {
        &self.addresses
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Whether the route list has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Whether a stop exists for `id`.
    #[must_use]
    pub fn has_address(&self, id: &OrderKey) -> bool {
        self.addresses.iter().any(|a| &a.id == id)
    }

    /// Append `addr` unless a stop with the same order key already exists,
    /// in which case the original entry is left untouched.
    pub fn add_address(&mut self, addr: DeliveryAddress) {
        if !self.has_address(&addr.id) {
            self.addresses.push(addr);
        }
    }

    /// Remove the stop for `id`. No-op if absent.
    pub fn remove_address(&mut self, id: &OrderKey) {
        self.addresses.retain(|a| &a.id != id);
    }

    /// Drop all stops.
    pub fn clear_addresses(&mut self) {
        self.addresses.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn addr(id: &str, name: &str) -> DeliveryAddress {
        DeliveryAddress::new(id, name, "12 Kloof St, Cape Town")
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut routes = RouteListStore::new();
        routes.add_address(addr("ord-1", "Thandi"));
        routes.add_address(addr("ord-1", "Someone Else"));
        assert_eq!(routes.len(), 1);
        assert_eq!(routes.addresses().first().unwrap().name, "Thandi");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut routes = RouteListStore::new();
        routes.add_address(addr("ord-1", "Thandi"));
        routes.add_address(addr("ord-2", "Sipho"));

        routes.remove_address(&OrderKey::new("ord-1"));
        assert!(!routes.has_address(&OrderKey::new("ord-1")));
        assert!(routes.has_address(&OrderKey::new("ord-2")));

        routes.clear_addresses();
        assert!(routes.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut routes = RouteListStore::new();
        routes.add_address(addr("ord-1", "Thandi"));
        routes.remove_address(&OrderKey::new("missing"));
        assert_eq!(routes.len(), 1);
    }
}
