//! Product references as seen by the client-state stores.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::key::ProductKey;

/// A reference to a catalog product.
///
/// The stores treat products as opaque beyond the key: `name`, `price`, and
/// `image_url` exist for display, and any extension fields a caller attaches
/// (vendor, category, ...) ride along in `extra` so they survive a
/// persist/reload round-trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    /// Unique catalog key.
    pub id: ProductKey,
    /// Display name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit price. Defaults to zero when the source omits it.
    #[serde(default)]
    pub price: Decimal,
    /// Product image URL. Empty when the source omits it.
    #[serde(default)]
    pub image_url: String,
    /// Extension fields preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductRef {
    /// Create a bare product reference with only a key.
    #[must_use]
    pub fn new(id: impl Into<ProductKey>) -> Self {
        Self {
            id: id.into(),
            name: None,
            price: Decimal::ZERO,
            image_url: String::new(),
            extra: Map::new(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the unit price.
    #[must_use]
    pub const fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let product: ProductRef = serde_json::from_str(r#"{"id":"p1"}"#).unwrap();
        assert_eq!(product.id, ProductKey::new("p1"));
        assert_eq!(product.name, None);
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.image_url, "");
        assert!(product.extra.is_empty());
    }

    #[test]
    fn test_extension_fields_round_trip() {
        let raw = r#"{"id":"p2","name":"Rooibos","price":"45.50","vendor":"Cederberg Co."}"#;
        let product: ProductRef = serde_json::from_str(raw).unwrap();
        assert_eq!(
            product.extra.get("vendor"),
            Some(&Value::String("Cederberg Co.".to_string()))
        );

        let json = serde_json::to_string(&product).unwrap();
        let back: ProductRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
