//! Migration-on-read for persisted cart data.
//!
//! The cart has shipped in two persisted formats: the canonical nested shape
//! (`{"product": {...}, "qty": n}`) and an older flat shape carrying the
//! product fields inline (`{"id": ..., "name": ..., "quantity": ...}`).
//! Loading classifies each entry against that closed set; anything that fits
//! neither shape is discarded with a warning rather than guessed at.
//! The outer parse never fails: malformed JSON or a non-array value loads as
//! an empty cart.

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tracing::warn;

use localsza_core::{CartEntry, ProductKey, ProductRef};

/// Recognized persisted entry shapes.
enum RawShape {
    /// Current format: a nested `product` object plus `qty`.
    Canonical,
    /// Pre-migration format: product fields inline with the quantity.
    LegacyFlat,
    /// Anything else. Discarded.
    Unrecognized,
}

fn classify(value: &Value) -> RawShape {
    let Some(obj) = value.as_object() else {
        return RawShape::Unrecognized;
    };
    if obj.get("product").is_some_and(Value::is_object) {
        return RawShape::Canonical;
    }
    if obj.contains_key("id") {
        return RawShape::LegacyFlat;
    }
    RawShape::Unrecognized
}

/// Load and normalize persisted cart data.
///
/// `raw` is the value read from storage, if any. The result preserves
/// persisted order, holds at most one entry per product key (first
/// occurrence wins), and every `qty` is a positive integer.
#[must_use]
pub fn load_cart_entries(raw: Option<&str>) -> Vec<CartEntry> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            warn!("Persisted cart is not an array; starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(error = %e, "Persisted cart is not valid JSON; starting empty");
            return Vec::new();
        }
    };

    let mut entries: Vec<CartEntry> = Vec::with_capacity(items.len());
    for item in items {
        let Some(entry) = normalize_entry(item) else {
            continue;
        };
        if entries.iter().any(|e| e.product.id == entry.product.id) {
            warn!(id = %entry.product.id, "Duplicate cart entry in storage; keeping first");
            continue;
        }
        entries.push(entry);
    }
    entries
}

fn normalize_entry(value: Value) -> Option<CartEntry> {
    match classify(&value) {
        RawShape::Canonical => canonical_entry(value),
        RawShape::LegacyFlat => legacy_entry(value),
        RawShape::Unrecognized => {
            warn!("Unrecognized cart entry shape; discarding");
            None
        }
    }
}

/// Accept a canonical entry, re-validating the product and coercing `qty`.
fn canonical_entry(value: Value) -> Option<CartEntry> {
    let Value::Object(mut obj) = value else {
        return None;
    };
    let qty = coerce_qty(obj.get("qty"));
    let product_value = obj.remove("product")?;
    match serde_json::from_value::<ProductRef>(product_value) {
        Ok(product) => Some(CartEntry { product, qty }),
        Err(e) => {
            warn!(error = %e, "Cart entry product failed to parse; discarding");
            None
        }
    }
}

/// Synthesize a canonical entry from the legacy flat shape.
fn legacy_entry(value: Value) -> Option<CartEntry> {
    let Value::Object(obj) = value else {
        return None;
    };
    let id = legacy_id(obj.get("id")?)?;
    let name = string_field(&obj, "name").or_else(|| string_field(&obj, "product_name"));
    let price = obj
        .get("price")
        .cloned()
        .and_then(|v| serde_json::from_value::<Decimal>(v).ok())
        .unwrap_or(Decimal::ZERO);
    let image_url = string_field(&obj, "image_url")
        .or_else(|| string_field(&obj, "image"))
        .unwrap_or_default();
    let qty = coerce_qty(obj.get("qty").or_else(|| obj.get("quantity")));

    Some(CartEntry {
        product: ProductRef {
            id,
            name,
            price,
            image_url,
            extra: Map::new(),
        },
        qty,
    })
}

/// Legacy carts occasionally stored numeric ids; stringify those.
fn legacy_id(value: &Value) -> Option<ProductKey> {
    match value {
        Value::String(s) => Some(ProductKey::new(s.as_str())),
        Value::Number(n) => Some(ProductKey::new(n.to_string())),
        _ => {
            warn!("Legacy cart entry id is neither string nor number; discarding");
            None
        }
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(String::from)
}

/// Coerce a persisted quantity to a positive integer, defaulting to 1.
fn coerce_qty(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(q) = n.as_u64() {
                u32::try_from(q.max(1)).unwrap_or(u32::MAX)
            } else if let Some(q) = n.as_f64() {
                if q >= 1.0 {
                    // Truncate fractional quantities from hand-edited storage.
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let q = q.min(f64::from(u32::MAX)) as u32;
                    q
                } else {
                    1
                }
            } else {
                1
            }
        }
        _ => 1,
    }
}
