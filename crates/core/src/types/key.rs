//! Newtype keys for type-safe entity references.
//!
//! Use the `define_key!` macro to create type-safe key wrappers that prevent
//! accidentally mixing keys from different entity types. Keys are opaque
//! strings: product keys come from the catalog, order keys from the order
//! pipeline, and neither is meaningful to the stores beyond equality.

/// Macro to define a type-safe string key wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use localsza_core::define_key;
/// define_key!(ProductKey);
/// define_key!(OrderKey);
///
/// let product = ProductKey::new("sku-1001");
/// let order = OrderKey::new("ord-2002");
///
/// // These are different types, so this won't compile:
/// // let _: ProductKey = order;
/// ```
#[macro_export]
macro_rules! define_key {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new key from anything string-like.
            #[must_use]
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_string())
            }
        }

        impl From<$name> for String {
            fn from(key: $name) -> Self {
                key.0
            }
        }
    };
}

// Define standard entity keys
define_key!(ProductKey);
define_key!(OrderKey);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_key_equality_and_display() {
        let a = ProductKey::new("p1");
        let b = ProductKey::from("p1");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "p1");
        assert_eq!(a.as_str(), "p1");
    }

    #[test]
    fn test_key_serde_transparent() {
        let key = OrderKey::new("ord-7");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"ord-7\"");
        let back: OrderKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
