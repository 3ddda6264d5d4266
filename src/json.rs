//! A minimal, library-neutral JSON value tree.
//!
//! [`ParsedDataset::to_geojson`](crate::dataset::ParsedDataset::to_geojson)
//! builds one of these instead of depending on `serde_json` or any other
//! serialization crate: the embedding application decides how (or whether)
//! to turn this into wire-format JSON text.

/// A JSON value. [`Json::Object`] preserves insertion order (it is a
/// `Vec` of pairs, not a map) so GeoJSON output has a stable, readable key
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum Json {
    /// JSON `null`.
    Null,
    /// A JSON boolean.
    Bool(bool),
    /// A JSON number. S-57 decoding never produces `NaN` or infinite
    /// values here; coordinates and attribute numbers are always finite.
    Number(f64),
    /// A JSON string.
    String(String),
    /// A JSON array.
    Array(Vec<Json>),
    /// A JSON object, as an ordered list of key/value pairs.
    Object(Vec<(String, Json)>),
}

impl Json {
    /// Looks up a key in an `Object` variant. Returns `None` for any other
    /// variant, or if the key is absent.
    pub fn get(&self, key: &str) -> Option<&Json> {
        match self {
            Json::Object(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Returns the inner slice if this is an `Array`.
    pub fn as_array(&self) -> Option<&[Json]> {
        match self {
            Json::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the inner string if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Json::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the inner number if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Json::Number(n) => Some(*n),
            _ => None,
        }
    }
}
