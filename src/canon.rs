//! JSON canonicalization for order-insensitive comparison.
//!
//! Two JSON documents that describe the same data can still differ textually:
//! object keys may be written in any order, and many fixtures treat arrays as
//! multisets rather than sequences. [`canonicalize`] normalizes a decoded
//! value so that such documents compare equal with plain `==`.
//!
//! Numbers are compared as opaque literal tokens, not as floats: the crate
//! enables serde_json's `arbitrary_precision` feature, so `Number` keeps the
//! original text (`1.0` and `1` stay distinct). This makes comparisons
//! deterministic at the cost of being strict about formatting.

use serde_json::{Map, Value};

// ============================================================================
// CANONICAL FORM
// ============================================================================

/// Recursively normalizes a JSON value into its canonical form.
///
/// - Objects: every value is canonicalized; keys iterate in ascending
///   byte-wise lexicographic order (serde_json's default map is sorted).
/// - Arrays: every element is canonicalized, then elements are stable-sorted
///   by the lexicographic order of their compact re-serialized JSON form.
///   Arrays holding the same multiset of elements thus compare equal
///   regardless of element order.
/// - Scalars: returned unchanged.
///
/// Pure function of its input; idempotent.
pub fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, val) in map {
                out.insert(key, canonicalize(val));
            }
            Value::Object(out)
        }
        Value::Array(items) => {
            let mut items: Vec<Value> = items.into_iter().map(canonicalize).collect();
            items.sort_by_cached_key(sort_key);
            Value::Array(items)
        }
        scalar => scalar,
    }
}

/// Canonicalizes a value and serializes it to a compact string.
pub fn to_canonical_string(value: Value) -> Result<String, serde_json::Error> {
    serde_json::to_string(&canonicalize(value))
}

/// Sort key for array elements: the element's compact serialization.
///
/// Serialization of a finite JSON tree is always well-defined, so even
/// structurally odd elements (mixed types, deeply nested values) order
/// consistently. Serialization of an in-memory `Value` cannot fail.
fn sort_key(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

// ============================================================================
// ESCAPED-PAYLOAD DECODING
// ============================================================================

/// Parses either a raw JSON object or a JSON-escaped JSON string into a map.
///
/// Some fixtures arrive doubly encoded (an object serialized into a JSON
/// string field). This tries the direct decode first, then unwraps one level
/// of string escaping and decodes again.
pub fn unescape_json(input: &str) -> Result<Map<String, Value>, serde_json::Error> {
    if let Ok(map) = serde_json::from_str::<Map<String, Value>>(input) {
        return Ok(map);
    }

    let inner: String = serde_json::from_str(input)?;
    serde_json::from_str(&inner)
}
