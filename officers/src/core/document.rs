//! Defensive accessors over untyped cache documents
//!
//! Every lookup checks the JSON variant before descending and reports a
//! missing or mistyped field as absence. `null` counts as absent.

use serde_json::{Map, Value};

use crate::types::RawDocument;

/// The document handed back when a source has nothing for a company
pub fn empty_document() -> RawDocument {
    Value::Object(Map::new())
}

/// Field of an object, `None` for non-objects, missing keys and nulls
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object()?.get(key).filter(|v| !v.is_null())
}

/// Array field as a slice; anything else reads as empty
pub fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    field(value, key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Trimmed string field, `None` when absent, not a string, or blank
pub fn text_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    field(value, key)?
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// Trimmed string one object down, e.g. `primaryName.fullName`
pub fn nested_text<'a>(value: &'a Value, outer: &str, inner: &str) -> Option<&'a str> {
    field(value, outer).and_then(|nested| text_field(nested, inner))
}

/// Top-level size of a document: keys, elements or characters
pub fn document_len(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        Value::String(text) => text.chars().count(),
        _ => 0,
    }
}
