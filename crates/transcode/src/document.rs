//! Search document rendering
//!
//! Flattens an [`OutputRow`] into the document shape the index schema
//! expects: the identifier field, the multi-valued paths field (left out
//! when the object has no tag values), and one entry per dynamic field.

use crate::config::OutputConfig;
use serde_json::{Map, Value};
use tagdex_core::{FieldValue, OutputRow};

/// Render `row` as a flat JSON document
///
/// # Example
///
/// ```
/// use tagdex_core::{FieldValue, OutputRow};
/// use tagdex_transcode::config::OutputConfig;
/// use tagdex_transcode::document::to_document;
///
/// let mut row = OutputRow::new("6600cb04-f0a0-48c5-b0a2-b249dec4a16b");
/// row.record_path("foo/bar");
/// row.insert_field("foo/bar_tag_bool", FieldValue::Bool(true));
///
/// let doc = to_document(&row, &OutputConfig::default());
/// assert_eq!(doc["fluiddb/id"], "6600cb04-f0a0-48c5-b0a2-b249dec4a16b");
/// assert_eq!(doc["paths"], serde_json::json!(["foo/bar"]));
/// assert_eq!(doc["foo/bar_tag_bool"], true);
/// ```
pub fn to_document(row: &OutputRow, layout: &OutputConfig) -> Map<String, Value> {
    let mut doc = Map::new();
    doc.insert(layout.id_field.clone(), Value::String(row.object_id.clone()));
    if !row.paths.is_empty() {
        let paths = row.paths.iter().cloned().map(Value::String).collect();
        doc.insert(layout.paths_field.clone(), Value::Array(paths));
    }
    for (name, value) in &row.fields {
        doc.insert(name.clone(), field_json(value));
    }
    doc
}

fn field_json(value: &FieldValue) -> Value {
    match value {
        FieldValue::Bool(b) => Value::Bool(*b),
        // Non-finite numbers have no JSON form.
        FieldValue::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        FieldValue::Str(s) => Value::String(s.clone()),
        FieldValue::StrSet(set) => Value::Array(set.iter().cloned().map(Value::String).collect()),
    }
}
