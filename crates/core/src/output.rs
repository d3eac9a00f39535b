//! Output row for the search index
//!
//! An [`OutputRow`] replaces the exported row once transcoding succeeds. It
//! carries the untouched object id, the set of tag paths present on the
//! object (for `has` / `except` queries), and the typed dynamic fields.

use crate::value::FieldValue;
use std::collections::{BTreeMap, BTreeSet};

/// Search document content for one object
///
/// Paths and fields are kept in ordered collections so rendering is
/// deterministic; the index itself treats both as unordered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputRow {
    /// Object identifier, exactly as exported
    pub object_id: String,
    /// Tag paths present on the object
    pub paths: BTreeSet<String>,
    /// Dynamic field name -> value
    pub fields: BTreeMap<String, FieldValue>,
}

impl OutputRow {
    /// Create an empty output row for `object_id`
    pub fn new(object_id: impl Into<String>) -> Self {
        OutputRow {
            object_id: object_id.into(),
            paths: BTreeSet::new(),
            fields: BTreeMap::new(),
        }
    }

    /// Record that `path` is present on the object
    ///
    /// Returns false if the path was already recorded.
    pub fn record_path(&mut self, path: impl Into<String>) -> bool {
        self.paths.insert(path.into())
    }

    /// Set a dynamic field, replacing any previous value
    pub fn insert_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Look up a dynamic field by its full name
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Whether `path` was recorded
    pub fn has_path(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// True when the object carried no tag values at all
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.fields.is_empty()
    }
}
