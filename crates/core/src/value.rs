//! Value types for tagdex
//!
//! This module defines:
//! - ClassifiedValue: primitive kind of a decoded tag value
//! - FieldKind: dynamic field suffixes understood by the index schema
//! - FieldValue: the scalar (or string set) stored under a dynamic field
//!
//! ## Field Naming Contract
//!
//! The search index schema matches dynamic fields by suffix, and copies
//! `_tag_raw_str` / `_tag_set_str` content into its full-text field. The
//! suffixes below are bit-exact and must never change.
//!
//! | Kind | Suffix | Value |
//! |------|--------|-------|
//! | Number | `_tag_number` | f64 |
//! | Bool | `_tag_bool` | bool |
//! | Null | `_tag_null` | always `false` |
//! | RawStr | `_tag_raw_str` | string |
//! | SetStr | `_tag_set_str` | list of strings |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive kind recovered from a tag's JSON text
///
/// `Opaque` stands for a JSON object payload, which the store uses for
/// binary tag values. It is indexable by presence only.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedValue {
    /// JSON `null`
    Null,
    /// JSON `true` / `false`
    Boolean(bool),
    /// Any JSON number, coerced to f64
    Number(f64),
    /// JSON string
    String(String),
    /// JSON array of strings
    SetOfStrings(Vec<String>),
    /// JSON object; carries no indexable scalar
    Opaque,
}

impl ClassifiedValue {
    /// Dynamic field kind this value is stored under, if any
    pub fn field_kind(&self) -> Option<FieldKind> {
        match self {
            ClassifiedValue::Null => Some(FieldKind::Null),
            ClassifiedValue::Boolean(_) => Some(FieldKind::Bool),
            ClassifiedValue::Number(_) => Some(FieldKind::Number),
            ClassifiedValue::String(_) => Some(FieldKind::RawStr),
            ClassifiedValue::SetOfStrings(_) => Some(FieldKind::SetStr),
            ClassifiedValue::Opaque => None,
        }
    }

    /// Convert into the `(field name, field value)` emitted for `path`
    ///
    /// Returns `None` for opaque values.
    ///
    /// # Example
    ///
    /// ```
    /// use tagdex_core::{ClassifiedValue, FieldValue};
    ///
    /// let (name, value) = ClassifiedValue::Null.into_field("foo/bar").unwrap();
    /// assert_eq!(name, "foo/bar_tag_null");
    /// assert_eq!(value, FieldValue::Bool(false));
    /// ```
    pub fn into_field(self, path: &str) -> Option<(String, FieldValue)> {
        let name = self.field_kind()?.field_name(path);
        let value = match self {
            // Existence marker only: the literal false, never true.
            ClassifiedValue::Null => FieldValue::Bool(false),
            ClassifiedValue::Boolean(b) => FieldValue::Bool(b),
            ClassifiedValue::Number(n) => FieldValue::Number(n),
            ClassifiedValue::String(s) => FieldValue::Str(s),
            ClassifiedValue::SetOfStrings(set) => FieldValue::StrSet(set),
            ClassifiedValue::Opaque => return None,
        };
        Some((name, value))
    }
}

/// Dynamic field kinds, discriminated by name suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    /// `<path>_tag_number`
    Number,
    /// `<path>_tag_bool`
    Bool,
    /// `<path>_tag_null`
    Null,
    /// `<path>_tag_raw_str`
    RawStr,
    /// `<path>_tag_set_str`
    SetStr,
}

impl FieldKind {
    /// All kinds, in suffix-table order
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Number,
        FieldKind::Bool,
        FieldKind::Null,
        FieldKind::RawStr,
        FieldKind::SetStr,
    ];

    /// Field name suffix for this kind
    pub const fn suffix(&self) -> &'static str {
        match self {
            FieldKind::Number => "_tag_number",
            FieldKind::Bool => "_tag_bool",
            FieldKind::Null => "_tag_null",
            FieldKind::RawStr => "_tag_raw_str",
            FieldKind::SetStr => "_tag_set_str",
        }
    }

    /// Build the dynamic field name for `path`
    pub fn field_name(&self, path: &str) -> String {
        let suffix = self.suffix();
        let mut name = String::with_capacity(path.len() + suffix.len());
        name.push_str(path);
        name.push_str(suffix);
        name
    }

    /// Split a dynamic field name back into its path and kind
    ///
    /// # Example
    ///
    /// ```
    /// use tagdex_core::FieldKind;
    ///
    /// assert_eq!(
    ///     FieldKind::parse_field_name("foo/bar_tag_set_str"),
    ///     Some(("foo/bar", FieldKind::SetStr))
    /// );
    /// assert_eq!(FieldKind::parse_field_name("paths"), None);
    /// ```
    pub fn parse_field_name(name: &str) -> Option<(&str, FieldKind)> {
        FieldKind::ALL.iter().find_map(|kind| {
            name.strip_suffix(kind.suffix())
                .filter(|path| !path.is_empty())
                .map(|path| (path, *kind))
        })
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Value stored under a dynamic field
///
/// Serializes untagged: a JSON bool, number, string, or array of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// `_tag_bool` and `_tag_null`
    Bool(bool),
    /// `_tag_number`
    Number(f64),
    /// `_tag_raw_str`
    Str(String),
    /// `_tag_set_str`
    StrSet(Vec<String>),
}

impl FieldValue {
    /// Boolean content, if this is a bool field
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric content, if this is a number field
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String content, if this is a raw string field
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// String set content, if this is a set field
    pub fn as_str_set(&self) -> Option<&[String]> {
        match self {
            FieldValue::StrSet(set) => Some(set),
            _ => None,
        }
    }
}
