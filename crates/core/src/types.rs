//! Row-level types
//!
//! A [`Row`] is what the bulk export hands us for one object. Splitting its
//! composite literal produces [`Pair`]s, and decoding each pair's value token
//! produces a [`DecodedPair`] ready for classification. Pairs only live for
//! the duration of one row's transcode.

use serde::{Deserialize, Serialize};

/// One exported database row
///
/// Field names match the export columns. `path_value_pair` is `None` when the
/// export produced SQL NULL for the aggregate, which is treated like an
/// object with no tag values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Object identifier (UUID text); opaque and never reinterpreted
    pub object_id: String,
    /// Array-of-composite literal `{"(path,value)",...}`
    #[serde(default)]
    pub path_value_pair: Option<String>,
}

impl Row {
    /// Create a row from an object id and its encoded pairs
    pub fn new(object_id: impl Into<String>, path_value_pair: impl Into<String>) -> Self {
        Row {
            object_id: object_id.into(),
            path_value_pair: Some(path_value_pair.into()),
        }
    }

    /// Create a row whose pair aggregate is NULL
    pub fn without_pairs(object_id: impl Into<String>) -> Self {
        Row {
            object_id: object_id.into(),
            path_value_pair: None,
        }
    }
}

/// A (tag path, raw value token) pair split out of a composite literal
///
/// The raw value is still in the storage layer's escaped hex rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// Tag path, e.g. `foo/bar`
    pub path: String,
    /// Escaped value token as it appeared in the literal
    pub raw_value: String,
}

impl Pair {
    /// Create a new pair
    pub fn new(path: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Pair {
            path: path.into(),
            raw_value: raw_value.into(),
        }
    }
}

/// A pair whose value has been unwrapped to plain JSON text
///
/// The original token is kept alongside so failures further down the
/// pipeline can report both forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPair {
    /// Tag path
    pub path: String,
    /// Value token before decoding
    pub original: String,
    /// Recovered JSON text
    pub json: String,
}
