//! Composite literal splitter
//!
//! Turns the export's array-of-composite literal into ordered [`Pair`]s:
//!
//! ```text
//! {"(foo/bar,<token>)","(test/tag,<token>)"}
//! ```
//!
//! Each array element is double-quoted by the producing layer, with every
//! quote and backslash inside it already escaped, so the three-character
//! sequence `","` can only occur between elements. Inside an element the
//! path never contains a comma but the value token may, so only the first
//! comma separates the two.

use tagdex_core::{Pair, Result, TranscodeError};

/// Separator between quoted array elements
const ELEMENT_SEPARATOR: &str = "\",\"";

/// Split a composite literal into (path, raw value token) pairs
///
/// Elements carrying no value are dropped: `(,)` marks an object with no
/// tag values at all, and `(path,)` a tag present without a value. Both are
/// left out of the output entirely.
///
/// # Errors
///
/// Returns [`TranscodeError::MalformedPair`] when the literal lacks its
/// braces, or an element has no comma or an empty path with a value.
///
/// # Example
///
/// ```
/// use tagdex_transcode::splitter::split_pairs;
///
/// let pairs = split_pairs(r#"{"(foo/bar,true)","(x/y,a,b)"}"#).unwrap();
/// assert_eq!(pairs[0].path, "foo/bar");
/// assert_eq!(pairs[1].raw_value, "a,b");
/// ```
pub fn split_pairs(literal: &str) -> Result<Vec<Pair>> {
    let body = literal
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| TranscodeError::MalformedPair {
            element: literal.to_string(),
            reason: "array literal is not enclosed in braces",
        })?;

    if body.is_empty() {
        return Ok(Vec::new());
    }

    let mut pairs = Vec::new();
    for element in body.split(ELEMENT_SEPARATOR) {
        if let Some(pair) = split_element(element)? {
            pairs.push(pair);
        }
    }
    Ok(pairs)
}

/// Split one quoted composite element; `None` when it carries no value
fn split_element(element: &str) -> Result<Option<Pair>> {
    let unquoted = strip_delimiters(element, '"', '"');
    let inner = strip_delimiters(unquoted, '(', ')');

    let (path, raw_value) = inner
        .split_once(',')
        .ok_or_else(|| TranscodeError::MalformedPair {
            element: element.to_string(),
            reason: "no comma separating path and value",
        })?;

    if raw_value.is_empty() {
        return Ok(None);
    }
    if path.is_empty() {
        return Err(TranscodeError::MalformedPair {
            element: element.to_string(),
            reason: "value without a tag path",
        });
    }

    Ok(Some(Pair::new(path, raw_value)))
}

/// Remove a leading `open` and a trailing `close`, each only if present
fn strip_delimiters(s: &str, open: char, close: char) -> &str {
    let s = s.strip_prefix(open).unwrap_or(s);
    s.strip_suffix(close).unwrap_or(s)
}
