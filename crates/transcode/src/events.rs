//! JSON parse events
//!
//! The classifier works on a flat stream of parse events rather than on a
//! tree. Object keys come through as [`JsonEvent::String`] events, as a pull
//! parser would report them.
//!
//! Numbers are reported as f64 whatever their JSON spelling: integers that
//! exceed f64's 53-bit mantissa lose precision here, and magnitudes beyond
//! f64's range become infinite (`1e400` is `inf`, `1e-400` is `0`).

use serde_json::Value;
use tagdex_core::ValueParseFailure;

/// One parse event
#[derive(Debug, Clone, PartialEq)]
pub enum JsonEvent<'a> {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Any number
    Number(f64),
    /// String value or object key
    String(&'a str),
    /// `[`
    ArrayStart,
    /// `]`
    ArrayEnd,
    /// `{`
    ObjectStart,
    /// `}`
    ObjectEnd,
}

impl JsonEvent<'_> {
    /// Event name for error reports
    pub fn name(&self) -> &'static str {
        match self {
            JsonEvent::Null => "null",
            JsonEvent::Bool(_) => "boolean",
            JsonEvent::Number(_) => "number",
            JsonEvent::String(_) => "string",
            JsonEvent::ArrayStart => "array start",
            JsonEvent::ArrayEnd => "array end",
            JsonEvent::ObjectStart => "object start",
            JsonEvent::ObjectEnd => "object end",
        }
    }
}

/// Parse `text` as a single JSON value
///
/// Trailing non-whitespace after the value is rejected.
pub fn parse(text: &str) -> Result<Value, ValueParseFailure> {
    serde_json::from_str(text).map_err(|e| ValueParseFailure::Json(e.to_string()))
}

/// Flatten a parsed value into its event stream, depth first
///
/// # Example
///
/// ```
/// use tagdex_transcode::events::{events, JsonEvent};
///
/// let value = serde_json::json!(["one", "two"]);
/// let stream = events(&value).unwrap();
/// assert_eq!(
///     stream,
///     vec![
///         JsonEvent::ArrayStart,
///         JsonEvent::String("one"),
///         JsonEvent::String("two"),
///         JsonEvent::ArrayEnd,
///     ]
/// );
/// ```
pub fn events(value: &Value) -> Result<Vec<JsonEvent<'_>>, ValueParseFailure> {
    let mut out = Vec::new();
    push_events(value, &mut out)?;
    Ok(out)
}

/// Coerce a JSON number to f64 from its source text
fn number_to_f64(n: &serde_json::Number) -> Result<f64, ValueParseFailure> {
    let text = n.to_string();
    text.parse::<f64>()
        .map_err(|_| ValueParseFailure::Json(format!("number {text} is not representable")))
}

fn push_events<'a>(
    value: &'a Value,
    out: &mut Vec<JsonEvent<'a>>,
) -> Result<(), ValueParseFailure> {
    match value {
        Value::Null => out.push(JsonEvent::Null),
        Value::Bool(b) => out.push(JsonEvent::Bool(*b)),
        Value::Number(n) => out.push(JsonEvent::Number(number_to_f64(n)?)),
        Value::String(s) => out.push(JsonEvent::String(s)),
        Value::Array(items) => {
            out.push(JsonEvent::ArrayStart);
            for item in items {
                push_events(item, out)?;
            }
            out.push(JsonEvent::ArrayEnd);
        }
        Value::Object(map) => {
            out.push(JsonEvent::ObjectStart);
            for (key, item) in map {
                out.push(JsonEvent::String(key));
                push_events(item, out)?;
            }
            out.push(JsonEvent::ObjectEnd);
        }
    }
    Ok(())
}
