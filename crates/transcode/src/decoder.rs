//! Escaped hex value decoder
//!
//! The store keeps every tag value as a binary blob of UTF-8 JSON text. In
//! the composite literal that blob is rendered as a quoted, escaped hex
//! string:
//!
//! ```text
//! \"\\\\x225468652070617468206f662061206e616d6573706163652e22\"
//! ```
//!
//! which decodes to `"The path of a namespace."`. The framing is fixed: a
//! 7-character prefix and a 2-character suffix around the hex run.
//!
//! `\uXXXX` escapes inside the recovered JSON are not touched here; the JSON
//! reader resolves them.

use tagdex_core::{DecodeFailure, Result, TranscodeError};

/// Escaped quote plus escaped `\x` that opens a hex blob
pub const HEX_PREFIX: &str = r#"\"\\\\x"#;

/// Escaped quote that closes a hex blob
pub const HEX_SUFFIX: &str = r#"\""#;

/// Decode a value token into the JSON text originally stored
///
/// # Errors
///
/// Returns [`TranscodeError::Decode`] if the framing is missing, the hex run
/// is invalid, or the bytes are not UTF-8.
///
/// # Example
///
/// ```
/// use tagdex_transcode::decoder::decode_value;
///
/// let json = decode_value(r#"\"\\\\x2268692122\""#).unwrap();
/// assert_eq!(json, "\"hi!\"");
/// ```
pub fn decode_value(token: &str) -> Result<String> {
    unwrap_hex(token).map_err(|reason| TranscodeError::Decode {
        token: token.to_string(),
        reason,
    })
}

fn unwrap_hex(token: &str) -> std::result::Result<String, DecodeFailure> {
    let digits = token
        .strip_prefix(HEX_PREFIX)
        .and_then(|rest| rest.strip_suffix(HEX_SUFFIX))
        .ok_or(DecodeFailure::Framing)?;
    let bytes = hex::decode(digits)?;
    Ok(String::from_utf8(bytes)?)
}

/// Render JSON text the way the export does (inverse of [`decode_value`])
pub fn encode_value(json: &str) -> String {
    let digits = hex::encode(json.as_bytes());
    let mut token = String::with_capacity(HEX_PREFIX.len() + digits.len() + HEX_SUFFIX.len());
    token.push_str(HEX_PREFIX);
    token.push_str(&digits);
    token.push_str(HEX_SUFFIX);
    token
}
