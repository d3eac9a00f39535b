//! Error types for tagdex
//!
//! This module defines the error taxonomy of the transcode pipeline.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every variant is fatal to the row being transcoded. Nothing is retried
//! here; the caller decides whether to skip the row or abort the batch.

use std::string::FromUtf8Error;
use thiserror::Error;

/// Result type alias for transcode operations
pub type Result<T> = std::result::Result<T, TranscodeError>;

/// Why a value token could not be unwrapped into JSON text
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeFailure {
    /// Token is not wrapped in the escaped hex framing
    #[error("missing escaped hex framing")]
    Framing,

    /// Hex run contains a non-hex digit or has odd length
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Decoded bytes are not UTF-8
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Why decoded JSON text could not be classified
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueParseFailure {
    /// JSON reader rejected the text
    #[error("invalid JSON: {0}")]
    Json(String),

    /// Parse event not allowed in the classifier's current state
    #[error("unexpected {event} in {state} state")]
    UnexpectedEvent {
        /// Event name
        event: &'static str,
        /// Classifier state name
        state: &'static str,
    },

    /// Event stream ended before a complete value was seen
    #[error("incomplete value")]
    Incomplete,
}

/// Error types for the transcode pipeline
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// Composite element does not split into exactly two parts
    #[error("Malformed pair {element:?}: {reason}")]
    MalformedPair {
        /// Offending element (or whole literal) as found in the row
        element: String,
        /// What was wrong with it
        reason: &'static str,
    },

    /// Hex/binary unwrap of a value token failed
    #[error("Decode error for token {token:?}: {reason}")]
    Decode {
        /// Raw value token
        token: String,
        /// Underlying failure
        #[source]
        reason: DecodeFailure,
    },

    /// Recovered JSON text could not be classified
    #[error("Value parse error for {path}: {reason} (original: {original:?}, decoded: {decoded:?})")]
    ValueParse {
        /// Tag path of the pair
        path: String,
        /// Value token before decoding
        original: String,
        /// JSON text after decoding
        decoded: String,
        /// Underlying failure
        #[source]
        reason: ValueParseFailure,
    },

    /// Any of the above, tagged with the row it happened in
    #[error("Row {object_id}: {source}")]
    Row {
        /// Object id of the failing row
        object_id: String,
        /// Underlying error
        #[source]
        source: Box<TranscodeError>,
    },
}

impl TranscodeError {
    /// Attach the row's object id, unless already attached
    pub fn in_row(self, object_id: impl Into<String>) -> Self {
        match self {
            row @ TranscodeError::Row { .. } => row,
            other => TranscodeError::Row {
                object_id: object_id.into(),
                source: Box::new(other),
            },
        }
    }

    /// The error with any row tagging stripped
    pub fn root(&self) -> &TranscodeError {
        match self {
            TranscodeError::Row { source, .. } => source.root(),
            other => other,
        }
    }

    /// Object id the error is tagged with, if any
    pub fn object_id(&self) -> Option<&str> {
        match self {
            TranscodeError::Row { object_id, .. } => Some(object_id),
            _ => None,
        }
    }

    /// Short name of the error category, for logs and reports
    pub fn kind(&self) -> &'static str {
        match self.root() {
            TranscodeError::MalformedPair { .. } => "malformed_pair",
            TranscodeError::Decode { .. } => "decode",
            TranscodeError::ValueParse { .. } => "value_parse",
            TranscodeError::Row { .. } => "row",
        }
    }
}
