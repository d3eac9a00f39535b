//! Core types for tagdex
//!
//! This crate defines the foundational types shared by the transcoder:
//! - Row / Pair / DecodedPair: exported database row and its transient pieces
//! - ClassifiedValue: primitive kind recovered from a tag's JSON text
//! - FieldKind / FieldValue: dynamic search-field naming contract and values
//! - OutputRow: the search document produced for one object
//! - Error: error taxonomy for the transcode pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod output;
pub mod types;
pub mod value;

// Re-export commonly used types
pub use error::{DecodeFailure, Result, TranscodeError, ValueParseFailure};
pub use output::OutputRow;
pub use types::{DecodedPair, Pair, Row};
pub use value::{ClassifiedValue, FieldKind, FieldValue};
