//! Row transcoder for the tag search index
//!
//! This crate provides:
//! - splitter: array-of-composite literal -> (path, value token) pairs
//! - decoder: escaped hex value token -> JSON text
//! - events / classifier: JSON text -> primitive kind, via a state machine
//! - Transcoder: the per-row pipeline behind the PairDecoder seam
//! - document: OutputRow -> flat search document
//! - batch: multi-row driver with a failure policy
//! - config: `tagdex.toml` loading
//!
//! # Usage
//!
//! ```
//! use tagdex_core::Row;
//! use tagdex_transcode::decoder::encode_value;
//! use tagdex_transcode::{to_document, OutputConfig, Transcoder};
//!
//! let literal = format!(r#"{{"(foo/bar,{})"}}"#, encode_value(r#""fubar""#));
//! let row = Transcoder::new().transcode(Row::new("id-1", literal)).unwrap();
//! let doc = to_document(&row, &OutputConfig::default());
//! assert_eq!(doc["foo/bar_tag_raw_str"], "fubar");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod classifier;
pub mod config;
pub mod decoder;
pub mod document;
pub mod events;
pub mod splitter;
pub mod transcoder;

// Re-export commonly used types
pub use batch::{transcode_batch, BatchReport, RowFailure};
pub use classifier::{classify, Classifier};
pub use config::{BatchConfig, ConfigError, ErrorPolicy, InputConfig, OutputConfig, TagdexConfig};
pub use document::to_document;
pub use transcoder::{CompositeHexDecoder, PairDecoder, Transcoder};
