//! tagdex - transcodes exported tag-value rows into search index documents
//!
//! Each object's tags leave the relational store as one row: the object id
//! plus an array-of-composite literal whose values are hex-escaped JSON.
//! tagdex reverses those encodings and emits the flat document the search
//! index schema expects, with one dynamic field per typed tag value.
//!
//! # Quick Start
//!
//! ```
//! use tagdex::{encode_value, to_document, OutputConfig, Row, Transcoder};
//!
//! let literal = format!(r#"{{"(foo/bar,{})"}}"#, encode_value("4.3"));
//! let out = Transcoder::new().transcode(Row::new("6600cb04", literal)).unwrap();
//!
//! let doc = to_document(&out, &OutputConfig::default());
//! assert_eq!(doc["foo/bar_tag_number"], 4.3);
//! assert_eq!(doc["paths"], serde_json::json!(["foo/bar"]));
//! ```
//!
//! # Architecture
//!
//! `tagdex-core` holds the data model and error taxonomy; `tagdex-transcode`
//! holds the pipeline, the batch driver and configuration. Both are
//! re-exported here.

pub use tagdex_core::*;
pub use tagdex_transcode::decoder::{decode_value, encode_value};
pub use tagdex_transcode::*;
