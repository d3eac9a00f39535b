//! Row transcoder
//!
//! Runs the pipeline once per exported row:
//!
//! ```text
//! composite literal --split--> pairs --decode--> JSON text --classify--> fields
//! ```
//!
//! The storage-specific steps (splitting and hex unwrapping) sit behind
//! [`PairDecoder`], so the classifier never sees the relational encoding.
//! Nothing is shared between rows and a failing row yields no output at all.

use crate::classifier::classify;
use crate::decoder::decode_value;
use crate::splitter::split_pairs;
use tagdex_core::{DecodedPair, OutputRow, Result, Row, TranscodeError};
use tracing::{debug, error};

/// Turns a raw encoded pair aggregate into decoded (path, JSON text) pairs
pub trait PairDecoder: Send + Sync {
    /// Decode every pair in `raw`
    ///
    /// Pairs without a value are omitted.
    fn decode(&self, raw: &str) -> Result<Vec<DecodedPair>>;
}

/// Decoder for the PostgreSQL array-of-composite export with hex-escaped
/// binary values
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeHexDecoder;

impl PairDecoder for CompositeHexDecoder {
    fn decode(&self, raw: &str) -> Result<Vec<DecodedPair>> {
        split_pairs(raw)?
            .into_iter()
            .map(|pair| {
                let json = decode_value(&pair.raw_value)?;
                Ok(DecodedPair {
                    path: pair.path,
                    original: pair.raw_value,
                    json,
                })
            })
            .collect()
    }
}

/// Single-row transcoder
///
/// Holds no mutable state; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Transcoder<D = CompositeHexDecoder> {
    decoder: D,
}

impl Transcoder<CompositeHexDecoder> {
    /// Transcoder for the standard composite/hex export format
    pub fn new() -> Self {
        Transcoder {
            decoder: CompositeHexDecoder,
        }
    }
}

impl<D: PairDecoder> Transcoder<D> {
    /// Transcoder over a custom pair decoder
    pub fn with_decoder(decoder: D) -> Self {
        Transcoder { decoder }
    }

    /// The pair decoder in use
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Transcode one exported row into its search document content
    ///
    /// # Errors
    ///
    /// Any split, decode, or classification failure aborts the row. The
    /// returned error is tagged with the row's object id.
    ///
    /// # Example
    ///
    /// ```
    /// use tagdex_core::{FieldValue, Row};
    /// use tagdex_transcode::decoder::encode_value;
    /// use tagdex_transcode::Transcoder;
    ///
    /// let literal = format!(r#"{{"(foo/bar,{})"}}"#, encode_value("true"));
    /// let out = Transcoder::new().transcode(Row::new("id-1", literal)).unwrap();
    /// assert_eq!(out.field("foo/bar_tag_bool"), Some(&FieldValue::Bool(true)));
    /// assert!(out.has_path("foo/bar"));
    /// ```
    pub fn transcode(&self, row: Row) -> Result<OutputRow> {
        let Row {
            object_id,
            path_value_pair,
        } = row;

        let mut out = OutputRow::new(object_id);
        let Some(raw) = path_value_pair else {
            debug!(object_id = %out.object_id, "row has no pair aggregate");
            return Ok(out);
        };
        debug!(object_id = %out.object_id, path_value_pair = %raw, "transcoding row");

        let pairs = match self.decoder.decode(&raw) {
            Ok(pairs) => pairs,
            Err(e) => {
                error!(object_id = %out.object_id, error = %e, "invalid value found in the database");
                return Err(e.in_row(out.object_id));
            }
        };

        for pair in pairs {
            debug!(object_id = %out.object_id, path = %pair.path, decoded = %pair.json, "decoded pair");
            if is_blank(&pair.json) {
                // Present tag, no readable value: path only.
                out.record_path(pair.path);
                continue;
            }
            let classified = match classify(&pair.json) {
                Ok(classified) => classified,
                Err(reason) => {
                    error!(
                        object_id = %out.object_id,
                        path = %pair.path,
                        original = %pair.original,
                        decoded = %pair.json,
                        %reason,
                        "invalid payload"
                    );
                    let err = TranscodeError::ValueParse {
                        path: pair.path,
                        original: pair.original,
                        decoded: pair.json,
                        reason,
                    };
                    return Err(err.in_row(out.object_id));
                }
            };

            if let Some((name, value)) = classified.into_field(&pair.path) {
                out.insert_field(name, value);
            }
            out.record_path(pair.path);
        }

        Ok(out)
    }
}

/// True when `text` holds nothing but JSON whitespace
fn is_blank(text: &str) -> bool {
    text.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
}
