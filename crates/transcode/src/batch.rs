//! Batch driver
//!
//! Runs the single-row transcoder over a batch of exported rows and applies
//! the configured failure policy. Rows are independent, so the parallel mode
//! simply maps them over the rayon pool; the report is identical either way
//! and keeps input order.

use crate::config::{BatchConfig, ErrorPolicy};
use crate::transcoder::{PairDecoder, Transcoder};
use rayon::prelude::*;
use tagdex_core::{OutputRow, Result, Row, TranscodeError};
use tracing::{info, info_span, warn};

/// A row skipped under [`ErrorPolicy::Skip`]
#[derive(Debug)]
pub struct RowFailure {
    /// Object id of the failing row
    pub object_id: String,
    /// Why it failed (tagged with the object id)
    pub error: TranscodeError,
}

/// Outcome of a batch
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Transcoded rows, in input order
    pub documents: Vec<OutputRow>,
    /// Rows that failed and were skipped, in input order
    pub failures: Vec<RowFailure>,
}

impl BatchReport {
    /// Total rows seen
    pub fn rows(&self) -> usize {
        self.documents.len() + self.failures.len()
    }
}

/// Transcode a batch of rows
///
/// # Errors
///
/// Under [`ErrorPolicy::Abort`], the first failing row (in input order) is
/// returned and no documents are produced. Under [`ErrorPolicy::Skip`] this
/// never fails.
pub fn transcode_batch<D: PairDecoder>(
    transcoder: &Transcoder<D>,
    rows: Vec<Row>,
    config: &BatchConfig,
) -> Result<BatchReport> {
    let span = info_span!(
        "transcode_batch",
        rows = rows.len(),
        parallel = config.parallel,
        on_error = %config.on_error,
    );
    let _guard = span.enter();

    let results: Vec<(String, Result<OutputRow>)> = if config.parallel {
        // Row events on worker threads stay inside the batch span.
        rows.into_par_iter()
            .map(|row| span.in_scope(|| run_one(transcoder, row)))
            .collect()
    } else {
        rows.into_iter().map(|row| run_one(transcoder, row)).collect()
    };

    let mut report = BatchReport::default();
    for (object_id, result) in results {
        match result {
            Ok(doc) => report.documents.push(doc),
            Err(error) => match config.on_error {
                ErrorPolicy::Abort => return Err(error),
                ErrorPolicy::Skip => {
                    warn!(object_id = %object_id, kind = error.kind(), %error, "skipping row");
                    report.failures.push(RowFailure { object_id, error });
                }
            },
        }
    }

    info!(
        documents = report.documents.len(),
        failures = report.failures.len(),
        "batch transcoded"
    );
    Ok(report)
}

fn run_one<D: PairDecoder>(transcoder: &Transcoder<D>, row: Row) -> (String, Result<OutputRow>) {
    let object_id = row.object_id.clone();
    (object_id, transcoder.transcode(row))
}
