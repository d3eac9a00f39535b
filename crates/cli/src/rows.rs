//! JSON-lines input and output.
//!
//! Each input line is one exported row as a JSON object keyed by the export
//! column names. A missing or `null` pairs column is an object with no tag
//! values. Blank lines are ignored.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde_json::Value;
use tagdex_core::{OutputRow, Row};
use tagdex_transcode::{to_document, InputConfig, OutputConfig};

/// Open `path` for reading, `-` meaning stdin.
pub fn open_input(path: &str) -> Result<Box<dyn BufRead>, String> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(Path::new(path))
        .map_err(|e| format!("Failed to open input '{}': {}", path, e))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Open `path` for writing, `-` meaning stdout.
pub fn open_output(path: &str) -> Result<Box<dyn Write>, String> {
    if path == "-" {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(Path::new(path))
        .map_err(|e| format!("Failed to create output '{}': {}", path, e))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Parse one input line into a row.
pub fn parse_row(line: &str, columns: &InputConfig) -> Result<Row, String> {
    let value: Value = serde_json::from_str(line).map_err(|e| format!("invalid JSON: {}", e))?;
    let object = value
        .as_object()
        .ok_or_else(|| "row is not a JSON object".to_string())?;

    let object_id = match object.get(&columns.object_id_column) {
        Some(Value::String(id)) => id.clone(),
        Some(_) => return Err(format!("'{}' is not a string", columns.object_id_column)),
        None => return Err(format!("missing '{}'", columns.object_id_column)),
    };
    match object.get(&columns.pairs_column) {
        Some(Value::String(literal)) => Ok(Row::new(object_id, literal.as_str())),
        Some(Value::Null) | None => Ok(Row::without_pairs(object_id)),
        Some(_) => Err(format!("'{}' is not a string", columns.pairs_column)),
    }
}

/// Read every row from `reader`.
pub fn read_rows<R: BufRead>(reader: R, columns: &InputConfig) -> Result<Vec<Row>, String> {
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
        if line.trim().is_empty() {
            continue;
        }
        let row = parse_row(&line, columns).map_err(|e| format!("line {}: {}", index + 1, e))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Write one search document per line.
pub fn write_documents<W: Write>(
    writer: &mut W,
    documents: &[OutputRow],
    layout: &OutputConfig,
) -> Result<(), String> {
    for row in documents {
        let doc = Value::Object(to_document(row, layout));
        serde_json::to_writer(&mut *writer, &doc)
            .map_err(|e| format!("Failed to write output: {}", e))?;
        writer
            .write_all(b"\n")
            .map_err(|e| format!("Failed to write output: {}", e))?;
    }
    writer
        .flush()
        .map_err(|e| format!("Failed to write output: {}", e))
}
