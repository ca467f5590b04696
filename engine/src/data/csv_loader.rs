use anyhow::anyhow;
use csv::{ReaderBuilder, WriterBuilder};
use shared::models::Row;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

use crate::data::columns;
use crate::error::EngineError;

/// One raw sheet record, keyed by trimmed header name. Cells stay untyped
/// strings until the normalizer takes over.
pub type RawRecord = HashMap<String, String>;

/// Reads a delimited-text sheet into raw records. Headers are trimmed; rows
/// shorter than the header are padded with blank cells rather than rejected
/// (absent data degrades, it never halts the pipeline).
pub fn load_raw_records(path: &Path, delimiter: u8) -> Result<Vec<RawRecord>, EngineError> {
    let file = File::open(path)
        .map_err(|e| anyhow!("Failed to open sheet '{}': {}", path.display(), e))?;
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let mut raw = RawRecord::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            raw.insert(header.clone(), record.get(i).unwrap_or("").to_string());
        }
        records.push(raw);
    }

    info!(path = %path.display(), rows = records.len(), "Loaded procurement sheet");
    Ok(records)
}

/// Writes the full row table back to delimited text, preserving the sheet's
/// column names plus the derived columns (persistence collaborator contract).
pub fn write_rows_csv(path: &Path, rows: &[Row], delimiter: u8) -> Result<(), EngineError> {
    let mut wtr = WriterBuilder::new().delimiter(delimiter).from_path(path)?;
    wtr.write_record(columns::output_header())?;
    for row in rows {
        wtr.write_record(columns::row_to_record(row))?;
    }
    wtr.flush()?;
    info!(path = %path.display(), rows = rows.len(), "Wrote detailed row table");
    Ok(())
}
