//! CSV input: one record per row, id and description taken from named columns.

use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use log::warn;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Records read from an input file, plus how many rows were skipped.
#[derive(Debug, Default)]
pub struct ReadReport {
    pub records: Vec<Record>,
    pub skipped: usize,
}

pub fn read_records(path: &Path, id_column: &str, text_column: &str) -> AppResult<ReadReport> {
    let file = File::open(path)?;
    read_records_from(file, id_column, text_column)
}

/// Rows with an unparseable id (or an unreadable row) are skipped, never fatal.
pub fn read_records_from<R: Read>(
    reader: R,
    id_column: &str,
    text_column: &str,
) -> AppResult<ReadReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| AppError::InvalidInput(format!("missing column '{name}'")))
    };
    let id_idx = find(id_column)?;
    let text_idx = find(text_column)?;

    let mut report = ReadReport::default();

    for (line, row) in rdr.records().enumerate() {
        let row = match row {
            Ok(r) => r,
            Err(e) => {
                warn!("row {}: unreadable, skipped ({e})", line + 2);
                report.skipped += 1;
                continue;
            }
        };

        let raw_id = row.get(id_idx).unwrap_or("").trim();
        let Ok(id) = raw_id.parse::<i64>() else {
            warn!("row {}: invalid id '{raw_id}', skipped", line + 2);
            report.skipped += 1;
            continue;
        };

        let text = row.get(text_idx).unwrap_or("");
        report.records.push(Record::new(id, text));
    }

    Ok(report)
}
