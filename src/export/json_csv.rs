// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::schedule::Schedule;
use crate::ui::messages::info;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One schedule entry in long CSV form.
#[derive(Debug, Serialize)]
struct ScheduleRow<'a> {
    id: i64,
    key: &'a str,
    time: &'a str,
}

/// `{ "<id>": { "<key>": "HH:MM:SS", ... }, ... }`, pretty-printed.
pub fn to_json_string(results: &BTreeMap<i64, Schedule>) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Export JSON pretty-printed.
pub fn export_json(results: &BTreeMap<i64, Schedule>, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = to_json_string(results)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;

    notify_export_success("JSON", results.len(), path);
    Ok(())
}

fn write_rows<W: Write>(
    wtr: &mut csv::Writer<W>,
    results: &BTreeMap<i64, Schedule>,
) -> AppResult<()> {
    for (id, schedule) in results {
        for (key, time) in schedule.iter() {
            wtr.serialize(ScheduleRow { id: *id, key, time })?;
        }
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))
}

/// Long CSV (`id,key,time`) as a string.
pub fn to_csv_string(results: &BTreeMap<i64, Schedule>) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_rows(&mut wtr, results)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV buffer error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

/// Export CSV, one row per schedule entry (header included thanks to serde).
pub fn export_csv(results: &BTreeMap<i64, Schedule>, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    write_rows(&mut wtr, results)?;

    notify_export_success("CSV", results.len(), path);
    Ok(())
}
