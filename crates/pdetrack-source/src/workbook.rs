//! Workbook reading through calamine.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::{NaiveDate, NaiveDateTime};
use pdetrack_core::{CellValue, SourceRow};
use tracing::{debug, info};

use crate::{columns, SheetSelector, SourceError};

/// Read the source table from a workbook file (xlsx, xlsm, xlsb, xls, ods)
pub fn read_workbook(path: &Path, sheet: &SheetSelector) -> Result<Vec<SourceRow>, SourceError> {
    if !path.is_file() {
        return Err(SourceError::Unavailable {
            path: path.to_path_buf(),
            message: "file not found".into(),
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| SourceError::Unavailable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    let sheet_name = resolve_sheet(&sheet_names, sheet)?;
    debug!(sheet = %sheet_name, available = sheet_names.len(), "selected sheet");

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| SourceError::Range {
            sheet: sheet_name.clone(),
            message: e.to_string(),
        })?;

    let rows = rows_from_range(&range)?;
    info!(sheet = %sheet_name, rows = rows.len(), "read source table");
    Ok(rows)
}

/// Pick the sheet name a selector points at
pub fn resolve_sheet(names: &[String], sheet: &SheetSelector) -> Result<String, SourceError> {
    match sheet {
        SheetSelector::Index(idx) => names.get(*idx).cloned().ok_or_else(|| {
            SourceError::MissingSheet(format!(
                "sheet #{} requested, workbook has {}",
                idx + 1,
                names.len()
            ))
        }),
        SheetSelector::Name(name) => names
            .iter()
            .find(|n| n.as_str() == name)
            .cloned()
            .ok_or_else(|| SourceError::MissingSheet(format!("no sheet named '{}'", name))),
    }
}

fn rows_from_range(range: &Range<Data>) -> Result<Vec<SourceRow>, SourceError> {
    let origin = range.start().map_or(0, |(row, _)| row as usize);
    let grid: Vec<Vec<CellValue>> = range
        .rows()
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();
    columns::rows_from_grid(&grid, origin)
}

/// Convert a calamine cell into a core cell value
pub fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(n) => CellValue::Number(*n),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map_or_else(|| CellValue::Number(dt.as_f64()), CellValue::DateTime),
        Data::DateTimeIso(s) => {
            parse_iso_datetime(s).map_or_else(|| CellValue::Text(s.clone()), CellValue::DateTime)
        }
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
