//! Numeric coercion for spreadsheet cells.
//!
//! Percentage columns arrive as text (`"45%"`), as plain numbers, or not at
//! all. Every path ends in a finite `f64`: anything that cannot be read as a
//! number becomes `0.0`.

use crate::CellValue;

/// Coerce a cell to a percentage value.
///
/// Text is trimmed and a single trailing `%` is removed before parsing.
/// Empty cells, unparsable text, booleans, dates and non-finite numbers
/// all yield `0.0`.
pub fn coerce_pct(cell: &CellValue) -> f64 {
    let value = match cell {
        CellValue::Number(n) => *n,
        CellValue::Text(s) => parse_pct_text(s).unwrap_or(0.0),
        CellValue::Empty | CellValue::Bool(_) | CellValue::DateTime(_) => 0.0,
    };
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Coerce an optional cell, treating a missing cell like an empty one.
pub fn coerce_opt(cell: Option<&CellValue>) -> f64 {
    cell.map_or(0.0, coerce_pct)
}

/// Truncate a percentage toward zero.
///
/// Shared by the category mean and the per-item display value so both use
/// the same rule (`60.9 -> 60`, `-0.5 -> 0`).
pub fn truncate_pct(value: f64) -> i64 {
    if value.is_finite() {
        value.trunc() as i64
    } else {
        0
    }
}

fn parse_pct_text(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    if number.is_empty() {
        return None;
    }
    number.parse::<f64>().ok()
}
