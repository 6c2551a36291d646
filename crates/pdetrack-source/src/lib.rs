//! # pdetrack-source
//!
//! Reads the follow-up workbook into [`SourceRow`]s.
//!
//! This crate provides:
//! - Workbook reading via calamine (xlsx, xlsm, xlsb, xls, ods)
//! - Header detection and column mapping by header name
//! - Sheet selection (second sheet by default)
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use pdetrack_source::{read_file, SheetSelector};
//!
//! let rows = read_file(Path::new("suivi-des-objectifs.xlsx"), &SheetSelector::default())?;
//! let report = pdetrack_core::build_report(&rows);
//! # Ok::<(), pdetrack_source::SourceError>(())
//! ```

pub mod columns;
pub mod workbook;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pdetrack_core::SourceRow;
use thiserror::Error;

/// Source reading error.
///
/// Every variant is fatal: the pipeline never runs on a partial table.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source unavailable: {}: {message}", .path.display())]
    Unavailable { path: PathBuf, message: String },

    #[error("Sheet not found: {0}")]
    MissingSheet(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Cannot read sheet '{sheet}': {message}")]
    Range { sheet: String, message: String },
}

/// Which sheet holds the source table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    /// 0-based sheet position
    Index(usize),
    /// Sheet name
    Name(String),
}

impl Default for SheetSelector {
    /// The tracking table lives on the second sheet
    fn default() -> Self {
        SheetSelector::Index(1)
    }
}

impl FromStr for SheetSelector {
    type Err = std::convert::Infallible;

    /// A 1-based number selects by position, anything else by name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Ok(SheetSelector::Index(n - 1)),
            _ => Ok(SheetSelector::Name(s.to_string())),
        }
    }
}

impl std::fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetSelector::Index(idx) => write!(f, "#{}", idx + 1),
            SheetSelector::Name(name) => write!(f, "'{}'", name),
        }
    }
}

/// Read the source rows of a workbook file
pub fn read_file(path: &Path, sheet: &SheetSelector) -> Result<Vec<SourceRow>, SourceError> {
    workbook::read_workbook(path, sheet)
}
