//! # pdetrack-core
//!
//! Core model and report pipeline for pdetrack.
//!
//! This crate provides:
//! - Source types: `CellValue`, `SourceRow`
//! - Domain types: `Category`, `Record`, `CategoryBucket`, `CategoryAggregate`, `Status`
//! - Page models: `PageId`, `PageModel`, `OverviewPage`, `CategoryPage`
//! - The `build_report` pipeline, the `Renderer` trait and error types
//!
//! ## Example
//!
//! ```rust
//! use pdetrack_core::{build_report, Category, PageId, SourceRow, Status};
//!
//! let rows = vec![
//!     SourceRow::new(3)
//!         .category("1 - Éviter la dégradation de la qualité de l'eau")
//!         .label("Réduire les apports en phosphore")
//!         .achievement("45%"),
//! ];
//!
//! let report = build_report(&rows);
//! assert_eq!(report.pages()[0].id(), PageId::Overview);
//!
//! let page = report.category_page(Category::WaterQuality).unwrap();
//! assert_eq!(page.aggregate.mean_pct, 45);
//! assert_eq!(page.aggregate.status, Status::NeedsEffort);
//! ```

pub mod aggregate;
pub mod category;
pub mod coerce;
pub mod page;
pub mod partition;
pub mod record;

pub use aggregate::{CategoryAggregate, Status};
pub use category::Category;
pub use coerce::{coerce_opt, coerce_pct, truncate_pct};
pub use page::{build_pages, CategoryPage, ItemView, OverviewPage, PageId, PageModel, Span};
pub use partition::{partition, CategoryBucket, Partition};
pub use record::Record;

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Source cells
// ============================================================================

/// Raw value of one spreadsheet cell
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// True for empty cells and whitespace-only text
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text shown for opaque (non-numeric) fields
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                // integers without decimals
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Bool(true) => "VRAI".into(),
            CellValue::Bool(false) => "FAUX".into(),
            CellValue::DateTime(dt) => {
                if dt.time() == NaiveTime::MIN {
                    dt.format("%Y-%m-%d").to_string()
                } else {
                    dt.format("%Y-%m-%d %H:%M").to_string()
                }
            }
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_text())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

// ============================================================================
// Source rows
// ============================================================================

/// One data row of the source table, with columns already located
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRow {
    /// 1-based row number in the sheet
    pub row: usize,
    pub category: CellValue,
    pub label: CellValue,
    pub reference: CellValue,
    pub target: CellValue,
    pub target_pct: CellValue,
    pub result: CellValue,
    pub result_date: CellValue,
    pub deadline: CellValue,
    pub achievement: CellValue,
}

impl SourceRow {
    /// Create an empty row at the given sheet row number
    pub fn new(row: usize) -> Self {
        Self {
            row,
            ..Self::default()
        }
    }

    pub fn category(mut self, value: impl Into<CellValue>) -> Self {
        self.category = value.into();
        self
    }

    pub fn label(mut self, value: impl Into<CellValue>) -> Self {
        self.label = value.into();
        self
    }

    pub fn reference(mut self, value: impl Into<CellValue>) -> Self {
        self.reference = value.into();
        self
    }

    pub fn target(mut self, value: impl Into<CellValue>) -> Self {
        self.target = value.into();
        self
    }

    pub fn target_pct(mut self, value: impl Into<CellValue>) -> Self {
        self.target_pct = value.into();
        self
    }

    pub fn result(mut self, value: impl Into<CellValue>) -> Self {
        self.result = value.into();
        self
    }

    pub fn result_date(mut self, value: impl Into<CellValue>) -> Self {
        self.result_date = value.into();
        self
    }

    pub fn deadline(mut self, value: impl Into<CellValue>) -> Self {
        self.deadline = value.into();
        self
    }

    pub fn achievement(mut self, value: impl Into<CellValue>) -> Self {
        self.achievement = value.into();
        self
    }

    /// True when every column is empty
    pub fn is_blank(&self) -> bool {
        [
            &self.category,
            &self.label,
            &self.reference,
            &self.target,
            &self.target_pct,
            &self.result,
            &self.result_date,
            &self.deadline,
            &self.achievement,
        ]
        .iter()
        .all(|cell| cell.is_empty())
    }
}

// ============================================================================
// Report
// ============================================================================

/// A source row left out of every category
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedRecord {
    pub row: usize,
    pub category_label: String,
}

/// Output of the pipeline: the page models plus what was left out
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pages: Vec<PageModel>,
    unmatched: Vec<UnmatchedRecord>,
}

impl Report {
    /// Page models in navigation order (overview first)
    pub fn pages(&self) -> &[PageModel] {
        &self.pages
    }

    /// Records whose category matched none of the five
    pub fn unmatched(&self) -> &[UnmatchedRecord] {
        &self.unmatched
    }

    pub fn page(&self, id: PageId) -> Option<&PageModel> {
        self.pages.iter().find(|p| p.id() == id)
    }

    pub fn category_page(&self, category: Category) -> Option<&CategoryPage> {
        self.page(PageId::Category(category))
            .and_then(PageModel::as_category)
    }

    pub fn category_pages(&self) -> impl Iterator<Item = &CategoryPage> {
        self.pages.iter().filter_map(PageModel::as_category)
    }

    /// Aggregates of the five categories, in display order
    pub fn aggregates(&self) -> impl Iterator<Item = &CategoryAggregate> {
        self.category_pages().map(|p| &p.aggregate)
    }

    /// Number of records that made it into a category
    pub fn item_count(&self) -> usize {
        self.category_pages().map(|p| p.items.len()).sum()
    }
}

/// Run the pipeline over source rows.
///
/// Rows are normalized into records, partitioned by category, aggregated and
/// turned into page models. The result depends on nothing but `rows`.
pub fn build_report(rows: &[SourceRow]) -> Report {
    let records = rows.iter().map(Record::from_row);
    let partition = partition(records);
    let pages = build_pages(&partition);
    let unmatched = partition
        .unmatched
        .into_iter()
        .map(|r| UnmatchedRecord {
            row: r.row,
            category_label: r.category_label,
        })
        .collect();

    Report { pages, unmatched }
}

// ============================================================================
// Traits
// ============================================================================

/// Output rendering
pub trait Renderer {
    type Output;

    /// Render a report to the output format
    fn render(&self, report: &Report) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================
