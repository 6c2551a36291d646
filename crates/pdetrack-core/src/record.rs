//! Canonical form of one tracked objective.

use serde::{Deserialize, Serialize};

use crate::coerce::coerce_pct;
use crate::{Category, SourceRow};

/// One objective of the plan, normalized from a source row
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based row number in the source sheet
    pub row: usize,
    /// Category text exactly as found in the source
    pub category_label: String,
    /// Recognized category (`None` if the label matched none of the five)
    pub category: Option<Category>,
    /// Objective description
    pub label: String,
    /// Reference value (display text)
    pub reference_value: String,
    /// Target value (display text)
    pub target_value: String,
    /// Latest measured result (display text)
    pub result_value: String,
    /// Date of the latest result (display text)
    pub result_date: String,
    /// Objective deadline (display text)
    pub deadline: String,
    /// Achievement toward the target, always finite
    pub achievement_pct: f64,
    /// Target expressed as a percentage, always finite
    pub target_pct: f64,
}

impl Record {
    /// Normalize a source row.
    ///
    /// Percentage columns go through [`coerce_pct`]; every other column is
    /// kept as display text.
    pub fn from_row(row: &SourceRow) -> Self {
        let category_label = row.category.display_text();
        Self {
            row: row.row,
            category: Category::from_label(&category_label),
            category_label,
            label: row.label.display_text(),
            reference_value: row.reference.display_text(),
            target_value: row.target.display_text(),
            result_value: row.result.display_text(),
            result_date: row.result_date.display_text(),
            deadline: row.deadline.display_text(),
            achievement_pct: coerce_pct(&row.achievement),
            target_pct: coerce_pct(&row.target_pct),
        }
    }
}
