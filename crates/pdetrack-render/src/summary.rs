//! Plain-text summary of a report.

use pdetrack_core::{RenderError, Renderer, Report};

/// Renders the five category aggregates as a text table
#[derive(Clone, Debug, Default)]
pub struct SummaryRenderer {
    /// List the row numbers of unmatched records, not only their count
    pub list_unmatched: bool,
}

impl SummaryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_unmatched(mut self) -> Self {
        self.list_unmatched = true;
        self
    }
}

impl Renderer for SummaryRenderer {
    type Output = String;

    fn render(&self, report: &Report) -> Result<String, RenderError> {
        let mut out = format!(
            "{:<3} {:<36} {:>9} {:>8}  {}\n",
            "#", "Orientation", "Objectifs", "Moyenne", "Statut"
        );
        for aggregate in report.aggregates() {
            out.push_str(&format!(
                "{:<3} {:<36} {:>9} {:>7}%  {}\n",
                aggregate.category.number(),
                aggregate.category.nav_label(),
                aggregate.item_count,
                aggregate.mean_pct,
                aggregate.status,
            ));
        }

        let unmatched = report.unmatched();
        out.push_str(&format!(
            "\n{} objectif(s) classé(s), {} ligne(s) non reconnue(s)\n",
            report.item_count(),
            unmatched.len()
        ));
        if self.list_unmatched {
            for record in unmatched {
                out.push_str(&format!(
                    "  ligne {}: orientation '{}'\n",
                    record.row, record.category_label
                ));
            }
        }
        Ok(out)
    }
}
