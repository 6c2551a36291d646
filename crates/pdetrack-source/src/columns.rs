//! Header detection and column mapping.
//!
//! Works on a grid of already-converted cells so the mapping rules are
//! independent of the workbook format.

use pdetrack_core::{CellValue, SourceRow};
use tracing::debug;

use crate::SourceError;

/// `Orientation` column header
pub const CATEGORY: &str = "Orientation";
/// Objective description column header
pub const LABEL: &str = "Libellé de l'objectif";
/// Reference value column header
pub const REFERENCE: &str = "Valeur(référence)";
/// Target value column header
pub const TARGET: &str = "Cible - valeur numérique";
/// Target percentage column header
pub const TARGET_PCT: &str = "Cible en %";
/// Latest result column header
pub const RESULT: &str = "Résultat";
/// Result date column header
pub const RESULT_DATE: &str = "Date du résultat";
/// Deadline column header
pub const DEADLINE: &str = "Échéance";
/// Achievement percentage column header
pub const ACHIEVEMENT: &str = "Pourcentage d'atteinte de la cible";

/// How many leading rows may precede the header row
pub const HEADER_SCAN_ROWS: usize = 5;

/// Column positions of one source table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    pub category: usize,
    pub label: usize,
    pub achievement: usize,
    pub reference: Option<usize>,
    pub target: Option<usize>,
    pub target_pct: Option<usize>,
    pub result: Option<usize>,
    pub result_date: Option<usize>,
    pub deadline: Option<usize>,
}

impl ColumnMap {
    /// Map header names to positions.
    ///
    /// `Orientation`, the objective label and the achievement percentage are
    /// required; the other columns are read as empty when absent.
    pub fn from_header(header: &[CellValue]) -> Result<Self, SourceError> {
        let find = |name: &str| {
            header
                .iter()
                .position(|cell| cell.display_text().trim() == name)
        };
        let require =
            |name: &str| find(name).ok_or_else(|| SourceError::MissingColumn(name.to_string()));

        Ok(Self {
            category: require(CATEGORY)?,
            label: require(LABEL)?,
            achievement: require(ACHIEVEMENT)?,
            reference: find(REFERENCE),
            target: find(TARGET),
            target_pct: find(TARGET_PCT),
            result: find(RESULT),
            result_date: find(RESULT_DATE),
            deadline: find(DEADLINE),
        })
    }

    /// Extract one data row
    pub fn extract(&self, row: usize, cells: &[CellValue]) -> SourceRow {
        let cell = |idx: usize| cells.get(idx).cloned().unwrap_or_default();
        let opt = |idx: Option<usize>| idx.map(cell).unwrap_or_default();

        SourceRow {
            row,
            category: cell(self.category),
            label: cell(self.label),
            reference: opt(self.reference),
            target: opt(self.target),
            target_pct: opt(self.target_pct),
            result: opt(self.result),
            result_date: opt(self.result_date),
            deadline: opt(self.deadline),
            achievement: cell(self.achievement),
        }
    }
}

/// Index of the header row: the first row, among the leading ones, that
/// carries the `Orientation` header.
pub fn locate_header(grid: &[Vec<CellValue>]) -> Option<usize> {
    grid.iter()
        .take(HEADER_SCAN_ROWS)
        .position(|row| row.iter().any(|cell| cell.display_text().trim() == CATEGORY))
}

/// Turn a sheet grid into source rows.
///
/// `origin` is the 0-based sheet row of `grid[0]`, used to keep reported row
/// numbers aligned with what a spreadsheet user sees. Rows above the header
/// and fully blank rows are skipped.
pub fn rows_from_grid(grid: &[Vec<CellValue>], origin: usize) -> Result<Vec<SourceRow>, SourceError> {
    let header_idx =
        locate_header(grid).ok_or_else(|| SourceError::MissingColumn(CATEGORY.to_string()))?;
    let columns = ColumnMap::from_header(&grid[header_idx])?;
    debug!(header_row = origin + header_idx + 1, ?columns, "located header");

    let rows: Vec<SourceRow> = grid
        .iter()
        .enumerate()
        .skip(header_idx + 1)
        .map(|(idx, cells)| columns.extract(origin + idx + 1, cells))
        .filter(|row| !row.is_blank())
        .collect();

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text_row(cells: &[&str]) -> Vec<CellValue> {
        cells
            .iter()
            .map(|s| {
                if s.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::from(*s)
                }
            })
            .collect()
    }

    fn header() -> Vec<CellValue> {
        text_row(&[
            CATEGORY,
            "Numéro d'objectif",
            LABEL,
            REFERENCE,
            TARGET,
            TARGET_PCT,
            RESULT,
            RESULT_DATE,
            DEADLINE,
            ACHIEVEMENT,
        ])
    }

    #[test]
    fn header_in_first_row() {
        let grid = vec![header()];
        assert_eq!(locate_header(&grid), Some(0));
    }

    #[test]
    fn header_after_title_row() {
        let grid = vec![text_row(&["Suivi des objectifs 2025-2026"]), header()];
        assert_eq!(locate_header(&grid), Some(1));
    }

    #[test]
    fn header_too_far_down_is_not_found() {
        let mut grid = vec![text_row(&["titre"]); HEADER_SCAN_ROWS];
        grid.push(header());
        assert_eq!(locate_header(&grid), None);
        assert!(matches!(
            rows_from_grid(&grid, 0),
            Err(SourceError::MissingColumn(name)) if name == CATEGORY
        ));
    }

    #[test]
    fn columns_are_mapped_by_name() {
        let columns = ColumnMap::from_header(&header()).unwrap();
        assert_eq!(columns.category, 0);
        assert_eq!(columns.label, 2);
        assert_eq!(columns.achievement, 9);
        assert_eq!(columns.deadline, Some(8));
    }

    #[test]
    fn header_names_are_trimmed() {
        let columns =
            ColumnMap::from_header(&text_row(&[" Orientation ", LABEL, "Pourcentage d'atteinte de la cible "]))
                .unwrap();
        assert_eq!(columns.category, 0);
        assert_eq!(columns.achievement, 2);
        assert_eq!(columns.reference, None);
    }

    #[test]
    fn missing_required_column() {
        let err = ColumnMap::from_header(&text_row(&[CATEGORY, LABEL])).unwrap_err();
        assert!(matches!(err, SourceError::MissingColumn(name) if name == ACHIEVEMENT));
    }

    #[test]
    fn rows_are_extracted_with_sheet_numbers() {
        let grid = vec![
            text_row(&["Suivi"]),
            header(),
            text_row(&[
                "1 - Éviter la dégradation de la qualité de l'eau",
                "1.1",
                "Réduire les surverses",
                "12",
                "0",
                "100%",
                "5",
                "2025-10-01",
                "2030",
                "58%",
            ]),
            text_row(&["", "", "", "", "", "", "", "", "", ""]),
            vec![CellValue::from("2 - Ralentir l'eutrophisation des lacs")],
        ];

        let rows = rows_from_grid(&grid, 0).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].row, 3);
        assert_eq!(rows[0].label, CellValue::from("Réduire les surverses"));
        assert_eq!(rows[0].achievement, CellValue::from("58%"));
        assert_eq!(rows[0].deadline, CellValue::from("2030"));

        // short rows read missing cells as empty
        assert_eq!(rows[1].row, 5);
        assert_eq!(rows[1].label, CellValue::Empty);
        assert_eq!(rows[1].achievement, CellValue::Empty);
    }

    #[test]
    fn origin_offsets_row_numbers() {
        let grid = vec![header(), text_row(&["x", "", "obj", "", "", "", "", "", "", "1%"])];
        let rows = rows_from_grid(&grid, 2).unwrap();
        assert_eq!(rows[0].row, 4);
    }
}
