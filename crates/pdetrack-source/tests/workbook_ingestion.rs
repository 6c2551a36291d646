//! Integration tests for workbook ingestion
//!
//! Fixtures are authored with rust_xlsxwriter and read back through calamine.

use std::path::{Path, PathBuf};

use pdetrack_core::{build_report, CellValue, Category, Status};
use pdetrack_source::{read_file, SheetSelector, SourceError};
use pretty_assertions::assert_eq;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

const HEADER: [&str; 9] = [
    "Orientation",
    "Libellé de l'objectif",
    "Valeur(référence)",
    "Cible - valeur numérique",
    "Cible en %",
    "Résultat",
    "Date du résultat",
    "Échéance",
    "Pourcentage d'atteinte de la cible",
];

struct Objective<'a> {
    category: &'a str,
    label: &'a str,
    reference: f64,
    result: &'a str,
    achievement: &'a str,
}

/// Write a two-sheet workbook: a cover sheet, then the tracking table with a
/// title row above the header.
fn write_workbook(dir: &Path, objectives: &[Objective<'_>]) -> PathBuf {
    let path = dir.join("suivi.xlsx");
    let mut workbook = Workbook::new();

    let cover = workbook.add_worksheet();
    cover.set_name("Sommaire").unwrap();
    cover.write_string(0, 0, "Page couverture").unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Suivi").unwrap();
    sheet.write_string(0, 0, "Suivi des objectifs du PDE").unwrap();
    for (col, name) in HEADER.iter().enumerate() {
        sheet.write_string(1, col as u16, *name).unwrap();
    }

    let mut row = 2;
    for objective in objectives {
        sheet.write_string(row, 0, objective.category).unwrap();
        sheet.write_string(row, 1, objective.label).unwrap();
        sheet.write_number(row, 2, objective.reference).unwrap();
        sheet.write_string(row, 3, "100").unwrap();
        sheet.write_string(row, 4, "100%").unwrap();
        if !objective.result.is_empty() {
            sheet.write_string(row, 5, objective.result).unwrap();
        }
        sheet.write_string(row, 6, "2025-12-01").unwrap();
        sheet.write_string(row, 7, "2034").unwrap();
        sheet.write_string(row, 8, objective.achievement).unwrap();
        row += 1;
    }

    workbook.save(&path).unwrap();
    path
}

fn label(category: Category) -> &'static str {
    category.source_label()
}

#[test]
fn reads_second_sheet_below_title_row() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(
        dir.path(),
        &[
            Objective {
                category: label(Category::WaterQuality),
                label: "Réduire les surverses",
                reference: 12.0,
                result: "8",
                achievement: "90%",
            },
            Objective {
                category: label(Category::WaterQuality),
                label: "Suivre 20 stations",
                reference: 4.5,
                result: "10 stations",
                achievement: "50%",
            },
            Objective {
                category: label(Category::LakeEutrophication),
                label: "Plans de lacs",
                reference: 0.0,
                result: "",
                achievement: "x",
            },
        ],
    );

    let rows = read_file(&path, &SheetSelector::default()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].row, 3);
    assert_eq!(rows[0].label, CellValue::from("Réduire les surverses"));
    assert_eq!(rows[0].reference.display_text(), "12");
    assert_eq!(rows[1].reference.display_text(), "4.5");
    assert_eq!(rows[1].result, CellValue::from("10 stations"));
    assert_eq!(rows[2].result, CellValue::Empty);

    let report = build_report(&rows);
    let water = report.category_page(Category::WaterQuality).unwrap();
    assert_eq!(water.aggregate.mean_pct, 70);
    assert_eq!(water.aggregate.status, Status::NeedsEffort);
    assert_eq!(water.items.len(), 2);

    let lakes = report.category_page(Category::LakeEutrophication).unwrap();
    assert_eq!(lakes.aggregate.mean_pct, 0);
    assert_eq!(lakes.aggregate.status, Status::HighPriority);
    assert_eq!(lakes.items.len(), 1);
}

#[test]
fn sheet_can_be_selected_by_name() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(
        dir.path(),
        &[Objective {
            category: label(Category::Wetlands),
            label: "Cartographier les milieux humides",
            reference: 1.0,
            result: "3",
            achievement: "75%",
        }],
    );

    let rows = read_file(&path, &SheetSelector::Name("Suivi".into())).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].achievement, CellValue::from("75%"));
}

#[test]
fn cover_sheet_has_no_header() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(dir.path(), &[]);

    let err = read_file(&path, &SheetSelector::Index(0)).unwrap_err();
    assert!(matches!(err, SourceError::MissingColumn(name) if name == "Orientation"));
}

#[test]
fn missing_sheet_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(dir.path(), &[]);

    let err = read_file(&path, &SheetSelector::Index(4)).unwrap_err();
    assert!(matches!(err, SourceError::MissingSheet(_)));
}

#[test]
fn header_only_table_yields_no_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(dir.path(), &[]);

    let rows = read_file(&path, &SheetSelector::default()).unwrap();
    assert!(rows.is_empty());

    let report = build_report(&rows);
    assert_eq!(report.pages().len(), 6);
}
