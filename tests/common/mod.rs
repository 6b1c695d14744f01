//! Spreadsheet fixtures shared by the integration tests.

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SHEET: &str = "Variabili";

pub const HEADER: [&str; 6] = [
    "DescrizioneRadice",
    "DescrizioneEstensione",
    "DataType",
    "ObjectType",
    "Index",
    "New Page",
];

/// One data row of the variables sheet; `None` leaves the cell empty
#[derive(Clone, Debug, Default)]
pub struct SheetRow {
    pub root: Option<String>,
    pub extension: Option<String>,
    pub data_type: Option<String>,
    pub object_type: Option<String>,
    pub index: Option<f64>,
    pub page: Option<String>,
}

impl SheetRow {
    pub fn dynamic(root: &str, page: &str) -> Self {
        Self {
            root: Some(root.to_string()),
            extension: Some("DynamicInterference".to_string()),
            data_type: Some("BOOL".to_string()),
            page: Some(page.to_string()),
            ..Default::default()
        }
    }

    pub fn marker(root: &str, label: &str, index: f64) -> Self {
        Self {
            root: Some(root.to_string()),
            extension: Some(label.to_string()),
            data_type: Some("BOOL".to_string()),
            object_type: Some("DB_Motion".to_string()),
            index: Some(index),
            ..Default::default()
        }
    }

    fn text_cells(&self) -> [Option<&str>; 6] {
        [
            self.root.as_deref(),
            self.extension.as_deref(),
            self.data_type.as_deref(),
            self.object_type.as_deref(),
            None,
            self.page.as_deref(),
        ]
    }
}

/// Write an xlsx workbook with one sheet holding `header` and `rows`
pub fn write_workbook(path: &Path, sheet: &str, header: &[&str], rows: &[SheetRow]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();

    for (col, name) in header.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name).unwrap();
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, value) in row.text_cells().iter().enumerate() {
            if let Some(value) = value {
                worksheet.write_string(r, col as u16, *value).unwrap();
            }
        }
        if let Some(index) = row.index {
            worksheet.write_number(r, 4, index).unwrap();
        }
    }

    workbook.save(path).unwrap();
}

/// A temporary directory holding `vars.xlsx` plus the two output paths
pub struct Fixture {
    pub dir: TempDir,
    pub excel: PathBuf,
    pub chart: PathBuf,
    pub summary: PathBuf,
}

impl Fixture {
    pub fn new(rows: &[SheetRow]) -> Self {
        Self::with_header(&HEADER, rows)
    }

    pub fn with_header(header: &[&str], rows: &[SheetRow]) -> Self {
        let dir = TempDir::new().unwrap();
        let excel = dir.path().join("vars.xlsx");
        write_workbook(&excel, SHEET, header, rows);
        Self {
            excel,
            chart: dir.path().join("chart_config.txt"),
            summary: dir.path().join("interferences_summary.txt"),
            dir,
        }
    }

    pub fn read_chart(&self) -> String {
        std::fs::read_to_string(&self.chart).unwrap()
    }

    pub fn read_summary(&self) -> String {
        std::fs::read_to_string(&self.summary).unwrap()
    }
}

/// The `MC_Wheel1_MC_Wheel2` pair with one first-ordinal zone per motor
pub fn wheel_pair_rows() -> Vec<SheetRow> {
    vec![
        SheetRow::dynamic("MC_Wheel1_MC_Wheel2", "Wheel1_01"),
        SheetRow::marker("MC_Wheel1", "StartNoInterference_Wheel2", 10.0),
        SheetRow::marker("MC_Wheel1", "EndNoInterference_Wheel2", 11.0),
        SheetRow::marker("MC_Wheel2", "StartNoInterference_Wheel1", 20.0),
        SheetRow::marker("MC_Wheel2", "EndNoInterference_Wheel1", 21.0),
    ]
}
