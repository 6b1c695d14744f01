//! Spreadsheet loading via calamine.
//!
//! The first row of the used range is the header. Only the six columns the
//! extractor needs are read; any other column is ignored.

use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xls, Xlsx};
use tracing::debug;

use crate::core::{Row, RowTable};
use crate::errors::{Error, Result};

pub const COL_ROOT: &str = "DescrizioneRadice";
pub const COL_EXTENSION: &str = "DescrizioneEstensione";
pub const COL_DATA_TYPE: &str = "DataType";
pub const COL_OBJECT_TYPE: &str = "ObjectType";
pub const COL_INDEX: &str = "Index";
pub const COL_PAGE: &str = "New Page";

pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_ROOT,
    COL_EXTENSION,
    COL_DATA_TYPE,
    COL_OBJECT_TYPE,
    COL_INDEX,
    COL_PAGE,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkbookFormat {
    Xlsx,
    Xls,
}

impl WorkbookFormat {
    /// Pick the reader from the file extension, ignoring case
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "xls" => Ok(Self::Xls),
            _ => Err(Error::format(path, format!(".{}", extension))),
        }
    }
}

/// Load the variables table from `sheet` of the workbook at `path`
pub fn load_table(path: &Path, sheet: &str) -> Result<RowTable> {
    if !path.is_file() {
        return Err(Error::not_found(path));
    }
    let format = WorkbookFormat::from_path(path)?;
    debug!(?format, path = %path.display(), "Opening workbook");

    let range = match format {
        WorkbookFormat::Xlsx => {
            let mut workbook: Xlsx<_> =
                open_workbook(path).map_err(|e| Error::sheet(path, sheet, e))?;
            workbook
                .worksheet_range(sheet)
                .map_err(|e| Error::sheet(path, sheet, e))?
        }
        WorkbookFormat::Xls => {
            let mut workbook: Xls<_> =
                open_workbook(path).map_err(|e| Error::sheet(path, sheet, e))?;
            workbook
                .worksheet_range(sheet)
                .map_err(|e| Error::sheet(path, sheet, e))?
        }
    };

    table_from_range(&range, sheet)
}

/// Column positions of the required fields in the header row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ColumnMap {
    root: usize,
    extension: usize,
    data_type: usize,
    object_type: usize,
    index: usize,
    page: usize,
}

impl ColumnMap {
    fn from_header(header: &[Data], sheet: &str) -> Result<Self> {
        let names: Vec<String> = header
            .iter()
            .map(|cell| cell_text(cell).map(|s| s.trim().to_string()).unwrap_or_default())
            .collect();
        // First occurrence wins for duplicated headers
        let position = |column: &str| names.iter().position(|name| name == column);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| position(**column).is_none())
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::Schema {
                sheet: sheet.to_string(),
                missing,
            });
        }

        let at = |column: &str| position(column).unwrap_or_default();
        Ok(Self {
            root: at(COL_ROOT),
            extension: at(COL_EXTENSION),
            data_type: at(COL_DATA_TYPE),
            object_type: at(COL_OBJECT_TYPE),
            index: at(COL_INDEX),
            page: at(COL_PAGE),
        })
    }

    fn read(&self, cells: &[Data]) -> Row {
        let text = |col: usize| cells.get(col).and_then(cell_text);
        Row {
            root: text(self.root),
            extension: text(self.extension),
            data_type: text(self.data_type),
            object_type: text(self.object_type),
            index: cells.get(self.index).and_then(cell_number),
            page: text(self.page),
        }
    }
}

/// Convert a worksheet range into rows, validating the header first
pub fn table_from_range(range: &Range<Data>, sheet: &str) -> Result<RowTable> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(Error::Schema {
            sheet: sheet.to_string(),
            missing: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        });
    };
    let columns = ColumnMap::from_header(header, sheet)?;

    let table: Vec<Row> = rows
        .filter(|cells| cells.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|cells| columns.read(cells))
        .collect();
    Ok(RowTable::new(table))
}

/// Text content of a cell; empty cells and error values are absent
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(v) => Some(format!("{v}")),
        Data::Int(v) => Some(format!("{v}")),
        Data::Bool(v) => Some(if *v { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => Some(dt.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
    }
}

/// Numeric content of an `Index` cell.
///
/// Strings count only when they parse as an integer.
fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(v) if v.is_finite() => Some(*v),
        Data::Int(v) => Some(*v as f64),
        Data::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
        Data::String(s) => s.trim().parse::<i64>().ok().map(|v| v as f64),
        _ => None,
    }
}
