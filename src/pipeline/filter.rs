use crate::core::{Row, RowTable};
use crate::errors::{Error, Result};

pub const DYNAMIC_DATA_TYPE: &str = "BOOL";
pub const DYNAMIC_MARKER: &str = "DynamicInterference";

/// Whether a row is a boolean dynamic-interference signal
pub fn is_dynamic_row(row: &Row) -> bool {
    row.data_type.as_deref() == Some(DYNAMIC_DATA_TYPE)
        && row
            .extension()
            .is_some_and(|label| label.contains(DYNAMIC_MARKER))
}

/// Select the dynamic-interference rows, in table order.
///
/// A sheet without any is an error: there would be nothing to report.
pub fn filter_dynamic_rows(table: &RowTable) -> Result<Vec<&Row>> {
    let rows: Vec<&Row> = table.iter().filter(|row| is_dynamic_row(row)).collect();
    if rows.is_empty() {
        return Err(Error::EmptyResult);
    }
    Ok(rows)
}
