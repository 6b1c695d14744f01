pub mod tsv;
pub mod workbook;

pub use tsv::{
    render_chart_config, render_summary, write_chart_config, write_summary, CHART_HEADER,
    SUMMARY_HEADER,
};
pub use workbook::{load_table, table_from_range, WorkbookFormat, REQUIRED_COLUMNS};
