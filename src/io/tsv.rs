//! Tab-separated report writers.
//!
//! Both reports are UTF-8, `\n`-terminated, with a fixed header line. Files
//! are truncated on open and closed before the writer returns, on success or
//! failure alike.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::{ChartRow, SummaryRow};
use crate::errors::{Error, Result};

pub const CHART_HEADER: [&str; 10] = [
    "pagina",
    "nome",
    "visiblePlc",
    "Type",
    "Rotation",
    "Period",
    "Title",
    "FunctionType",
    "NoInterf1",
    "NoInterf2",
];

pub const SUMMARY_HEADER: [&str; 2] = ["pagina", "Interferences"];

fn write_line<W: Write>(out: &mut W, fields: &[&str]) -> io::Result<()> {
    out.write_all(fields.join("\t").as_bytes())?;
    out.write_all(b"\n")
}

pub fn render_chart_config<W: Write>(out: &mut W, rows: &[ChartRow]) -> io::Result<()> {
    write_line(out, &CHART_HEADER)?;
    for row in rows {
        write_line(out, &row.fields())?;
    }
    Ok(())
}

pub fn render_summary<W: Write>(out: &mut W, rows: &[SummaryRow]) -> io::Result<()> {
    write_line(out, &SUMMARY_HEADER)?;
    for row in rows {
        write_line(out, &row.fields())?;
    }
    Ok(())
}

fn write_file<F>(path: &Path, render: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    render(&mut out).map_err(|e| Error::io(path, e))?;
    out.flush().map_err(|e| Error::io(path, e))
}

/// Write the chart configuration file, replacing any previous content
pub fn write_chart_config(path: &Path, rows: &[ChartRow]) -> Result<()> {
    write_file(path, |out| render_chart_config(out, rows))
}

/// Write the interference summary file, replacing any previous content
pub fn write_summary(path: &Path, rows: &[SummaryRow]) -> Result<()> {
    write_file(path, |out| render_summary(out, rows))
}
