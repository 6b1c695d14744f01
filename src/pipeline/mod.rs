//! The load → filter → extract → assemble → write pipeline.
//!
//! [`generate`] is the single entry point for front ends: it takes a
//! [`GenerateRequest`] and either writes both reports or returns the reason
//! it could not. Every fatal check happens before the first output file is
//! opened, so a failed run never leaves a fresh chart config behind.
//!
//! [`build_reports`] is the file-free core and is what tests drive directly.

pub mod assemble;
pub mod classify;
pub mod filter;

pub use assemble::{assemble, AssemblyStats, Reports};
pub use classify::{classify_page, ZoneKey, DEFAULT_SEQUENCE};
pub use filter::{filter_dynamic_rows, is_dynamic_row};

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, info_span};

use crate::config::ProcessingOptions;
use crate::core::{RowTable, ZoneOrder};
use crate::errors::{Error, Result};
use crate::io::{load_table, write_chart_config, write_summary};

/// Inputs of one generation run
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateRequest {
    pub excel_path: PathBuf,
    pub sheet_name: String,
    pub chart_output: PathBuf,
    pub summary_output: PathBuf,
    pub zone_order: ZoneOrder,
    pub options: ProcessingOptions,
}

impl GenerateRequest {
    pub fn new(
        excel_path: impl Into<PathBuf>,
        sheet_name: impl Into<String>,
        chart_output: impl Into<PathBuf>,
        summary_output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            excel_path: excel_path.into(),
            sheet_name: sheet_name.into(),
            chart_output: chart_output.into(),
            summary_output: summary_output.into(),
            zone_order: ZoneOrder::default(),
            options: ProcessingOptions::default(),
        }
    }

    pub fn with_zone_order(mut self, zone_order: ZoneOrder) -> Self {
        self.zone_order = zone_order;
        self
    }

    pub fn with_options(mut self, options: ProcessingOptions) -> Self {
        self.options = options;
        self
    }

    /// Reject requests with blank fields
    pub fn validate(&self) -> Result<()> {
        let blank_path = |p: &Path| p.as_os_str().is_empty();
        if blank_path(&self.excel_path) {
            return Err(Error::config("spreadsheet path must not be empty"));
        }
        if self.sheet_name.trim().is_empty() {
            return Err(Error::config("sheet name must not be empty"));
        }
        if blank_path(&self.chart_output) || blank_path(&self.summary_output) {
            return Err(Error::config("output paths must not be empty"));
        }
        Ok(())
    }
}

/// What a successful run read and wrote
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub rows_loaded: usize,
    #[serde(flatten)]
    pub stats: AssemblyStats,
    pub chart_rows: usize,
    pub summary_rows: usize,
    pub chart_output: PathBuf,
    pub summary_output: PathBuf,
}

/// Filter, extract and assemble the reports of an in-memory table
pub fn build_reports(
    table: &RowTable,
    zones: &ZoneOrder,
    options: &ProcessingOptions,
) -> Result<Reports> {
    let dynamic_rows = {
        let _span = info_span!("filter").entered();
        let rows = filter_dynamic_rows(table)?;
        info!(rows = rows.len(), "Selected dynamic interference rows");
        rows
    };

    let _span = info_span!("assemble").entered();
    let reports = assemble(table, &dynamic_rows, zones, options);
    info!(
        charts = reports.chart_rows.len(),
        summaries = reports.summary_rows.len(),
        skipped = reports.stats.malformed_roots + reports.stats.blank_pages,
        "Assembled reports"
    );
    Ok(reports)
}

/// Run the whole pipeline for one request
pub fn generate(request: &GenerateRequest) -> Result<GenerateReport> {
    request.validate()?;

    let table = {
        let _span = info_span!("load", path = %request.excel_path.display()).entered();
        let table = load_table(&request.excel_path, &request.sheet_name)?;
        info!(rows = table.len(), sheet = %request.sheet_name, "Loaded sheet");
        table
    };

    let reports = build_reports(&table, &request.zone_order, &request.options)?;

    {
        let _span = info_span!("write").entered();
        write_chart_config(&request.chart_output, &reports.chart_rows)?;
        write_summary(&request.summary_output, &reports.summary_rows)?;
        info!(
            chart = %request.chart_output.display(),
            summary = %request.summary_output.display(),
            "Wrote reports"
        );
    }

    Ok(GenerateReport {
        rows_loaded: table.len(),
        chart_rows: reports.chart_rows.len(),
        summary_rows: reports.summary_rows.len(),
        stats: reports.stats,
        chart_output: request.chart_output.clone(),
        summary_output: request.summary_output.clone(),
    })
}
