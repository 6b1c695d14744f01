use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{
    load_config, load_config_from, InterfgenConfig, MarkerConvention, NoInterfLayout,
    ProcessingOptions, SlotPolicy,
};
use crate::core::ZoneOrder;
use crate::pipeline::{generate, GenerateReport, GenerateRequest};

/// Command-line overrides for one `generate` invocation
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    pub excel: PathBuf,
    pub sheet: Option<String>,
    pub chart_output: Option<PathBuf>,
    pub summary_output: Option<PathBuf>,
    pub zones: Option<Vec<String>>,
    pub markers: Option<MarkerConvention>,
    pub slots: Option<SlotPolicy>,
    pub no_interf_layout: Option<NoInterfLayout>,
    pub config: Option<PathBuf>,
    pub json: bool,
}

/// Load the explicit config file, or discover one from the working directory
pub fn resolve_file_config(explicit: Option<&PathBuf>) -> Result<InterfgenConfig> {
    match explicit {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}

/// Merge CLI overrides over file configuration over built-in defaults
pub fn build_request(cli: &GenerateConfig, file: &InterfgenConfig) -> Result<GenerateRequest> {
    let zone_order = match &cli.zones {
        Some(zones) => ZoneOrder::new(zones)?,
        None => file.zone_order()?,
    };

    let defaults = file.processing_options();
    let options = ProcessingOptions {
        markers: cli.markers.unwrap_or(defaults.markers),
        slots: cli.slots.unwrap_or(defaults.slots),
        no_interf_layout: cli.no_interf_layout.unwrap_or(defaults.no_interf_layout),
    };

    Ok(GenerateRequest::new(
        cli.excel.clone(),
        cli.sheet.clone().unwrap_or_else(|| file.sheet().to_string()),
        cli.chart_output.clone().unwrap_or_else(|| file.chart_output()),
        cli.summary_output
            .clone()
            .unwrap_or_else(|| file.summary_output()),
    )
    .with_zone_order(zone_order)
    .with_options(options))
}

fn describe(report: &GenerateReport) -> String {
    let skipped = report.stats.malformed_roots + report.stats.blank_pages;
    let mut line = format!(
        "Wrote {} chart rows to {} and {} summary rows to {} ({} dynamic rows, {} skipped",
        report.chart_rows,
        report.chart_output.display(),
        report.summary_rows,
        report.summary_output.display(),
        report.stats.dynamic_rows,
        skipped,
    );
    if report.stats.dropped_motors > 0 {
        line.push_str(&format!(
            ", {} motors without a free chart slot",
            report.stats.dropped_motors
        ));
    }
    line.push(')');
    line
}

pub fn handle_generate(config: GenerateConfig) -> Result<()> {
    let file_config = resolve_file_config(config.config.as_ref())?;
    let request = build_request(&config, &file_config)?;

    let report = generate(&request)
        .with_context(|| format!("Generation failed for {}", request.excel_path.display()))?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", describe(&report));
    }
    Ok(())
}
