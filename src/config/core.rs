use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::options::{MarkerConvention, NoInterfLayout, ProcessingOptions, SlotPolicy};
use crate::core::ZoneOrder;
use crate::errors::Result;

pub const DEFAULT_SHEET: &str = "Variabili";
pub const DEFAULT_CHART_OUTPUT: &str = "chart_config.txt";
pub const DEFAULT_SUMMARY_OUTPUT: &str = "interferences_summary.txt";

/// Root configuration structure for interfgen
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InterfgenConfig {
    /// Sheet holding the variables table
    #[serde(default)]
    pub sheet: Option<String>,

    /// Chart configuration output path
    #[serde(default)]
    pub chart_output: Option<PathBuf>,

    /// Interference summary output path
    #[serde(default)]
    pub summary_output: Option<PathBuf>,

    /// Zone names in sort order
    #[serde(default)]
    pub zone_order: Option<Vec<String>>,

    #[serde(default)]
    pub markers: Option<MarkerConvention>,

    #[serde(default)]
    pub slots: Option<SlotPolicy>,

    #[serde(default)]
    pub no_interf_layout: Option<NoInterfLayout>,
}

impl InterfgenConfig {
    pub fn sheet(&self) -> &str {
        self.sheet.as_deref().unwrap_or(DEFAULT_SHEET)
    }

    pub fn chart_output(&self) -> PathBuf {
        self.chart_output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_OUTPUT))
    }

    pub fn summary_output(&self) -> PathBuf {
        self.summary_output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SUMMARY_OUTPUT))
    }

    pub fn zone_order(&self) -> Result<ZoneOrder> {
        match &self.zone_order {
            Some(zones) => ZoneOrder::new(zones),
            None => Ok(ZoneOrder::default()),
        }
    }

    pub fn processing_options(&self) -> ProcessingOptions {
        ProcessingOptions {
            markers: self.markers.unwrap_or_default(),
            slots: self.slots.unwrap_or_default(),
            no_interf_layout: self.no_interf_layout.unwrap_or_default(),
        }
    }
}
