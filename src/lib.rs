// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod extraction;
pub mod io;
pub mod observability;
pub mod pipeline;

// Re-export commonly used types
pub use crate::core::{
    ChartRow, ChartSlot, MotorPair, MotorPosition, Row, RowTable, SummaryRow, ZoneOrder,
    DEFAULT_ZONE_ORDER,
};

pub use crate::config::{
    InterfgenConfig, MarkerConvention, NoInterfLayout, ProcessingOptions, SlotPolicy,
};

pub use crate::errors::{Error, Result};

pub use crate::extraction::{collect_zones, decode_root, ordinal_of, plc_tag, NoInterferenceZones};

pub use crate::pipeline::{
    build_reports, classify_page, generate, AssemblyStats, GenerateReport, GenerateRequest,
    Reports, ZoneKey,
};

pub use crate::io::{load_table, render_chart_config, render_summary};
