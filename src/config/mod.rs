mod core;
mod loader;
pub mod options;

pub use self::core::{
    InterfgenConfig, DEFAULT_CHART_OUTPUT, DEFAULT_SHEET, DEFAULT_SUMMARY_OUTPUT,
};
pub use loader::{
    discover_config, load_config, load_config_from, parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use options::{MarkerConvention, NoInterfLayout, ProcessingOptions, SlotPolicy};
