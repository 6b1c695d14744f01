use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# Interfgen Configuration

sheet = "Variabili"
chart_output = "chart_config.txt"
summary_output = "interferences_summary.txt"

# Pages are sorted by the first zone whose name they contain, then by the
# number that follows it (Wheel1_03 -> 3).
zone_order = [
    "Infeed",
    "Wheel1",
    "Wheel2",
    "Wheel3",
    "Exit",
    "Stamp",
    "InnerLiner",
    "OuterLiner",
]

# "generic": StartNo*/EndNo* labels, ordinal from 1st/2nd/...
# "literal": StartNoInterference_ / StartNoInterference2nd_ only
markers = "generic"

# "dynamic": ChartLeft, ChartRight, ChartCenter per page
# "fixed": first motor ChartLeft, second motor ChartRight
slots = "dynamic"

# "merged": 1st and 2nd zone tags in NoInterf1
# "split": 1st zone in NoInterf1, 2nd zone in NoInterf2
no_interf_layout = "merged"
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.is_file() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
