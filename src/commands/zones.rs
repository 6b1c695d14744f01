use anyhow::Result;
use std::path::PathBuf;

use super::generate::resolve_file_config;

pub fn print_zone_order(config: Option<PathBuf>) -> Result<()> {
    let file_config = resolve_file_config(config.as_ref())?;
    for zone in file_config.zone_order()?.iter() {
        println!("{}", zone);
    }
    Ok(())
}
