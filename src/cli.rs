use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{MarkerConvention, NoInterfLayout, SlotPolicy};

#[derive(Parser, Debug)]
#[command(name = "interfgen")]
#[command(
    about = "Generate chart configuration and interference summary files from a motor variables spreadsheet",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read the spreadsheet and write both reports
    Generate {
        /// Spreadsheet to read (.xlsx or .xls)
        excel: PathBuf,

        /// Sheet holding the variables table
        #[arg(short, long)]
        sheet: Option<String>,

        /// Chart configuration output file
        #[arg(long = "chart-output")]
        chart_output: Option<PathBuf>,

        /// Interference summary output file
        #[arg(long = "summary-output")]
        summary_output: Option<PathBuf>,

        /// Zone names in sort order (comma-separated)
        #[arg(long = "zones", value_delimiter = ',')]
        zones: Option<Vec<String>>,

        /// Naming convention of no-interference marker rows
        #[arg(long, value_enum)]
        markers: Option<MarkerConvention>,

        /// Chart slot assignment policy
        #[arg(long, value_enum)]
        slots: Option<SlotPolicy>,

        /// Distribution of zone tags over NoInterf1/NoInterf2
        #[arg(long = "no-interf-layout", value_enum)]
        no_interf_layout: Option<NoInterfLayout>,

        /// Configuration file (defaults to the nearest .interfgen.toml)
        #[arg(short, long, env = "INTERFGEN_CONFIG")]
        config: Option<PathBuf>,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize an .interfgen.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective zone order
    Zones {
        /// Configuration file (defaults to the nearest .interfgen.toml)
        #[arg(short, long, env = "INTERFGEN_CONFIG")]
        config: Option<PathBuf>,
    },
}
