use anyhow::Result;
use clap::Parser;
use interfgen::cli::{Cli, Commands};
use interfgen::commands::generate::{handle_generate, GenerateConfig};
use interfgen::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Generate {
            excel,
            sheet,
            chart_output,
            summary_output,
            zones,
            markers,
            slots,
            no_interf_layout,
            config,
            json,
        } => {
            let generate_config = GenerateConfig {
                excel,
                sheet,
                chart_output,
                summary_output,
                zones,
                markers,
                slots,
                no_interf_layout,
                config,
                json,
            };
            handle_generate(generate_config)
        }
        Commands::Init { force } => interfgen::commands::init::init_config(force),
        Commands::Zones { config } => interfgen::commands::zones::print_zone_order(config),
    }
}
