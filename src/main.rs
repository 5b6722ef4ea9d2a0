use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use numerica::cli::Cli;
use numerica::config::Config;
use numerica::utils::error::report_anyhow;
use numerica::utils::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_anyhow(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_file_path);

    // Missing config files are created with defaults
    let config = Config::load_custom(&config_path)?;

    if !config.general.color {
        colored::control::set_override(false);
    }

    cli.command.execute(config, &config_path, cli.format.as_ref())
}
