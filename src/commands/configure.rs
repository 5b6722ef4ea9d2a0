use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::error::AppResult;
use crate::utils::format::join_numbers;
use crate::utils::output::{OutputStyle, print_success};
use std::path::Path;

pub fn handle_config_command(
    config: Config,
    config_path: &Path,
    command: Option<ConfigCommands>,
) -> AppResult<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config),
        Some(ConfigCommands::Path) => handle_path_command(config_path),
        Some(ConfigCommands::Reset) => handle_reset_command(config_path),
        None => handle_config_help(config_path),
    }
}

fn handle_show_command(config: &Config) -> AppResult<()> {
    OutputStyle::print_header("⚙️  Numerica Configuration");

    println!("{}", OutputStyle::header("General:"));
    OutputStyle::print_field_colored("Color", &config.general.color.to_string(), OutputStyle::value);
    OutputStyle::print_field_colored("Format", &format!("{:?}", config.general.format).to_lowercase(), OutputStyle::value);

    println!("{}", OutputStyle::header("Squares:"));
    OutputStyle::print_field_colored("Numbers", &join_numbers(&config.squares.numbers), OutputStyle::value);

    Ok(())
}

fn handle_path_command(config_path: &Path) -> AppResult<()> {
    println!("{}", config_path.display());
    Ok(())
}

fn handle_config_help(config_path: &Path) -> AppResult<()> {
    OutputStyle::print_header("⚙️  Configuration Management");
    println!("Available configuration commands:");
    println!("  numerica config show    - Show current configuration");
    println!("  numerica config path    - Print the configuration file location");
    println!("  numerica config reset   - Reset configuration to defaults");
    println!();
    println!(
        "Configuration file location: {}",
        OutputStyle::muted(&config_path.display().to_string())
    );
    Ok(())
}

fn handle_reset_command(config_path: &Path) -> AppResult<()> {
    Config::default().save_to(config_path)?;
    print_success("Configuration reset to defaults!");
    Ok(())
}
