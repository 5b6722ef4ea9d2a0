use crate::commands::{calc, configure, primes, squares};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "numerica")]
#[command(about = "Small numeric utilities: calculator, squares and primes")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(short, long, global = true, help = "Output format (overrides config)")]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self, config: Config, config_path: &Path, format: Option<&OutputFormat>) -> Result<()> {
        match self {
            Commands::Calc(args) => {
                calc::handle_calc_command(config, &args, format)?;
            }
            Commands::Squares(args) => {
                squares::handle_squares_command(config, &args, format)?;
            }
            Commands::Primes(args) => {
                primes::handle_primes_command(config, &args, format)?;
            }
            Commands::Config(args) => {
                configure::handle_config_command(config, config_path, args.command)?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a binary arithmetic expression
    #[command(allow_negative_numbers = true)]
    Calc(CalcArgs),

    /// Square a sequence of numbers
    #[command(allow_negative_numbers = true)]
    Squares(SquaresArgs),

    /// List all primes up to a bound, or check a single number
    #[command(allow_negative_numbers = true)]
    Primes(PrimesArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct CalcArgs {
    #[arg(help = "First operand")]
    pub lhs: String,

    #[arg(help = "Operator: + - * / (or add, sub, mul, x, div)")]
    pub operator: String,

    #[arg(help = "Second operand")]
    pub rhs: String,
}

#[derive(Args)]
pub struct SquaresArgs {
    #[arg(help = "Numbers to square (defaults to the configured sequence)")]
    pub numbers: Vec<String>,
}

#[derive(Args)]
pub struct PrimesArgs {
    #[arg(
        help = "Inclusive upper bound (integer >= 2)",
        required_unless_present = "check",
        conflicts_with = "check"
    )]
    pub bound: Option<String>,

    #[arg(long, value_name = "N", help = "Check whether a single number is prime")]
    pub check: Option<u64>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

#[derive(clap::ValueEnum, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
