use crate::cli::OutputFormat;
use crate::core::data::{ArithmeticRequest, PrimalityReport, PrimeReport, SquareReport};
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::format_number;
use colored::*;
use serde::Serialize;
use serde_json::json;

pub struct OutputStyle;

impl OutputStyle {
    pub fn value(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>12}: {}", Self::label(label), color_fn(value));
    }

    /// `Label: value` line with the label in the result color
    pub fn result_line(label: &str, value: &str) -> String {
        format!("{} {}", Self::success(&format!("{}:", label)), value)
    }
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

/// Display formatter for the supported output formats
pub struct DisplayFormatter;

impl DisplayFormatter {
    pub fn print_calculation(request: &ArithmeticRequest, result: f64, format: &OutputFormat) -> AppResult<()> {
        match format {
            OutputFormat::Text => {
                println!("{}", OutputStyle::result_line("Result", &format_number(result)));
            }
            OutputFormat::Json => Self::print_json(&json!({
                "lhs": request.lhs,
                "operator": request.operator,
                "rhs": request.rhs,
                "result": result,
            }))?,
        }
        Ok(())
    }

    pub fn print_squares(report: &SquareReport, format: &OutputFormat) -> AppResult<()> {
        match format {
            OutputFormat::Text => {
                println!("{}", OutputStyle::result_line("Squares", &report.squares.to_string()));
            }
            OutputFormat::Json => Self::print_json(report)?,
        }
        Ok(())
    }

    pub fn print_primes(report: &PrimeReport, format: &OutputFormat) -> AppResult<()> {
        match format {
            OutputFormat::Text => {
                let label = format!("Primes up to {}", report.bound);
                println!("{}", OutputStyle::result_line(&label, &report.joined()));
            }
            OutputFormat::Json => Self::print_json(report)?,
        }
        Ok(())
    }

    pub fn print_primality(report: &PrimalityReport, format: &OutputFormat) -> AppResult<()> {
        match format {
            OutputFormat::Text => {
                if report.prime {
                    println!("{} is prime", OutputStyle::value(&report.number.to_string()));
                } else {
                    println!(
                        "{} is {}",
                        OutputStyle::value(&report.number.to_string()),
                        OutputStyle::warning("not prime")
                    );
                }
            }
            OutputFormat::Json => Self::print_json(report)?,
        }
        Ok(())
    }

    fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::System(format!("Failed to serialize output to JSON: {}", e)))?;
        println!("{}", json);
        Ok(())
    }
}
