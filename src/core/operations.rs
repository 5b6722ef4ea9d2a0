//! Core operations implementation
//!
//! This module provides the main implementation of all core traits,
//! serving as the central hub the command handlers talk to.

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::core::{
    data::{ArithmeticRequest, NumericSequence, PrimalityReport, PrimeBound, PrimeReport, SquareReport},
    primes::{Primes, is_prime},
    squares::squares,
    traits::{Arithmetic, ResultDisplay, SequenceGeneration},
};
use crate::utils::error::AppResult;
use crate::utils::output::DisplayFormatter;
use tracing::debug;

/// Main operations hub that implements all core traits
pub struct Operations {
    config: Config,
}

impl Operations {
    /// Create a new Operations instance with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Output format from config, unless the caller overrides it
    pub fn output_format(&self, requested: Option<&OutputFormat>) -> OutputFormat {
        requested.cloned().unwrap_or_else(|| self.config.general.format.clone())
    }
}

impl Arithmetic for Operations {
    fn calculate(&self, request: &ArithmeticRequest) -> AppResult<f64> {
        Ok(request.evaluate()?)
    }
}

impl SequenceGeneration for Operations {
    fn square_numbers(&self, numbers: Option<&[f64]>) -> AppResult<SquareReport> {
        let input = match numbers {
            Some(values) if !values.is_empty() => values.to_vec(),
            _ => {
                debug!("no numbers given, using configured sequence");
                self.config.squares.numbers.clone()
            }
        };

        let squares = squares(&input);
        Ok(SquareReport {
            input: NumericSequence::from(input),
            squares,
        })
    }

    fn generate_primes(&self, bound: &str) -> AppResult<PrimeReport> {
        let bound = PrimeBound::parse(bound)?;
        let primes: Vec<u64> = Primes::new(bound).collect();
        debug!(bound = bound.get(), count = primes.len(), "generated primes");
        Ok(PrimeReport { bound, primes })
    }

    fn check_prime(&self, number: u64) -> PrimalityReport {
        PrimalityReport {
            number,
            prime: is_prime(number),
        }
    }
}

impl ResultDisplay for Operations {
    fn print_calculation(&self, request: &ArithmeticRequest, result: f64, format: &OutputFormat) -> AppResult<()> {
        DisplayFormatter::print_calculation(request, result, format)
    }

    fn print_squares(&self, report: &SquareReport, format: &OutputFormat) -> AppResult<()> {
        DisplayFormatter::print_squares(report, format)
    }

    fn print_primes(&self, report: &PrimeReport, format: &OutputFormat) -> AppResult<()> {
        DisplayFormatter::print_primes(report, format)
    }

    fn print_primality(&self, report: &PrimalityReport, format: &OutputFormat) -> AppResult<()> {
        DisplayFormatter::print_primality(report, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{AppError, ValidationError};

    fn operations() -> Operations {
        Operations::new(Config::default())
    }

    #[test]
    fn test_calculate() {
        let ops = operations();
        let request = ArithmeticRequest::new(6.0, 3.0, "/");
        assert_eq!(ops.calculate(&request).unwrap(), 2.0);

        let request = ArithmeticRequest::new(5.0, 0.0, "/");
        let err = ops.calculate(&request).unwrap_err();
        assert!(matches!(err, AppError::Validation(ValidationError::DivisionByZero)));
    }

    #[test]
    fn test_square_numbers_uses_config_default() {
        let ops = operations();
        let report = ops.square_numbers(None).unwrap();
        assert_eq!(report.input.len(), 10);
        assert_eq!(report.squares.to_string(), "1, 4, 9, 16, 25, 36, 49, 64, 81, 100");

        let empty: &[f64] = &[];
        assert_eq!(ops.square_numbers(Some(empty)).unwrap(), report);
    }

    #[test]
    fn test_square_numbers_explicit_input() {
        let ops = operations();
        let report = ops.square_numbers(Some(&[1.0, 2.0, 3.0][..])).unwrap();
        assert_eq!(report.squares.into_inner(), vec![1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_generate_primes() {
        let ops = operations();
        let report = ops.generate_primes("20").unwrap();
        assert_eq!(report.bound.get(), 20);
        assert_eq!(report.joined(), "2, 3, 5, 7, 11, 13, 17, 19");

        assert!(matches!(
            ops.generate_primes("1"),
            Err(AppError::Validation(ValidationError::InvalidBound(_)))
        ));
        assert!(ops.generate_primes("ten").is_err());
    }

    #[test]
    fn test_check_prime() {
        let ops = operations();
        assert!(ops.check_prime(13).prime);
        assert!(!ops.check_prime(1).prime);
    }

    #[test]
    fn test_output_format_override() {
        let ops = operations();
        assert_eq!(ops.output_format(None), OutputFormat::Text);
        assert_eq!(ops.output_format(Some(&OutputFormat::Json)), OutputFormat::Json);
    }
}
