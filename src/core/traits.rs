//! Core trait definitions for the numeric utilities
//!
//! These traits define the operations the CLI layer can invoke, providing a
//! unified interface over the stateless computation units.

use crate::cli::OutputFormat;
use crate::core::data::{ArithmeticRequest, PrimalityReport, PrimeReport, SquareReport};
use crate::utils::error::AppResult;

/// Arithmetic evaluation
pub trait Arithmetic {
    /// Evaluate a request, failing with a validation error on bad input
    fn calculate(&self, request: &ArithmeticRequest) -> AppResult<f64>;
}

/// Sequence producers
///
/// Both producers are fully drained before the report is returned.
pub trait SequenceGeneration {
    /// Square the given numbers, or the configured default sequence when none are given
    fn square_numbers(&self, numbers: Option<&[f64]>) -> AppResult<SquareReport>;

    /// Generate all primes up to a bound supplied as user text
    fn generate_primes(&self, bound: &str) -> AppResult<PrimeReport>;

    /// Check whether a single number is prime
    fn check_prime(&self, number: u64) -> PrimalityReport;
}

/// Display formatting operations
pub trait ResultDisplay {
    fn print_calculation(&self, request: &ArithmeticRequest, result: f64, format: &OutputFormat) -> AppResult<()>;

    fn print_squares(&self, report: &SquareReport, format: &OutputFormat) -> AppResult<()>;

    fn print_primes(&self, report: &PrimeReport, format: &OutputFormat) -> AppResult<()>;

    fn print_primality(&self, report: &PrimalityReport, format: &OutputFormat) -> AppResult<()>;
}
