//! Numerica - small numeric utilities behind a CLI
//!
//! This library provides three independent, stateless computation units:
//! an arithmetic evaluator, a square sequence producer and a trial-division
//! prime sequence producer, plus the configuration and display layers the
//! command-line front end uses.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    calculator::evaluate,
    data::{ArithmeticRequest, NumericSequence, Operator, PrimeBound},
    operations::Operations,
    primes::{Primes, is_prime, primes_up_to},
    squares::{Squares, squares},
    traits::{Arithmetic, ResultDisplay, SequenceGeneration},
};
pub use utils::error::{AppError, AppResult, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
