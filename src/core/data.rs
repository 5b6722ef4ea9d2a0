//! Core data structures for the numeric utilities
//!
//! All values here are transient: they are built for a single call and
//! never mutated afterwards.

use crate::utils::error::ValidationError;
use crate::utils::format::{join_integers, join_numbers};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arithmetic operators understood by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl FromStr for Operator {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add" => Ok(Operator::Add),
            "-" | "sub" | "subtract" => Ok(Operator::Subtract),
            "*" | "x" | "mul" | "multiply" => Ok(Operator::Multiply),
            "/" | "div" | "divide" => Ok(Operator::Divide),
            _ => Err(ValidationError::UnsupportedOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Two operands and the operator symbol as supplied by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct ArithmeticRequest {
    pub lhs: f64,
    pub rhs: f64,
    pub operator: String,
}

impl ArithmeticRequest {
    pub fn new(lhs: f64, rhs: f64, operator: impl Into<String>) -> Self {
        Self {
            lhs,
            rhs,
            operator: operator.into(),
        }
    }
}

/// Ordered, finite list of numbers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericSequence(pub Vec<f64>);

impl NumericSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for NumericSequence {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl FromIterator<f64> for NumericSequence {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for NumericSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_numbers(&self.0))
    }
}

/// Inclusive upper limit for the prime search, always at least 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PrimeBound(u64);

impl PrimeBound {
    pub const MIN: u64 = 2;

    pub fn new(value: u64) -> Result<Self, ValidationError> {
        if value < Self::MIN {
            return Err(ValidationError::InvalidBound(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Parse a bound from user text.
    ///
    /// Only plain decimal integers are accepted; fractions, negative values
    /// and anything non-numeric are rejected.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let trimmed = text.trim();
        let value = trimmed
            .strip_prefix('+')
            .unwrap_or(trimmed)
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidBound(text.to_string()))?;
        Self::new(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl FromStr for PrimeBound {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PrimeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a square run, keeping the input next to its squares
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquareReport {
    pub input: NumericSequence,
    pub squares: NumericSequence,
}

/// Result of a prime run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimeReport {
    pub bound: PrimeBound,
    pub primes: Vec<u64>,
}

impl PrimeReport {
    pub fn joined(&self) -> String {
        join_integers(&self.primes)
    }
}

/// Result of a single primality check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrimalityReport {
    pub number: u64,
    pub prime: bool,
}
