//! Arithmetic evaluator
//!
//! Stateless: every call validates its inputs and returns the result
//! directly.

use crate::core::data::{ArithmeticRequest, Operator};
use crate::utils::error::ValidationError;
use tracing::debug;

/// Evaluate `lhs <operator> rhs`.
///
/// Operands are checked before the operator, so a non-numeric operand is
/// reported even when the operator is also unknown.
pub fn evaluate(lhs: f64, rhs: f64, operator: &str) -> Result<f64, ValidationError> {
    if !lhs.is_finite() || !rhs.is_finite() {
        return Err(ValidationError::NonNumericOperand);
    }

    let op: Operator = operator.parse()?;
    if op == Operator::Divide && rhs == 0.0 {
        return Err(ValidationError::DivisionByZero);
    }

    let result = op.apply(lhs, rhs);
    debug!(lhs, rhs, operator = op.symbol(), result, "evaluated expression");
    Ok(result)
}

impl ArithmeticRequest {
    pub fn evaluate(&self) -> Result<f64, ValidationError> {
        evaluate(self.lhs, self.rhs, &self.operator)
    }
}
