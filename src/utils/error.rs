use crate::utils::output::OutputStyle;
use thiserror::Error;

/// Rejection of a computation input, carrying the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Both inputs must be valid numbers.")]
    NonNumericOperand,

    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    #[error("Invalid operation selected.")]
    UnsupportedOperator(String),

    #[error("Please enter a valid number greater than or equal to 2.")]
    InvalidBound(String),
}

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("System error: {0}")]
    System(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub fn report_error(err: &AppError) {
    match err {
        AppError::Validation(e) => {
            eprintln!("{}", OutputStyle::error(&format!("Error: {}", e)));
        }
        AppError::Config(msg) => {
            eprintln!("⚠️  {}", OutputStyle::warning(&format!("Config: {}", msg)));
        }
        AppError::Io(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
        AppError::System(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}

/// Report an error coming out of a command handler.
///
/// Application errors keep their styled rendering; anything else is printed
/// with its full context chain.
pub fn report_anyhow(err: &anyhow::Error) {
    if let Some(app_err) = err.downcast_ref::<AppError>() {
        report_error(app_err);
    } else if let Some(validation) = err.downcast_ref::<ValidationError>() {
        report_error(&AppError::Validation(validation.clone()));
    } else {
        eprintln!("❌ {}", OutputStyle::error(&format!("{:#}", err)));
    }
}
