//! Core error types for the valuation engine.
//!
//! Valuing a vehicle cannot fail. Errors only come from building an engine
//! around a caller-supplied policy.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for caller input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Value of '{field}' must be between 0 and 1, got {value}")]
    RateOutOfRange { field: String, value: String },
}
