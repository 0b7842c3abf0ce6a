//! # Error Types
//!
//! Structured error types for calc_core. Every failure the engine can produce
//! is a normal return value: the front end prints the `Display` text and
//! carries on with the next interaction.
//!
//! The taxonomy splits into two groups:
//!
//! - **Validation** - raised while turning raw text into an operand
//!   (`EmptyInput`, `MalformedNumber`, `NonFinite`)
//! - **Operation** - raised by the numeric functions themselves
//!   (`DivisionByZero`, `InvalidArgument`, `Overflow`, `Undefined`)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn reciprocal(x: f64) -> CalcResult<f64> {
//!     if x == 0.0 {
//!         return Err(CalcError::DivisionByZero);
//!     }
//!     Ok(1.0 / x)
//! }
//!
//! assert_eq!(reciprocal(0.0).unwrap_err().to_string(), "Error: Cannot divide by zero");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for validation and calculation failures.
///
/// The `Display` text is what the user sees; the variant (and
/// [`CalcError::error_code`]) is what callers match on.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Input was blank after trimming
    #[error("Input Error: Empty input provided")]
    EmptyInput,

    /// Input could not be parsed as a decimal number
    #[error("Input Error: could not convert string to number: '{input}'")]
    MalformedNumber { input: String },

    /// Input parsed, but to infinity or NaN
    #[error("Input Error: {reason}")]
    NonFinite { input: String, reason: String },

    /// Divisor was zero
    #[error("Error: Cannot divide by zero")]
    DivisionByZero,

    /// An operand lies outside the operation's domain
    #[error("Error: {reason}")]
    InvalidArgument { operation: String, reason: String },

    /// The mathematical result does not fit in an f64
    #[error("Error: Result too large (infinity)")]
    Overflow { operation: String },

    /// The operation has no value at this point (e.g. tan at π/2)
    #[error("Error: {reason}")]
    Undefined { operation: String, reason: String },

    /// Operator symbol or function name not recognized
    #[error("Error: Invalid operation '{symbol}'")]
    UnknownOperation { symbol: String },
}

impl CalcError {
    /// Create a MalformedNumber error
    pub fn malformed_number(input: impl Into<String>) -> Self {
        CalcError::MalformedNumber {
            input: input.into(),
        }
    }

    /// Create a NonFinite error
    pub fn non_finite(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::NonFinite {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidArgument {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create an Overflow error
    pub fn overflow(operation: impl Into<String>) -> Self {
        CalcError::Overflow {
            operation: operation.into(),
        }
    }

    /// Create an Undefined error
    pub fn undefined(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Undefined {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownOperation error
    pub fn unknown_operation(symbol: impl Into<String>) -> Self {
        CalcError::UnknownOperation {
            symbol: symbol.into(),
        }
    }

    /// True for failures raised while validating raw input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::EmptyInput | CalcError::MalformedNumber { .. } | CalcError::NonFinite { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::EmptyInput => "EMPTY_INPUT",
            CalcError::MalformedNumber { .. } => "MALFORMED_NUMBER",
            CalcError::NonFinite { .. } => "NON_FINITE",
            CalcError::DivisionByZero => "DIVISION_BY_ZERO",
            CalcError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            CalcError::Overflow { .. } => "OVERFLOW",
            CalcError::Undefined { .. } => "UNDEFINED",
            CalcError::UnknownOperation { .. } => "UNKNOWN_OPERATION",
        }
    }
}
