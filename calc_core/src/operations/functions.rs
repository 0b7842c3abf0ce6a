//! Square root and logarithm.

use crate::errors::{CalcError, CalcResult};

/// Base used by [`logarithm`] when the caller passes `None`.
pub const DEFAULT_LOG_BASE: f64 = std::f64::consts::E;

/// Non-negative square root of `number`.
///
/// # Errors
///
/// * `InvalidArgument` - `number` is negative
pub fn square_root(number: f64) -> CalcResult<f64> {
    if number < 0.0 {
        return Err(CalcError::invalid_argument(
            "sqrt",
            "Cannot calculate square root of negative number",
        ));
    }
    Ok(number.sqrt())
}

/// Logarithm of `number` in `base`, or the natural log when `base` is `None`.
///
/// # Errors
///
/// * `InvalidArgument` - `number <= 0`, `base <= 0` or `base == 1`
///
/// # Example
///
/// ```rust
/// use calc_core::operations::functions::logarithm;
///
/// let two = logarithm(100.0, Some(10.0)).unwrap();
/// assert!((two - 2.0).abs() < 1e-12);
///
/// let one = logarithm(std::f64::consts::E, None).unwrap();
/// assert!((one - 1.0).abs() < 1e-12);
/// ```
pub fn logarithm(number: f64, base: Option<f64>) -> CalcResult<f64> {
    if number <= 0.0 {
        return Err(CalcError::invalid_argument(
            "log",
            "Logarithm undefined for non-positive numbers",
        ));
    }

    match base {
        None => Ok(number.ln()),
        Some(b) if b <= 0.0 || b == 1.0 => {
            Err(CalcError::invalid_argument("log", "Invalid logarithm base"))
        }
        Some(b) => Ok(number.ln() / b.ln()),
    }
}
