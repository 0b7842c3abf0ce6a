//! # Two-Operand Arithmetic
//!
//! `add`, `subtract` and `multiply` are plain IEEE-754 operations and cannot
//! fail. `divide` and `power` guard the points where the result is not a
//! usable real number.

use crate::errors::{CalcError, CalcResult};

/// a + b
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// a - b
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// a * b
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `dividend` by `divisor`.
///
/// # Errors
///
/// * `DivisionByZero` - `divisor` is `0.0` or `-0.0`
///
/// # Example
///
/// ```rust
/// use calc_core::operations::arithmetic::divide;
///
/// assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
/// assert!(divide(1.0, 0.0).is_err());
/// ```
pub fn divide(dividend: f64, divisor: f64) -> CalcResult<f64> {
    if divisor == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(dividend / divisor)
}

/// Raise `base` to `exponent`.
///
/// # Errors
///
/// * `InvalidArgument` - zero base with a negative exponent, or a result
///   that is not a real number (negative base, fractional exponent)
/// * `Overflow` - the result is infinite
pub fn power(base: f64, exponent: f64) -> CalcResult<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(CalcError::invalid_argument(
            "power",
            "Cannot raise 0 to a negative power",
        ));
    }

    let result = base.powf(exponent);
    if result.is_infinite() {
        return Err(CalcError::overflow("power"));
    }
    if result.is_nan() {
        return Err(CalcError::invalid_argument(
            "power",
            "Result is not a real number",
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_ieee_results() {
        let pairs = [(0.1, 0.2), (1e308, 1e308), (-3.5, 2.25), (7.0, -0.0)];
        for (a, b) in pairs {
            assert_eq!(add(a, b), a + b);
            assert_eq!(subtract(a, b), a - b);
            assert_eq!(multiply(a, b), a * b);
        }
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
        assert_eq!(divide(-9.0, 4.0).unwrap(), -2.25);
    }

    #[test]
    fn test_divide_by_zero() {
        for x in [0.0, 1.0, -42.5, f64::MAX] {
            assert_eq!(divide(x, 0.0), Err(CalcError::DivisionByZero));
            assert_eq!(divide(x, -0.0), Err(CalcError::DivisionByZero));
        }
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10.0).unwrap(), 1024.0);
        assert_eq!(power(0.0, 0.0).unwrap(), 1.0);
        assert_eq!(power(-2.0, 3.0).unwrap(), -8.0);
        assert!((power(9.0, 0.5).unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_power_zero_negative_exponent() {
        let err = power(0.0, -1.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
        assert_eq!(err.to_string(), "Error: Cannot raise 0 to a negative power");
    }

    #[test]
    fn test_power_overflow() {
        assert_eq!(power(10.0, 1000.0), Err(CalcError::overflow("power")));
    }

    #[test]
    fn test_power_not_real() {
        let err = power(-8.0, 1.0 / 3.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }
}
