//! # Input Validation
//!
//! Converts raw text typed by the user into operands. An operand is always a
//! finite `f64`; anything else is reported as a [`CalcError`] the front end
//! can print directly.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::input::parse_operand;
//!
//! assert_eq!(parse_operand(" 3.14 ").unwrap(), 3.14);
//! assert!(parse_operand("").is_err());
//! assert!(parse_operand("abc").is_err());
//! ```

use tracing::trace;

use crate::errors::{CalcError, CalcResult};
use crate::units::AngleUnit;

/// Parse a raw token into a finite operand.
///
/// # Errors
///
/// * `EmptyInput` - blank after trimming
/// * `MalformedNumber` - not a decimal number
/// * `NonFinite` - parses to infinity (e.g. `1e999`) or NaN
pub fn parse_operand(raw: &str) -> CalcResult<f64> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let number: f64 = cleaned
        .parse()
        .map_err(|_| CalcError::malformed_number(cleaned))?;

    if number.is_infinite() {
        return Err(CalcError::non_finite(cleaned, "Number too large"));
    }
    if number.is_nan() {
        return Err(CalcError::non_finite(cleaned, "Invalid number format"));
    }

    trace!(input = cleaned, value = number, "parsed operand");
    Ok(number)
}

/// Parse the optional logarithm base prompt. Blank means natural log.
pub fn parse_log_base(raw: &str) -> CalcResult<Option<f64>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_operand(raw).map(Some)
}

/// Parse a "Use degrees? (y/n)" answer.
///
/// `y`/`yes` selects degrees, `n`/`no` radians; any other answer (including
/// a blank line) keeps `default`.
pub fn parse_angle_unit(raw: &str, default: AngleUnit) -> AngleUnit {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" => AngleUnit::Degrees,
        "n" | "no" => AngleUnit::Radians,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert_eq!(parse_operand("3.14").unwrap(), 3.14);
        assert_eq!(parse_operand("  -7 ").unwrap(), -7.0);
        assert_eq!(parse_operand("+2.5e3").unwrap(), 2500.0);
        assert_eq!(parse_operand(".5").unwrap(), 0.5);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_operand(""), Err(CalcError::EmptyInput));
        assert_eq!(parse_operand("   \t"), Err(CalcError::EmptyInput));
    }

    #[test]
    fn test_malformed_number() {
        assert_eq!(parse_operand("abc"), Err(CalcError::malformed_number("abc")));
        assert!(parse_operand("1.2.3").is_err());
        assert!(parse_operand("12abc").is_err());
    }

    #[test]
    fn test_non_finite() {
        let too_large = parse_operand("1e999").unwrap_err();
        assert_eq!(too_large.error_code(), "NON_FINITE");
        assert_eq!(too_large.to_string(), "Input Error: Number too large");

        assert_eq!(parse_operand("inf").unwrap_err().error_code(), "NON_FINITE");
        let nan = parse_operand("NaN").unwrap_err();
        assert_eq!(nan.to_string(), "Input Error: Invalid number format");
    }

    #[test]
    fn test_log_base() {
        assert_eq!(parse_log_base("").unwrap(), None);
        assert_eq!(parse_log_base(" 10 ").unwrap(), Some(10.0));
        assert!(parse_log_base("ten").is_err());
    }

    #[test]
    fn test_angle_unit_answers() {
        assert_eq!(parse_angle_unit("y", AngleUnit::Radians), AngleUnit::Degrees);
        assert_eq!(parse_angle_unit("YES", AngleUnit::Radians), AngleUnit::Degrees);
        assert_eq!(parse_angle_unit("n", AngleUnit::Degrees), AngleUnit::Radians);
        assert_eq!(parse_angle_unit("", AngleUnit::Degrees), AngleUnit::Degrees);
        assert_eq!(parse_angle_unit("maybe", AngleUnit::Radians), AngleUnit::Radians);
    }
}
