//! # Result Formatting
//!
//! Renders numbers the way a pocket calculator shows them:
//!
//! - integral values print as plain integers (`8`, not `8.0`)
//! - everything else prints with at most [`SIGNIFICANT_DIGITS`] significant
//!   digits in the shorter of fixed or scientific notation, trailing zeros
//!   removed (the C `%.10g` conversion)
//! - failures print their message unchanged
//!
//! Operands echoed back in expressions use [`format_operand`] instead, which
//! keeps every digit the user typed (shortest round-trip form via `ryu`).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::format::{format_result, format_value};
//! use calc_core::CalcError;
//!
//! assert_eq!(format_value(8.0), "8");
//! assert_eq!(format_value(1.0 / 3.0), "0.3333333333");
//! assert_eq!(format_result(&Err(CalcError::DivisionByZero)), "Error: Cannot divide by zero");
//! ```

use crate::errors::CalcResult;

/// Maximum significant digits for non-integral values
pub const SIGNIFICANT_DIGITS: usize = 10;

/// Render an operation result for display.
pub fn format_result(result: &CalcResult<f64>) -> String {
    match result {
        Ok(value) => format_value(*value),
        Err(e) => e.to_string(),
    }
}

/// Render a single number for display.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value.fract() == 0.0 {
        // -0.0 would otherwise print as "-0"
        if value == 0.0 {
            return "0".to_string();
        }
        return format!("{value:.0}");
    }
    format_general(value, SIGNIFICANT_DIGITS)
}

/// Render an operand exactly as it round-trips: `2`, `3.14159265358979`,
/// `1e308`. No digits are dropped.
pub fn format_operand(value: f64) -> String {
    if !value.is_finite() {
        return format_value(value);
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let mut buffer = ryu::Buffer::new();
    let text = buffer.format_finite(value);
    text.strip_suffix(".0").unwrap_or(text).to_string()
}

/// `%.{precision}g` for a finite, non-zero value.
fn format_general(value: f64, precision: usize) -> String {
    // Round once in scientific form to learn the decimal exponent after rounding
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => match e.parse::<i32>() {
            Ok(exp) => (m, exp),
            Err(_) => return scientific,
        },
        None => return scientific,
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            trim_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        );
    }

    let decimals = (precision as i32 - 1 - exponent) as usize;
    trim_trailing_zeros(&format!("{value:.decimals$}")).to_string()
}

fn trim_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
