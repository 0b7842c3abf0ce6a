//! # Trigonometric Functions
//!
//! Angles may be given in radians or degrees (see [`AngleUnit`]); degrees are
//! converted before evaluation.
//!
//! Tangent is undefined at odd multiples of π/2. Floating-point angles almost
//! never land exactly on those points, so the check compares the angle reduced
//! into `[0, 2π)` against π/2 and 3π/2 with an absolute tolerance of
//! [`TANGENT_POLE_TOLERANCE`].

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::errors::{CalcError, CalcResult};
use crate::units::AngleUnit;

/// Distance from a pole (in radians) below which tangent is reported undefined
pub const TANGENT_POLE_TOLERANCE: f64 = 1e-10;

/// Sine of `angle`.
pub fn sine(angle: f64, unit: AngleUnit) -> f64 {
    unit.to_radians(angle).sin()
}

/// Cosine of `angle`.
pub fn cosine(angle: f64, unit: AngleUnit) -> f64 {
    unit.to_radians(angle).cos()
}

/// Tangent of `angle`.
///
/// # Errors
///
/// * `Undefined` - the angle sits on (or within tolerance of) π/2 + kπ
///
/// # Example
///
/// ```rust
/// use calc_core::operations::trig::tangent;
/// use calc_core::units::AngleUnit;
///
/// assert!(tangent(90.0, AngleUnit::Degrees).is_err());
/// assert!((tangent(45.0, AngleUnit::Degrees).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub fn tangent(angle: f64, unit: AngleUnit) -> CalcResult<f64> {
    let radians = unit.to_radians(angle);
    let normalized = radians.rem_euclid(TAU);

    if (normalized - FRAC_PI_2).abs() < TANGENT_POLE_TOLERANCE
        || (normalized - 3.0 * FRAC_PI_2).abs() < TANGENT_POLE_TOLERANCE
    {
        return Err(CalcError::undefined("tan", "Tangent undefined at this angle"));
    }

    Ok(radians.tan())
}
