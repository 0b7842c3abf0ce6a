//! # Angle Units
//!
//! Type-safe wrappers for angles. The trigonometric operations work in
//! radians internally; the front end lets the user enter degrees instead.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{AngleUnit, Degrees, Radians};
//!
//! let right: Radians = Degrees(90.0).into();
//! assert!((right.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//!
//! let half_turn = AngleUnit::Degrees.to_radians(180.0);
//! assert!((half_turn - std::f64::consts::PI).abs() < 1e-15);
//! ```

use serde::{Deserialize, Serialize};

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

/// Unit an angle operand was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Convert a raw angle in this unit to radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => Radians::from(Degrees(angle)).0,
        }
    }

    /// Suffix used when rendering an angle in an expression: `30°`, `1 rad`.
    pub fn suffix(self) -> &'static str {
        match self {
            AngleUnit::Radians => " rad",
            AngleUnit::Degrees => "°",
        }
    }
}
