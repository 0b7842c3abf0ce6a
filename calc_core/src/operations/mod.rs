//! # Operations
//!
//! The numeric engine. Each operation is a pure function over validated
//! operands:
//!
//! - [`arithmetic`] - add, subtract, multiply, divide, power
//! - [`functions`] - square root, logarithm
//! - [`trig`] - sine, cosine, tangent
//!
//! The front end names operations with symbols (`+`, `**`, `sqrt`, ...).
//! Those parse into [`Operator`] or [`Function`], and a complete request with
//! its operands is a [`Calculation`], which dispatches with a `match`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::operations::{Calculation, Operator};
//!
//! let op: Operator = "^".parse().unwrap();
//! let calc = Calculation::arithmetic(2.0, op, 10.0);
//! assert_eq!(calc.evaluate().unwrap(), 1024.0);
//! assert_eq!(calc.expression(), "2 ^ 10");
//! ```

pub mod arithmetic;
pub mod functions;
pub mod trig;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::format_operand;
use crate::units::AngleUnit;

// Re-export the operation functions
pub use arithmetic::{add, divide, multiply, power, subtract};
pub use functions::{logarithm, square_root, DEFAULT_LOG_BASE};
pub use trig::{cosine, sine, tangent};

/// Two-operand operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `**`
    Power,
    /// `^`, same operation as `Power`, kept so the expression echoes the input
    Caret,
}

impl Operator {
    /// Symbol as typed by the user
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "**",
            Operator::Caret => "^",
        }
    }

    /// Apply the operator to two operands.
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Operator::Add => Ok(add(lhs, rhs)),
            Operator::Subtract => Ok(subtract(lhs, rhs)),
            Operator::Multiply => Ok(multiply(lhs, rhs)),
            Operator::Divide => divide(lhs, rhs),
            Operator::Power | Operator::Caret => power(lhs, rhs),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            "**" => Ok(Operator::Power),
            "^" => Ok(Operator::Caret),
            other => Err(CalcError::unknown_operation(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Trigonometric function selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
}

impl TrigFunction {
    pub fn name(self) -> &'static str {
        match self {
            TrigFunction::Sin => "sin",
            TrigFunction::Cos => "cos",
            TrigFunction::Tan => "tan",
        }
    }

    pub fn apply(self, angle: f64, unit: AngleUnit) -> CalcResult<f64> {
        match self {
            TrigFunction::Sin => Ok(sine(angle, unit)),
            TrigFunction::Cos => Ok(cosine(angle, unit)),
            TrigFunction::Tan => tangent(angle, unit),
        }
    }
}

/// Single-operand function, by name.
///
/// Parsing is case-insensitive and ignores surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    Sqrt,
    Log,
    Trig(TrigFunction),
}

impl Function {
    pub fn name(self) -> &'static str {
        match self {
            Function::Sqrt => "sqrt",
            Function::Log => "log",
            Function::Trig(t) => t.name(),
        }
    }
}

impl FromStr for Function {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        match name.as_str() {
            "sqrt" => Ok(Function::Sqrt),
            "log" => Ok(Function::Log),
            "sin" => Ok(Function::Trig(TrigFunction::Sin)),
            "cos" => Ok(Function::Trig(TrigFunction::Cos)),
            "tan" => Ok(Function::Trig(TrigFunction::Tan)),
            other => Err(CalcError::unknown_operation(other)),
        }
    }
}

/// One requested operation together with its operands.
///
/// ## JSON Example
///
/// ```json
/// { "type": "Trig", "function": "tan", "angle": 45.0, "unit": "degrees" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Calculation {
    Arithmetic {
        lhs: f64,
        operator: Operator,
        rhs: f64,
    },
    SquareRoot {
        value: f64,
    },
    Logarithm {
        value: f64,
        /// `None` selects [`DEFAULT_LOG_BASE`]
        base: Option<f64>,
    },
    Trig {
        function: TrigFunction,
        angle: f64,
        unit: AngleUnit,
    },
}

impl Calculation {
    pub fn arithmetic(lhs: f64, operator: Operator, rhs: f64) -> Self {
        Calculation::Arithmetic { lhs, operator, rhs }
    }

    /// Build a single-operand calculation.
    ///
    /// `base` is only read for `log`, `unit` only for the trig functions.
    pub fn function(function: Function, value: f64, base: Option<f64>, unit: AngleUnit) -> Self {
        match function {
            Function::Sqrt => Calculation::SquareRoot { value },
            Function::Log => Calculation::Logarithm { value, base },
            Function::Trig(function) => Calculation::Trig {
                function,
                angle: value,
                unit,
            },
        }
    }

    /// Run the operation.
    pub fn evaluate(&self) -> CalcResult<f64> {
        match *self {
            Calculation::Arithmetic { lhs, operator, rhs } => operator.apply(lhs, rhs),
            Calculation::SquareRoot { value } => square_root(value),
            Calculation::Logarithm { value, base } => logarithm(value, base),
            Calculation::Trig {
                function,
                angle,
                unit,
            } => function.apply(angle, unit),
        }
    }

    /// Human-readable expression, e.g. `3 * 4`, `ln(10)`, `sin(30°)`.
    pub fn expression(&self) -> String {
        match *self {
            Calculation::Arithmetic { lhs, operator, rhs } => {
                format!("{} {} {}", format_operand(lhs), operator, format_operand(rhs))
            }
            Calculation::SquareRoot { value } => format!("sqrt({})", format_operand(value)),
            Calculation::Logarithm { value, base: None } => format!("ln({})", format_operand(value)),
            Calculation::Logarithm {
                value,
                base: Some(base),
            } => format!("log_{}({})", format_operand(base), format_operand(value)),
            Calculation::Trig {
                function,
                angle,
                unit,
            } => format!("{}({}{})", function.name(), format_operand(angle), unit.suffix()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_parsing() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!(" ** ".parse::<Operator>().unwrap(), Operator::Power);
        assert_eq!("^".parse::<Operator>().unwrap(), Operator::Caret);
        let err = "%".parse::<Operator>().unwrap_err();
        assert_eq!(err, CalcError::unknown_operation("%"));
    }

    #[test]
    fn test_power_aliases_agree() {
        assert_eq!(Operator::Power.apply(3.0, 4.0), Operator::Caret.apply(3.0, 4.0));
    }

    #[test]
    fn test_function_parsing() {
        assert_eq!("SQRT".parse::<Function>().unwrap(), Function::Sqrt);
        assert_eq!(" Tan ".parse::<Function>().unwrap(), Function::Trig(TrigFunction::Tan));
        assert!("exp".parse::<Function>().is_err());
        assert_eq!(Function::Trig(TrigFunction::Cos).name(), "cos");
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(Calculation::arithmetic(7.0, Operator::Subtract, 10.0).evaluate().unwrap(), -3.0);
        assert_eq!(
            Calculation::arithmetic(1.0, Operator::Divide, 0.0).evaluate(),
            Err(CalcError::DivisionByZero)
        );
        let sqrt = Calculation::function(Function::Sqrt, 16.0, None, AngleUnit::Radians);
        assert_eq!(sqrt.evaluate().unwrap(), 4.0);
    }

    #[test]
    fn test_function_ignores_irrelevant_arguments() {
        let sqrt = Calculation::function(Function::Sqrt, 9.0, Some(10.0), AngleUnit::Degrees);
        assert_eq!(sqrt, Calculation::SquareRoot { value: 9.0 });
    }

    #[test]
    fn test_expressions() {
        assert_eq!(Calculation::arithmetic(2.5, Operator::Multiply, 4.0).expression(), "2.5 * 4");
        assert_eq!(
            Calculation::function(Function::Log, 100.0, Some(10.0), AngleUnit::Radians).expression(),
            "log_10(100)"
        );
        assert_eq!(
            Calculation::function(Function::Log, 5.0, None, AngleUnit::Radians).expression(),
            "ln(5)"
        );
        assert_eq!(
            Calculation::function(Function::Trig(TrigFunction::Sin), 30.0, None, AngleUnit::Degrees)
                .expression(),
            "sin(30°)"
        );
        assert_eq!(
            Calculation::function(Function::Trig(TrigFunction::Cos), 1.0, None, AngleUnit::Radians)
                .expression(),
            "cos(1 rad)"
        );
    }

    #[test]
    fn test_expression_preserves_typed_operands() {
        let calc = Calculation::arithmetic(3.14159265358979, Operator::Multiply, 2.0);
        assert_eq!(calc.expression(), "3.14159265358979 * 2");

        let huge = Calculation::arithmetic(1e308, Operator::Multiply, 10.0);
        assert_eq!(huge.expression(), "1e308 * 10");
    }

    #[test]
    fn test_calculation_serialization() {
        let calc = Calculation::function(Function::Trig(TrigFunction::Tan), 45.0, None, AngleUnit::Degrees);
        let json = serde_json::to_string(&calc).unwrap();
        assert!(json.contains("\"type\":\"Trig\""));
        assert!(json.contains("\"unit\":\"degrees\""));
        let roundtrip: Calculation = serde_json::from_str(&json).unwrap();
        assert_eq!(calc, roundtrip);
    }
}
