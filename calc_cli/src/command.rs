//! One-shot evaluation from command-line tokens.
//!
//! Accepted forms:
//!
//! ```text
//! <lhs> <operator> <rhs>      2 ^ 10
//! sqrt <value>                sqrt 16
//! log <value> [base]          log 100 10
//! sin|cos|tan <angle> [unit]  tan 45 deg
//! ```

use calc_core::input::{parse_log_base, parse_operand};
use calc_core::{AngleUnit, CalcError, CalcResult, Calculation, Function, Operator};

/// Build a calculation from command-line tokens.
pub fn parse_calculation(tokens: &[String], default_unit: AngleUnit) -> CalcResult<Calculation> {
    match tokens {
        [name, value] => {
            let function: Function = name.parse()?;
            let value = parse_operand(value)?;
            Ok(Calculation::function(function, value, None, default_unit))
        }
        [first, second, third] => {
            // A function name in front wins over an operator in the middle
            if let Ok(function) = first.parse::<Function>() {
                return parse_function_with_extra(function, second, third, default_unit);
            }
            let lhs = parse_operand(first)?;
            let operator: Operator = second.parse()?;
            let rhs = parse_operand(third)?;
            Ok(Calculation::arithmetic(lhs, operator, rhs))
        }
        _ => Err(CalcError::unknown_operation(tokens.join(" "))),
    }
}

fn parse_function_with_extra(
    function: Function,
    value: &str,
    extra: &str,
    default_unit: AngleUnit,
) -> CalcResult<Calculation> {
    let value = parse_operand(value)?;
    match function {
        Function::Log => Ok(Calculation::function(function, value, parse_log_base(extra)?, default_unit)),
        Function::Trig(_) => {
            let unit = parse_unit_token(extra)?;
            Ok(Calculation::function(function, value, None, unit))
        }
        Function::Sqrt => Err(CalcError::unknown_operation(format!("sqrt {extra}"))),
    }
}

fn parse_unit_token(token: &str) -> CalcResult<AngleUnit> {
    match token.trim().to_lowercase().as_str() {
        "deg" | "degree" | "degrees" | "d" => Ok(AngleUnit::Degrees),
        "rad" | "radian" | "radians" | "r" => Ok(AngleUnit::Radians),
        other => Err(CalcError::unknown_operation(other)),
    }
}
