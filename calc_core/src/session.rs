//! # Calculator Session
//!
//! Ties the engine together for one run of the calculator: a [`Calculation`]
//! is evaluated, its result formatted, and the rendered pair recorded in the
//! session's [`History`]. Failures are recorded too, with their message as
//! the result text.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::operations::{Calculation, Operator};
//! use calc_core::session::Session;
//!
//! let mut session = Session::default();
//! let outcome = session.evaluate(&Calculation::arithmetic(6.0, Operator::Multiply, 7.0));
//! assert_eq!(outcome.display, "42");
//! assert_eq!(session.history().list(), vec!["6 * 7 = 42"]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::CalcResult;
use crate::format::format_result;
use crate::history::History;
use crate::operations::Calculation;
use crate::settings::Settings;

/// What one evaluation produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Rendered expression, e.g. `log_10(100)`
    pub expression: String,

    /// Typed result
    pub result: CalcResult<f64>,

    /// Text shown to the user and stored in history
    pub display: String,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// State for one calculator run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    settings: Settings,
    history: History,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Session {
            settings,
            history: History::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Evaluate, format and record a calculation.
    pub fn evaluate(&mut self, calculation: &Calculation) -> Outcome {
        let expression = calculation.expression();
        let result = calculation.evaluate();
        let display = format_result(&result);

        match &result {
            Ok(value) => trace!(%expression, value, "calculation succeeded"),
            Err(e) => debug!(%expression, code = e.error_code(), "calculation failed"),
        }

        self.history.append(&expression, &display);
        Outcome {
            expression,
            result,
            display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::operations::{Function, Operator, TrigFunction};
    use crate::units::AngleUnit;

    #[test]
    fn test_evaluate_records_history() {
        let mut session = Session::default();
        session.evaluate(&Calculation::arithmetic(2.0, Operator::Add, 3.0));
        session.evaluate(&Calculation::function(Function::Log, 100.0, Some(10.0), AngleUnit::Radians));

        assert_eq!(session.history().list(), vec!["2 + 3 = 5", "log_10(100) = 2"]);
    }

    #[test]
    fn test_failures_are_recorded() {
        let mut session = Session::default();
        let outcome = session.evaluate(&Calculation::arithmetic(1.0, Operator::Divide, 0.0));

        assert!(!outcome.is_ok());
        assert_eq!(outcome.result, Err(CalcError::DivisionByZero));
        assert_eq!(
            session.history().list(),
            vec!["1 / 0 = Error: Cannot divide by zero"]
        );
    }

    #[test]
    fn test_trig_expression_in_history() {
        let mut session = Session::default();
        let calc = Calculation::function(Function::Trig(TrigFunction::Tan), 90.0, None, AngleUnit::Degrees);
        let outcome = session.evaluate(&calc);
        assert_eq!(outcome.display, "Error: Tangent undefined at this angle");
        assert_eq!(
            session.history().list(),
            vec!["tan(90°) = Error: Tangent undefined at this angle"]
        );
    }

    #[test]
    fn test_clear_history() {
        let mut session = Session::default();
        session.evaluate(&Calculation::arithmetic(2.0, Operator::Caret, 10.0));
        session.clear_history();
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_outcome_serialization() {
        let mut session = Session::default();
        let outcome = session.evaluate(&Calculation::arithmetic(2.0, Operator::Power, 10.0));
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"expression\":\"2 ** 10\""));
        assert!(json.contains("\"display\":\"1024\""));
        let roundtrip: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, outcome);
    }
}
