//! # Interactive Menu
//!
//! The numbered-menu front end. It reads lines from any `BufRead` and writes
//! prompts and results to any `Write`, so tests drive it with in-memory
//! buffers. End of input anywhere ends the session as if "Exit" was chosen.

use std::io::{self, BufRead, Write};

use calc_core::input::{parse_angle_unit, parse_log_base, parse_operand};
use calc_core::{Calculation, Function, Operator, Session};
use tracing::debug;

const RULE_WIDTH: usize = 50;

const HELP_TEXT: &str = "
CALCULATOR HELP GUIDE
====================

BASIC OPERATIONS:
  Addition (+):         5 + 3 = 8
  Subtraction (-):      10 - 4 = 6
  Multiplication (*):   6 * 7 = 42
  Division (/):         15 / 3 = 5
  Power (** or ^):      2 ** 3 = 8

ADVANCED FUNCTIONS:
  Square Root:          sqrt(16) = 4
  Logarithm:            log(100, 10) = 2
  Natural Log:          ln(e) = 1
  Trigonometric:        sin(90°) = 1

ERROR HANDLING:
  • Division by zero is prevented
  • Invalid inputs are caught and reported
  • Mathematical errors are handled gracefully

FEATURES:
  • Calculation history (last 10 operations)
  • Both degree and radian modes for trig functions
  • Input validation and error recovery
";

/// Whether the loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Menu-driven calculator bound to an input and an output stream.
pub struct Menu<R, W> {
    input: R,
    output: W,
    session: Session,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, session: Session) -> Self {
        Menu {
            input,
            output,
            session,
        }
    }

    /// Hand back the session (and its history) once the loop is done.
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Tally Calculator!")?;
        writeln!(self.output, "Type numbers carefully and follow the prompts.")?;

        loop {
            self.display_menu()?;
            let Some(choice) = self.prompt("Select option (1-6): ")? else {
                break;
            };
            debug!(choice = choice.as_str(), "menu selection");

            let flow = match choice.as_str() {
                "1" => self.basic_operation()?,
                "2" => self.advanced_function()?,
                "3" => self.show_history()?,
                "4" => self.clear_history()?,
                "5" => self.show_help()?,
                "6" => Flow::Quit,
                _ => {
                    writeln!(self.output, "Error: Please select a valid option (1-6)")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit || self.prompt("\nPress Enter to continue...")?.is_none() {
                break;
            }
        }

        writeln!(self.output, "\nThank you for using the Tally Calculator!")?;
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()
    }

    fn display_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "{:^width$}", "TALLY CALCULATOR", width = RULE_WIDTH)?;
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "1. Basic Operations (+, -, *, /, **)")?;
        writeln!(self.output, "2. Advanced Functions (sqrt, log, trig)")?;
        writeln!(self.output, "3. Show History")?;
        writeln!(self.output, "4. Clear History")?;
        writeln!(self.output, "5. Help")?;
        writeln!(self.output, "6. Exit")?;
        writeln!(self.output, "{}", "-".repeat(RULE_WIDTH))
    }

    /// Print `text`, then read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn basic_operation(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\nAvailable operations: +, -, *, /, ** (or ^)")?;

        let Some(raw) = self.prompt("Enter first number: ")? else {
            return Ok(Flow::Quit);
        };
        let lhs = match parse_operand(&raw) {
            Ok(v) => v,
            Err(e) => return self.report(&e),
        };

        let Some(raw) = self.prompt("Enter operation (+, -, *, /, **, ^): ")? else {
            return Ok(Flow::Quit);
        };
        let operator: Operator = match raw.parse() {
            Ok(op) => op,
            Err(e) => return self.report(&e),
        };

        let Some(raw) = self.prompt("Enter second number: ")? else {
            return Ok(Flow::Quit);
        };
        let rhs = match parse_operand(&raw) {
            Ok(v) => v,
            Err(e) => return self.report(&e),
        };

        self.evaluate(&Calculation::arithmetic(lhs, operator, rhs))
    }

    fn advanced_function(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\nAvailable functions: sqrt, log, sin, cos, tan")?;

        let Some(raw) = self.prompt("Enter function: ")? else {
            return Ok(Flow::Quit);
        };
        let function: Function = match raw.parse() {
            Ok(f) => f,
            Err(e) => return self.report(&e),
        };

        let Some(raw) = self.prompt("Enter number: ")? else {
            return Ok(Flow::Quit);
        };
        let value = match parse_operand(&raw) {
            Ok(v) => v,
            Err(e) => return self.report(&e),
        };

        let default_unit = self.session.settings().angle_unit;
        let (base, unit) = match function {
            Function::Log => {
                let Some(raw) = self.prompt("Enter base (press Enter for natural log): ")? else {
                    return Ok(Flow::Quit);
                };
                match parse_log_base(&raw) {
                    Ok(base) => (base, default_unit),
                    Err(e) => return self.report(&e),
                }
            }
            Function::Trig(_) => {
                let Some(raw) = self.prompt("Use degrees? (y/n, Enter for default): ")? else {
                    return Ok(Flow::Quit);
                };
                (None, parse_angle_unit(&raw, default_unit))
            }
            Function::Sqrt => (None, default_unit),
        };

        self.evaluate(&Calculation::function(function, value, base, unit))
    }

    fn evaluate(&mut self, calculation: &Calculation) -> io::Result<Flow> {
        let outcome = self.session.evaluate(calculation);
        writeln!(self.output, "Result: {}", outcome.display)?;
        Ok(Flow::Continue)
    }

    fn report(&mut self, error: &calc_core::CalcError) -> io::Result<Flow> {
        writeln!(self.output, "{error}")?;
        Ok(Flow::Continue)
    }

    fn show_history(&mut self) -> io::Result<Flow> {
        let history = self.session.history();
        if history.is_empty() {
            writeln!(self.output, "No calculation history available.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n--- Calculation History ---")?;
        for (i, entry) in history.iter().enumerate() {
            writeln!(self.output, "{:2}. {}", i + 1, entry)?;
        }
        writeln!(self.output, "{}", "-".repeat(25))?;
        Ok(Flow::Continue)
    }

    fn clear_history(&mut self) -> io::Result<Flow> {
        self.session.clear_history();
        writeln!(self.output, "Calculation history cleared.")?;
        Ok(Flow::Continue)
    }

    fn show_help(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "{HELP_TEXT}")?;
        Ok(Flow::Continue)
    }
}
