//! # calc_core - Calculator Engine
//!
//! `calc_core` is the computational heart of Tally, an interactive
//! command-line calculator. It validates raw text input, performs single
//! binary or unary operations, formats results for display and keeps a short
//! history of what was calculated.
//!
//! ## Design Philosophy
//!
//! - **Pure operations**: every numeric function maps operands to a value or
//!   a typed error, with no I/O
//! - **Typed failures**: errors are [`CalcError`] values, never panics
//! - **JSON-friendly**: calculations, outcomes and settings implement
//!   Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::input::parse_operand;
//! use calc_core::operations::{Calculation, Operator};
//! use calc_core::session::Session;
//!
//! let lhs = parse_operand("10").unwrap();
//! let rhs = parse_operand("4").unwrap();
//!
//! let mut session = Session::default();
//! let outcome = session.evaluate(&Calculation::arithmetic(lhs, Operator::Divide, rhs));
//! assert_eq!(outcome.display, "2.5");
//! ```
//!
//! ## Modules
//!
//! - [`operations`] - Numeric operations and operator dispatch
//! - [`input`] - Raw text to operand validation
//! - [`format`] - Result rendering
//! - [`history`] - Bounded calculation history
//! - [`session`] - Evaluate-format-record pipeline
//! - [`settings`] - Session preferences
//! - [`units`] - Angle units
//! - [`errors`] - Structured error types

pub mod errors;
pub mod format;
pub mod history;
pub mod input;
pub mod operations;
pub mod session;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use format::{format_operand, format_result, format_value};
pub use history::{History, HISTORY_CAPACITY};
pub use input::parse_operand;
pub use operations::{Calculation, Function, Operator, TrigFunction};
pub use session::{Outcome, Session};
pub use settings::{OutputFormat, Settings};
pub use units::AngleUnit;
