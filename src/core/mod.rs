//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The immutable `CalculatorState` record
//! - Transition functions in [`engine`]
//! - The numeric formatting policy
//! - Immutable history tracking
//!
//! All logic in this module is pure (no side effects, no logging).

mod action;
pub mod engine;
mod format;
mod history;
mod operator;
mod state;

pub use action::{Action, Digit};
pub use format::{format_result, to_exponential, CalcError, FormatPolicy, PolicyError};
pub use history::{StateHistory, StateTransition};
pub use operator::{Operator, UnknownOperator};
pub use state::{CalculatorState, Phase};
