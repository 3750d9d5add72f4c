//! Keycalc: a pure functional pocket calculator
//!
//! Keycalc follows the "pure core, imperative shell" philosophy.
//! The calculator engine is a set of pure transition functions over an
//! immutable state record; input mapping, history, logging and persistence
//! live in a thin shell around it.
//!
//! # Core Concepts
//!
//! - **State**: the immutable `CalculatorState` record, replaced on every input
//! - **Engine**: total transition functions with strictly left-to-right evaluation
//! - **Formatting**: a fixed pipeline turning raw results into display text
//!   or one of three error messages
//! - **Session**: the `Calculator` shell that owns the current state
//!
//! # Example
//!
//! ```rust
//! use keycalc::core::{engine, Action, Digit, Operator};
//!
//! let digit = |n| Action::Digit(Digit::new(n).unwrap());
//! let state = [digit(1), digit(0), Action::Operator(Operator::Divide), digit(0), Action::Evaluate]
//!     .into_iter()
//!     .fold(engine::initial(), |state, action| engine::apply(&state, action));
//!
//! assert_eq!(state.display_value, "Error");
//! assert!(state.is_error);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod input;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use builder::{BuildError, SessionBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use self::core::{Action, CalcError, CalculatorState, Digit, FormatPolicy, Operator};
pub use input::Modifiers;
pub use session::Calculator;
