//! The calculator state record.
//!
//! A `CalculatorState` is an immutable value. Transition functions never
//! mutate it; they build a replacement with struct update syntax.

use super::format::CalcError;
use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Everything the calculator knows between two inputs.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{CalculatorState, Phase};
///
/// let state = CalculatorState::initial();
/// assert_eq!(state.display_value, "0");
/// assert_eq!(state.phase(), Phase::Entering);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Current entry, or a sentinel error string. Never empty.
    pub display_value: String,
    /// Left operand waiting for its operator's right operand.
    pub previous_operand: Option<f64>,
    /// Pending operator.
    pub operator: Option<Operator>,
    /// Set right after an operator is chosen, before the next operand starts.
    pub waiting_for_operand: bool,
    /// Set right after a successful evaluation.
    pub calculation_complete: bool,
    /// Set when `display_value` holds a sentinel error string.
    pub is_error: bool,
}

impl CalculatorState {
    /// The state every session starts from.
    pub fn initial() -> Self {
        Self {
            display_value: "0".to_string(),
            previous_operand: None,
            operator: None,
            waiting_for_operand: false,
            calculation_complete: false,
            is_error: false,
        }
    }

    /// Initial state showing `display` instead of `"0"`.
    pub(crate) fn fresh_entry(display: impl Into<String>) -> Self {
        Self {
            display_value: display.into(),
            ..Self::initial()
        }
    }

    /// Terminal error state carrying the sentinel for `error`.
    pub fn error(error: CalcError) -> Self {
        Self {
            display_value: error.to_string(),
            is_error: true,
            ..Self::initial()
        }
    }

    /// Numeric value of the display.
    ///
    /// Text that is not a number yields NaN, so it flows through the
    /// formatting pipeline as an invalid operation instead of failing.
    pub fn display_number(&self) -> f64 {
        self.display_value.parse::<f64>().unwrap_or(f64::NAN)
    }

    /// The sentinel this state is showing, if any.
    pub fn calc_error(&self) -> Option<CalcError> {
        if self.is_error {
            CalcError::from_display(&self.display_value)
        } else {
            None
        }
    }

    /// Check the record-level invariants.
    ///
    /// Every state produced by the engine satisfies them; this exists for
    /// states that arrive from outside, e.g. a deserialized checkpoint.
    pub fn is_consistent(&self) -> bool {
        if self.display_value.is_empty() {
            return false;
        }
        if self.is_error {
            return CalcError::from_display(&self.display_value).is_some();
        }
        true
    }

    pub fn phase(&self) -> Phase {
        if self.is_error {
            Phase::Error
        } else if self.calculation_complete {
            Phase::Complete
        } else if self.waiting_for_operand {
            Phase::AwaitingOperand
        } else {
            Phase::Entering
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Coarse classification of a state, used for logging and history.
///
/// The flags are checked in precedence order: an error state is never
/// reported as complete, and a complete state is never reported as awaiting
/// an operand.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Typing an operand.
    Entering,
    /// Operator chosen, next operand not started.
    AwaitingOperand,
    /// Showing the result of a successful evaluation.
    Complete,
    /// Showing a sentinel error string.
    Error,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entering => "Entering",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::Complete => "Complete",
            Self::Error => "Error",
        }
    }

    /// Final phases end a calculation; the next digit starts a new one.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Complete | Self::Error)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_shows_zero() {
        let state = CalculatorState::initial();
        assert_eq!(state.display_value, "0");
        assert_eq!(state.previous_operand, None);
        assert_eq!(state.operator, None);
        assert!(!state.waiting_for_operand);
        assert!(!state.calculation_complete);
        assert!(!state.is_error);
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn error_state_carries_sentinel() {
        let state = CalculatorState::error(CalcError::Overflow);
        assert_eq!(state.display_value, "Result too large");
        assert!(state.is_error);
        assert!(!state.calculation_complete);
        assert_eq!(state.calc_error(), Some(CalcError::Overflow));
    }

    #[test]
    fn display_number_parses_partial_entries() {
        assert_eq!(CalculatorState::fresh_entry("3.").display_number(), 3.0);
        assert_eq!(CalculatorState::fresh_entry("0.").display_number(), 0.0);
        assert_eq!(
            CalculatorState::fresh_entry("1.524158e+22").display_number(),
            1.524158e22
        );
    }

    #[test]
    fn display_number_of_text_is_nan() {
        let state = CalculatorState::error(CalcError::DivisionByZero);
        assert!(state.display_number().is_nan());
    }

    #[test]
    fn phase_precedence() {
        let mut state = CalculatorState::initial();
        assert_eq!(state.phase(), Phase::Entering);

        state.waiting_for_operand = true;
        assert_eq!(state.phase(), Phase::AwaitingOperand);

        state.calculation_complete = true;
        assert_eq!(state.phase(), Phase::Complete);

        state.is_error = true;
        assert_eq!(state.phase(), Phase::Error);
    }

    #[test]
    fn phase_classification() {
        assert!(!Phase::Entering.is_final());
        assert!(!Phase::AwaitingOperand.is_final());
        assert!(Phase::Complete.is_final());
        assert!(Phase::Error.is_final());
        assert!(Phase::Error.is_error());
        assert!(!Phase::Complete.is_error());
        assert_eq!(Phase::AwaitingOperand.name(), "AwaitingOperand");
    }

    #[test]
    fn consistency_checks() {
        assert!(CalculatorState::initial().is_consistent());
        assert!(CalculatorState::error(CalcError::InvalidOperation).is_consistent());

        let empty = CalculatorState::fresh_entry("");
        assert!(!empty.is_consistent());

        let bogus_error = CalculatorState {
            is_error: true,
            ..CalculatorState::fresh_entry("12")
        };
        assert!(!bogus_error.is_consistent());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = CalculatorState {
            previous_operand: Some(9.0),
            operator: Some(Operator::Multiply),
            ..CalculatorState::fresh_entry("12")
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
