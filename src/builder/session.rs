//! Builder for constructing calculator sessions.

use crate::builder::error::BuildError;
use crate::core::{CalculatorState, FormatPolicy, StateHistory};
use crate::session::Calculator;

/// Builder for configuring a [`Calculator`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use keycalc::builder::SessionBuilder;
/// use keycalc::core::FormatPolicy;
///
/// let calculator = SessionBuilder::new()
///     .policy(FormatPolicy { decimal_places: 4, ..FormatPolicy::STANDARD })
///     .history_limit(100)
///     .build()
///     .unwrap();
///
/// assert_eq!(calculator.display(), "0");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    policy: Option<FormatPolicy>,
    history_limit: Option<usize>,
    initial: Option<CalculatorState>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the formatting policy. Defaults to [`FormatPolicy::STANDARD`].
    pub fn policy(mut self, policy: FormatPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Keep at most `limit` transitions in the history. Unbounded by default.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Start from `state` instead of the initial state.
    pub fn initial(mut self, state: CalculatorState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Build the session.
    /// Returns an error if any setting is out of range.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let policy = self.policy.unwrap_or_default();
        policy.validate()?;

        if self.history_limit == Some(0) {
            return Err(BuildError::ZeroHistoryLimit);
        }

        let initial = self.initial.unwrap_or_default();
        if !initial.is_consistent() {
            return Err(BuildError::InconsistentInitialState {
                display: initial.display_value,
            });
        }

        Ok(Calculator::from_parts(
            initial,
            StateHistory::new(),
            policy,
            self.history_limit,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Operator, PolicyError};

    #[test]
    fn defaults_build_standard_session() {
        let calculator = SessionBuilder::new().build().unwrap();

        assert_eq!(calculator.state(), &CalculatorState::initial());
        assert_eq!(calculator.policy(), &FormatPolicy::STANDARD);
        assert_eq!(calculator.history_limit(), None);
        assert!(calculator.history().is_empty());
    }

    #[test]
    fn builder_rejects_invalid_policy() {
        let result = SessionBuilder::new()
            .policy(FormatPolicy {
                decimal_places: 20,
                ..FormatPolicy::STANDARD
            })
            .build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidPolicy(PolicyError::TooManyDecimalPlaces(20)))
        ));
    }

    #[test]
    fn builder_rejects_zero_history_limit() {
        let result = SessionBuilder::new().history_limit(0).build();
        assert!(matches!(result, Err(BuildError::ZeroHistoryLimit)));
    }

    #[test]
    fn builder_rejects_inconsistent_initial_state() {
        let bogus = CalculatorState {
            is_error: true,
            display_value: "7".to_string(),
            ..CalculatorState::initial()
        };
        let result = SessionBuilder::new().initial(bogus).build();
        assert!(matches!(
            result,
            Err(BuildError::InconsistentInitialState { .. })
        ));
    }

    #[test]
    fn builder_accepts_pending_initial_state() {
        let state = CalculatorState {
            previous_operand: Some(9.0),
            operator: Some(Operator::Multiply),
            display_value: "12".to_string(),
            ..CalculatorState::initial()
        };
        let calculator = SessionBuilder::new()
            .initial(state.clone())
            .history_limit(5)
            .build()
            .unwrap();

        assert_eq!(calculator.state(), &state);
        assert_eq!(calculator.history_limit(), Some(5));
    }

    #[test]
    fn builder_accepts_error_initial_state() {
        let calculator = SessionBuilder::new()
            .initial(CalculatorState::error(CalcError::Overflow))
            .build()
            .unwrap();
        assert_eq!(calculator.display(), "Result too large");
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            BuildError::ZeroHistoryLimit.to_string(),
            "History limit must be at least 1. Omit .history_limit() for unbounded history"
        );
        let err = BuildError::from(PolicyError::ZeroPlainDigits);
        assert_eq!(
            err.to_string(),
            "Invalid format policy: Maximum plain digits must be at least 1"
        );
    }
}
