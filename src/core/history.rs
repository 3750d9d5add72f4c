//! Transition history tracking.
//!
//! Provides an immutable record of the inputs a calculator received and the
//! states they produced.

use super::action::Action;
use super::state::{CalculatorState, Phase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of one applied input.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{engine, Action, Digit, StateTransition};
/// use chrono::Utc;
///
/// let from = engine::initial();
/// let action = Action::Digit(Digit::new(7).unwrap());
/// let to = engine::apply(&from, action);
///
/// let transition = StateTransition {
///     action,
///     from,
///     to,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to.display_value, "7");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The input that was applied
    pub action: Action,
    /// The state before the input
    pub from: CalculatorState,
    /// The state after the input
    pub to: CalculatorState,
    /// When the input was applied
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    /// Whether this input finished a calculation successfully.
    pub fn completed_calculation(&self) -> bool {
        self.to.phase() == Phase::Complete && !self.from.phase().is_final()
    }
}

/// Ordered history of transitions.
///
/// History is immutable: `record` returns a new history with the transition
/// added and leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{engine, Action, Digit, Operator, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// let mut state = engine::initial();
///
/// for action in [
///     Action::Digit(Digit::new(4).unwrap()),
///     Action::Operator(Operator::Multiply),
///     Action::Digit(Digit::new(2).unwrap()),
///     Action::Evaluate,
/// ] {
///     let next = engine::apply(&state, action);
///     history = history.record(StateTransition {
///         action,
///         from: state,
///         to: next.clone(),
///         timestamp: Utc::now(),
///     });
///     state = next;
/// }
///
/// assert_eq!(history.get_path().len(), 5);
/// assert_eq!(history.results(), vec!["8"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition. The receiver is left as it was.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append in place, then drop the oldest entries beyond `limit`.
    pub(crate) fn push_bounded(&mut self, transition: StateTransition, limit: Option<usize>) {
        self.transitions.push(transition);
        if let Some(limit) = limit {
            let excess = self.transitions.len().saturating_sub(limit);
            self.transitions.drain(..excess);
        }
    }

    /// Keep only the newest `limit` transitions.
    pub fn retain_last(&self, limit: usize) -> Self {
        let start = self.transitions.len().saturating_sub(limit);
        Self {
            transitions: self.transitions[start..].to_vec(),
        }
    }

    /// Every state the calculator passed through, oldest first.
    ///
    /// Returns the `from` state of the first transition, then the `to` state
    /// of each transition.
    pub fn get_path(&self) -> Vec<&CalculatorState> {
        self.transitions
            .first()
            .map(|t| &t.from)
            .into_iter()
            .chain(self.transitions.iter().map(|t| &t.to))
            .collect()
    }

    /// Display values of every completed calculation, oldest first.
    pub fn results(&self) -> Vec<&str> {
        self.transitions
            .iter()
            .filter(|t| t.completed_calculation())
            .map(|t| t.to.display_value.as_str())
            .collect()
    }

    /// Time between the first and last transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let started = self.transitions.first()?.timestamp;
        let finished = self.transitions.last()?.timestamp;
        finished.signed_duration_since(started).to_std().ok()
    }

    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{engine, Digit, Operator};

    fn step(from: &CalculatorState, action: Action) -> StateTransition {
        StateTransition {
            action,
            from: from.clone(),
            to: engine::apply(from, action),
            timestamp: Utc::now(),
        }
    }

    fn digit(n: u8) -> Action {
        Action::Digit(Digit::new(n).unwrap())
    }

    fn replay(actions: &[Action]) -> StateHistory {
        let mut history = StateHistory::new();
        let mut state = engine::initial();
        for action in actions {
            let transition = step(&state, *action);
            state = transition.to.clone();
            history = history.record(transition);
        }
        history
    }

    #[test]
    fn fresh_tape_has_no_path_or_elapsed_time() {
        let tape = StateHistory::new();
        assert!(tape.is_empty());
        assert!(tape.get_path().is_empty());
        assert!(tape.duration().is_none());
        assert!(tape.results().is_empty());
    }

    #[test]
    fn record_leaves_original_tape_untouched() {
        let empty = StateHistory::new();
        let one_key = empty.record(step(&engine::initial(), digit(1)));

        assert!(empty.is_empty());
        assert_eq!(one_key.len(), 1);
        assert_eq!(one_key.last().unwrap().to.display_value, "1");
    }

    #[test]
    fn path_follows_display_values() {
        let history = replay(&[digit(1), digit(2), Action::DecimalPoint]);
        let displays: Vec<&str> = history
            .get_path()
            .iter()
            .map(|s| s.display_value.as_str())
            .collect();

        assert_eq!(displays, vec!["0", "1", "12", "12."]);
    }

    #[test]
    fn results_lists_completed_calculations() {
        let history = replay(&[
            digit(6),
            Action::Operator(Operator::Divide),
            digit(3),
            Action::Evaluate,
            Action::Evaluate,
            Action::Operator(Operator::Add),
            digit(1),
            Action::Evaluate,
        ]);
        assert_eq!(history.results(), vec!["2", "3"]);
    }

    #[test]
    fn results_skip_errors() {
        let history = replay(&[
            digit(6),
            Action::Operator(Operator::Divide),
            digit(0),
            Action::Evaluate,
        ]);
        assert!(history.results().is_empty());
        assert_eq!(history.last().unwrap().to.display_value, "Error");
    }

    #[test]
    fn retain_last_drops_oldest() {
        let history = replay(&[digit(1), digit(2), digit(3)]);
        let trimmed = history.retain_last(2);

        assert_eq!(trimmed.len(), 2);
        assert_eq!(trimmed.transitions()[0].to.display_value, "12");
        assert_eq!(history.retain_last(10).len(), 3);
        assert!(history.retain_last(0).is_empty());
    }

    #[test]
    fn push_bounded_appends_and_trims_in_place() {
        let mut tape = StateHistory::new();
        let mut state = engine::initial();
        for n in [1, 2, 3, 4] {
            let transition = step(&state, digit(n));
            state = transition.to.clone();
            tape.push_bounded(transition, Some(3));
        }

        assert_eq!(tape.len(), 3);
        assert_eq!(tape.transitions()[0].to.display_value, "12");
        assert_eq!(tape.last().unwrap().to.display_value, "1234");

        tape.push_bounded(step(&state, Action::ClearAll), None);
        assert_eq!(tape.len(), 4);
    }

    #[test]
    fn only_fresh_results_complete_a_calculation() {
        let history = replay(&[
            digit(8),
            Action::Operator(Operator::Subtract),
            digit(3),
            Action::Evaluate,
            Action::Evaluate,
        ]);
        let completed: Vec<bool> = history
            .transitions()
            .iter()
            .map(StateTransition::completed_calculation)
            .collect();

        assert_eq!(completed, vec![false, false, false, true, false]);
    }

    #[test]
    fn elapsed_time_spans_first_to_last_key() {
        let pressed_at = Utc::now();
        let mut first = step(&engine::initial(), digit(1));
        first.timestamp = pressed_at;
        let mut second = step(&first.to, digit(2));
        second.timestamp = pressed_at + chrono::Duration::milliseconds(25);

        let history = StateHistory::new().record(first).record(second);
        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn single_key_has_no_elapsed_time() {
        let history = replay(&[digit(1)]);
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn tape_roundtrips_through_json() {
        let history = replay(&[digit(4), Action::Operator(Operator::Power), digit(2)]);

        let encoded = serde_json::to_string(&history).unwrap();
        let decoded: StateHistory = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, history);
        assert_eq!(decoded.last().unwrap().from.operator, Some(Operator::Power));
    }
}
