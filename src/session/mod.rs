//! Calculator session: the imperative shell around the pure engine.
//!
//! A [`Calculator`] owns the "current state" slot that the engine itself never
//! holds. Each input replaces that slot with the engine's next state, is
//! appended to the history, and is logged through `tracing`.
//!
//! # Example
//!
//! ```rust
//! use keycalc::input::Modifiers;
//! use keycalc::session::Calculator;
//!
//! let mut calculator = Calculator::new();
//! for key in ["9", "x", "3", "Escape", "2", "Enter"] {
//!     calculator.press_key(key, Modifiers::NONE);
//! }
//! assert_eq!(calculator.display(), "18");
//! ```

use crate::builder::SessionBuilder;
use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{engine, Action, CalculatorState, FormatPolicy, StateHistory, StateTransition};
use crate::input::{map_button, map_key, parse_script, Modifiers, ScriptError};
use crate::render::render_display;
use chrono::Utc;
use tracing::{debug, trace, warn};

/// A running calculator.
#[derive(Clone, Debug)]
pub struct Calculator {
    current: CalculatorState,
    history: StateHistory,
    policy: FormatPolicy,
    history_limit: Option<usize>,
}

impl Calculator {
    /// Create a calculator with the standard policy and unbounded history.
    pub fn new() -> Self {
        Self::from_parts(
            CalculatorState::initial(),
            StateHistory::new(),
            FormatPolicy::STANDARD,
            None,
        )
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub(crate) fn from_parts(
        current: CalculatorState,
        history: StateHistory,
        policy: FormatPolicy,
        history_limit: Option<usize>,
    ) -> Self {
        Self {
            current,
            history,
            policy,
            history_limit,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.current
    }

    /// Text to paint on the screen.
    pub fn display(&self) -> String {
        render_display(&self.current.display_value, &self.policy)
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn policy(&self) -> &FormatPolicy {
        &self.policy
    }

    pub fn history_limit(&self) -> Option<usize> {
        self.history_limit
    }

    /// Apply one action and record it.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let next = engine::apply_with(&self.current, action, &self.policy);

        debug!(
            action = %action,
            from = self.current.phase().name(),
            to = next.phase().name(),
            display = %next.display_value,
            "calculator transition"
        );

        let from = std::mem::replace(&mut self.current, next.clone());
        self.history.push_bounded(
            StateTransition {
                action,
                from,
                to: next,
                timestamp: Utc::now(),
            },
            self.history_limit,
        );
        &self.current
    }

    /// Map a key press and apply it.
    /// Returns `None` if the key is ignored.
    pub fn press_key(&mut self, key: &str, modifiers: Modifiers) -> Option<&CalculatorState> {
        match map_key(key, modifiers) {
            Some(action) => Some(self.dispatch(action)),
            None => {
                trace!(key, ?modifiers, "ignored key");
                None
            }
        }
    }

    /// Map a button click and apply it.
    /// Returns `None` if the button maps to no action.
    pub fn press_button(
        &mut self,
        action: Option<&str>,
        value: Option<&str>,
        is_operator: bool,
    ) -> Option<&CalculatorState> {
        match map_button(action, value, is_operator) {
            Some(mapped) => Some(self.dispatch(mapped)),
            None => {
                trace!(?action, ?value, is_operator, "ignored button");
                None
            }
        }
    }

    /// Apply a whole keystroke script.
    ///
    /// The script is parsed before anything is applied: if any key is
    /// unrecognized the session is left untouched.
    pub fn run_script(&mut self, script: &str) -> Result<&CalculatorState, ScriptError> {
        let actions = parse_script(script).inspect_err(|err| {
            warn!(%err, "rejected keystroke script");
        })?;
        for action in actions {
            self.dispatch(action);
        }
        Ok(&self.current)
    }

    /// Discard the current calculation. The history is kept.
    pub fn reset(&mut self) -> &CalculatorState {
        self.dispatch(Action::ClearAll)
    }

    /// Capture a serializable snapshot of this session.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(
            self.current.clone(),
            self.history.clone(),
            self.policy,
            self.history_limit,
        )
    }

    /// Restore a session from a checkpoint.
    pub fn resume(checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate().inspect_err(|err| {
            warn!(%err, id = %checkpoint.id, "checkpoint failed validation");
        })?;
        debug!(id = %checkpoint.id, display = %checkpoint.state.display_value, "resuming session");
        Ok(Self::from_parts(
            checkpoint.state,
            checkpoint.history,
            checkpoint.policy,
            checkpoint.history_limit,
        ))
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
