//! Pure transition functions of the calculator.
//!
//! Every function here is total: it takes the current state by reference and
//! returns the next state, for every input. Calculation failures become
//! error display states, never panics or `Err`s.
//!
//! Evaluation is strictly left-to-right with no operator precedence:
//! choosing a new operator while a complete binary operation is pending
//! evaluates that operation first.
//!
//! ```rust
//! use keycalc::core::{engine, Digit, Operator};
//!
//! let d = |n| Digit::new(n).unwrap();
//! let state = engine::initial();
//! let state = engine::input_digit(&state, d(5));
//! let state = engine::input_operator(&state, Operator::Add);
//! let state = engine::input_digit(&state, d(2));
//! let state = engine::input_operator(&state, Operator::Power);
//! let state = engine::input_digit(&state, d(3));
//! let state = engine::evaluate(&state);
//! assert_eq!(state.display_value, "343");
//! ```

use super::action::{Action, Digit};
use super::format::{format_result, CalcError, FormatPolicy};
use super::operator::Operator;
use super::state::CalculatorState;

pub fn initial() -> CalculatorState {
    CalculatorState::initial()
}

/// Type one digit.
pub fn input_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    let digit = digit.as_char();

    if state.is_error || state.calculation_complete {
        return CalculatorState::fresh_entry(digit);
    }

    if state.waiting_for_operand {
        return CalculatorState {
            display_value: digit.to_string(),
            waiting_for_operand: false,
            ..state.clone()
        };
    }

    if state.display_value == "0" {
        return CalculatorState {
            display_value: digit.to_string(),
            ..state.clone()
        };
    }

    let mut display_value = state.display_value.clone();
    display_value.push(digit);
    CalculatorState {
        display_value,
        ..state.clone()
    }
}

/// Type a decimal point. A second point in the same entry is ignored.
pub fn input_decimal_point(state: &CalculatorState) -> CalculatorState {
    if state.is_error || state.calculation_complete {
        return CalculatorState::fresh_entry("0.");
    }

    if state.waiting_for_operand {
        return CalculatorState {
            display_value: "0.".to_string(),
            waiting_for_operand: false,
            ..state.clone()
        };
    }

    if state.display_value.contains('.') {
        return state.clone();
    }

    CalculatorState {
        display_value: format!("{}.", state.display_value),
        ..state.clone()
    }
}

/// Choose an operator, using the standard formatting policy for any chained
/// evaluation.
pub fn input_operator(state: &CalculatorState, op: Operator) -> CalculatorState {
    input_operator_with(state, op, &FormatPolicy::STANDARD)
}

pub fn input_operator_with(
    state: &CalculatorState,
    op: Operator,
    policy: &FormatPolicy,
) -> CalculatorState {
    if state.is_error {
        return state.clone();
    }

    let chained = state.previous_operand.is_some()
        && state.operator.is_some()
        && !state.waiting_for_operand;

    let base = if chained {
        let calculated = evaluate_with(state, policy);
        // An error ends the chain; the new operator is dropped with it.
        if calculated.is_error {
            return calculated;
        }
        calculated
    } else {
        state.clone()
    };

    CalculatorState {
        previous_operand: Some(base.display_number()),
        operator: Some(op),
        waiting_for_operand: true,
        calculation_complete: false,
        ..base
    }
}

/// Evaluate the pending operation with the standard formatting policy.
pub fn evaluate(state: &CalculatorState) -> CalculatorState {
    evaluate_with(state, &FormatPolicy::STANDARD)
}

pub fn evaluate_with(state: &CalculatorState, policy: &FormatPolicy) -> CalculatorState {
    if state.is_error {
        return state.clone();
    }
    let (Some(a), Some(op)) = (state.previous_operand, state.operator) else {
        return state.clone();
    };
    let b = state.display_number();

    match calculate(a, op, b, policy) {
        Ok(display_value) => CalculatorState {
            display_value,
            previous_operand: None,
            operator: None,
            waiting_for_operand: false,
            calculation_complete: true,
            is_error: false,
        },
        Err(error) => CalculatorState::error(error),
    }
}

fn calculate(a: f64, op: Operator, b: f64, policy: &FormatPolicy) -> Result<String, CalcError> {
    if op == Operator::Divide && b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    format_result(op.apply(a, b), policy)
}

/// Clear the current entry, keeping any pending operation.
pub fn clear_entry(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        display_value: "0".to_string(),
        is_error: false,
        calculation_complete: false,
        ..state.clone()
    }
}

/// Discard everything. Independent of the current state.
pub fn clear_all() -> CalculatorState {
    initial()
}

/// Dispatch an [`Action`] to its transition.
pub fn apply(state: &CalculatorState, action: Action) -> CalculatorState {
    apply_with(state, action, &FormatPolicy::STANDARD)
}

pub fn apply_with(
    state: &CalculatorState,
    action: Action,
    policy: &FormatPolicy,
) -> CalculatorState {
    match action {
        Action::Digit(digit) => input_digit(state, digit),
        Action::DecimalPoint => input_decimal_point(state),
        Action::Operator(op) => input_operator_with(state, op, policy),
        Action::Evaluate => evaluate_with(state, policy),
        Action::ClearEntry => clear_entry(state),
        Action::ClearAll => clear_all(),
    }
}
