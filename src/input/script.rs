//! Keystroke scripts: a whole calculation typed as text.
//!
//! A script is a sequence of whitespace-separated tokens. A token that is a
//! complete key name (`Enter`, `Escape`, `Delete`, `Decimal`, ...) maps to one
//! action; any other token is split into characters, each mapped on its own.
//! `"12.5 × 2 ="`, `"12.5×2="` and `"1 2 . 5 * 2 Enter"` are equivalent.
//!
//! Parsing uses `Validation` so that every unrecognized key is reported in
//! one pass.

use super::error::{KeyError, ScriptError};
use super::{map_key, Modifiers};
use crate::core::Action;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type KeyCheck = Validation<Action, NonEmptyVec<KeyError>>;

/// Parse a script into the actions it describes.
///
/// ```rust
/// use keycalc::input::parse_script;
///
/// let actions = parse_script("5 + 2 ^ 3 =").unwrap();
/// assert_eq!(actions.len(), 6);
///
/// let err = parse_script("5 ? 2 & 3").unwrap_err();
/// assert_eq!(err.keys().len(), 2);
/// ```
pub fn parse_script(script: &str) -> Result<Vec<Action>, ScriptError> {
    let checks: Vec<KeyCheck> = script
        .split_whitespace()
        .enumerate()
        .flat_map(|(index, token)| check_token(index, token))
        .collect();

    match Validation::all_vec(checks) {
        Validation::Success(actions) => Ok(actions),
        Validation::Failure(errors) => Err(ScriptError::UnrecognizedKeys(
            errors.iter().cloned().collect(),
        )),
    }
}

fn check_token(index: usize, token: &str) -> Vec<KeyCheck> {
    if let Some(action) = map_key(token, Modifiers::NONE) {
        return vec![Validation::success(action)];
    }

    let mut buf = [0u8; 4];
    token
        .chars()
        .map(|c| {
            let key: &str = c.encode_utf8(&mut buf);
            match map_key(key, Modifiers::NONE) {
                Some(action) => Validation::success(action),
                None => Validation::fail(KeyError {
                    token: index,
                    key: key.to_string(),
                }),
            }
        })
        .collect()
}
