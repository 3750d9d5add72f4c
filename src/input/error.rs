//! Input mapping error types.

use thiserror::Error;

/// A single key of a script that maps to no action.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unrecognized key '{key}' in token {token}")]
pub struct KeyError {
    /// Zero-based index of the whitespace-separated token
    pub token: usize,
    /// The offending key
    pub key: String,
}

/// Errors that can occur when parsing a keystroke script
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScriptError {
    /// One or more keys were not recognized; all of them are listed
    #[error("{} unrecognized key(s): {}", .0.len(), describe(.0))]
    UnrecognizedKeys(Vec<KeyError>),
}

impl ScriptError {
    pub fn keys(&self) -> &[KeyError] {
        match self {
            Self::UnrecognizedKeys(keys) => keys,
        }
    }
}

fn describe(keys: &[KeyError]) -> String {
    keys.iter()
        .map(|k| format!("'{}'", k.key))
        .collect::<Vec<_>>()
        .join(", ")
}
