//! Checkpoint error types.

use crate::core::PolicyError;
use std::fmt;
use thiserror::Error;

/// Wire format of a checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Binary,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Binary => f.write_str("binary"),
        }
    }
}

/// Errors that can occur during checkpoint operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckpointError {
    #[error("Failed to encode checkpoint as {encoding}: {message}")]
    Encode { encoding: Encoding, message: String },

    #[error("Failed to decode {encoding} checkpoint: {message}")]
    Decode { encoding: Encoding, message: String },

    /// Written by a newer or older crate version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The saved calculator state breaks a state invariant
    #[error("Checkpoint state is inconsistent: {0}")]
    InconsistentState(String),

    #[error("Checkpoint policy is invalid: {0}")]
    InvalidPolicy(#[from] PolicyError),
}
