//! Build errors for the session builder.

use crate::core::PolicyError;
use thiserror::Error;

/// Errors that can occur when building a calculator session.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Invalid format policy: {0}")]
    InvalidPolicy(#[from] PolicyError),

    #[error("History limit must be at least 1. Omit .history_limit() for unbounded history")]
    ZeroHistoryLimit,

    #[error("Initial state is inconsistent (display: {display:?})")]
    InconsistentInitialState { display: String },
}
