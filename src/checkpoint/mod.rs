//! Checkpoint and resume functionality for calculator sessions.
//!
//! The engine itself is ephemeral. A checkpoint lets an embedding
//! application carry a session across restarts, e.g. to restore a pending
//! `9 ×` after the page or process reloads.
//!
//! Two encodings are provided: JSON for readability and bincode for
//! compactness.

use crate::core::{CalculatorState, FormatPolicy, StateHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::{CheckpointError, Encoding};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a calculator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Formatting policy of the session
    pub policy: FormatPolicy,

    /// History bound of the session
    pub history_limit: Option<usize>,

    /// Current state of the calculator
    pub state: CalculatorState,

    /// Recorded transitions
    pub history: StateHistory,
}

impl Checkpoint {
    pub fn new(
        state: CalculatorState,
        history: StateHistory,
        policy: FormatPolicy,
        history_limit: Option<usize>,
    ) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            policy,
            history_limit,
            state,
            history,
        }
    }

    /// Check that the checkpoint describes a session this version can run.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if self.state.display_value.is_empty() {
            return Err(CheckpointError::InconsistentState(
                "display value is empty".to_string(),
            ));
        }
        if !self.state.is_consistent() {
            return Err(CheckpointError::InconsistentState(format!(
                "error flag set but display {:?} is not an error message",
                self.state.display_value
            )));
        }
        match self.history_limit {
            Some(0) => {
                return Err(CheckpointError::InconsistentState(
                    "history limit is zero".to_string(),
                ));
            }
            Some(limit) if self.history.len() > limit => {
                return Err(CheckpointError::InconsistentState(format!(
                    "history holds {} transitions but the limit is {limit}",
                    self.history.len()
                )));
            }
            _ => {}
        }
        let broken = self
            .history
            .transitions()
            .iter()
            .position(|t| !t.from.is_consistent() || !t.to.is_consistent());
        if let Some(index) = broken {
            return Err(CheckpointError::InconsistentState(format!(
                "history entry {index} records an inconsistent state"
            )));
        }
        self.policy.validate()?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckpointError::Encode {
            encoding: Encoding::Json,
            message: e.to_string(),
        })
    }

    /// Decode and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json).map_err(|e| CheckpointError::Decode {
            encoding: Encoding::Json,
            message: e.to_string(),
        })?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode {
            encoding: Encoding::Binary,
            message: e.to_string(),
        })
    }

    /// Decode and validate a binary checkpoint.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes).map_err(|e| CheckpointError::Decode {
            encoding: Encoding::Binary,
            message: e.to_string(),
        })?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}
