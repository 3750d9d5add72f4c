//! Builder API for configuring calculator sessions.
//!
//! This module provides the fluent [`SessionBuilder`]; the formatting policy
//! itself lives in [`crate::core::FormatPolicy`].

pub mod error;
pub mod session;

pub use error::BuildError;
pub use session::SessionBuilder;
