//! Binary operators understood by the calculator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A pending binary operation.
///
/// Serialized as its canonical display symbol, so `Multiply` round-trips as
/// `"×"` rather than the keyboard alias `"*"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
    #[serde(rename = "^")]
    Power,
}

/// Returned when text does not name any operator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unrecognized operator '{0}'")]
pub struct UnknownOperator(pub String);

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
    ];

    /// Canonical symbol shown to the user.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Parse a symbol, normalizing the keyboard aliases `*`, `x`, `X` and `/`.
    ///
    /// ```
    /// use keycalc::core::Operator;
    ///
    /// assert_eq!(Operator::parse("*"), Some(Operator::Multiply));
    /// assert_eq!(Operator::parse("÷"), Some(Operator::Divide));
    /// assert_eq!(Operator::parse("%"), None);
    /// ```
    pub fn parse(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" | "x" | "X" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            "^" => Some(Self::Power),
            _ => None,
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Division by zero is not special-cased here; the engine intercepts it
    /// before calling `apply` so it can report the dedicated sentinel.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Power => a.powf(b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownOperator(s.to_string()))
    }
}
