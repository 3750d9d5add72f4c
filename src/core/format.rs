//! Numeric formatting policy applied to every evaluated result.
//!
//! Formatting is a single ordered pipeline of total functions:
//! NaN check, infinity check, small-magnitude check, rounding, length check.
//! Keeping the order fixed makes the output independent of the platform's
//! default float-to-string conventions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Calculation failures, displayed in place of a number.
///
/// The `Display` text of each variant is exactly the sentinel string the
/// calculator shows.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalcError {
    #[error("Error")]
    DivisionByZero,

    #[error("Invalid operation")]
    InvalidOperation,

    #[error("Result too large")]
    Overflow,
}

impl CalcError {
    pub const ALL: [CalcError; 3] = [
        CalcError::DivisionByZero,
        CalcError::InvalidOperation,
        CalcError::Overflow,
    ];

    /// Recognize a sentinel string.
    pub fn from_display(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.to_string() == text)
    }
}

/// Errors reported by [`FormatPolicy::validate`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PolicyError {
    #[error("Decimal places ({0}) must not exceed {max}", max = FormatPolicy::MAX_DECIMAL_PLACES)]
    TooManyDecimalPlaces(u32),

    #[error("Exponent digits ({0}) must not exceed {max}", max = FormatPolicy::MAX_EXPONENT_DIGITS)]
    TooManyExponentDigits(usize),

    #[error("Maximum plain digits must be at least 1")]
    ZeroPlainDigits,

    #[error("Small-value threshold must be positive and finite (got {0})")]
    InvalidThreshold(f64),
}

/// Tunables of the formatting pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormatPolicy {
    /// Results are rounded to this many decimal places.
    pub decimal_places: u32,

    /// Nonzero results below this magnitude use exponential notation.
    pub small_threshold: f64,

    /// Fractional digits of the mantissa for small results.
    pub small_exponent_digits: usize,

    /// Plain renderings with more digits than this switch to exponential.
    pub max_plain_digits: usize,

    /// Fractional digits of the mantissa for long results.
    pub large_exponent_digits: usize,
}

impl FormatPolicy {
    pub const MAX_DECIMAL_PLACES: u32 = 15;
    pub const MAX_EXPONENT_DIGITS: usize = 16;

    /// The policy of the standard calculator.
    pub const STANDARD: FormatPolicy = FormatPolicy {
        decimal_places: 8,
        small_threshold: 1e-5,
        small_exponent_digits: 4,
        max_plain_digits: 12,
        large_exponent_digits: 6,
    };

    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.decimal_places > Self::MAX_DECIMAL_PLACES {
            return Err(PolicyError::TooManyDecimalPlaces(self.decimal_places));
        }
        for digits in [self.small_exponent_digits, self.large_exponent_digits] {
            if digits > Self::MAX_EXPONENT_DIGITS {
                return Err(PolicyError::TooManyExponentDigits(digits));
            }
        }
        if self.max_plain_digits == 0 {
            return Err(PolicyError::ZeroPlainDigits);
        }
        if !(self.small_threshold.is_finite() && self.small_threshold > 0.0) {
            return Err(PolicyError::InvalidThreshold(self.small_threshold));
        }
        Ok(())
    }
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Format a raw result for display.
///
/// ```
/// use keycalc::core::{format_result, CalcError, FormatPolicy};
///
/// let policy = FormatPolicy::STANDARD;
/// assert_eq!(format_result(0.1 + 0.2, &policy), Ok("0.3".to_string()));
/// assert_eq!(format_result(1e-10, &policy), Ok("1.0000e-10".to_string()));
/// assert_eq!(format_result(f64::INFINITY, &policy), Err(CalcError::Overflow));
/// ```
pub fn format_result(value: f64, policy: &FormatPolicy) -> Result<String, CalcError> {
    if value.is_nan() {
        return Err(CalcError::InvalidOperation);
    }
    if value.is_infinite() {
        return Err(CalcError::Overflow);
    }
    if value != 0.0 && value.abs() < policy.small_threshold {
        return Ok(to_exponential(value, policy.small_exponent_digits));
    }

    let rounded = round_to(value, policy.decimal_places);
    let plain = plain_decimal(rounded);
    if count_digits(&plain) > policy.max_plain_digits {
        return Ok(to_exponential(rounded, policy.large_exponent_digits));
    }
    Ok(plain)
}

/// Render `value` as `d.ddde±x` with `digits` fractional mantissa digits.
pub fn to_exponential(value: f64, digits: usize) -> String {
    let raw = format!("{value:.digits$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw,
    }
}

/// Above 2^52 every f64 is an integer, so rounding the scaled value is a no-op.
const INTEGRAL_LIMIT: f64 = 4_503_599_627_370_496.0;

fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_LIMIT {
        return value;
    }
    scaled.round() / scale
}

fn plain_decimal(value: f64) -> String {
    if value == 0.0 {
        // also covers -0.0
        return "0".to_string();
    }
    value.to_string()
}

fn count_digits(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}
