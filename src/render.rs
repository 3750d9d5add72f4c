//! Display rendering for the calculator screen.
//!
//! The engine already formats evaluated results, but a typed entry can grow
//! without bound. Before painting, long plain entries are shortened to
//! exponential form using the session's [`FormatPolicy`]: more than
//! `max_plain_digits` characters switch to `large_exponent_digits`
//! fractional digits.

use crate::core::{to_exponential, CalcError, FormatPolicy};

/// Text to paint for a display value.
///
/// An entry too long to fit and too large for an `f64` is shown as the
/// overflow message.
///
/// ```rust
/// use keycalc::core::FormatPolicy;
/// use keycalc::render::render_display;
///
/// let policy = FormatPolicy::STANDARD;
/// assert_eq!(render_display("42", &policy), "42");
/// assert_eq!(render_display("1234567890123", &policy), "1.234568e+12");
/// assert_eq!(render_display("Result too large", &policy), "Result too large");
/// ```
pub fn render_display(display_value: &str, policy: &FormatPolicy) -> String {
    if CalcError::from_display(display_value).is_some() {
        return display_value.to_string();
    }

    let too_long = display_value.chars().count() > policy.max_plain_digits;
    let has_exponent = display_value.contains(['e', 'E']);
    if !too_long || has_exponent {
        return display_value.to_string();
    }

    match display_value.parse::<f64>() {
        Ok(number) if number.is_finite() => to_exponential(number, policy.large_exponent_digits),
        Ok(_) => CalcError::Overflow.to_string(),
        Err(_) => display_value.to_string(),
    }
}
