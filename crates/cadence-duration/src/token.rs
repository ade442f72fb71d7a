//! Permissive parse/format for compact duration tokens.
//!
//! The grammar is `<count><unit>` where `<count>` is a run of digits or the
//! literal `.5`, and `<unit>` is one of `d`, `w`, `m`, `y`. Malformed input
//! degrades instead of failing: the count comes back as `NaN` and unit text
//! passes through untouched, so calling form code can render a placeholder
//! rather than crash. Callers that want hard errors use
//! [`Interval`](crate::interval::Interval) instead.

use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// Result of permissively parsing a compact duration token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDuration {
    /// Parsed count. `NaN` when the count prefix is not a digit run or `.5`.
    pub count: f64,
    /// Unit text: the compact letter, or the expanded English name in full
    /// mode. Unrecognized unit text passes through unchanged.
    pub units: String,
}

/// Split a token into its `\.?\d+` count prefix and the unit remainder.
///
/// With no leading digits the count prefix is empty and the whole token is
/// unit text.
pub(crate) fn split_token(value: &str) -> (&str, &str) {
    let bytes = value.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'.'));
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return ("", value);
    }
    value.split_at(end)
}

/// Parse a compact duration token.
///
/// `full` expands the unit letter to its English name (`m` → `month`);
/// letters without a mapping pass through unchanged. Never panics: a
/// malformed count yields `NaN` and the caller guards downstream.
///
/// ```
/// use cadence_duration::parse_duration;
///
/// let d = parse_duration(".5m", false);
/// assert_eq!(d.count, 0.5);
/// assert_eq!(d.units, "m");
///
/// assert_eq!(parse_duration("2y", true).units, "year");
/// assert!(parse_duration("abc", false).count.is_nan());
/// ```
#[must_use]
pub fn parse_duration(value: &str, full: bool) -> ParsedDuration {
    let (count_str, unit_str) = split_token(value);
    let count = if count_str == ".5" {
        0.5
    } else if count_str.is_empty() || count_str.starts_with('.') {
        f64::NAN
    } else {
        // All-digit prefix by construction; large counts approximate like
        // any base-10 integer wider than the mantissa.
        count_str.parse::<f64>().unwrap_or(f64::NAN)
    };
    let units = match Unit::from_code(unit_str) {
        Some(unit) if full => unit.name().to_string(),
        _ => unit_str.to_string(),
    };
    ParsedDuration { count, units }
}

/// Serialize a `{count, units}` pair back into a compact token.
///
/// A count of exactly `0.5` serializes as `.5`, never `0.5`, to match the
/// grammar accepted by [`parse_duration`]. No rounding and no pluralization
/// happen at this layer.
#[must_use]
pub fn format_duration(duration: &ParsedDuration) -> String {
    if duration.count == 0.5 {
        format!(".5{}", duration.units)
    } else {
        format!("{}{}", duration.count, duration.units)
    }
}
