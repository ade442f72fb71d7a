//! Validated interval model for the compact token grammar.
//!
//! [`Interval`] is the strict counterpart to the permissive
//! [`parse_duration`](crate::token::parse_duration): parsing goes through
//! [`std::str::FromStr`] and rejects malformed tokens with a typed error
//! instead of degrading to `NaN`. Values that made it into an `Interval`
//! always serialize back to a well-formed token.

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::token::{ParsedDuration, split_token};
use crate::unit::Unit;

/// Count of a validated interval.
///
/// The grammar admits exactly one fractional count, the literal `.5`;
/// everything else is a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalCount {
    /// A whole-number count.
    Whole(u32),
    /// The literal `.5` count.
    Half,
}

impl IntervalCount {
    /// Numeric value of the count.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            IntervalCount::Whole(n) => f64::from(n),
            IntervalCount::Half => 0.5,
        }
    }
}

/// A validated recurring interval: a count and a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    count: IntervalCount,
    unit: Unit,
}

impl Interval {
    /// The half-month sentinel, `.5m` (twice a month).
    pub const HALF_MONTH: Self = Self {
        count: IntervalCount::Half,
        unit: Unit::Month,
    };

    /// Create an interval from a count and a unit.
    #[must_use]
    pub const fn new(count: IntervalCount, unit: Unit) -> Self {
        Self { count, unit }
    }

    /// Create a whole-count interval.
    #[must_use]
    pub const fn whole(count: u32, unit: Unit) -> Self {
        Self {
            count: IntervalCount::Whole(count),
            unit,
        }
    }

    /// The interval's count.
    #[must_use]
    pub const fn count(&self) -> IntervalCount {
        self.count
    }

    /// The interval's unit.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Approximate calendar length in days, for ordering and clamping.
    ///
    /// Uses the conventional constants from [`Unit::approx_days`], so `1w`
    /// and `7d` compare equal here while staying distinct values.
    #[must_use]
    pub fn approx_days(&self) -> f64 {
        self.count.value() * f64::from(self.unit.approx_days())
    }

    /// View as the permissive `{count, units}` shape.
    ///
    /// `full` expands the unit letter to its English name, matching
    /// [`parse_duration`](crate::token::parse_duration) in full mode.
    #[must_use]
    pub fn to_parsed(&self, full: bool) -> ParsedDuration {
        ParsedDuration {
            count: self.count.value(),
            units: if full {
                self.unit.name().to_string()
            } else {
                self.unit.code().to_string()
            },
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            IntervalCount::Whole(n) => write!(f, "{}{}", n, self.unit.code()),
            IntervalCount::Half => write!(f, ".5{}", self.unit.code()),
        }
    }
}

// =========================================================================
// ParseIntervalError
// =========================================================================

/// Errors from strict interval parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIntervalError {
    /// The input was empty.
    Empty,
    /// The count prefix is not a digit run or the literal `.5`.
    InvalidCount {
        /// The offending count prefix (may be empty).
        count: String,
    },
    /// The unit suffix is not one of the compact letter codes.
    UnknownUnit {
        /// The offending unit text.
        unit: String,
    },
}

impl fmt::Display for ParseIntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty interval token"),
            Self::InvalidCount { count } => {
                write!(f, "invalid interval count '{count}': expected digits or '.5'")
            }
            Self::UnknownUnit { unit } => {
                write!(f, "unknown interval unit '{unit}': expected one of d, w, m, y")
            }
        }
    }
}

impl std::error::Error for ParseIntervalError {}

impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseIntervalError::Empty);
        }
        let (count_str, unit_str) = split_token(s);
        let count = if count_str == ".5" {
            IntervalCount::Half
        } else {
            let n = count_str
                .parse::<u32>()
                .map_err(|_| ParseIntervalError::InvalidCount {
                    count: count_str.to_string(),
                })?;
            IntervalCount::Whole(n)
        };
        let unit = Unit::from_code(unit_str).ok_or_else(|| ParseIntervalError::UnknownUnit {
            unit: unit_str.to_string(),
        })?;
        Ok(Self { count, unit })
    }
}

// Intervals cross the form/attribute boundary as their token text, so the
// serde form is the compact token, not a struct.

impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(de::Error::custom)
    }
}
