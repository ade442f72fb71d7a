#![forbid(unsafe_code)]

//! Compact duration-token codec for Cadence.
//!
//! Subscription frequency fields, offset controls, and relative-time labels
//! all exchange recurring intervals as compact tokens: `<count><unit-letter>`
//! with units `d`, `w`, `m`, `y`, plus the half-month sentinel `.5m`. This
//! crate converts between that token form and structured values, in both
//! directions.
//!
//! # Role in Cadence
//! `cadence-duration` is the leaf crate every other layer builds on. It has
//! no opinion about locales, labels, or form state; it only speaks the token
//! grammar.
//!
//! # This crate provides
//! - [`parse_duration`] / [`format_duration`], the permissive pair that
//!   mirrors how tolerant form code consumes tokens: malformed counts come
//!   back as `NaN` instead of an error, and unknown unit text passes
//!   through untouched.
//! - [`Interval`], a validated model with [`std::str::FromStr`] /
//!   [`std::fmt::Display`] and typed [`ParseIntervalError`]s, for callers
//!   that want guarantees instead of degradation.
//! - [`Unit`], the four recurrence units and their letter/name codes.
//!
//! # How it fits in the system
//! `cadence-i18n` parses tokens in full mode to phrase them per locale, and
//! `cadence-forms` round-trips tokens through two-part editors. Both stay
//! ignorant of the grammar details captured here.

/// Validated interval model and strict parsing.
pub mod interval;
/// Permissive token parse/format.
pub mod token;
/// Recurrence units and their codes.
pub mod unit;

pub use interval::{Interval, IntervalCount, ParseIntervalError};
pub use token::{ParsedDuration, format_duration, parse_duration};
pub use unit::Unit;
