#![forbid(unsafe_code)]

//! Internationalization (i18n) foundation for Cadence.
//!
//! Provides externalized string storage with key-based lookup, locale
//! fallback chains, plural forms, variable interpolation, and the
//! relative-time phrasing used by duration labels.
//!
//! # Role in Cadence
//! `cadence-i18n` isolates localization concerns so form adapters and host
//! UIs can stay deterministic while still supporting multiple languages.
//!
//! # How it fits in the system
//! `cadence-forms` resolves picker labels through the catalog here, and any
//! consumer can phrase a compact duration token relative to now with
//! [`RelativeTimeFormatter`]. The crate depends only on `cadence-duration`,
//! keeping the localization layer reusable and testable.

pub mod catalog;
pub mod plural;
pub mod relative;

pub use catalog::{LocaleStrings, StringCatalog, StringEntry};
pub use plural::{PluralCategory, PluralForms, PluralRule};
pub use relative::{RelativeTimeFormatter, default_catalog};
