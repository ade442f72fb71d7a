#![forbid(unsafe_code)]

//! Form-state adapters between duration tokens and editor controls.
//!
//! The admin console edits recurring intervals through composite controls:
//! a numeric sub-field paired with a unit selector, offset fields bounded
//! by a min/max window, and preset pickers. This crate models that state
//! without any rendering or DOM dependency, so hosts only wire values and
//! events.
//!
//! # Role in Cadence
//! `cadence-forms` is the glue layer: it consumes the codec from
//! `cadence-duration` bidirectionally and resolves labels through
//! `cadence-i18n`. The NaN guard for malformed counts lives here, upstream
//! of the permissive codec, so broken input renders as placeholder state
//! instead of crashing.

/// Two-part frequency editor state.
pub mod frequency;
/// Min/max offset window for interval controls.
pub mod offset;
/// Preset frequency options with locale-aware labels.
pub mod picker;

pub use frequency::FrequencyField;
pub use offset::{OffsetWindow, OffsetWindowError};
pub use picker::{FrequencyOption, FrequencyPicker, STANDARD_PRESETS};
