//! Two-part frequency editor state.
//!
//! A frequency control is one logical value (`1w`) edited through two
//! sub-fields: a numeric count input and a unit selector. The count
//! sub-field holds raw text while the user types, so the model keeps it as
//! text and only recombines into a token when the text holds a valid count.

use cadence_duration::{ParsedDuration, Unit, format_duration, parse_duration};

/// State for a two-part frequency editor.
///
/// Seeded from a compact token, edited per sub-field, recombined with
/// [`FrequencyField::token`]. A malformed seed count shows up as an empty
/// count sub-field (placeholder state), matching how the console renders
/// broken attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyField {
    /// Raw text of the numeric sub-field.
    count_text: String,
    /// Selected unit.
    unit: Unit,
}

impl Default for FrequencyField {
    fn default() -> Self {
        Self {
            count_text: String::new(),
            unit: Unit::Month,
        }
    }
}

impl FrequencyField {
    /// Create an empty editor (no count, unit selector on months).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor seeded from a compact token.
    ///
    /// A malformed count seeds an empty sub-field; an unrecognized unit
    /// letter falls back to months.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        let parsed = parse_duration(token, false);
        let count_text = if parsed.count.is_nan() {
            tracing::debug!(token, "unparseable frequency seed, clearing count field");
            String::new()
        } else if parsed.count == 0.5 {
            // Keep the grammar's spelling so an untouched editor
            // round-trips the sentinel byte for byte.
            ".5".to_string()
        } else {
            parsed.count.to_string()
        };
        let unit = Unit::from_code(&parsed.units).unwrap_or(Unit::Month);
        Self { count_text, unit }
    }

    /// Set the count sub-field text (builder).
    #[must_use]
    pub fn with_count_text(mut self, text: impl Into<String>) -> Self {
        self.count_text = text.into();
        self
    }

    /// Set the unit selector (builder).
    #[must_use]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Raw text of the count sub-field.
    #[must_use]
    pub fn count_text(&self) -> &str {
        &self.count_text
    }

    /// Selected unit.
    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Replace the count sub-field text.
    pub fn set_count_text(&mut self, text: impl Into<String>) {
        self.count_text = text.into();
    }

    /// Change the unit selector.
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// Numeric value of the count sub-field; `NaN` while the text is not a
    /// digit run or `.5`.
    #[must_use]
    pub fn count(&self) -> f64 {
        let text = self.count_text.as_str();
        if text == ".5" {
            0.5
        } else if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            text.parse().unwrap_or(f64::NAN)
        } else {
            f64::NAN
        }
    }

    /// Recombine the sub-fields into a compact token.
    ///
    /// `None` while the count sub-field does not hold a valid count; the
    /// guard lives here so the codec below stays permissive.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        let count = self.count();
        if count.is_nan() {
            return None;
        }
        Some(format_duration(&ParsedDuration {
            count,
            units: self.unit.code().to_string(),
        }))
    }
}
