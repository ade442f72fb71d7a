//! Preset frequency options with locale-aware labels.
//!
//! Pickers offer a fixed menu of common billing cadences rather than a free
//! editor. Labels resolve through the i18n catalog: `2w` becomes
//! "every 2 weeks", and the half-month sentinel gets its own phrase,
//! "twice a month".

use cadence_duration::{Interval, IntervalCount};
use cadence_i18n::{StringCatalog, default_catalog};

/// The standard preset tokens offered by frequency pickers, shortest first.
pub const STANDARD_PRESETS: [&str; 7] = ["1w", "2w", ".5m", "1m", "3m", "6m", "1y"];

/// A labeled preset option, ready for a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyOption {
    /// The compact token the control submits.
    pub token: String,
    /// The label the control displays.
    pub label: String,
}

/// Resolves picker labels for one locale.
#[derive(Debug, Clone)]
pub struct FrequencyPicker {
    catalog: StringCatalog,
    locale: String,
}

impl FrequencyPicker {
    /// Create a picker for `locale` over the built-in catalog.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            catalog: default_catalog(),
            locale: locale.into(),
        }
    }

    /// Use a caller-supplied catalog instead of the built-in one (builder).
    #[must_use]
    pub fn with_catalog(mut self, catalog: StringCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Label a single token, e.g. `2w` → "every 2 weeks".
    ///
    /// `None` for tokens that fail strict parsing or units the catalog does
    /// not know.
    #[must_use]
    pub fn label(&self, token: &str) -> Option<String> {
        let interval: Interval = token.parse().ok()?;
        if interval == Interval::HALF_MONTH {
            return self
                .catalog
                .get(&self.locale, "frequency.twice-monthly")
                .map(str::to_string);
        }
        let count = interval.count().value();
        let unit_text = self.catalog.get_plural(
            &self.locale,
            &format!("unit.{}", interval.unit().name()),
            count,
        )?;
        if interval.count() == IntervalCount::Whole(1) {
            self.catalog
                .format(&self.locale, "frequency.every-one", &[("unit", unit_text)])
        } else {
            let count_text = count.to_string();
            self.catalog.format(
                &self.locale,
                "frequency.every",
                &[("count", count_text.as_str()), ("unit", unit_text)],
            )
        }
    }

    /// All standard presets with labels.
    ///
    /// Presets the catalog cannot label are skipped rather than shown raw.
    #[must_use]
    pub fn options(&self) -> Vec<FrequencyOption> {
        STANDARD_PRESETS
            .iter()
            .filter_map(|token| {
                self.label(token).map(|label| FrequencyOption {
                    token: (*token).to_string(),
                    label,
                })
            })
            .collect()
    }
}
