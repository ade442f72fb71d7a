//! Plural categories and per-locale plural selection rules.

/// CLDR-style plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// Explicit zero form (used by some locales).
    Zero,
    /// Singular.
    One,
    /// Dual.
    Two,
    /// Paucal.
    Few,
    /// Large-count form.
    Many,
    /// Everything else.
    Other,
}

/// Built-in plural selection rules.
///
/// Covers the locales the built-in catalog ships. [`PluralRule::for_locale`]
/// falls back to `English` for tags it does not recognize, so selection is
/// total over arbitrary locale strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// One at exactly ±1, Other everywhere else.
    English,
    /// One below two (including fractions), Other from two up.
    French,
    /// One/Few/Many split on the last decimal digits; fractions are Other.
    Russian,
    /// No plural distinction; always Other.
    CJK,
}

impl PluralRule {
    /// Select the rule for a locale tag by primary subtag.
    ///
    /// Never fails: unknown or malformed tags get the English rule.
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        let primary = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "fr" => PluralRule::French,
            "ru" => PluralRule::Russian,
            "ja" | "ko" | "zh" => PluralRule::CJK,
            _ => PluralRule::English,
        }
    }

    /// Categorize a count.
    ///
    /// Negative counts categorize by absolute value; non-finite counts are
    /// Other.
    #[must_use]
    pub fn categorize(self, count: f64) -> PluralCategory {
        let magnitude = count.abs();
        if !magnitude.is_finite() {
            return PluralCategory::Other;
        }
        let integral = magnitude.fract() == 0.0;
        match self {
            PluralRule::English => {
                if integral && magnitude == 1.0 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::French => {
                if magnitude < 2.0 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralRule::Russian => {
                if !integral {
                    return PluralCategory::Other;
                }
                // Only the trailing digits matter, so clamp the cast.
                let n = if magnitude >= 1e15 {
                    return PluralCategory::Many;
                } else {
                    magnitude as u64
                };
                let mod10 = n % 10;
                let mod100 = n % 100;
                if mod10 == 1 && mod100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            PluralRule::CJK => PluralCategory::Other,
        }
    }
}

/// Per-category message forms for one key.
///
/// Empty strings mean "form not provided"; [`PluralForms::select`] falls
/// back to `other`, so a catalog only has to fill in the forms its locale
/// actually distinguishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralForms {
    /// Zero form.
    pub zero: String,
    /// Singular form.
    pub one: String,
    /// Dual form.
    pub two: String,
    /// Paucal form.
    pub few: String,
    /// Large-count form.
    pub many: String,
    /// Fallback form; should always be provided.
    pub other: String,
}

impl PluralForms {
    /// Build from the two forms every locale has.
    #[must_use]
    pub fn simple(one: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            other: other.into(),
            ..Self::default()
        }
    }

    /// Select the form for a category, falling back to `other`.
    #[must_use]
    pub fn select(&self, category: PluralCategory) -> &str {
        let form = match category {
            PluralCategory::Zero => &self.zero,
            PluralCategory::One => &self.one,
            PluralCategory::Two => &self.two,
            PluralCategory::Few => &self.few,
            PluralCategory::Many => &self.many,
            PluralCategory::Other => &self.other,
        };
        if form.is_empty() { &self.other } else { form }
    }
}
