//! Locale-aware relative-time phrasing for compact duration tokens.
//!
//! Turns `2w` into "in 2 weeks" (or "hace 2 semanas", "через 2 недели", …).
//! One deliberate domain rule lives here: the half-month sentinel `.5m` is
//! phrased as two weeks, because "in 0.5 months" reads as nonsense on a
//! billing screen while twice-monthly subscriptions genuinely renew on a
//! two-week rhythm. No other value is rewritten.

use cadence_duration::{ParsedDuration, Unit, parse_duration};

use crate::catalog::{LocaleStrings, StringCatalog};
use crate::plural::PluralForms;

/// Catalog key for the future-tense wrapper, e.g. "in {phrase}".
pub const KEY_FUTURE: &str = "relative.future";
/// Catalog key for the past-tense wrapper, e.g. "{phrase} ago".
pub const KEY_PAST: &str = "relative.past";
/// Catalog key for the count-and-unit phrase, e.g. "{count} {unit}".
pub const KEY_PHRASE: &str = "relative.phrase";

fn unit_key(unit_name: &str) -> String {
    format!("unit.{unit_name}")
}

/// Formats compact duration tokens as relative-time phrases.
///
/// Built over a [`StringCatalog`]; an unknown locale resolves through the
/// catalog's fallback chain rather than erroring, and a malformed token
/// yields `None` so callers can render placeholder text.
#[derive(Debug, Clone)]
pub struct RelativeTimeFormatter {
    catalog: StringCatalog,
    locale: String,
}

impl RelativeTimeFormatter {
    /// Create a formatter for `locale` over the built-in catalog.
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

    /// The formatter's locale tag.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Phrase a compact duration token, e.g. `2w` → "in 2 weeks".
    ///
    /// The token is parsed in full mode; a `{0.5, month}` result phrases as
    /// `{2, week}`. Returns `None` when the token's count is malformed or
    /// the catalog lacks the needed entries.
    #[must_use]
    pub fn format_token(&self, token: &str) -> Option<String> {
        let parsed = parse_duration(token, true);
        if parsed.count.is_nan() {
            return None;
        }
        let (count, unit_name) = substitute_half_month(&parsed);
        self.phrase(count, unit_name)
    }

    /// Phrase an explicit count and unit, with no sentinel substitution.
    #[must_use]
    pub fn format_count(&self, count: f64, unit: Unit) -> Option<String> {
        if count.is_nan() {
            return None;
        }
        self.phrase(count, unit.name())
    }

    fn phrase(&self, count: f64, unit_name: &str) -> Option<String> {
        let magnitude = count.abs();
        let unit_text = self
            .catalog
            .get_plural(&self.locale, &unit_key(unit_name), magnitude)?;
        let count_text = magnitude.to_string();
        let phrase = self.catalog.format(
            &self.locale,
            KEY_PHRASE,
            &[("count", count_text.as_str()), ("unit", unit_text)],
        )?;
        let tense_key = if count < 0.0 { KEY_PAST } else { KEY_FUTURE };
        self.catalog
            .format(&self.locale, tense_key, &[("phrase", &phrase)])
    }
}

/// The half-month sentinel phrases as two weeks; nothing else is rewritten.
fn substitute_half_month(parsed: &ParsedDuration) -> (f64, &str) {
    if parsed.count == 0.5 && parsed.units == "month" {
        (2.0, "week")
    } else {
        (parsed.count, parsed.units.as_str())
    }
}

/// Built-in catalog: `en` (root), `es`, `fr`, `ru`.
///
/// Also carries the frequency-picker labels (`frequency.*`); locales that
/// omit a key fall back along the catalog chain.
#[must_use]
pub fn default_catalog() -> StringCatalog {
    let mut catalog = StringCatalog::new();

    let mut en = LocaleStrings::new();
    en.insert(KEY_FUTURE, "in {phrase}");
    en.insert(KEY_PAST, "{phrase} ago");
    en.insert(KEY_PHRASE, "{count} {unit}");
    en.insert_plural("unit.day", PluralForms::simple("day", "days"));
    en.insert_plural("unit.week", PluralForms::simple("week", "weeks"));
    en.insert_plural("unit.month", PluralForms::simple("month", "months"));
    en.insert_plural("unit.year", PluralForms::simple("year", "years"));
    en.insert("frequency.every-one", "every {unit}");
    en.insert("frequency.every", "every {count} {unit}");
    en.insert("frequency.twice-monthly", "twice a month");
    catalog.add_locale("en", en);

    let mut es = LocaleStrings::new();
    es.insert(KEY_FUTURE, "en {phrase}");
    es.insert(KEY_PAST, "hace {phrase}");
    es.insert(KEY_PHRASE, "{count} {unit}");
    es.insert_plural("unit.day", PluralForms::simple("d\u{ed}a", "d\u{ed}as"));
    es.insert_plural("unit.week", PluralForms::simple("semana", "semanas"));
    es.insert_plural("unit.month", PluralForms::simple("mes", "meses"));
    es.insert_plural("unit.year", PluralForms::simple("a\u{f1}o", "a\u{f1}os"));
    es.insert("frequency.every-one", "cada {unit}");
    es.insert("frequency.every", "cada {count} {unit}");
    es.insert("frequency.twice-monthly", "dos veces al mes");
    catalog.add_locale("es", es);

    let mut fr = LocaleStrings::new();
    fr.insert(KEY_FUTURE, "dans {phrase}");
    fr.insert(KEY_PAST, "il y a {phrase}");
    fr.insert(KEY_PHRASE, "{count} {unit}");
    fr.insert_plural("unit.day", PluralForms::simple("jour", "jours"));
    fr.insert_plural("unit.week", PluralForms::simple("semaine", "semaines"));
    fr.insert_plural("unit.month", PluralForms::simple("mois", "mois"));
    fr.insert_plural("unit.year", PluralForms::simple("an", "ans"));
    catalog.add_locale("fr", fr);

    let mut ru = LocaleStrings::new();
    ru.insert(KEY_FUTURE, "\u{447}\u{435}\u{440}\u{435}\u{437} {phrase}");
    ru.insert(KEY_PAST, "{phrase} \u{43d}\u{430}\u{437}\u{430}\u{434}");
    ru.insert(KEY_PHRASE, "{count} {unit}");
    ru.insert_plural(
        "unit.day",
        PluralForms {
            one: "\u{434}\u{435}\u{43d}\u{44c}".into(),
            few: "\u{434}\u{43d}\u{44f}".into(),
            many: "\u{434}\u{43d}\u{435}\u{439}".into(),
            other: "\u{434}\u{43d}\u{44f}".into(),
            ..PluralForms::default()
        },
    );
    ru.insert_plural(
        "unit.week",
        PluralForms {
            one: "\u{43d}\u{435}\u{434}\u{435}\u{43b}\u{44e}".into(),
            few: "\u{43d}\u{435}\u{434}\u{435}\u{43b}\u{438}".into(),
            many: "\u{43d}\u{435}\u{434}\u{435}\u{43b}\u{44c}".into(),
            other: "\u{43d}\u{435}\u{434}\u{435}\u{43b}\u{438}".into(),
            ..PluralForms::default()
        },
    );
    ru.insert_plural(
        "unit.month",
        PluralForms {
            one: "\u{43c}\u{435}\u{441}\u{44f}\u{446}".into(),
            few: "\u{43c}\u{435}\u{441}\u{44f}\u{446}\u{430}".into(),
            many: "\u{43c}\u{435}\u{441}\u{44f}\u{446}\u{435}\u{432}".into(),
            other: "\u{43c}\u{435}\u{441}\u{44f}\u{446}\u{430}".into(),
            ..PluralForms::default()
        },
    );
    ru.insert_plural(
        "unit.year",
        PluralForms {
            one: "\u{433}\u{43e}\u{434}".into(),
            few: "\u{433}\u{43e}\u{434}\u{430}".into(),
            many: "\u{43b}\u{435}\u{442}".into(),
            other: "\u{433}\u{43e}\u{434}\u{430}".into(),
            ..PluralForms::default()
        },
    );
    catalog.add_locale("ru", ru);

    catalog
}
