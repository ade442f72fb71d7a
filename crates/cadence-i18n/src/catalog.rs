//! Externalized string storage with key lookup and locale fallback chains.
//!
//! Lookup never fails hard: a missing key or locale yields `None`, and the
//! fallback chain (exact tag → primary subtag → root locale) means partial
//! translations degrade to the root language instead of erroring. This is
//! the same tolerant contract the rest of the workspace follows.

use std::collections::BTreeMap;

use crate::plural::{PluralForms, PluralRule};

/// Root locale every fallback chain terminates at.
pub const ROOT_LOCALE: &str = "en";

/// A single catalog entry: a plain string or a set of plural forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringEntry {
    /// A message with no plural variation.
    Simple(String),
    /// A message with per-category plural forms.
    Plural(PluralForms),
}

impl StringEntry {
    /// The entry's base text: the simple message, or the `other` form.
    #[must_use]
    pub fn base_text(&self) -> &str {
        match self {
            StringEntry::Simple(text) => text,
            StringEntry::Plural(forms) => &forms.other,
        }
    }
}

/// Strings for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStrings {
    entries: BTreeMap<String, StringEntry>,
}

impl LocaleStrings {
    /// Create an empty locale table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a plain message.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries
            .insert(key.into(), StringEntry::Simple(text.into()));
    }

    /// Insert a message with plural forms.
    pub fn insert_plural(&mut self, key: impl Into<String>, forms: PluralForms) {
        self.entries.insert(key.into(), StringEntry::Plural(forms));
    }

    /// Look up an entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StringEntry> {
        self.entries.get(key)
    }

    /// Number of keys in this locale.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this locale has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Keyed string catalog with a locale fallback chain.
///
/// Lookup walks exact tag → primary subtag → [`ROOT_LOCALE`], so `en-US`
/// resolves through `en`, and an unknown locale resolves entirely through
/// the root. Callers that need hard failures for missing translations can
/// check the `Option` results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringCatalog {
    locales: BTreeMap<String, LocaleStrings>,
}

impl StringCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a locale's strings.
    pub fn add_locale(&mut self, tag: impl Into<String>, strings: LocaleStrings) {
        self.locales.insert(tag.into(), strings);
    }

    /// Locale tags present in the catalog.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Resolve an entry through the fallback chain.
    #[must_use]
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&StringEntry> {
        let primary = locale.split(['-', '_']).next().unwrap_or_default();
        for tag in [locale, primary, ROOT_LOCALE] {
            if let Some(entry) = self.locales.get(tag).and_then(|table| table.get(key)) {
                return Some(entry);
            }
        }
        None
    }

    /// Get a message's base text.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.lookup(locale, key).map(StringEntry::base_text)
    }

    /// Get the plural form of a message for a count.
    ///
    /// The plural rule comes from the requested locale even when the entry
    /// resolves through fallback, so an `en` fallback string still
    /// pluralizes sensibly for the caller's count.
    #[must_use]
    pub fn get_plural(&self, locale: &str, key: &str, count: f64) -> Option<&str> {
        match self.lookup(locale, key)? {
            StringEntry::Simple(text) => Some(text),
            StringEntry::Plural(forms) => {
                let category = PluralRule::for_locale(locale).categorize(count);
                Some(forms.select(category))
            }
        }
    }

    /// Format a message, interpolating `{name}` placeholders from `args`.
    #[must_use]
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, key).map(|text| interpolate(text, args))
    }

    /// Format a plural message for a count.
    ///
    /// `{count}` is auto-injected and may be overridden by `args`.
    #[must_use]
    pub fn format_plural(
        &self,
        locale: &str,
        key: &str,
        count: f64,
        args: &[(&str, &str)],
    ) -> Option<String> {
        let text = self.get_plural(locale, key, count)?;
        let count_text = count.to_string();
        let mut merged: Vec<(&str, &str)> = Vec::with_capacity(args.len() + 1);
        merged.extend_from_slice(args);
        if !args.iter().any(|(name, _)| *name == "count") {
            merged.push(("count", count_text.as_str()));
        }
        Some(interpolate(text, &merged))
    }
}

/// Single-pass `{name}` interpolation.
///
/// Replacement values are never rescanned, so substitution cannot recurse.
/// Placeholders with no matching arg (and stray braces) pass through
/// unchanged.
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match after_open.find('}') {
            Some(close) => {
                let name = &after_open[..close];
                match args.iter().find(|(arg, _)| *arg == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            None => {
                // Unclosed brace: emit the tail verbatim.
                out.push('{');
                rest = after_open;
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plural::PluralForms;

    fn catalog_with(locale: &str, key: &str, text: &str) -> StringCatalog {
        let mut strings = LocaleStrings::new();
        strings.insert(key, text);
        let mut catalog = StringCatalog::new();
        catalog.add_locale(locale, strings);
        catalog
    }

    #[test]
    fn missing_key_and_locale_return_none() {
        let catalog = StringCatalog::new();
        assert_eq!(catalog.get("en", "greeting"), None);
        assert_eq!(catalog.get_plural("en", "greeting", 1.0), None);
        assert_eq!(catalog.format("en", "greeting", &[]), None);
    }

    #[test]
    fn exact_tag_wins_over_fallback() {
        let mut catalog = catalog_with("en", "greeting", "Hello");
        let mut us = LocaleStrings::new();
        us.insert("greeting", "Howdy");
        catalog.add_locale("en-US", us);

        assert_eq!(catalog.get("en-US", "greeting"), Some("Howdy"));
        assert_eq!(catalog.get("en-GB", "greeting"), Some("Hello"));
    }

    #[test]
    fn unknown_locale_falls_back_to_root() {
        let catalog = catalog_with("en", "greeting", "Hello");
        assert_eq!(catalog.get("zz-ZZ", "greeting"), Some("Hello"));
        assert_eq!(catalog.get("", "greeting"), Some("Hello"));
    }

    #[test]
    fn interpolation_replaces_known_args() {
        let catalog = catalog_with("en", "greeting", "Hello {name}!");
        assert_eq!(
            catalog.format("en", "greeting", &[("name", "Ada")]),
            Some("Hello Ada!".to_string())
        );
    }

    #[test]
    fn interpolation_preserves_unknown_placeholders() {
        let catalog = catalog_with("en", "greeting", "Hello {name}!");
        assert_eq!(
            catalog.format("en", "greeting", &[]),
            Some("Hello {name}!".to_string())
        );
    }

    #[test]
    fn interpolation_is_not_recursive() {
        let catalog = catalog_with("en", "greeting", "Hello {name}!");
        assert_eq!(
            catalog.format("en", "greeting", &[("name", "{other}")]),
            Some("Hello {other}!".to_string())
        );
        assert_eq!(
            catalog.format("en", "greeting", &[("name", "{name}")]),
            Some("Hello {name}!".to_string())
        );
    }

    #[test]
    fn interpolation_keeps_unclosed_braces() {
        assert_eq!(interpolate("tail {unclosed", &[]), "tail {unclosed");
    }

    #[test]
    fn plural_lookup_selects_by_locale_rule() {
        let mut en = LocaleStrings::new();
        en.insert_plural("items", PluralForms::simple("{count} item", "{count} items"));
        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", en);

        assert_eq!(
            catalog.format_plural("en", "items", 1.0, &[]),
            Some("1 item".to_string())
        );
        assert_eq!(
            catalog.format_plural("en", "items", 3.0, &[]),
            Some("3 items".to_string())
        );
        assert_eq!(
            catalog.format_plural("en", "items", 0.5, &[]),
            Some("0.5 items".to_string())
        );
    }
}
