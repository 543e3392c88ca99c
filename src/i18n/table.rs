// SPDX-License-Identifier: PMPL-1.0-or-later

//! The locale table: supported locales, the default locale, path visibility
//! of the default locale, and one translation map per locale.
//!
//! A table is validated once when it is built and never changes afterwards.
//! It is handed by reference to lookups and path rewriting instead of living
//! in a global.

use super::catalog;
use super::lookup::Translations;
use super::routing;
use crate::error::{I18nError, Result};
use std::collections::{BTreeMap, HashSet};

const PATH_BASE: &str = "http://localhost/";

/// Key -> localized text for a single locale.
pub type TranslationMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    locales: Vec<String>,
    default_locale: String,
    show_default_locale: bool,
    translations: BTreeMap<String, TranslationMap>,
}

impl LocaleTable {
    /// Builds a table, checking that the default locale is declared and that
    /// every declared locale (and only those) has a translation map.
    pub fn new(
        locales: Vec<String>,
        default_locale: impl Into<String>,
        show_default_locale: bool,
        translations: BTreeMap<String, TranslationMap>,
    ) -> Result<Self> {
        let default_locale = default_locale.into();

        if locales.is_empty() {
            return Err(I18nError::NoLocales);
        }

        let mut seen = HashSet::new();
        for locale in &locales {
            if !is_valid_locale_id(locale) {
                return Err(I18nError::InvalidLocale(locale.clone()));
            }
            if !seen.insert(locale.as_str()) {
                return Err(I18nError::DuplicateLocale(locale.clone()));
            }
            if !translations.contains_key(locale) {
                return Err(I18nError::MissingTranslations(locale.clone()));
            }
        }

        if !seen.contains(default_locale.as_str()) {
            return Err(I18nError::UnknownDefaultLocale(default_locale));
        }

        if let Some(extra) = translations.keys().find(|k| !seen.contains(k.as_str())) {
            return Err(I18nError::UnlistedTranslations(extra.clone()));
        }

        tracing::debug!(
            locales = ?locales,
            default_locale = %default_locale,
            show_default_locale,
            "locale table built"
        );

        Ok(Self {
            locales,
            default_locale,
            show_default_locale,
            translations,
        })
    }

    /// The site's own table, built from the embedded catalog.
    pub fn builtin() -> Self {
        let locales: Vec<String> = catalog::LOCALES.iter().map(|l| l.to_string()).collect();
        let translations = catalog::LOCALES
            .iter()
            .map(|&locale| {
                let entries = catalog::catalog_for(locale)
                    .unwrap_or_default()
                    .iter()
                    .map(|&(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                (locale.to_string(), entries)
            })
            .collect();

        Self {
            locales,
            default_locale: catalog::DEFAULT_LOCALE.to_string(),
            show_default_locale: catalog::SHOW_DEFAULT_LOCALE,
            translations,
        }
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn show_default_locale(&self) -> bool {
        self.show_default_locale
    }

    /// Whether `locale` is one of the declared locales.
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    pub fn is_default(&self, locale: &str) -> bool {
        self.default_locale == locale
    }

    pub fn translations_for(&self, locale: &str) -> Option<&TranslationMap> {
        self.translations.get(locale)
    }

    /// Translations bound to `locale`, falling back to the default locale.
    pub fn translator<'a>(&'a self, locale: &'a str) -> Translations<'a> {
        Translations::new(self, locale)
    }

    /// Locale of an absolute URL (`https://host/en/blog`) or a bare path
    /// (`/en/blog?page=2`). Bare paths are resolved against a fixed base so
    /// query strings and fragments never reach the segment match.
    pub fn locale_of(&self, input: &str) -> &str {
        let url = url::Url::parse(input).or_else(|_| {
            url::Url::parse(PATH_BASE).and_then(|base| base.join(input))
        });
        match url {
            Ok(url) => routing::locale_from_url(self, &url),
            Err(_) => routing::locale_from_path(self, input),
        }
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Lowercase ASCII alphanumeric subtags joined by `-`, e.g. `en`, `pt-br`.
pub(crate) fn is_valid_locale_id(locale: &str) -> bool {
    !locale.is_empty()
        && locale.split('-').all(|subtag| {
            !subtag.is_empty()
                && subtag
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}
