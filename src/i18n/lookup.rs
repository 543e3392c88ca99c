// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation lookup with default-locale fallback.

use super::LocaleTable;

/// Look up `key` in `locale`, falling back to the default locale.
///
/// An empty string counts as missing and triggers the fallback. If the key
/// is missing from the default locale too, `None` is returned; rendering
/// nothing is the caller's call.
///
/// # Examples
///
/// ```
/// use vitebo_i18n::i18n::{translate, LocaleTable};
/// let table = LocaleTable::builtin();
/// assert_eq!(translate(&table, "en", "home.title"), Some("Hi, I'm Vitebo"));
/// assert_eq!(translate(&table, "pt-br", "home.title"), Some("Oi, eu sou Vitebo"));
/// assert_eq!(translate(&table, "en", "no.such.key"), None);
/// ```
pub fn translate<'a>(table: &'a LocaleTable, locale: &str, key: &str) -> Option<&'a str> {
    let own = table
        .translations_for(locale)
        .and_then(|map| map.get(key))
        .map(String::as_str)
        .filter(|value| !value.is_empty());
    if own.is_some() {
        return own;
    }

    let fallback = table
        .translations_for(table.default_locale())
        .and_then(|map| map.get(key))
        .map(String::as_str);
    match fallback {
        Some(_) if !table.is_default(locale) => {
            tracing::debug!(locale, key, "translation falls back to default locale");
        }
        None => tracing::debug!(locale, key, "translation key missing"),
        _ => {}
    }
    fallback
}

/// Translations bound to a single locale.
#[derive(Debug, Clone, Copy)]
pub struct Translations<'a> {
    table: &'a LocaleTable,
    locale: &'a str,
}

impl<'a> Translations<'a> {
    pub fn new(table: &'a LocaleTable, locale: &'a str) -> Self {
        Self { table, locale }
    }

    pub fn locale(&self) -> &'a str {
        self.locale
    }

    pub fn t(&self, key: &str) -> Option<&'a str> {
        translate(self.table, self.locale, key)
    }

    /// Like [`t`](Self::t) but returns the key itself when nothing matches.
    pub fn t_or_key<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.t(key).unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TranslationMap;
    use std::collections::BTreeMap;

    fn sparse_table() -> LocaleTable {
        let mut pt = TranslationMap::new();
        pt.insert("greeting".to_string(), "Olá".to_string());
        pt.insert("farewell".to_string(), "Tchau".to_string());
        pt.insert("blank".to_string(), String::new());
        let mut en = TranslationMap::new();
        en.insert("greeting".to_string(), "Hello".to_string());
        en.insert("farewell".to_string(), String::new());
        en.insert("only.en".to_string(), "English only".to_string());

        let mut translations = BTreeMap::new();
        translations.insert("pt-br".to_string(), pt);
        translations.insert("en".to_string(), en);
        LocaleTable::new(
            vec!["pt-br".to_string(), "en".to_string()],
            "pt-br",
            false,
            translations,
        )
        .unwrap()
    }

    #[test]
    fn default_locale_keys_all_resolve() {
        let table = LocaleTable::builtin();
        for (key, value) in table.translations_for("pt-br").unwrap() {
            assert_eq!(translate(&table, "pt-br", key), Some(value.as_str()));
        }
    }

    #[test]
    fn own_value_wins() {
        let table = sparse_table();
        assert_eq!(translate(&table, "en", "greeting"), Some("Hello"));
        assert_eq!(translate(&table, "en", "only.en"), Some("English only"));
    }

    #[test]
    fn empty_value_falls_back_to_default() {
        let table = sparse_table();
        assert_eq!(translate(&table, "en", "farewell"), Some("Tchau"));
    }

    #[test]
    fn empty_default_value_is_returned_as_is() {
        let table = sparse_table();
        assert_eq!(translate(&table, "pt-br", "blank"), Some(""));
        assert_eq!(translate(&table, "en", "blank"), Some(""));
    }

    #[test]
    fn missing_everywhere_is_none() {
        let table = sparse_table();
        assert_eq!(translate(&table, "en", "nope"), None);
        assert_eq!(translate(&table, "pt-br", "nope"), None);
    }

    #[test]
    fn undeclared_locale_reads_default() {
        let table = sparse_table();
        assert_eq!(translate(&table, "fr", "greeting"), Some("Olá"));
    }

    #[test]
    fn bound_translator() {
        let table = LocaleTable::builtin();
        let t = table.translator("en");
        assert_eq!(t.locale(), "en");
        assert_eq!(t.t("nav.blog"), Some("Blog"));
        assert_eq!(t.t("langugae-picker.pt-br"), Some("Portuguese"));
        assert_eq!(t.t_or_key("nonexistent.key"), "nonexistent.key");
    }
}
