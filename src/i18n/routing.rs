// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale-aware URL paths.
//!
//! Non-default locales live under a `/<locale>/` prefix; the default locale
//! is served unprefixed unless the table asks for it to be shown. These
//! helpers read the locale back out of a path, rewrite a path for another
//! locale, and tell the static route generator which locales need their own
//! path segment.

use super::LocaleTable;
use url::Url;

/// Locale named by the first segment of `path`, or the default locale.
///
/// # Examples
///
/// ```
/// use vitebo_i18n::i18n::{locale_from_path, LocaleTable};
/// let table = LocaleTable::builtin();
/// assert_eq!(locale_from_path(&table, "/en/blog"), "en");
/// assert_eq!(locale_from_path(&table, "/blog"), "pt-br");
/// ```
pub fn locale_from_path<'a>(table: &'a LocaleTable, path: &str) -> &'a str {
    match path.split('/').nth(1) {
        Some(segment) => table
            .locales()
            .iter()
            .find(|l| l.as_str() == segment)
            .map(String::as_str)
            .unwrap_or_else(|| table.default_locale()),
        None => table.default_locale(),
    }
}

pub fn locale_from_url<'a>(table: &'a LocaleTable, url: &Url) -> &'a str {
    locale_from_path(table, url.path())
}

/// Rewrites paths for a target locale on behalf of one rendered page.
///
/// `current_locale` is the locale of the page doing the rewriting. It is
/// fixed at construction and decides how many leading segments get stripped
/// when linking back to the default locale.
#[derive(Debug, Clone, Copy)]
pub struct PathTranslator<'a> {
    table: &'a LocaleTable,
    locale: &'a str,
    current_locale: &'a str,
}

impl<'a> PathTranslator<'a> {
    pub fn new(table: &'a LocaleTable, locale: &'a str, current_locale: &'a str) -> Self {
        Self {
            table,
            locale,
            current_locale,
        }
    }

    /// Translator for the page at `url`; its current locale is read from
    /// the URL path once, here.
    pub fn for_url(table: &'a LocaleTable, locale: &'a str, url: &Url) -> Self {
        Self::new(table, locale, locale_from_url(table, url))
    }

    pub fn locale(&self) -> &'a str {
        self.locale
    }

    pub fn current_locale(&self) -> &'a str {
        self.current_locale
    }

    /// [`translate_to`](Self::translate_to) using the bound locale.
    pub fn translate(&self, path: &str) -> String {
        self.translate_to(path, self.locale)
    }

    /// Rewrites `path` for `locale`.
    ///
    /// Rules, first match wins:
    /// 1. default locale shown in paths: replace the first segment with
    ///    `locale`
    /// 2. target and current page are both default: drop the empty root
    ///    element only, i.e. return the path as-is
    /// 3. target is default: drop the current page's locale segment
    /// 4. otherwise: prefix `path` with `/locale`
    pub fn translate_to(&self, path: &str, locale: &str) -> String {
        let table = self.table;
        if table.show_default_locale() {
            return format!("/{}/{}", locale, tail(path, 2));
        }
        if table.is_default(locale) && table.is_default(self.current_locale) {
            return format!("/{}", tail(path, 1));
        }
        if table.is_default(locale) {
            return format!("/{}", tail(path, 2));
        }
        format!("/{}{}", locale, path)
    }
}

/// `path` split on `/` with the first `skip` elements removed, rejoined.
fn tail(path: &str, skip: usize) -> String {
    path.split('/').skip(skip).collect::<Vec<_>>().join("/")
}

/// Path segment the static route generator should emit for `locale`:
/// `None` for the default locale when it is served unprefixed.
///
/// # Examples
///
/// ```
/// use vitebo_i18n::i18n::{static_path_locale, LocaleTable};
/// let table = LocaleTable::builtin();
/// assert_eq!(static_path_locale(&table, "pt-br"), None);
/// assert_eq!(static_path_locale(&table, "en"), Some("en"));
/// ```
pub fn static_path_locale<'a>(table: &LocaleTable, locale: &'a str) -> Option<&'a str> {
    if table.show_default_locale() {
        return Some(locale);
    }
    if table.is_default(locale) {
        return None;
    }
    Some(locale)
}

/// [`static_path_locale`] for every declared locale, in declaration order.
pub fn static_path_locales(table: &LocaleTable) -> Vec<Option<&str>> {
    table
        .locales()
        .iter()
        .map(|locale| static_path_locale(table, locale))
        .collect()
}
