// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the Vitebo site.
//!
//! ## Supported locales
//!
//! | Code  | Language   | Path prefix |
//! |-------|------------|-------------|
//! | pt-br | Portuguese | none        |
//! | en    | English    | `/en`       |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"home.title"`, `"nav.blog"`.
//! Lookups fall back to the default locale when a key is missing or empty in
//! the requested locale. If the key is missing in the default locale too,
//! the lookup yields `None` (fail-open, never panics).
//!
//! Everything hangs off a [`LocaleTable`] that is built once and passed by
//! reference. The site's own table is embedded at compile time
//! ([`LocaleTable::builtin`]); other tables can be loaded from JSON or YAML
//! through [`crate::config`].

mod catalog;
mod lookup;
mod routing;
mod table;

pub use catalog::{DEFAULT_LOCALE, LOCALES, SHOW_DEFAULT_LOCALE};
pub use lookup::{translate, Translations};
pub use routing::{
    locale_from_path, locale_from_url, static_path_locale, static_path_locales, PathTranslator,
};
pub use table::{LocaleTable, TranslationMap};
