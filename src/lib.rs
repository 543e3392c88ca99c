// SPDX-License-Identifier: PMPL-1.0-or-later

//! vitebo-i18n: locale handling for the Vitebo site.
//!
//! The site is served in Portuguese at unprefixed paths and in English under
//! `/en`. This crate holds the pieces the page renderer asks for:
//!
//! 1. **Locale table**: supported locales, the default locale and one
//!    translation map per locale, validated once and then read-only.
//! 2. **Lookup**: translation keys resolved with fallback to the default
//!    locale.
//! 3. **Routing**: locale extraction from URLs, locale-aware path
//!    rewriting and the locale segments of statically generated routes.
//!
//! Tables can also be loaded from and exported to JSON/YAML ([`config`])
//! and checked for gaps ([`audit`]).

pub mod audit;
pub mod config;
pub mod error;
pub mod i18n;

pub use error::{I18nError, Result};
pub use i18n::LocaleTable;
