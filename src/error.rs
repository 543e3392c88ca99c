// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error type for building and loading locale tables.
//!
//! Runtime lookups never fail: an unknown locale degrades to the default
//! locale and a missing key yields `None`. Errors only surface while a
//! [`LocaleTable`](crate::i18n::LocaleTable) is being constructed or read
//! from disk.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, I18nError>;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("locale table must declare at least one locale")]
    NoLocales,

    #[error("invalid locale identifier {0:?} (expected lowercase subtags like \"pt-br\")")]
    InvalidLocale(String),

    #[error("locale {0:?} is listed more than once")]
    DuplicateLocale(String),

    #[error("default locale {0:?} is not one of the declared locales")]
    UnknownDefaultLocale(String),

    #[error("locale {0:?} has no translation table")]
    MissingTranslations(String),

    #[error("translation table given for undeclared locale {0:?}")]
    UnlistedTranslations(String),

    #[error("unsupported catalog format for {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("serializing catalog: {0}")]
    Serialize(String),
}
