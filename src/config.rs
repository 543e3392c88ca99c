// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale tables as JSON or YAML documents.
//!
//! The document shape follows the site generator's `i18n` block:
//!
//! ```yaml
//! defaultLocale: pt-br
//! locales: [pt-br, en]
//! routing:
//!   prefixDefaultLocale: false
//! translations:
//!   pt-br:
//!     nav.blog: Blog
//!   en:
//!     nav.blog: Blog
//! ```

use crate::error::{I18nError, Result};
use crate::i18n::{LocaleTable, TranslationMap};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    pub default_locale: String,
    pub locales: Vec<String>,
    #[serde(default)]
    pub routing: RoutingConfig,
    #[serde(default)]
    pub translations: BTreeMap<String, TranslationMap>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingConfig {
    /// Serve the default locale under its own prefix too.
    #[serde(default)]
    pub prefix_default_locale: bool,
}

impl TryFrom<LocaleConfig> for LocaleTable {
    type Error = I18nError;

    fn try_from(config: LocaleConfig) -> Result<Self> {
        LocaleTable::new(
            config.locales,
            config.default_locale,
            config.routing.prefix_default_locale,
            config.translations,
        )
    }
}

impl From<&LocaleTable> for LocaleConfig {
    fn from(table: &LocaleTable) -> Self {
        let translations = table
            .locales()
            .iter()
            .map(|locale| {
                let map = table.translations_for(locale).cloned().unwrap_or_default();
                (locale.clone(), map)
            })
            .collect();
        Self {
            default_locale: table.default_locale().to_string(),
            locales: table.locales().to_vec(),
            routing: RoutingConfig {
                prefix_default_locale: table.show_default_locale(),
            },
            translations,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(CatalogFormat::Json),
            "yaml" | "yml" => Some(CatalogFormat::Yaml),
            _ => None,
        }
    }

    /// Format implied by the file extension of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            CatalogFormat::Json => "json",
            CatalogFormat::Yaml => "yaml",
        }
    }

    pub fn serialize(&self, config: &LocaleConfig) -> Result<String> {
        let encoded = match self {
            CatalogFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
            CatalogFormat::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
        };
        encoded.map_err(I18nError::Serialize)
    }

    /// Decodes `content`; `origin` only labels errors.
    pub fn deserialize(&self, content: &str, origin: &Path) -> Result<LocaleConfig> {
        let decoded: std::result::Result<LocaleConfig, String> = match self {
            CatalogFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            CatalogFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };
        decoded.map_err(|message| I18nError::Parse {
            path: origin.to_path_buf(),
            message,
        })
    }
}

pub fn load_config(path: &Path) -> Result<LocaleConfig> {
    let format =
        CatalogFormat::from_path(path).ok_or_else(|| I18nError::UnsupportedFormat(path.into()))?;
    let content = fs::read_to_string(path).map_err(|source| I18nError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), format = format.extension(), "loading locale config");
    format.deserialize(&content, path)
}

/// Reads and validates a locale table from a `.json`, `.yaml` or `.yml` file.
pub fn load_table(path: &Path) -> Result<LocaleTable> {
    let table = LocaleTable::try_from(load_config(path)?)?;
    tracing::info!(
        path = %path.display(),
        locales = table.locales().len(),
        "locale table loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("i18n.json")),
            Some(CatalogFormat::Json)
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("i18n.YML")),
            Some(CatalogFormat::Yaml)
        );
        assert_eq!(CatalogFormat::from_path(Path::new("i18n.toml")), None);
        assert_eq!(CatalogFormat::from_path(Path::new("i18n")), None);
    }

    #[test]
    fn yaml_document_builds_table() {
        let doc = "\
defaultLocale: pt-br
locales: [pt-br, en]
translations:
  pt-br:
    nav.blog: Blog
  en:
    nav.blog: Blog
";
        let config = CatalogFormat::Yaml
            .deserialize(doc, Path::new("inline.yaml"))
            .unwrap();
        assert!(!config.routing.prefix_default_locale);
        let table = LocaleTable::try_from(config).unwrap();
        assert_eq!(table.default_locale(), "pt-br");
        assert_eq!(table.translator("en").t("nav.blog"), Some("Blog"));
    }

    #[test]
    fn routing_flag_maps_to_show_default_locale() {
        let doc = r#"{
            "defaultLocale": "en",
            "locales": ["en"],
            "routing": { "prefixDefaultLocale": true },
            "translations": { "en": {} }
        }"#;
        let config = CatalogFormat::Json
            .deserialize(doc, Path::new("inline.json"))
            .unwrap();
        let table = LocaleTable::try_from(config).unwrap();
        assert!(table.show_default_locale());
    }

    #[test]
    fn parse_error_names_origin() {
        let err = CatalogFormat::Json
            .deserialize("{ not json", Path::new("broken.json"))
            .unwrap_err();
        match err {
            I18nError::Parse { path, .. } => assert_eq!(path, PathBuf::from("broken.json")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn export_keeps_locale_order_and_flag() {
        let config = LocaleConfig::from(&LocaleTable::builtin());
        assert_eq!(config.locales, vec!["pt-br".to_string(), "en".to_string()]);
        assert_eq!(config.default_locale, "pt-br");
        assert!(!config.routing.prefix_default_locale);

        let json = CatalogFormat::Json.serialize(&config).unwrap();
        assert!(json.contains("\"defaultLocale\": \"pt-br\""));
        assert!(json.contains("\"prefixDefaultLocale\": false"));
    }
}
