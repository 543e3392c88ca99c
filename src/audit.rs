// SPDX-License-Identifier: PMPL-1.0-or-later

//! Completeness checks for a locale table.
//!
//! The default locale owns the canonical key set. Every other locale is
//! compared against it: keys it lacks (or leaves empty) are rendered in the
//! default language, and keys only it has can never be reached.

use crate::i18n::LocaleTable;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub level: Level,
    pub locale: String,
    pub key: Option<String>,
    pub detail: String,
}

impl Finding {
    fn new(level: Level, locale: &str, key: Option<&str>, detail: String) -> Self {
        Self {
            level,
            locale: locale.to_string(),
            key: key.map(str::to_string),
            detail,
        }
    }

    fn print(&self) {
        let subject = match &self.key {
            Some(key) => format!("{}:{}", self.locale, key),
            None => self.locale.clone(),
        };
        println!("  [{}] {:32} {}", self.level.tag(), subject, self.detail);
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub findings: Vec<Finding>,
}

impl AuditReport {
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.level == Level::Error)
    }

    pub fn count(&self, level: Level) -> usize {
        self.findings.iter().filter(|f| f.level == level).count()
    }

    pub fn print(&self) {
        println!("{}", "Locale table audit".bold());
        println!();
        for finding in &self.findings {
            finding.print();
        }
        println!();
        println!(
            "  {} ok, {} warnings, {} errors",
            self.count(Level::Ok),
            self.count(Level::Warn),
            self.count(Level::Error)
        );
    }
}

pub fn audit(table: &LocaleTable) -> AuditReport {
    let mut findings = Vec::new();
    let default_locale = table.default_locale();
    let canonical = table
        .translations_for(default_locale)
        .cloned()
        .unwrap_or_default();

    for (key, value) in &canonical {
        if value.is_empty() {
            findings.push(Finding::new(
                Level::Error,
                default_locale,
                Some(key.as_str()),
                "empty in the default locale, nothing to fall back to".to_string(),
            ));
        }
    }

    for locale in table.locales() {
        if table.is_default(locale) {
            continue;
        }
        let before = findings.len();
        let own = table.translations_for(locale).cloned().unwrap_or_default();

        for key in canonical.keys() {
            match own.get(key) {
                None => findings.push(Finding::new(
                    Level::Warn,
                    locale,
                    Some(key.as_str()),
                    format!("missing, falls back to {}", default_locale),
                )),
                Some(value) if value.is_empty() => findings.push(Finding::new(
                    Level::Warn,
                    locale,
                    Some(key.as_str()),
                    format!("empty, falls back to {}", default_locale),
                )),
                Some(_) => {}
            }
        }

        for key in own.keys().filter(|k| !canonical.contains_key(*k)) {
            findings.push(Finding::new(
                Level::Warn,
                locale,
                Some(key.as_str()),
                format!("not defined in {}, unreachable", default_locale),
            ));
        }

        if findings.len() == before {
            findings.push(Finding::new(
                Level::Ok,
                locale,
                None,
                format!("{} keys translated", own.len()),
            ));
        }
    }

    if !findings.iter().any(|f| f.locale == default_locale) {
        findings.insert(
            0,
            Finding::new(
                Level::Ok,
                default_locale,
                None,
                format!("{} keys (default)", canonical.len()),
            ),
        );
    }

    tracing::debug!(findings = findings.len(), "audit complete");
    AuditReport { findings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TranslationMap;
    use std::collections::BTreeMap;

    fn map(entries: &[(&str, &str)]) -> TranslationMap {
        entries
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn table(pt: &[(&str, &str)], en: &[(&str, &str)]) -> LocaleTable {
        let mut translations = BTreeMap::new();
        translations.insert("pt-br".to_string(), map(pt));
        translations.insert("en".to_string(), map(en));
        LocaleTable::new(
            vec!["pt-br".to_string(), "en".to_string()],
            "pt-br",
            false,
            translations,
        )
        .unwrap()
    }

    #[test]
    fn builtin_table_is_clean() {
        let report = audit(&LocaleTable::builtin());
        assert!(!report.has_errors());
        assert_eq!(report.count(Level::Warn), 0);
        assert_eq!(report.count(Level::Ok), 2);
    }

    #[test]
    fn missing_and_empty_keys_warn() {
        let report = audit(&table(
            &[("a", "A"), ("b", "B"), ("c", "C")],
            &[("a", "A"), ("c", "")],
        ));
        let warned: Vec<_> = report
            .findings
            .iter()
            .filter(|f| f.level == Level::Warn)
            .map(|f| f.key.as_deref().unwrap())
            .collect();
        assert_eq!(warned, vec!["b", "c"]);
        assert!(!report.has_errors());
    }

    #[test]
    fn orphan_keys_warn() {
        let report = audit(&table(&[("a", "A")], &[("a", "A"), ("z", "Z")]));
        assert_eq!(report.count(Level::Warn), 1);
        assert_eq!(report.findings.last().unwrap().key.as_deref(), Some("z"));
    }

    #[test]
    fn empty_default_value_is_an_error() {
        let report = audit(&table(&[("a", "")], &[("a", "A")]));
        assert!(report.has_errors());
        assert_eq!(report.findings[0].locale, "pt-br");
    }
}
