// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pre-flight checks on the locale documents.
//!
//! Confirms every document parses, lists sections a document lacks and
//! compares each locale's flattened keys against a reference locale so
//! untranslated keys show up before the SQL is generated.

use crate::config::SeedConfig;
use crate::extract::load_document;
use crate::flatten::flatten;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentStatus {
    Valid,
    Missing,
    Invalid { error: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleCheck {
    pub locale: String,
    pub path: PathBuf,
    pub status: DocumentStatus,
    pub missing_sections: Vec<String>,
    pub key_count: usize,
    /// Keys the reference locale has and this one does not
    pub missing_keys: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyReport {
    pub reference: Option<String>,
    pub checks: Vec<LocaleCheck>,
}

impl VerifyReport {
    pub fn invalid_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| matches!(c.status, DocumentStatus::Invalid { .. }))
            .count()
    }

    pub fn is_ok(&self) -> bool {
        self.invalid_count() == 0
    }
}

/// Check every configured locale. Parse failures are recorded, not returned.
pub fn run(config: &SeedConfig, root: &Path, reference: Option<&str>) -> Result<VerifyReport> {
    let mut checks = Vec::with_capacity(config.locales.len());
    let mut key_sets = Vec::with_capacity(config.locales.len());

    for locale in &config.locales {
        let path = config.locale_path(root, locale);
        let mut check = LocaleCheck {
            locale: locale.clone(),
            path: path.strip_prefix(root).unwrap_or(&path).to_path_buf(),
            status: DocumentStatus::Valid,
            missing_sections: Vec::new(),
            key_count: 0,
            missing_keys: Vec::new(),
        };
        let mut keys = BTreeSet::new();

        match load_document(&path) {
            Ok(Some(document)) => {
                for section in &config.sections {
                    match document.get(section) {
                        Some(Value::Object(content)) => {
                            keys.extend(flatten(content, section).into_iter().map(|(k, _)| k));
                        }
                        Some(_) => {
                            keys.insert(section.clone());
                        }
                        None => check.missing_sections.push(section.clone()),
                    }
                }
            }
            Ok(None) => check.status = DocumentStatus::Missing,
            Err(e) => {
                check.status = DocumentStatus::Invalid {
                    error: format!("{:#}", e),
                }
            }
        }

        check.key_count = keys.len();
        checks.push(check);
        key_sets.push(keys);
    }

    let reference = reference
        .filter(|r| config.locales.iter().any(|l| l.as_str() == *r))
        .or_else(|| config.effective_reference())
        .map(str::to_string);

    if let Some(reference) = &reference {
        let reference_index = checks.iter().position(|c| &c.locale == reference);
        if let Some(index) = reference_index {
            if checks[index].status == DocumentStatus::Valid {
                let reference_keys = key_sets[index].clone();
                for (check, keys) in checks.iter_mut().zip(&key_sets) {
                    if check.status != DocumentStatus::Valid || &check.locale == reference {
                        continue;
                    }
                    check.missing_keys = reference_keys.difference(keys).cloned().collect();
                }
            }
        }
    }

    Ok(VerifyReport { reference, checks })
}

pub fn print_report(report: &VerifyReport) {
    for check in &report.checks {
        match &check.status {
            DocumentStatus::Valid => println!(
                "{} {} is valid JSON ({} keys)",
                "ok".green(),
                check.path.display(),
                check.key_count
            ),
            DocumentStatus::Missing => {
                println!("{} {} not found", "missing".yellow(), check.path.display())
            }
            DocumentStatus::Invalid { error } => println!(
                "{} {} is INVALID JSON: {}",
                "error".red().bold(),
                check.path.display(),
                error
            ),
        }
        for section in &check.missing_sections {
            println!("    section '{}' missing", section);
        }
        if !check.missing_keys.is_empty() {
            println!(
                "    {} keys missing relative to '{}'",
                check.missing_keys.len(),
                report.reference.as_deref().unwrap_or("-")
            );
            for key in check.missing_keys.iter().take(20) {
                println!("      - {}", key);
            }
            if check.missing_keys.len() > 20 {
                println!("      ... and {} more", check.missing_keys.len() - 20);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_locale(root: &Path, locale: &str, body: &str) {
        let dir = root.join("public/locales").join(locale);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("common.json"), body).unwrap();
    }

    fn config(locales: &[&str], sections: &[&str]) -> SeedConfig {
        SeedConfig {
            locales: locales.iter().map(|s| s.to_string()).collect(),
            sections: sections.iter().map(|s| s.to_string()).collect(),
            ..SeedConfig::default()
        }
    }

    #[test]
    fn invalid_json_is_recorded() {
        let dir = TempDir::new().unwrap();
        write_locale(dir.path(), "en", r#"{"home": {"a": "x"}}"#);
        write_locale(dir.path(), "de", r#"{"home": {"a": "x",}}"#);

        let report = run(&config(&["en", "de"], &["home"]), dir.path(), None).unwrap();
        assert_eq!(report.invalid_count(), 1);
        assert!(!report.is_ok());
        assert!(matches!(
            report.checks[1].status,
            DocumentStatus::Invalid { .. }
        ));
    }

    #[test]
    fn missing_keys_against_reference() {
        let dir = TempDir::new().unwrap();
        write_locale(
            dir.path(),
            "en",
            r#"{"home": {"a": "x", "b": {"c": "y"}}, "footer": {"d": "z"}}"#,
        );
        write_locale(dir.path(), "sr", r#"{"home": {"a": "x"}}"#);

        let report = run(&config(&["sr", "en"], &["home", "footer"]), dir.path(), None).unwrap();
        assert!(report.is_ok());
        assert_eq!(report.reference.as_deref(), Some("en"));
        let sr = &report.checks[0];
        assert_eq!(sr.missing_sections, vec!["footer"]);
        assert_eq!(sr.missing_keys, vec!["footer.d", "home.b.c"]);
        assert_eq!(report.checks[1].key_count, 3);
        assert!(report.checks[1].missing_keys.is_empty());
    }

    #[test]
    fn unknown_reference_falls_back() {
        let dir = TempDir::new().unwrap();
        write_locale(dir.path(), "de", r#"{"home": {"a": "x"}}"#);
        let report = run(&config(&["de"], &["home"]), dir.path(), Some("fr")).unwrap();
        assert_eq!(report.reference.as_deref(), Some("de"));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let report = run(&config(&["it"], &["home"]), dir.path(), None).unwrap();
        assert!(report.is_ok());
        assert_eq!(report.checks[0].status, DocumentStatus::Missing);
    }
}
