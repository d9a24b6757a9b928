// SPDX-License-Identifier: PMPL-1.0-or-later

//! Extraction: locale documents in, content rows out
//!
//! Walks the configured locales in order, reads each `common.json`, flattens
//! every configured section and turns the surviving leaves into
//! [`ContentRow`]s. Missing files and sections are recorded as warnings and
//! skipped; a document that is not valid JSON aborts the run.

use crate::config::SeedConfig;
use crate::flatten::flatten;
use crate::sql::is_template;
use crate::types::{ContentRow, ExtractReport, ExtractWarning, LocaleStats};
use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a locale document. `Ok(None)` when the file does not exist.
pub fn load_document(path: &Path) -> Result<Option<Map<String, Value>>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };
    let value: Value = serde_json::from_str(raw.trim_start_matches('\u{feff}'))
        .with_context(|| format!("parsing {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(Some(map)),
        _ => bail!("{} does not contain a JSON object", path.display()),
    }
}

/// Rows contributed by one section of one locale document
pub fn section_rows(
    locale: &str,
    section: &str,
    content: &Map<String, Value>,
    stats: &mut LocaleStats,
) -> Vec<ContentRow> {
    let mut rows = Vec::new();
    for (key, value) in flatten(content, "") {
        if is_template(&value) {
            stats.skipped_templates += 1;
            continue;
        }
        rows.push(ContentRow::new(section, &key, locale, value));
    }
    rows
}

/// Run extraction for every configured locale under `root`.
pub fn run(config: &SeedConfig, root: &Path) -> Result<ExtractReport> {
    let mut rows = Vec::new();
    let mut warnings = Vec::new();
    let mut locales = Vec::with_capacity(config.locales.len());

    for locale in &config.locales {
        let path = config.locale_path(root, locale);
        let mut stats = LocaleStats {
            locale: locale.clone(),
            ..LocaleStats::default()
        };

        let shown = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        let Some(document) = load_document(&path)? else {
            let warning = ExtractWarning::MissingLocaleFile {
                locale: locale.clone(),
                path: shown,
            };
            tracing::warn!("{}", warning);
            warnings.push(warning);
            locales.push(stats);
            continue;
        };
        stats.found = true;
        tracing::debug!("loaded {}", path.display());

        for section in &config.sections {
            let warning = match document.get(section) {
                Some(Value::Object(content)) => {
                    stats.sections_read += 1;
                    let section_rows = section_rows(locale, section, content, &mut stats);
                    tracing::debug!("{}: {} rows from '{}'", locale, section_rows.len(), section);
                    stats.rows += section_rows.len();
                    rows.extend(section_rows);
                    continue;
                }
                Some(_) => ExtractWarning::SectionNotObject {
                    locale: locale.clone(),
                    section: section.clone(),
                    path: shown.clone(),
                },
                None => ExtractWarning::MissingSection {
                    locale: locale.clone(),
                    section: section.clone(),
                    path: shown.clone(),
                },
            };
            tracing::warn!("{}", warning);
            warnings.push(warning);
        }
        locales.push(stats);
    }

    for row in rows.iter().filter(|r| r.key.contains('\'')) {
        let warning = ExtractWarning::QuoteInKey {
            locale: row.language.clone(),
            key: row.key.clone(),
        };
        tracing::warn!("{}", warning);
        warnings.push(warning);
    }

    Ok(ExtractReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        root: root.to_path_buf(),
        locales,
        warnings,
        rows,
    })
}
