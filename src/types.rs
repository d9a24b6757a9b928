// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for content-seed

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// One row of the `content` table as it will be written to SQL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRow {
    /// `section.flattened.key`
    pub key: String,
    pub language: String,
    /// Leaf value exactly as it appeared in the locale document
    pub value: Value,
    pub published: bool,
}

impl ContentRow {
    pub fn new(section: &str, flat_key: &str, language: &str, value: Value) -> Self {
        Self {
            key: format!("{}.{}", section, flat_key),
            language: language.to_string(),
            value,
            published: true,
        }
    }
}

/// Recoverable conditions met while extracting; the run carries on past them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractWarning {
    MissingLocaleFile { locale: String, path: PathBuf },
    MissingSection {
        locale: String,
        section: String,
        path: PathBuf,
    },
    SectionNotObject {
        locale: String,
        section: String,
        path: PathBuf,
    },
    QuoteInKey { locale: String, key: String },
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractWarning::MissingLocaleFile { path, .. } => {
                write!(f, "{} not found", path.display())
            }
            ExtractWarning::MissingSection { section, path, .. } => {
                write!(f, "Section '{}' not found in {}", section, path.display())
            }
            ExtractWarning::SectionNotObject { section, path, .. } => write!(
                f,
                "Section '{}' in {} is not an object, skipped",
                section,
                path.display()
            ),
            ExtractWarning::QuoteInKey { locale, key } => write!(
                f,
                "key '{}' ({}) contains a single quote and will break the generated SQL",
                key, locale
            ),
        }
    }
}

/// Per-locale counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleStats {
    pub locale: String,
    pub found: bool,
    pub sections_read: usize,
    pub rows: usize,
    pub skipped_templates: usize,
}

/// Everything one extraction pass produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractReport {
    pub created_at: String,
    pub root: PathBuf,
    pub locales: Vec<LocaleStats>,
    pub warnings: Vec<ExtractWarning>,
    #[serde(skip)]
    pub rows: Vec<ContentRow>,
}

impl ExtractReport {
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn total_skipped_templates(&self) -> usize {
        self.locales.iter().map(|l| l.skipped_templates).sum()
    }
}
