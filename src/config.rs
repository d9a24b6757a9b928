// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run configuration.
//!
//! The built-in defaults reproduce the site's layout: four locales, eight
//! sections of `common.json`, output under `scripts/`. A YAML or JSON file
//! can override any field; omitted fields keep their default.

use crate::locale;
use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOCALES: [&str; 4] = ["sr", "en", "de", "it"];
pub const DEFAULT_SECTIONS: [&str; 8] = [
    "home",
    "apartments",
    "attractions",
    "location",
    "prices",
    "contact",
    "gallery",
    "footer",
];
pub const DEFAULT_INPUT_PATTERN: &str = "public/locales/{locale}/common.json";
pub const DEFAULT_OUTPUT: &str = "scripts/populate-content.sql";
pub const DEFAULT_CHUNK_SIZE: usize = 50;
pub const DEFAULT_REFERENCE_LOCALE: &str = "en";

const LOCALE_PLACEHOLDER: &str = "{locale}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// Locale codes, in output order
    pub locales: Vec<String>,
    /// Top-level keys of each locale document, in output order
    pub sections: Vec<String>,
    /// Path of each locale document relative to the root; `{locale}` is substituted
    pub input_pattern: String,
    /// SQL script path relative to the root
    pub output: PathBuf,
    /// Rows per statement when splitting
    pub chunk_size: usize,
    /// Locale whose keys define full coverage in `verify`
    pub reference_locale: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            locales: DEFAULT_LOCALES.iter().map(|s| s.to_string()).collect(),
            sections: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
            input_pattern: DEFAULT_INPUT_PATTERN.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            chunk_size: DEFAULT_CHUNK_SIZE,
            reference_locale: DEFAULT_REFERENCE_LOCALE.to_string(),
        }
    }
}

impl SeedConfig {
    /// Load a config file; `.yaml`/`.yml` is read as YAML, anything else as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = load_json_or_yaml(path)?;
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Location of one locale's document under `root`
    pub fn locale_path(&self, root: &Path, locale: &str) -> PathBuf {
        root.join(self.input_pattern.replace(LOCALE_PLACEHOLDER, locale))
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }

    /// The reference locale for coverage, falling back to the first configured one.
    pub fn effective_reference(&self) -> Option<&str> {
        self.locales
            .iter()
            .find(|l| **l == self.reference_locale)
            .or_else(|| self.locales.first())
            .map(String::as_str)
    }

    /// Reject configurations that cannot produce a usable script.
    ///
    /// Unknown locale codes only warn: they are still valid directory names.
    pub fn validate(&self) -> Result<()> {
        if self.locales.is_empty() {
            bail!("at least one locale must be configured");
        }
        if self.sections.is_empty() {
            bail!("at least one section must be configured");
        }
        if self.chunk_size == 0 {
            bail!("chunk_size must be greater than zero");
        }
        if !self.input_pattern.contains(LOCALE_PLACEHOLDER) {
            bail!(
                "input_pattern '{}' must contain {}",
                self.input_pattern,
                LOCALE_PLACEHOLDER
            );
        }
        for locale in &self.locales {
            if locale.is_empty() || locale.contains('\'') {
                bail!("locale code '{}' cannot be embedded in SQL", locale);
            }
            if !locale::is_known_locale(locale) {
                tracing::warn!("locale '{}' is not a recognised ISO 639-1 code", locale);
            }
        }
        if let Some(dup) = first_duplicate(&self.locales) {
            bail!("locale '{}' is listed twice", dup);
        }
        if let Some(dup) = first_duplicate(&self.sections) {
            bail!("section '{}' is listed twice", dup);
        }
        Ok(())
    }
}

fn first_duplicate(items: &[String]) -> Option<&str> {
    items
        .iter()
        .enumerate()
        .find(|(i, item)| items[..*i].contains(*item))
        .map(|(_, item)| item.as_str())
}

fn load_json_or_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str::<T>(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        _ => serde_json::from_str::<T>(&raw).with_context(|| format!("parsing {}", path.display())),
    }
}
