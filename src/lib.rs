// SPDX-License-Identifier: PMPL-1.0-or-later

//! content-seed: turn a site's i18n locale files into upsert SQL.
//!
//! Each locale's `common.json` is read, the configured sections are
//! flattened into dot-separated keys, values that still carry `{{...}}`
//! placeholders are dropped, and the rest become rows of one
//! `INSERT ... ON CONFLICT (key, language) DO UPDATE` statement for the
//! `content(key, language, value, published)` table.
//!
//! Values are stored as JSON strings: a numeric leaf `5` is written as
//! `'"5"'::jsonb`.

pub mod config;
pub mod extract;
pub mod flatten;
pub mod locale;
pub mod report;
pub mod sql;
pub mod types;
pub mod verify;

pub use config::SeedConfig;
pub use types::{ContentRow, ExtractReport, ExtractWarning, LocaleStats};
