// SPDX-License-Identifier: PMPL-1.0-or-later

//! Writing generated SQL and run reports to disk

use crate::sql::{build_script, chunk_rows, count_statements, write_chunks};
use crate::types::ExtractReport;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// What a generate run left on disk
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutcome {
    pub script_path: PathBuf,
    pub chunk_paths: Vec<PathBuf>,
    /// Statements to execute: the chunk count when split, else those in the script
    pub statements: usize,
    pub rows: usize,
}

/// Write the upsert script and, with `chunk_size`, the chunk files beside it.
///
/// Nothing is written when there are no rows.
pub fn write_script(
    report: &ExtractReport,
    script_path: &Path,
    chunk_size: Option<usize>,
) -> Result<GenerateOutcome> {
    let sql = build_script(&report.rows)?;
    let chunks = chunk_size
        .map(|size| chunk_rows(&report.rows, size))
        .transpose()?;

    if let Some(parent) = script_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(script_path, &sql).with_context(|| format!("writing {}", script_path.display()))?;

    let (chunk_paths, statements) = match &chunks {
        Some(chunks) => (write_chunks(script_path, chunks)?, chunks.len()),
        None => (Vec::new(), count_statements(&sql)),
    };

    Ok(GenerateOutcome {
        script_path: script_path.to_path_buf(),
        statements,
        rows: report.total_rows(),
        chunk_paths,
    })
}

/// Write the run report as pretty JSON
pub fn write_run_report(report: &ExtractReport, path: &Path) -> Result<()> {
    write_json(report, path)
}

/// Write any serializable value as pretty JSON, creating parent directories
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentRow, LocaleStats};
    use serde_json::json;
    use tempfile::TempDir;

    fn report_with(rows: Vec<ContentRow>) -> ExtractReport {
        ExtractReport {
            created_at: "2026-01-01T00:00:00+00:00".to_string(),
            root: PathBuf::from("."),
            locales: vec![LocaleStats {
                locale: "en".to_string(),
                found: true,
                sections_read: 1,
                rows: rows.len(),
                skipped_templates: 0,
            }],
            warnings: vec![],
            rows,
        }
    }

    #[test]
    fn empty_report_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scripts/populate-content.sql");
        assert!(write_script(&report_with(vec![]), &path, None).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn chunks_are_written_next_to_script() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scripts/populate-content.sql");
        let rows = (0..5)
            .map(|i| ContentRow::new("home", &format!("k{}", i), "en", json!("v")))
            .collect();

        let outcome = write_script(&report_with(rows), &path, Some(2)).unwrap();
        assert!(path.exists());
        assert_eq!(outcome.statements, 3);
        assert_eq!(outcome.rows, 5);
        assert_eq!(outcome.chunk_paths.len(), 3);
        assert!(dir.path().join("scripts/populate-content-chunk-3.sql").exists());
    }

    #[test]
    fn run_report_omits_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports/run.json");
        let report = report_with(vec![ContentRow::new("home", "a", "en", json!("x"))]);
        write_run_report(&report, &path).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(parsed.get("rows").is_none());
        assert_eq!(parsed["locales"][0]["rows"], 1);
    }

    #[test]
    fn json_output_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/verify/result.json");
        write_json(&json!({"ok": true}), &path).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["ok"], true);
    }
}
