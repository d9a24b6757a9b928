// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for splitting an existing script into chunk files

use content_seed::sql::{self, CONFLICT_CLAUSE, INSERT_HEADER};
use content_seed::ContentRow;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn rows(n: usize) -> Vec<ContentRow> {
    (0..n)
        .map(|i| ContentRow::new("gallery", &format!("photo{}", i), "it", json!("Foto")))
        .collect()
}

#[test]
fn test_split_file_writes_numbered_chunks() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("populate-content.sql");
    fs::write(&script, sql::build_script(&rows(120)).unwrap()).unwrap();

    let written = sql::split_file(&script, 50).expect("split should succeed");
    assert_eq!(written.len(), 3);

    let counts: Vec<usize> = written
        .iter()
        .map(|p| fs::read_to_string(p).unwrap().matches("::jsonb").count())
        .collect();
    assert_eq!(counts, vec![50, 50, 20]);

    for path in &written {
        let chunk = fs::read_to_string(path).unwrap();
        assert!(chunk.starts_with(INSERT_HEADER));
        assert!(chunk.ends_with(CONFLICT_CLAUSE));
        assert!(
            !chunk.contains("true),\nON CONFLICT"),
            "last row of {} keeps its trailing comma",
            path.display()
        );
    }
    assert!(dir.path().join("populate-content-chunk-2.sql").exists());
}

#[test]
fn test_split_file_rejects_other_sql() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("other.sql");
    fs::write(&script, "CREATE TABLE content (key text);\n").unwrap();

    let err = sql::split_file(&script, 50).unwrap_err();
    assert!(format!("{:#}", err).contains("INSERT header"));
}

#[test]
fn test_split_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(sql::split_file(&dir.path().join("nope.sql"), 50).is_err());
}
