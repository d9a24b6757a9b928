// SPDX-License-Identifier: PMPL-1.0-or-later

//! Splitting one large upsert into several smaller statements.
//!
//! SQL consoles tend to choke on a single statement with thousands of
//! tuples, so the script can be cut into chunks that each carry the same
//! header and conflict clause.

use super::script::{assemble, format_row, CONFLICT_CLAUSE, INSERT_HEADER};
use crate::types::ContentRow;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Build one statement per `chunk_size` rows.
pub fn chunk_rows(rows: &[ContentRow], chunk_size: usize) -> Result<Vec<String>> {
    if chunk_size == 0 {
        bail!("chunk size must be greater than zero");
    }
    if rows.is_empty() {
        bail!("no content rows generated; nothing to split");
    }
    rows.chunks(chunk_size)
        .map(|chunk| {
            let literals: Vec<String> = chunk.iter().map(format_row).collect();
            assemble(&literals)
        })
        .collect()
}

/// Split an existing script line by line.
///
/// The first line must be the INSERT header and the last the conflict
/// clause; every line between is taken as one row. Values spanning several
/// lines are not supported here, use [`chunk_rows`] for those.
pub fn split_script(sql: &str, chunk_size: usize) -> Result<Vec<String>> {
    if chunk_size == 0 {
        bail!("chunk size must be greater than zero");
    }
    let lines: Vec<&str> = sql.trim_end_matches('\n').split('\n').collect();
    let header = INSERT_HEADER.trim_end_matches('\n');
    let footer = CONFLICT_CLAUSE.trim_start_matches('\n');

    if lines.first().map(|l| l.trim_end()) != Some(header) {
        bail!("script does not start with the expected INSERT header");
    }
    if lines.len() < 3 || lines.last().map(|l| l.trim_end()) != Some(footer) {
        bail!("script does not end with the expected ON CONFLICT clause after at least one row");
    }

    let values = &lines[1..lines.len() - 1];
    let chunks = values
        .chunks(chunk_size)
        .map(|chunk| {
            let mut rows: Vec<&str> = chunk.to_vec();
            if let Some(last) = rows.pop() {
                rows.push(last.trim_end().trim_end_matches(','));
            }
            format!("{}\n{}\n{}", header, rows.join("\n"), footer)
        })
        .collect();
    Ok(chunks)
}

/// `dir/stem-chunk-N.sql`, numbered from 1
pub fn chunk_path(script_path: &Path, index: usize) -> PathBuf {
    let stem = script_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "script".to_string());
    let name = format!("{}-chunk-{}.sql", stem, index + 1);
    match script_path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// Write each chunk next to `script_path` and return the paths written.
pub fn write_chunks(script_path: &Path, chunks: &[String]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(chunks.len());
    for (index, chunk) in chunks.iter().enumerate() {
        let path = chunk_path(script_path, index);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, chunk).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!("written {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Read a script from disk, split it and write the chunk files beside it.
pub fn split_file(script_path: &Path, chunk_size: usize) -> Result<Vec<PathBuf>> {
    let sql = fs::read_to_string(script_path)
        .with_context(|| format!("reading {}", script_path.display()))?;
    let chunks = split_script(&sql, chunk_size)
        .with_context(|| format!("splitting {}", script_path.display()))?;
    write_chunks(script_path, &chunks)
}
