// SPDX-License-Identifier: PMPL-1.0-or-later

//! Row literals and statement assembly

use super::escape::escape_value;
use crate::types::ContentRow;
use anyhow::{bail, Result};

pub const INSERT_HEADER: &str = "INSERT INTO content (key, language, value, published) VALUES\n";
pub const CONFLICT_CLAUSE: &str =
    "\nON CONFLICT (key, language) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW();";
pub const ROW_SEPARATOR: &str = ",\n";

/// `('<key>', '<language>', '<value>'::jsonb, true)`
///
/// Key and language go in unescaped; a `'` in either breaks the statement.
pub fn format_row(row: &ContentRow) -> String {
    format!(
        "('{}', '{}', '{}'::jsonb, {})",
        row.key,
        row.language,
        escape_value(&row.value),
        row.published
    )
}

/// Join already formatted row literals into one upsert statement.
pub fn assemble(row_literals: &[String]) -> Result<String> {
    if row_literals.is_empty() {
        bail!("no content rows generated; refusing to write an INSERT without values");
    }
    let body = row_literals.join(ROW_SEPARATOR);
    let mut sql = String::with_capacity(INSERT_HEADER.len() + body.len() + CONFLICT_CLAUSE.len());
    sql.push_str(INSERT_HEADER);
    sql.push_str(&body);
    sql.push_str(CONFLICT_CLAUSE);
    Ok(sql)
}

/// The whole upsert for `rows`, in order.
pub fn build_script(rows: &[ContentRow]) -> Result<String> {
    let literals: Vec<String> = rows.iter().map(format_row).collect();
    assemble(&literals)
}

/// Number of INSERT statements in a generated script.
pub fn count_statements(sql: &str) -> usize {
    sql.lines()
        .filter(|line| line.starts_with(INSERT_HEADER.trim_end()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(key: &str, lang: &str, value: serde_json::Value) -> ContentRow {
        let (section, rest) = key.split_once('.').unwrap();
        ContentRow::new(section, rest, lang, value)
    }

    #[test]
    fn row_literal_shape() {
        let r = row("home.hero.title", "sr", json!("Dobrodošli"));
        assert_eq!(
            format_row(&r),
            r#"('home.hero.title', 'sr', '"Dobrodošli"'::jsonb, true)"#
        );
    }

    #[test]
    fn numeric_leaf_is_stored_as_string() {
        let r = row("prices.season.low", "en", json!(45));
        assert_eq!(format_row(&r), r#"('prices.season.low', 'en', '"45"'::jsonb, true)"#);
    }

    #[test]
    fn script_has_fixed_header_and_footer() {
        let rows = vec![
            row("home.title", "en", json!("Welcome")),
            row("home.subtitle", "en", json!("Sea view")),
        ];
        let sql = build_script(&rows).unwrap();
        assert!(sql.starts_with(INSERT_HEADER));
        assert!(sql.ends_with(CONFLICT_CLAUSE));
        assert_eq!(
            sql,
            "INSERT INTO content (key, language, value, published) VALUES\n\
             ('home.title', 'en', '\"Welcome\"'::jsonb, true),\n\
             ('home.subtitle', 'en', '\"Sea view\"'::jsonb, true)\n\
             ON CONFLICT (key, language) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW();"
        );
    }

    #[test]
    fn empty_script_is_an_error() {
        let err = build_script(&[]).unwrap_err();
        assert!(err.to_string().contains("no content rows generated"));
    }

    #[test]
    fn statement_count() {
        let sql = build_script(&[row("home.a", "en", json!("x"))]).unwrap();
        assert_eq!(count_statements(&sql), 1);
        let two = format!("{}\n{}", sql, sql);
        assert_eq!(count_statements(&two), 2);
    }
}
