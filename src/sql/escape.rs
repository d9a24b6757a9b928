// SPDX-License-Identifier: PMPL-1.0-or-later

//! Escaping of leaf values into JSON string literals for `'...'::jsonb`

use serde_json::Value;

/// Marker for values rendered at runtime rather than stored as static content
const TEMPLATE_MARKER: &str = "{{";

/// Whether a leaf carries a template placeholder and should be left out.
pub fn is_template(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.contains(TEMPLATE_MARKER))
}

/// Render a leaf as a double-quoted JSON string literal.
///
/// Every non-null value becomes a JSON *string*: `5` is stored as `"5"`,
/// `true` as `"True"`, `false` as `"False"`. Null becomes the empty string
/// literal `""`.
pub fn escape_value(value: &Value) -> String {
    match value {
        Value::Null => "\"\"".to_string(),
        Value::String(s) => quote(s),
        Value::Bool(true) => quote("True"),
        Value::Bool(false) => quote("False"),
        other => quote(&other.to_string()),
    }
}

fn quote(text: &str) -> String {
    // backslashes first so the ones added for quotes are not doubled again
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}
