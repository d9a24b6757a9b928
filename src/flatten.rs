// SPDX-License-Identifier: PMPL-1.0-or-later

//! Flattening of nested translation objects into dot-separated keys

use serde_json::{Map, Value};

/// Flatten `object` into `path -> leaf` pairs, prefixing every path with `parent`.
///
/// Only objects are descended into; arrays, strings, numbers, booleans and
/// null are leaves. Document order is kept. If two paths collide
/// (`{"a.b": 1, "a": {"b": 2}}`) the later value replaces the earlier one in
/// the earlier one's position.
pub fn flatten(object: &Map<String, Value>, parent: &str) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into(object, parent, &mut flat);
    flat
}

fn flatten_into(object: &Map<String, Value>, parent: &str, flat: &mut Map<String, Value>) {
    for (key, value) in object {
        let path = join_key(parent, key);
        match value {
            Value::Object(nested) => flatten_into(nested, &path, flat),
            leaf => {
                flat.insert(path, leaf.clone());
            }
        }
    }
}

/// `parent.child`, or just `child` at the top level
pub fn join_key(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{}.{}", parent, child)
    }
}
