//! Recursive JSON flattening.
//!
//! Turns an arbitrarily nested `serde_json::Value` into a single-level
//! record keyed by `_`-joined path strings, e.g.
//! `{"a": {"b": [1, 2]}}` becomes `{"a_b_0": 1, "a_b_1": 2}`.

use serde_json::Value;

use crate::frame::Record;

/// Separator joining path components in flattened keys.
pub const SEPARATOR: char = '_';

/// Flatten a JSON value into a single-level record.
///
/// Object keys are joined with [`SEPARATOR`]; list elements are keyed by
/// their position. Scalars (including null) become leaf values. Two
/// distinct paths that flatten to the same key silently overwrite each
/// other and the later path wins; callers relying on column names must
/// keep that in mind for payloads whose keys already contain the
/// separator.
pub fn flatten_json(value: &Value) -> Record {
    let mut out = Record::new();
    flatten_into(value, String::new(), &mut out);
    out
}

fn flatten_into(value: &Value, prefix: String, out: &mut Record) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(child, format!("{}{}{}", prefix, key, SEPARATOR), out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten_into(child, format!("{}{}{}", prefix, i, SEPARATOR), out);
            }
        }
        scalar => {
            // Strip the separator appended by the parent level
            let key = prefix
                .strip_suffix(SEPARATOR)
                .map(str::to_string)
                .unwrap_or(prefix);
            out.insert(key, scalar.clone());
        }
    }
}
