//! Path-suffix derivation from record fields.

use std::path::MAIN_SEPARATOR_STR;

use serde_json::Value;

use super::{FieldEntry, FieldValue};

/// Build the path suffix for `entries`.
///
/// Nested records contribute their own full suffix; empty nested suffixes
/// are skipped so no doubled separators appear.
pub(super) fn suffix(entries: &[FieldEntry<'_>], stop_at_none: bool) -> String {
    let mut segments = Vec::with_capacity(entries.len());
    for entry in entries {
        if stop_at_none && entry.is_null() {
            break;
        }
        match entry.value() {
            FieldValue::Nested(record) => {
                let nested = record.to_path_suffix(false);
                if !nested.is_empty() {
                    segments.push(nested);
                }
            }
            FieldValue::Null => segments.push(format!("{}=None", entry.name())),
            FieldValue::Plain(value) => {
                segments.push(format!("{}={}", entry.name(), segment_value(value)));
            }
        }
    }
    segments.join(MAIN_SEPARATOR_STR)
}

fn segment_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_owned(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
