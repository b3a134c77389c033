//! Heuristic lookup of the date and description fields of a record.

use serde_json::Value;

/// Keys holding a record's date, highest priority first.
pub const DATE_FIELDS: [&str; 6] = ["data", "date", "timestamp", "created_at", "datetime", "time"];

/// Keys holding a record's description, highest priority first.
pub const DESCRIPTION_FIELDS: [&str; 8] = [
    "descrizione",
    "description",
    "desc",
    "summary",
    "title",
    "name",
    "evento",
    "event",
];

/// Text of the first date-like field of `record`, or `""` when there is none.
pub fn extract_date_field(record: &Value) -> String {
    first_present(record, &DATE_FIELDS)
}

/// Text of the first description-like field of `record`, or `""` when there is none.
pub fn extract_description_field(record: &Value) -> String {
    first_present(record, &DESCRIPTION_FIELDS)
}

/// Whether `key`, ignoring case, is one of the recognised date or description keys.
pub fn is_known_field(key: &str) -> bool {
    let key = key.to_lowercase();
    DATE_FIELDS
        .iter()
        .chain(DESCRIPTION_FIELDS.iter())
        .any(|k| *k == key)
}

/// Strings render bare; everything else renders as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// Lookup is exact-case: only `is_known_field` folds case.
fn first_present(record: &Value, candidates: &[&str]) -> String {
    let map = match record.as_object() {
        Some(map) => map,
        None => return String::new(),
    };

    candidates
        .iter()
        .find_map(|key| map.get(*key))
        .map(render_value)
        .unwrap_or_default()
}
