//! Reads a JSON file and normalizes it into a sequence of records.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::errors::VerificaError;
use crate::record::Record;

/// Object keys that may wrap the record array, highest priority first.
pub const WRAPPER_KEYS: [&str; 4] = ["records", "data", "items", "entries"];

/// Read `path` and return its records in input order.
pub fn load_records(path: &Path) -> Result<Vec<Record>, VerificaError> {
    let text = match fs::read_to_string(path) {
        Ok(res) => res,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(VerificaError::FileNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(err) => {
            return Err(VerificaError::UnreadableFile {
                path: path.to_path_buf(),
                source: err,
            })
        }
    };

    let root: Value = serde_json::from_str(&text)?;
    let values = normalize(root)?;

    tracing::info!(path = %path.display(), records = values.len(), "loaded records");

    Ok(values.into_iter().map(Record::new).collect())
}

/// Turn a parsed JSON root into a record sequence.
///
/// Arrays pass through untouched. Objects yield the first array found under a
/// [`WRAPPER_KEYS`] entry, or become a single record themselves. Scalars are
/// rejected.
pub fn normalize(root: Value) -> Result<Vec<Value>, VerificaError> {
    match root {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            let wrapper = WRAPPER_KEYS
                .iter()
                .copied()
                .find(|key| matches!(map.get(*key), Some(Value::Array(_))));

            if let Some(key) = wrapper {
                tracing::debug!(key, "using wrapper key");
                if let Some(Value::Array(items)) = map.remove(key) {
                    return Ok(items);
                }
            }

            Ok(vec![Value::Object(map)])
        }
        _ => Err(VerificaError::UnsupportedJsonRoot),
    }
}
