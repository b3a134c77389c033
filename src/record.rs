use core::fmt;

use serde_json::Value;

use crate::fields::{extract_date_field, extract_description_field, is_known_field, render_value};

/// One element of the loaded collection, with its inferred fields resolved once.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub value: Value,
    pub date: String,
    pub description: String,
}

impl Record {
    pub fn new(value: Value) -> Self {
        let date = extract_date_field(&value);
        let description = extract_description_field(&value);
        Record {
            value,
            date,
            description,
        }
    }

    /// Fields other than the recognised date/description keys, in input order.
    pub fn other_fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.value
            .as_object()
            .into_iter()
            .flat_map(|map| map.iter())
            .filter(|(key, _)| !is_known_field(key))
            .map(|(key, value)| (key.as_str(), value))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.date.is_empty() {
            writeln!(f, "Data: {}", self.date)?;
        }

        if !self.description.is_empty() {
            writeln!(f, "Descrizione: {}", self.description)?;
        }

        for (key, value) in self.other_fields() {
            writeln!(f, "{}: {}", key, render_value(value))?;
        }

        Ok(())
    }
}
