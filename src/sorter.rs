use std::fmt;
use std::str::FromStr;

use crate::date::parse_date;
use crate::errors::VerificaError;
use crate::record::Record;

/// Tokens accepted for the sort criterion.
pub const SORT_TOKENS: [&str; 4] = ["data", "date", "descrizione", "description"];

/// Field category records are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Description,
}

impl FromStr for SortKey {
    type Err = VerificaError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "data" | "date" => Ok(SortKey::Date),
            "descrizione" | "description" => Ok(SortKey::Description),
            other => Err(VerificaError::InvalidSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortKey::Date => write!(f, "data"),
            SortKey::Description => write!(f, "descrizione"),
        }
    }
}

/// Order `records` by the criterion named by `token`.
pub fn sort_records(records: Vec<Record>, token: &str) -> Result<Vec<Record>, VerificaError> {
    let key: SortKey = token.parse()?;
    Ok(sort_by_key(records, key))
}

/// Stable ascending sort; ties keep their input order.
pub fn sort_by_key(records: Vec<Record>, key: SortKey) -> Vec<Record> {
    tracing::debug!(%key, records = records.len(), "sorting records");

    match key {
        SortKey::Date => {
            let mut keyed: Vec<_> = records
                .into_iter()
                .map(|r| (parse_date(&r.date), r))
                .collect();
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            keyed.into_iter().map(|(_, r)| r).collect()
        }
        SortKey::Description => {
            let mut keyed: Vec<_> = records
                .into_iter()
                .map(|r| (r.description.to_lowercase(), r))
                .collect();
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            keyed.into_iter().map(|(_, r)| r).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn records(values: Vec<Value>) -> Vec<Record> {
        values.into_iter().map(Record::new).collect()
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records
            .iter()
            .map(|r| r.value["id"].as_i64().unwrap())
            .collect()
    }

    #[test]
    fn all_tokens_map_to_a_key() {
        assert_eq!("data".parse::<SortKey>().unwrap(), SortKey::Date);
        assert_eq!("date".parse::<SortKey>().unwrap(), SortKey::Date);
        assert_eq!("descrizione".parse::<SortKey>().unwrap(), SortKey::Description);
        assert_eq!("description".parse::<SortKey>().unwrap(), SortKey::Description);
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = sort_records(Vec::new(), "Data").unwrap_err();
        assert!(matches!(err, VerificaError::InvalidSortKey(ref t) if t == "Data"));
    }

    #[test]
    fn dates_sort_ascending_with_unparseable_first() {
        let sorted = sort_records(
            records(vec![
                json!({"id": 1, "data": "2023-05-01"}),
                json!({"id": 2, "data": "10/01/2022"}),
                json!({"id": 3, "data": "non so"}),
                json!({"id": 4}),
                json!({"id": 5, "date": "2022-01-10T08:00:00Z"}),
            ]),
            "data",
        )
        .unwrap();

        assert_eq!(ids(&sorted), vec![3, 4, 2, 5, 1]);
    }

    #[test]
    fn description_sort_ignores_case() {
        let sorted = sort_records(
            records(vec![
                json!({"id": 1, "description": "Banana"}),
                json!({"id": 2, "description": "apple"}),
            ]),
            "description",
        )
        .unwrap();

        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn ties_keep_input_order() {
        let input = records(vec![
            json!({"id": 1, "data": "2023-01-01", "title": "b"}),
            json!({"id": 2, "data": "2022-01-01", "title": "B"}),
            json!({"id": 3, "data": "2023-01-01", "title": "a"}),
            json!({"id": 4, "data": "2023-01-01", "title": "b"}),
        ]);

        let by_date = sort_by_key(input.clone(), SortKey::Date);
        assert_eq!(ids(&by_date), vec![2, 1, 3, 4]);

        let by_desc = sort_by_key(input, SortKey::Description);
        assert_eq!(ids(&by_desc), vec![3, 1, 2, 4]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let input = records(vec![
            json!({"id": 1, "name": "zeta"}),
            json!({"id": 2, "name": "Alfa"}),
            json!({"id": 3}),
        ]);

        let once = sort_by_key(input, SortKey::Description);
        let twice = sort_by_key(once.clone(), SortKey::Description);
        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec![3, 2, 1]);
    }
}
