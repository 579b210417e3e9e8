//! Header and record types.
//!
//! The schema of an input file is only known at runtime, so a record is
//! a positional row paired with a shared handle to its [`Header`]. A
//! record built by [`shape_records`] always has exactly one value per
//! header column.

use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Ordered column names from the first row of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Arc<[String]>,
}

impl Header {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names: names.into(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of the last column called `column`. A repeated name
    /// resolves to its rightmost column.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.names.iter().rposition(|name| name == column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.position(column).is_some()
    }
}

/// One data row keyed by header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    header: Header,
    values: Vec<String>,
}

impl Record {
    /// Value of `column`, or `None` if the header has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.header
            .position(column)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    /// Raw values in header order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The keyed value for each header position. Repeated header names
    /// all show the value of their rightmost column.
    pub fn project(&self) -> Vec<&str> {
        self.header
            .names()
            .iter()
            .map(|name| self.get(name).unwrap_or(""))
            .collect()
    }

    /// `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.header
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}

/// Serialized as a JSON object. Keys come out sorted; when a header
/// repeats a name the last column wins.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map: BTreeMap<&str, &str> = BTreeMap::new();
        for (column, value) in self.iter() {
            map.insert(column, value);
        }
        map.serialize(serializer)
    }
}

/// Pair every raw row with the header, preserving input order.
///
/// Rows are expected to have `header.len()` fields; the loader enforces
/// this. A short row is padded with empty strings and a long row is
/// truncated so the one-value-per-column invariant always holds.
pub fn shape_records(header: &Header, rows: Vec<Vec<String>>) -> Vec<Record> {
    rows.into_iter()
        .map(|mut values| {
            values.resize(header.len(), String::new());
            Record {
                header: header.clone(),
                values,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Header {
        Header::new(names.iter().map(|s| s.to_string()).collect())
    }

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_records_keyed_by_header() {
        let h = header(&["name", "age"]);
        let records = shape_records(&h, vec![row(&["Ada", "36"]), row(&["Grace", "85"])]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some("Ada"));
        assert_eq!(records[1].get("age"), Some("85"));
        assert_eq!(records[0].get("email"), None);
    }

    #[test]
    fn test_order_preserved() {
        let h = header(&["n"]);
        let records = shape_records(&h, vec![row(&["3"]), row(&["1"]), row(&["2"])]);
        let got: Vec<&str> = records.iter().map(|r| r.values()[0].as_str()).collect();
        assert_eq!(got, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_width_matches_header() {
        let h = header(&["a", "b", "c"]);
        let records = shape_records(&h, vec![row(&["1"]), row(&["1", "2", "3", "4"])]);
        assert_eq!(records[0].values().len(), 3);
        assert_eq!(records[0].get("c"), Some(""));
        assert_eq!(records[1].values().len(), 3);
    }

    #[test]
    fn test_serializes_as_sorted_object() {
        let h = header(&["name", "age"]);
        let records = shape_records(&h, vec![row(&["Ada", "36"])]);
        let json = serde_json::to_string(&records[0]).unwrap();
        assert_eq!(json, r#"{"age":"36","name":"Ada"}"#);
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let h = header(&["k", "k"]);
        let records = shape_records(&h, vec![row(&["first", "second"])]);
        assert_eq!(records[0].get("k"), Some("second"));
        assert_eq!(records[0].project(), vec!["second", "second"]);
        let json = serde_json::to_string(&records[0]).unwrap();
        assert_eq!(json, r#"{"k":"second"}"#);
    }

    #[test]
    fn test_project_without_duplicates_is_values() {
        let h = header(&["name", "age"]);
        let records = shape_records(&h, vec![row(&["Ada", "36"])]);
        assert_eq!(records[0].project(), vec!["Ada", "36"]);
    }
}
