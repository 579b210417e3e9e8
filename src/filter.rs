//! Filter prompt and record selection.
//!
//! The user answers the prompt with either nothing (show the first rows)
//! or a single `column=value` token. Only the first whitespace-free run
//! of the answer line is read, so values containing spaces cannot be
//! entered.

use std::io::BufRead;

use tracing::debug;

use crate::error::{Result, ToolError};
use crate::record::{Header, Record};

/// Records kept when the user gives no filter.
pub const HEAD_LIMIT: usize = 10;

pub const FILTER_PROMPT: &str =
    "Enter column=value to filter or press Enter to see the first 10 entries:";

/// Exact-match predicate over one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    /// Parse a prompt token. An empty token means "no filter".
    ///
    /// The token is split at the first `=`; the value may itself contain
    /// further `=` characters or be empty.
    pub fn parse(token: &str) -> Result<Option<Filter>> {
        if token.is_empty() {
            return Ok(None);
        }
        let (column, value) = token
            .split_once('=')
            .ok_or(ToolError::InvalidFilterSyntax)?;
        Ok(Some(Filter {
            column: column.to_string(),
            value: value.to_string(),
        }))
    }

    pub fn matches(&self, record: &Record) -> bool {
        record.get(&self.column) == Some(self.value.as_str())
    }
}

/// Read one line from `input` and return its first whitespace-delimited
/// token. End of input yields an empty token; invalid UTF-8 is replaced
/// rather than rejected.
pub fn read_filter_token<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    let line = String::from_utf8_lossy(&line);
    Ok(line.split_whitespace().next().unwrap_or("").to_string())
}

/// Apply `filter`, or take the first [`HEAD_LIMIT`] records when absent.
///
/// Filtering is byte-exact and stable. An empty match set is returned as
/// an empty vector; reporting it is up to the caller.
pub fn select(
    header: &Header,
    records: Vec<Record>,
    filter: Option<&Filter>,
) -> Result<Vec<Record>> {
    let selected: Vec<Record> = match filter {
        Some(filter) => {
            if !header.contains(&filter.column) {
                return Err(ToolError::UnknownColumn(filter.column.clone()));
            }
            records.into_iter().filter(|r| filter.matches(r)).collect()
        }
        None => records.into_iter().take(HEAD_LIMIT).collect(),
    };
    debug!(selected = selected.len(), filtered = filter.is_some(), "selected records");
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::shape_records;

    fn people() -> (Header, Vec<Record>) {
        let header = Header::new(vec!["name".to_string(), "team".to_string()]);
        let rows = [
            ("Ada", "red"),
            ("Grace", "blue"),
            ("Linus", "red"),
            ("Ken", "Red"),
        ]
        .iter()
        .map(|(n, t)| vec![n.to_string(), t.to_string()])
        .collect();
        let records = shape_records(&header, rows);
        (header, records)
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().filter_map(|r| r.get("name")).collect()
    }

    #[test]
    fn test_parse_empty_is_none() {
        assert_eq!(Filter::parse("").unwrap(), None);
    }

    #[test]
    fn test_parse_splits_at_first_equals() {
        let f = Filter::parse("expr=a=b").unwrap().unwrap();
        assert_eq!(f.column, "expr");
        assert_eq!(f.value, "a=b");
    }

    #[test]
    fn test_parse_empty_value() {
        let f = Filter::parse("name=").unwrap().unwrap();
        assert_eq!(f.value, "");
    }

    #[test]
    fn test_parse_without_equals() {
        let err = Filter::parse("nameGrace").unwrap_err();
        assert!(matches!(err, ToolError::InvalidFilterSyntax));
    }

    #[test]
    fn test_token_is_first_word() {
        let mut input = "  team=red trailing words\n".as_bytes();
        assert_eq!(read_filter_token(&mut input).unwrap(), "team=red");
    }

    #[test]
    fn test_token_empty_line_and_eof() {
        let mut blank = "\n".as_bytes();
        assert_eq!(read_filter_token(&mut blank).unwrap(), "");
        let mut eof = "".as_bytes();
        assert_eq!(read_filter_token(&mut eof).unwrap(), "");
    }

    #[test]
    fn test_token_with_invalid_utf8() {
        let mut input: &[u8] = b"name=\xffAda rest\n";
        assert_eq!(read_filter_token(&mut input).unwrap(), "name=\u{FFFD}Ada");
    }

    #[test]
    fn test_filter_is_stable_and_exact() {
        let (header, records) = people();
        let filter = Filter::parse("team=red").unwrap();
        let got = select(&header, records, filter.as_ref()).unwrap();
        assert_eq!(names(&got), vec!["Ada", "Linus"]);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let (header, records) = people();
        let filter = Filter::parse("name=Nobody").unwrap();
        let got = select(&header, records, filter.as_ref()).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn test_unknown_column() {
        let (header, records) = people();
        let filter = Filter::parse("email=x").unwrap();
        let err = select(&header, records, filter.as_ref()).unwrap_err();
        assert_eq!(err.to_string(), "Column name 'email' not found.");
    }

    #[test]
    fn test_head_slice_short_input() {
        let (header, records) = people();
        let all = select(&header, records, None).unwrap();
        assert_eq!(names(&all), vec!["Ada", "Grace", "Linus", "Ken"]);
    }

    #[test]
    fn test_head_slice_caps_at_limit() {
        let header = Header::new(vec!["id".to_string()]);
        let rows = (0..HEAD_LIMIT + 5).map(|i| vec![i.to_string()]).collect();
        let records = shape_records(&header, rows);
        let got = select(&header, records, None).unwrap();
        assert_eq!(got.len(), HEAD_LIMIT);
        assert_eq!(got[0].get("id"), Some("0"));
        assert_eq!(got[HEAD_LIMIT - 1].get("id"), Some("9"));
    }

    #[test]
    fn test_prompt_mentions_head_limit() {
        assert!(FILTER_PROMPT.contains(&format!("first {} entries", HEAD_LIMIT)));
    }

    #[test]
    fn test_duplicate_header_matches_last_column() {
        let header = Header::new(vec!["k".to_string(), "k".to_string()]);
        let rows = vec![vec!["first".to_string(), "second".to_string()]];
        let records = shape_records(&header, rows);

        let second = Filter::parse("k=second").unwrap();
        let got = select(&header, records.clone(), second.as_ref()).unwrap();
        assert_eq!(got.len(), 1);

        let first = Filter::parse("k=first").unwrap();
        let got = select(&header, records, first.as_ref()).unwrap();
        assert!(got.is_empty());
    }
}
