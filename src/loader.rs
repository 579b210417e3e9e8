//! CSV ingestion.
//!
//! Reads the whole input with the `csv` crate's default dialect (comma
//! separator, double-quote quoting, LF or CRLF line endings) and splits
//! off the first row as the header. Every row must have as many fields
//! as the header; the reader rejects anything else.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Result, ToolError};
use crate::record::Header;

/// A parsed input file: header plus raw data rows.
#[derive(Debug, Clone)]
pub struct Table {
    pub header: Header,
    pub rows: Vec<Vec<String>>,
}

/// Open and parse `path`.
///
/// The file handle is dropped before returning on every path.
pub fn load_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(ToolError::InputNotReadable)?;
    let table = parse_table(file)?;
    debug!(
        path = %path.display(),
        columns = table.header.len(),
        rows = table.rows.len(),
        "loaded input"
    );
    Ok(table)
}

/// Parse CSV text from any reader.
///
/// Fails with [`ToolError::EmptyInput`] when there is not even a header row.
pub fn parse_table<R: Read>(reader: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(reader);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<String>>());
    }

    if rows.is_empty() {
        return Err(ToolError::EmptyInput);
    }

    let header = Header::new(rows.remove(0));
    Ok(Table { header, rows })
}
