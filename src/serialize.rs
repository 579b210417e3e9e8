//! Output encoding.
//!
//! Tabular output is CSV in the input dialect with the header first and
//! `\n` line endings. Structured output is a two-space indented JSON
//! array of string-valued objects.

use csv::{Terminator, WriterBuilder};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::{Result, ToolError};
use crate::record::{Header, Record};

/// Encode `records` in the requested format.
pub fn encode(header: &Header, records: &[Record], format: OutputFormat) -> Result<Vec<u8>> {
    let bytes = match format {
        OutputFormat::Tabular => encode_csv(header, records)?,
        OutputFormat::Structured => serde_json::to_vec_pretty(records)?,
    };
    debug!(bytes = bytes.len(), format = format.extension(), "encoded output");
    Ok(bytes)
}

fn encode_csv(header: &Header, records: &[Record]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(header.names()).map_err(csv_failure)?;
    for record in records {
        writer.write_record(record.project()).map_err(csv_failure)?;
    }

    writer
        .into_inner()
        .map_err(|e| ToolError::SerializationFailed(e.error().to_string()))
}

fn csv_failure(e: csv::Error) -> ToolError {
    ToolError::SerializationFailed(e.to_string())
}
