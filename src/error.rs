//! User-facing error kinds.
//!
//! Every failure the tool can report to the user is one [`ToolError`]
//! variant. The `Display` text of each variant is the exact single line
//! printed to stdout before the run ends.

use std::io;
use thiserror::Error;

/// Result alias used by the pipeline stages.
pub type Result<T> = std::result::Result<T, ToolError>;

#[derive(Debug, Error)]
pub enum ToolError {
    /// No input path was given on the command line.
    #[error("Usage: {program} <input.csv> [--json] [--print]")]
    MissingInputArg { program: String },

    #[error("Error opening file: {0}")]
    InputNotReadable(#[source] io::Error),

    #[error("Error reading CSV: {0}")]
    InputMalformed(#[from] csv::Error),

    /// The input parsed to zero rows (not even a header).
    #[error("No records found in the CSV file.")]
    EmptyInput,

    #[error("Invalid filter format. Use <column>=<value>.")]
    InvalidFilterSyntax,

    #[error("Column name '{0}' not found.")]
    UnknownColumn(String),

    #[error("No matching records found.")]
    NoMatches,

    #[error("Error creating output directory: {0}")]
    OutputDirUnavailable(#[source] io::Error),

    #[error("Error writing to output file: {0}")]
    OutputWriteFailed(#[source] io::Error),

    #[error("Error creating output data: {0}")]
    SerializationFailed(String),

    /// Reading the prompt answer or writing to stdout failed.
    #[error("Error reading from or writing to console: {0}")]
    Console(#[from] io::Error),
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        ToolError::SerializationFailed(e.to_string())
    }
}
