//! The interactive pipeline.
//!
//! `run` drives one invocation end to end: load, list headers, prompt,
//! select, encode, write. Console input and output are injected so the
//! whole sequence can be exercised in-process.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::debug;

use crate::cli::InvocationConfig;
use crate::config::Settings;
use crate::error::{Result, ToolError};
use crate::filter::{self, Filter, FILTER_PROMPT};
use crate::loader;
use crate::record::{shape_records, Header};
use crate::serialize;
use crate::sink;

/// Run the pipeline and return the path of the written output file.
///
/// Any [`ToolError`] ends the run; the caller prints its message.
pub fn run<R: BufRead, W: Write>(
    invocation: &InvocationConfig,
    settings: &Settings,
    input: &mut R,
    out: &mut W,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    let table = loader::load_table(Path::new(&invocation.input_path))?;

    print_headers(out, &table.header)?;

    write!(out, "\n\n")?;
    writeln!(out, "{}", FILTER_PROMPT)?;
    out.flush()?;
    let token = filter::read_filter_token(input)?;
    write!(out, "\n\n")?;

    let records = shape_records(&table.header, table.rows);
    let parsed = Filter::parse(&token)?;
    let selected = filter::select(&table.header, records, parsed.as_ref())?;
    if parsed.is_some() && selected.is_empty() {
        return Err(ToolError::NoMatches);
    }

    let bytes = serialize::encode(&table.header, &selected, invocation.output_format)?;

    sink::ensure_output_dir(&settings.output.dir)?;
    let path = sink::output_path(&settings.output.dir, &now, invocation.output_format);
    sink::write_output(&path, &bytes)?;

    if invocation.echo_to_stdout {
        out.write_all(&bytes)?;
        if !bytes.ends_with(b"\n") {
            writeln!(out)?;
        }
    } else {
        writeln!(out, "Output written to {}", path.display())?;
    }
    out.flush()?;

    debug!(records = selected.len(), "run complete");
    Ok(path)
}

/// Print the `Headers:` listing, one `<index>: <name>` line per column.
pub fn print_headers<W: Write>(out: &mut W, header: &Header) -> Result<()> {
    writeln!(out, "Headers:")?;
    for (i, name) in header.names().iter().enumerate() {
        writeln!(out, "{}: {}", i, name)?;
    }
    Ok(())
}
