//! Command-line parsing.
//!
//! The tool accepts one positional input path followed by prefix-matched
//! flags in any order:
//!
//! ```bash
//! csvpick data.csv                 # CSV output, confirmation line
//! csvpick data.csv --json --print  # JSON output, echoed to stdout
//! ```
//!
//! Any argument beginning with `--json` or `--print` switches the
//! corresponding option on; everything else after the input path is
//! ignored. The first argument is always the input path, even `--`;
//! clap only collects the remaining flags, so `--help`-like strings
//! reach the tool verbatim.

use clap::Parser;

use crate::error::{Result, ToolError};

/// Raw capture of the flags after the input path. Interpretation
/// happens in [`parse_args`].
#[derive(Parser, Debug)]
#[command(
    name = "csvpick",
    about = "List CSV columns, filter rows by column=value, export as CSV or JSON",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// `--json` / `--print` flags, any order.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub flags: Vec<String>,
}

/// Encoding of the exported records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// CSV with the original header row.
    Tabular,
    /// Pretty-printed JSON array of objects.
    Structured,
}

impl OutputFormat {
    /// File extension used for the output path.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Tabular => "csv",
            OutputFormat::Structured => "json",
        }
    }
}

/// Parsed invocation, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationConfig {
    pub input_path: String,
    pub output_format: OutputFormat,
    pub echo_to_stdout: bool,
}

/// Parse a full argument vector (program name first).
///
/// Returns [`ToolError::MissingInputArg`] when no input path is present;
/// its message is the usage line.
pub fn parse_args<I, T>(argv: I) -> Result<InvocationConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut argv = argv.into_iter().map(Into::into);
    let program = argv.next().unwrap_or_else(|| "csvpick".to_string());
    let input_path = match argv.next() {
        Some(path) => path,
        None => return Err(ToolError::MissingInputArg { program }),
    };

    // A leading `--` among the flags is swallowed by clap; it would be
    // ignored anyway.
    let cli = Cli::try_parse_from(std::iter::once(program.clone()).chain(argv))
        .map_err(|_| ToolError::MissingInputArg { program })?;

    let mut config = InvocationConfig {
        input_path,
        output_format: OutputFormat::Tabular,
        echo_to_stdout: false,
    };

    for arg in cli.flags {
        if arg.starts_with("--print") {
            config.echo_to_stdout = true;
        } else if arg.starts_with("--json") {
            config.output_format = OutputFormat::Structured;
        }
    }

    Ok(config)
}
