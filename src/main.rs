//! # csvpick CLI
//!
//! ```bash
//! csvpick <input.csv> [--json] [--print]
//! ```
//!
//! Lists the columns of `<input.csv>`, asks for an optional
//! `column=value` filter on stdin, and writes the selected rows to
//! `outputs/output_<YYYYMMDDHHMMSS>.csv` (or `.json` with `--json`).
//! With `--print` the encoded output is also echoed to stdout.
//!
//! Every user-facing outcome, including errors, is a line on stdout and
//! exit status 0. Diagnostics go to stderr at the level set in
//! `csvpick.toml`.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use chrono::Local;
use tracing::level_filters::LevelFilter;

use csvpick::config::{self, LogSettings, SETTINGS_FILE};
use csvpick::{app, cli};

fn init_logging(log: &LogSettings) -> anyhow::Result<()> {
    let level: LevelFilter = log
        .level
        .parse()
        .with_context(|| format!("Invalid log level: {}", log.level))?;
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let now = Local::now();
    let settings = config::load_settings_or_default(Path::new(SETTINGS_FILE))?;
    init_logging(&settings.log)?;

    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let invocation = match cli::parse_args(argv) {
        Ok(invocation) => invocation,
        Err(e) => {
            writeln!(out, "{}", e)?;
            return Ok(());
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    if let Err(e) = app::run(&invocation, &settings, &mut input, &mut out, now) {
        writeln!(out, "{}", e)?;
    }
    out.flush()?;

    Ok(())
}
