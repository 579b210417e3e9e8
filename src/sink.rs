//! Output file emission.
//!
//! Results land in `<dir>/output_<YYYYMMDDHHMMSS>.<ext>`, stamped with
//! local time. Two runs within the same second write the same path and
//! the later one wins.

use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use crate::cli::OutputFormat;
use crate::error::{Result, ToolError};

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Create `dir` (and parents) if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder
        .create(dir)
        .map_err(ToolError::OutputDirUnavailable)
}

/// Compact 14-digit timestamp used in output file names.
pub fn timestamp(now: &DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

pub fn output_path(dir: &Path, now: &DateTime<Local>, format: OutputFormat) -> PathBuf {
    dir.join(format!("output_{}.{}", timestamp(now), format.extension()))
}

/// Write `bytes` to `path`, replacing any existing file (mode 0644 on Unix).
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(ToolError::OutputWriteFailed)?;
    file.write_all(bytes).map_err(ToolError::OutputWriteFailed)?;
    file.flush().map_err(ToolError::OutputWriteFailed)?;

    info!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
