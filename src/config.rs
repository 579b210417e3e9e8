use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "csvpick.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("outputs")
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    let settings: Settings =
        toml::from_str(&content).with_context(|| "Failed to parse settings file")?;

    if settings.output.dir.as_os_str().is_empty() {
        anyhow::bail!("output.dir must not be empty");
    }

    if !LOG_LEVELS.contains(&settings.log.level.as_str()) {
        anyhow::bail!(
            "Unknown log level: '{}'. Must be one of {}.",
            settings.log.level,
            LOG_LEVELS.join(", ")
        );
    }

    Ok(settings)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
pub fn load_settings_or_default(path: &Path) -> Result<Settings> {
    if path.exists() {
        load_settings(path)
    } else {
        Ok(Settings::default())
    }
}
