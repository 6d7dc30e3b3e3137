use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::Level;
use unoduetre_document::OutputFormat;

/// Project-local config file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "unoduetre.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn as_tracing_level(&self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("themes")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    /// Directory of user variant files.
    pub variants_dir: Option<PathBuf>,
    pub log_level: LogLevel,
    /// Formats written for every variant, replacing each variant's own list.
    pub formats: Option<Vec<OutputFormat>>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            variants_dir: None,
            log_level: LogLevel::Info,
            formats: None,
        }
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("unoduetre")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn default_variants_dir() -> PathBuf {
    config_dir().join("variants")
}

impl BuildConfig {
    /// `explicit` if given, else `./unoduetre.toml`, else the user config
    /// file. Defaults when none exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => [PathBuf::from(LOCAL_CONFIG_FILE), config_path()]
                .into_iter()
                .find(|path| path.is_file()),
        };

        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .wrap_err_with(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn variants_dir(&self) -> PathBuf {
        self.variants_dir
            .clone()
            .unwrap_or_else(default_variants_dir)
    }
}
