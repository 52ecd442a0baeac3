//! Application configuration.
//!
//! Resolution order for the dataset path:
//! 1. `--data` flag
//! 2. `COUNTRY_EXPLORER_DATA` environment variable
//! 3. `data_path` in the config file
//! 4. `<data dir>/country-explorer/countries.json`
//!
//! The config file is `--config` when given, otherwise
//! `<config dir>/country-explorer/config.json`. A missing default config file is not an
//! error; a missing explicit one is.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::selection::Palette;

/// Environment variable naming the dataset file
pub const DATA_ENV_VAR: &str = "COUNTRY_EXPLORER_DATA";

const APP_DIR_NAME: &str = "country-explorer";
const CONFIG_FILENAME: &str = "config.json";
const DATA_FILENAME: &str = "countries.json";

/// On-disk config file contents; every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    #[serde(default)]
    pub palette: Option<Palette>,
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub palette: Palette,
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

/// Default config file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILENAME))
}

/// Default dataset location
pub fn default_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(data_dir.join(APP_DIR_NAME).join(DATA_FILENAME))
}

/// Read and validate a config file
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: ConfigFile = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    if let Some(palette) = &config.palette
        && palette.is_empty()
    {
        bail!("Config file {} defines an empty palette", path.display());
    }

    Ok(config)
}

impl AppConfig {
    /// Resolve configuration from overrides, environment, config file, and defaults
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        let file = match &overrides.config_path {
            Some(path) => load_config_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => load_config_file(&path)?,
                _ => ConfigFile::default(),
            },
        };

        let env_data_path = env::var_os(DATA_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from);
        let data_path = match (overrides.data_path.clone(), env_data_path, file.data_path) {
            (Some(path), _, _) | (None, Some(path), _) | (None, None, Some(path)) => path,
            (None, None, None) => default_data_path()?,
        };

        let config = Self { data_path, palette: file.palette.unwrap_or_default() };
        debug!(
            data_path = %config.data_path.display(),
            palette = config.palette.len(),
            "resolved config"
        );
        Ok(config)
    }
}
