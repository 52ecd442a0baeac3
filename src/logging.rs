//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Verbosity maps to a level filter (`warn`, `info`, `debug`, `trace`); `RUST_LOG`
//! overrides it when set. The interactive UI owns the terminal, so in that mode logs
//! are only written when a log file is configured.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Disabled,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub target: LogTarget,
}

impl LogConfig {
    /// Build from `-v` count and optional log file.
    ///
    /// - 0: warn
    /// - 1: info
    /// - 2: debug
    /// - 3+: trace
    pub fn from_verbosity(verbosity: u8, log_file: Option<PathBuf>, interactive: bool) -> Self {
        let level = match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        let target = match (log_file, interactive) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Disabled,
            (None, false) => LogTarget::Stderr,
        };
        Self { level, target }
    }
}

/// Install the global subscriber
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match &config.target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => builder
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}")),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))
        }
    }
}
