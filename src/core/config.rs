//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.appy/config.toml` unless `--config` points elsewhere.
//! The file is only ever read; appy never writes it.

use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct AppyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    /// Pause between loop iterations, in milliseconds.
    pub tick_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub tick_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TICK_MS: u64 = 10;
pub const DEFAULT_LOG_FILE: &str = "appy.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

pub const ENV_LOG_FILE: &str = "APPY_LOG_FILE";
pub const ENV_LOG_LEVEL: &str = "APPY_LOG_LEVEL";
pub const ENV_TICK_MS: &str = "APPY_TICK_MS";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub tick: Duration,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.appy/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".appy").join("config.toml"))
}

/// Load the config file.
///
/// An explicit path must exist. The default path is optional: if it is
/// missing (or there is no home directory) the defaults are returned.
pub fn load_config(explicit: Option<&Path>) -> Result<AppyConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(AppyConfig::default()),
        },
    };

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config from the process environment.
pub fn resolve(config: &AppyConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Resolve by collapsing: defaults → config file → env vars → CLI.
///
/// Unparseable levels or tick values fall through to the next source.
pub fn resolve_with_env<F>(config: &AppyConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let tick_ms = cli
        .tick_ms
        .or_else(|| env(ENV_TICK_MS).and_then(|v| v.trim().parse().ok()))
        .or(config.general.tick_ms)
        .unwrap_or(DEFAULT_TICK_MS);

    let log_level = cli
        .log_level
        .as_deref()
        .and_then(parse_level)
        .or_else(|| env(ENV_LOG_LEVEL).as_deref().and_then(parse_level))
        .or_else(|| config.logging.level.as_deref().and_then(parse_level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env(ENV_LOG_FILE).map(PathBuf::from))
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        tick: Duration::from_millis(tick_ms),
        log_level,
        log_file,
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(raw.trim()).ok()
}
