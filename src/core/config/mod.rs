//! core::config
//!
//! Configuration file loading.
//!
//! # Locations
//!
//! Searched in order (first hit wins):
//! 1. `$MUDCTL_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/mudctl/config.toml`
//! 3. `~/.mudctl/config.toml`
//!
//! A missing file is not an error; defaults apply. An explicit path
//! (the `--config` flag) must exist.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file
//! 3. CLI flags (applied in [`crate::core::service`])

pub mod schema;

pub use schema::FileConfig;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Load configuration.
///
/// If `explicit` is given (the `--config` flag), that file must exist and
/// parse. Otherwise the standard locations are searched and a missing
/// file yields the default (empty) configuration.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read, parsed,
/// or validated.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    // 1. Check $MUDCTL_CONFIG
    if let Ok(path) = std::env::var("MUDCTL_CONFIG") {
        let path = PathBuf::from(path);
        if path.exists() {
            return read_config(&path);
        }
    }

    // 2. Check $XDG_CONFIG_HOME/mudctl/config.toml
    if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg_home).join("mudctl/config.toml");
        if path.exists() {
            return read_config(&path);
        }
    }

    // 3. Check ~/.mudctl/config.toml
    if let Some(home) = dirs::home_dir() {
        let path = home.join(".mudctl/config.toml");
        if path.exists() {
            return read_config(&path);
        }
    }

    // No config found, use defaults
    Ok(FileConfig::default())
}

/// Read, parse, and validate a config file.
fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: FileConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config.validate()?;
    Ok(config)
}
