//! core::config::schema
//!
//! Configuration file schema.
//!
//! Every field is optional; the resolved defaults live in
//! [`crate::core::service`]. Unknown keys are rejected so that a typoed
//! key fails loudly instead of silently falling back to a default.

use std::net::IpAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::{ContainerName, ImageRef, ImageTag};

/// User configuration file (`config.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Image reference for the MUD manager service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Image tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Container name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,

    /// Host directory holding the MUD profile cache.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    /// Host address the service port binds to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_address: Option<IpAddr>,

    /// Host and container port for the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_port: Option<u16>,
}

impl FileConfig {
    /// Validate field values.
    ///
    /// Values are checked with the same newtype rules applied to CLI
    /// flags, so both sources reject identically.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(image) = &self.image {
            ImageRef::new(image).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        }
        if let Some(tag) = &self.tag {
            ImageTag::new(tag).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        }
        if let Some(name) = &self.container_name {
            ContainerName::new(name).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        }
        if self.bind_port == Some(0) {
            return Err(ConfigError::InvalidValue(
                "bind_port must be nonzero".into(),
            ));
        }
        Ok(())
    }
}
