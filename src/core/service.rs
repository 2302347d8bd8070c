//! core::service
//!
//! The resolved service configuration record.
//!
//! # Resolution
//!
//! [`ServiceConfig::resolve`] merges three layers, later overriding
//! earlier, field by field:
//!
//! 1. Built-in defaults (the `DEFAULT_*` constants)
//! 2. Config file values ([`FileConfig`])
//! 3. CLI flag overrides ([`Overrides`])
//!
//! The record is created once per invocation and is immutable afterwards;
//! every action receives it as an explicit argument.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use thiserror::Error;

use crate::core::config::FileConfig;
use crate::core::types::{ContainerName, ImageRef, ImageTag, TypeError};

/// Default image reference for the MUD manager service.
pub const DEFAULT_IMAGE: &str = "osmud/mud-manager";

/// Default image tag.
pub const DEFAULT_TAG: &str = "latest";

/// Default container name.
pub const DEFAULT_CONTAINER_NAME: &str = "mud-manager";

/// Default host directory holding the MUD profile cache.
pub const DEFAULT_CACHE_DIR: &str = "/var/cache/mud-manager";

/// Default bind address (all interfaces).
pub const DEFAULT_BIND_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Default host and container port.
pub const DEFAULT_BIND_PORT: u16 = 8888;

/// Container-side mount point for the MUD profile cache.
pub const CACHE_MOUNT_POINT: &str = "/var/lib/mud-manager";

/// Errors from configuration resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Type(#[from] TypeError),

    #[error("bind port must be nonzero")]
    ZeroPort,
}

/// CLI flag overrides, all optional.
///
/// `None` means "flag not given"; the config file or default applies.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub image: Option<String>,
    pub tag: Option<String>,
    pub container_name: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub bind_address: Option<IpAddr>,
    pub bind_port: Option<u16>,
}

/// The resolved service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Image reference (no tag).
    pub image: ImageRef,
    /// Image tag.
    pub tag: ImageTag,
    /// Container name.
    pub container_name: ContainerName,
    /// Host directory mounted into the container as the MUD profile cache.
    pub cache_dir: PathBuf,
    /// Host address the service port binds to.
    pub bind_address: IpAddr,
    /// Host and container port for the service.
    pub bind_port: u16,
}

impl ServiceConfig {
    /// Resolve the service configuration from a config file and CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if a value from either source fails newtype
    /// validation, or if the resolved port is zero.
    pub fn resolve(file: &FileConfig, flags: &Overrides) -> Result<Self, ResolveError> {
        let image = ImageRef::new(
            flags
                .image
                .as_deref()
                .or(file.image.as_deref())
                .unwrap_or(DEFAULT_IMAGE),
        )?;

        let tag = ImageTag::new(
            flags
                .tag
                .as_deref()
                .or(file.tag.as_deref())
                .unwrap_or(DEFAULT_TAG),
        )?;

        let container_name = ContainerName::new(
            flags
                .container_name
                .as_deref()
                .or(file.container_name.as_deref())
                .unwrap_or(DEFAULT_CONTAINER_NAME),
        )?;

        let cache_dir = flags
            .cache_dir
            .clone()
            .or_else(|| file.cache_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR));

        let bind_address = flags
            .bind_address
            .or(file.bind_address)
            .unwrap_or(DEFAULT_BIND_ADDRESS);

        let bind_port = flags.bind_port.or(file.bind_port).unwrap_or(DEFAULT_BIND_PORT);
        if bind_port == 0 {
            return Err(ResolveError::ZeroPort);
        }

        Ok(Self {
            image,
            tag,
            container_name,
            cache_dir,
            bind_address,
            bind_port,
        })
    }

    /// The fully-qualified image reference, `image:tag`.
    pub fn image_with_tag(&self) -> String {
        format!("{}:{}", self.image, self.tag)
    }
}
