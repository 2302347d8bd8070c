//! cli
//!
//! Command-line interface layer for mudctl.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load the config file and resolve the immutable service configuration
//! - Delegate to operation handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, resolves the
//! [`ServiceConfig`] once, and dispatches. All container runtime calls
//! flow through [`crate::docker`]; all cache mutations flow through
//! [`crate::cache`].

pub mod args;
pub mod commands;

pub use args::Cli;

use anyhow::{Context as _, Result};

use crate::core::config;
use crate::core::service::{Overrides, ServiceConfig};
use crate::ui::output::Verbosity;

/// Execution context shared by all operation handlers.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Output verbosity from `--quiet` / `--debug`.
    pub verbosity: Verbosity,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs` with already
/// parsed arguments; usage errors never reach this function.
pub fn run(cli: Cli) -> Result<()> {
    let ctx = Context {
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
    };

    let file = config::load(cli.config.as_deref()).context("failed to load configuration")?;

    let flags = Overrides {
        image: cli.docker_image,
        tag: cli.docker_image_tag,
        container_name: cli.docker_name,
        cache_dir: cli.mud_cache_path,
        bind_address: cli.bind_address,
        bind_port: cli.bind_port,
    };

    let service = ServiceConfig::resolve(&file, &flags)?;

    commands::dispatch(cli.command, &ctx, &service)
}
