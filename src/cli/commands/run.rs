//! docker-run / docker-run-shell commands - Start the service container
//!
//! # Precondition
//!
//! `docker-run` requires the cache directory to exist; the check runs
//! before any delegation, so a missing directory never reaches the
//! container runtime. `docker-run-shell` mounts nothing and has no
//! precondition.

use anyhow::Result;

use crate::cache;
use crate::cli::Context;
use crate::core::service::ServiceConfig;
use crate::docker::{self, DockerCli};
use crate::ui::output;

/// Start the service as a detached container.
pub fn run(ctx: &Context, service: &ServiceConfig) -> Result<()> {
    cache::ensure_exists(&service.cache_dir)?;

    output::print(
        format!(
            "Starting '{}' from {}...",
            service.container_name,
            service.image_with_tag()
        ),
        ctx.verbosity,
    );

    DockerCli::new().stream(&docker::run_args(service), ctx.verbosity)?;

    output::print(
        format!(
            "Container '{}' is listening on {}:{}.",
            service.container_name, service.bind_address, service.bind_port
        ),
        ctx.verbosity,
    );
    Ok(())
}

/// Start a throwaway interactive shell in the service image.
pub fn run_shell(ctx: &Context, service: &ServiceConfig) -> Result<()> {
    DockerCli::new().stream(&docker::run_shell_args(service), ctx.verbosity)?;
    Ok(())
}
