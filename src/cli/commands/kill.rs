//! docker-kill command - Kill the running service container

use anyhow::Result;

use crate::cli::Context;
use crate::core::service::ServiceConfig;
use crate::docker::{self, DockerCli};
use crate::ui::output;

/// Kill the running service container.
///
/// The container must be running; a stopped or missing container is the
/// delegate's error to report.
pub fn kill(ctx: &Context, service: &ServiceConfig) -> Result<()> {
    output::print(
        format!("Killing container '{}'...", service.container_name),
        ctx.verbosity,
    );

    DockerCli::new().stream(&docker::kill_args(service), ctx.verbosity)?;
    Ok(())
}
