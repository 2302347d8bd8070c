//! docker-rm command - Remove the service container

use anyhow::Result;

use crate::cli::Context;
use crate::core::service::ServiceConfig;
use crate::docker::{self, DockerCli};
use crate::ui::output;

/// Remove the service container.
///
/// The container must exist; a missing container is the delegate's
/// error to report.
pub fn remove(ctx: &Context, service: &ServiceConfig) -> Result<()> {
    output::print(
        format!("Removing container '{}'...", service.container_name),
        ctx.verbosity,
    );

    DockerCli::new().stream(&docker::rm_args(service), ctx.verbosity)?;
    Ok(())
}
