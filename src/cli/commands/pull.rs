//! docker-pull command - Fetch the service image

use anyhow::Result;

use crate::cli::Context;
use crate::core::service::ServiceConfig;
use crate::docker::{self, DockerCli};
use crate::ui::output;

/// Pull the configured image from the registry.
pub fn pull(ctx: &Context, service: &ServiceConfig) -> Result<()> {
    output::print(
        format!("Pulling {}...", service.image_with_tag()),
        ctx.verbosity,
    );

    DockerCli::new().stream(&docker::pull_args(service), ctx.verbosity)?;
    Ok(())
}
