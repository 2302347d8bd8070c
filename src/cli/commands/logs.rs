//! docker-logs / docker-trace commands - Show or follow service logs

use anyhow::Result;

use crate::cli::Context;
use crate::core::service::ServiceConfig;
use crate::docker::{self, DockerCli};

/// Show the container's logs, timestamped.
pub fn logs(ctx: &Context, service: &ServiceConfig) -> Result<()> {
    DockerCli::new().stream(&docker::logs_args(service), ctx.verbosity)?;
    Ok(())
}

/// Follow the container's logs.
///
/// Blocks until the process is interrupted or the container stops; the
/// only operation with unbounded duration.
pub fn trace(ctx: &Context, service: &ServiceConfig) -> Result<()> {
    DockerCli::new().stream(&docker::trace_args(service), ctx.verbosity)?;
    Ok(())
}
