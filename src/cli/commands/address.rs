//! docker-address command - Print the service container's IP address

use anyhow::Result;

use crate::cli::Context;
use crate::core::service::ServiceConfig;
use crate::docker::{self, inspect, DockerCli};

/// Query and print the container's IP address.
///
/// The address goes to stdout bare, so scripts can consume it. An empty
/// lookup is an error of its own, distinct from a delegate failure.
pub fn address(ctx: &Context, service: &ServiceConfig) -> Result<()> {
    let raw = DockerCli::new().capture(&docker::inspect_args(service), ctx.verbosity)?;
    let addr = inspect::primary_address(&service.container_name, &raw)?;

    println!("{}", addr);
    Ok(())
}
