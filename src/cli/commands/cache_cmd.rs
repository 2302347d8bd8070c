//! setup-cache-dir / clear-cache-dir commands - Maintain the host cache
//!
//! Both mutations run through `sudo` and hold the cache advisory lock
//! for the duration of the delegated command.

use anyhow::Result;

use crate::cache;
use crate::cli::Context;
use crate::core::service::ServiceConfig;
use crate::ui::output;

/// Create the cache directory with fixed ownership and permissions.
pub fn setup_cache_dir(ctx: &Context, service: &ServiceConfig) -> Result<()> {
    output::print(
        format!("Creating cache directory '{}'...", service.cache_dir.display()),
        ctx.verbosity,
    );

    cache::setup(&service.cache_dir, ctx.verbosity)?;
    Ok(())
}

/// Remove the cache directory's contents.
pub fn clear_cache_dir(ctx: &Context, service: &ServiceConfig) -> Result<()> {
    output::print(
        format!("Clearing cache directory '{}'...", service.cache_dir.display()),
        ctx.verbosity,
    );

    cache::clear(&service.cache_dir, ctx.verbosity)?;
    Ok(())
}
