//! cli::commands
//!
//! Operation dispatch and handlers.
//!
//! # Architecture
//!
//! Each handler:
//! 1. Checks its local preconditions (if any)
//! 2. Delegates exactly one external command
//! 3. Propagates the delegate's failure unchanged
//!
//! Handlers receive the execution context and the resolved service
//! configuration as explicit arguments; nothing here reads global state.

mod address;
mod cache_cmd;
mod completion;
mod kill;
mod logs;
mod pull;
mod remove;
mod run;

// Re-export handler functions for testing and direct invocation
pub use address::address;
pub use cache_cmd::{clear_cache_dir, setup_cache_dir};
pub use completion::completion;
pub use kill::kill;
pub use logs::{logs, trace};
pub use pull::pull;
pub use remove::remove;
pub use run::{run, run_shell};

use anyhow::Result;

use crate::cli::args::Command;
use crate::cli::Context;
use crate::core::service::ServiceConfig;

/// Dispatch an operation to its handler.
pub fn dispatch(command: Command, ctx: &Context, service: &ServiceConfig) -> Result<()> {
    match command {
        Command::Pull => pull::pull(ctx, service),
        Command::Run => run::run(ctx, service),
        Command::RunShell => run::run_shell(ctx, service),
        Command::Remove => remove::remove(ctx, service),
        Command::Kill => kill::kill(ctx, service),
        Command::Logs => logs::logs(ctx, service),
        Command::Trace => logs::trace(ctx, service),
        Command::SetupCacheDir => cache_cmd::setup_cache_dir(ctx, service),
        Command::ClearCacheDir => cache_cmd::clear_cache_dir(ctx, service),
        Command::Address => address::address(ctx, service),
        Command::Completion { shell } => completion::completion(shell),
    }
}
