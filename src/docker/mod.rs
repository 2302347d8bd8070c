//! docker
//!
//! Single interface for all container runtime delegation.
//!
//! # Responsibilities
//!
//! - Assemble argument vectors for every `docker` invocation ([`args`])
//! - Execute them, either streaming to the terminal or capturing stdout
//!   ([`cli`])
//! - Parse `docker inspect` JSON ([`inspect`])
//!
//! # Architecture
//!
//! Argument assembly is pure and separate from execution, so the exact
//! delegated command lines are unit-testable without a container runtime.
//! Nothing outside this module spawns `docker`.

pub mod args;
pub mod cli;
pub mod inspect;

pub use args::{
    inspect_args, kill_args, logs_args, pull_args, rm_args, run_args, run_shell_args, trace_args,
};
pub use cli::{DockerCli, DockerError};
