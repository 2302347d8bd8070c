//! docker::cli
//!
//! Thin executor around the `docker` binary.
//!
//! Delegated commands run synchronously. Streaming invocations inherit
//! the parent's stdio so `docker`'s own output and progress reach the
//! terminal unmodified; capturing invocations pipe stdout for parsing
//! while stderr stays inherited so delegate errors remain visible.
//! Failures are never retried.

use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

use crate::core::types::ContainerName;
use crate::ui::output::{self, Verbosity};

/// Errors from container runtime delegation.
#[derive(Debug, Error)]
pub enum DockerError {
    /// The `docker` binary could not be spawned at all.
    #[error("failed to invoke `docker` (is it installed and on PATH?): {0}")]
    Spawn(#[source] std::io::Error),

    /// The delegate ran and returned a non-zero status.
    #[error("docker exited with {status}")]
    Failed { status: ExitStatus },

    /// Captured output was not valid UTF-8.
    #[error("docker produced non-UTF-8 output")]
    Encoding,

    /// Captured `docker inspect` output did not parse.
    #[error("unexpected output from docker inspect: {0}")]
    Inspect(String),

    /// The container exists but has no IP address assigned.
    ///
    /// Distinct from [`DockerError::Failed`]: the delegate succeeded,
    /// the lookup came back empty.
    #[error("container '{container}' has no IP address assigned")]
    NoAddress { container: ContainerName },
}

/// Handle for invoking the `docker` CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct DockerCli;

impl DockerCli {
    pub fn new() -> Self {
        Self
    }

    /// Run `docker` with the given arguments, streaming output through.
    ///
    /// Blocks until the delegate exits; for `docker logs --follow` that
    /// is until the container stops or the process is interrupted.
    ///
    /// # Errors
    ///
    /// Returns `DockerError::Spawn` if the binary cannot be started and
    /// `DockerError::Failed` if it exits non-zero.
    pub fn stream(&self, args: &[String], verbosity: Verbosity) -> Result<(), DockerError> {
        output::debug(format!("+ docker {}", args.join(" ")), verbosity);

        let status = Command::new("docker")
            .args(args)
            .status()
            .map_err(DockerError::Spawn)?;

        if !status.success() {
            return Err(DockerError::Failed { status });
        }
        Ok(())
    }

    /// Run `docker` with the given arguments, capturing stdout.
    ///
    /// stderr stays inherited so the delegate's own diagnostics reach
    /// the terminal on failure.
    ///
    /// # Errors
    ///
    /// Returns `DockerError::Spawn`, `DockerError::Failed`, or
    /// `DockerError::Encoding`.
    pub fn capture(&self, args: &[String], verbosity: Verbosity) -> Result<String, DockerError> {
        output::debug(format!("+ docker {}", args.join(" ")), verbosity);

        let output = Command::new("docker")
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(DockerError::Spawn)?;

        if !output.status.success() {
            return Err(DockerError::Failed {
                status: output.status,
            });
        }

        String::from_utf8(output.stdout).map_err(|_| DockerError::Encoding)
    }
}
