//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all operations and must each carry a
//! value; each one overrides exactly one field of the resolved service
//! configuration:
//! - `--docker-image <ID>`: Image reference
//! - `--docker-image-tag <TAG>`: Image tag
//! - `--docker-name <NAME>`: Container name
//! - `--mud-cache-path <PATH>`: Host cache directory
//! - `--bind-address <ADDR>`: Host address the service port binds to
//! - `--bind-port <PORT>`: Host and container port
//! - `--config <PATH>`: Explicit config file
//! - `--debug` / `--quiet` / `-q`: Verbosity

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// mudctl - manage the lifecycle of a containerized MUD manager service
#[derive(Parser, Debug)]
#[command(name = "mudctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Image reference for the MUD manager service
    #[arg(long = "docker-image", value_name = "ID", global = true)]
    pub docker_image: Option<String>,

    /// Image tag
    #[arg(long = "docker-image-tag", value_name = "TAG", global = true)]
    pub docker_image_tag: Option<String>,

    /// Container name
    #[arg(long = "docker-name", value_name = "NAME", global = true)]
    pub docker_name: Option<String>,

    /// Host directory mounted into the container as the MUD profile cache
    #[arg(long = "mud-cache-path", value_name = "PATH", global = true)]
    pub mud_cache_path: Option<PathBuf>,

    /// Host address the service port binds to
    #[arg(long = "bind-address", value_name = "ADDR", global = true)]
    pub bind_address: Option<IpAddr>,

    /// Host and container port for the service
    #[arg(long = "bind-port", value_name = "PORT", global = true)]
    pub bind_port: Option<u16>,

    /// Read configuration from this file instead of the default locations
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments without exiting on error.
    ///
    /// The caller maps usage errors to exit code 1 (and `--help` /
    /// `--version` to exit code 0).
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Available operations.
///
/// This is the closed operation set: anything else is rejected at parse
/// time, before any action runs.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pull the service image from the registry
    #[command(
        name = "docker-pull",
        long_about = "Pull the configured MUD manager image from the registry.\n\n\
            Fetches the image named by --docker-image at the tag named by \
            --docker-image-tag. Run this before the first docker-run and \
            whenever you want to pick up a newer build."
    )]
    Pull,

    /// Start the service container (detached)
    #[command(
        name = "docker-run",
        long_about = "Start the MUD manager service as a detached container.\n\n\
            The cache directory is mounted into the container and the service \
            port is published on the configured bind address. The container \
            runs with a read-only root filesystem and restarts automatically \
            unless explicitly stopped.\n\n\
            The cache directory must already exist; create it once with \
            'mudctl setup-cache-dir'.",
        after_help = "\
WORKFLOW EXAMPLES:
    # First start on a fresh host
    mudctl setup-cache-dir
    mudctl docker-pull
    mudctl docker-run

    # Bind the service port somewhere else
    mudctl --bind-address 127.0.0.1 --bind-port 9999 docker-run

    # Follow what the service is doing
    mudctl docker-trace"
    )]
    Run,

    /// Start a throwaway interactive shell in the service image
    #[command(
        name = "docker-run-shell",
        long_about = "Start an interactive shell in the service image.\n\n\
            Runs a one-off container with /bin/sh as the entrypoint, removed \
            on exit. Useful for poking around the image without touching the \
            running service."
    )]
    RunShell,

    /// Remove the service container
    #[command(
        name = "docker-rm",
        long_about = "Remove the service container.\n\n\
            The container must exist and be stopped (kill it first with \
            'mudctl docker-kill'). The image and the cache directory are \
            untouched."
    )]
    Remove,

    /// Kill the running service container
    #[command(name = "docker-kill")]
    Kill,

    /// Show the service container's logs (timestamped)
    #[command(name = "docker-logs")]
    Logs,

    /// Follow the service container's logs
    #[command(
        name = "docker-trace",
        long_about = "Follow the service container's logs.\n\n\
            Shows the last 50 lines, timestamped, then streams new output \
            until interrupted (Ctrl-C) or until the container stops. This is \
            the only operation that does not return on its own."
    )]
    Trace,

    /// Create the host cache directory (requires sudo)
    #[command(
        name = "setup-cache-dir",
        long_about = "Create the host cache directory with fixed ownership and \
            permissions.\n\n\
            The directory is created through sudo, so this prompts for \
            credentials where sudo is so configured. Concurrent cache \
            mutations are serialized with an advisory lock; a second \
            concurrent setup-cache-dir or clear-cache-dir fails fast."
    )]
    SetupCacheDir,

    /// Remove the cache directory's contents (requires sudo)
    #[command(
        name = "clear-cache-dir",
        long_about = "Remove everything inside the cache directory.\n\n\
            The directory itself is kept, so its ownership and permissions \
            survive. Runs through sudo and holds the same advisory lock as \
            setup-cache-dir."
    )]
    ClearCacheDir,

    /// Print the service container's IP address
    #[command(
        name = "docker-address",
        long_about = "Query and print the service container's IP address.\n\n\
            The address is read from the container runtime's inspect data. A \
            container that exists but has no address assigned (not attached \
            to any network) is reported as an error even though the query \
            itself succeeded."
    )]
    Address,

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
