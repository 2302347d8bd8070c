//! cache
//!
//! Host-side MUD profile cache directory operations.
//!
//! # Overview
//!
//! The cache directory is mounted into the service container and holds
//! MUD profile data the service manages; its contents are opaque to
//! mudctl. This module owns the three host-side concerns:
//!
//! - the existence precondition checked before `docker-run`
//! - creation with fixed ownership and mode (`setup-cache-dir`)
//! - clearing its contents (`clear-cache-dir`)
//!
//! Creation and clearing need elevated privileges, so both delegate
//! through `sudo`, and both hold the [`CacheLock`] for the duration of
//! the delegated command.

pub mod lock;

pub use lock::{CacheLock, LockError};

use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::ui::output::{self, Verbosity};

/// Mode the cache directory is created with.
pub const CACHE_DIR_MODE: &str = "0755";

/// Owner the cache directory is created with.
pub const CACHE_DIR_OWNER: &str = "root";

/// Group the cache directory is created with.
pub const CACHE_DIR_GROUP: &str = "root";

/// Errors from cache-directory operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The directory does not exist (precondition for `docker-run`).
    #[error("cache directory '{0}' does not exist (run `mudctl setup-cache-dir` first)")]
    Missing(std::path::PathBuf),

    /// The path exists but is not a directory.
    #[error("cache path '{0}' exists but is not a directory")]
    NotADirectory(std::path::PathBuf),

    #[error(transparent)]
    Lock(#[from] LockError),

    /// `sudo` could not be spawned at all.
    #[error("failed to invoke `sudo`: {0}")]
    Spawn(#[source] std::io::Error),

    /// The privileged delegate returned a non-zero status.
    #[error("privileged command exited with {status}")]
    Failed { status: ExitStatus },
}

/// Check the cache-directory precondition for running the service.
///
/// # Errors
///
/// Returns `CacheError::Missing` or `CacheError::NotADirectory`. The
/// caller must not invoke the container runtime after either.
pub fn ensure_exists(path: &Path) -> Result<(), CacheError> {
    if !path.exists() {
        return Err(CacheError::Missing(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CacheError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// `install -d -m MODE -o OWNER -g GROUP PATH` (run under sudo).
pub fn setup_args(path: &Path) -> Vec<String> {
    vec![
        "install".into(),
        "-d".into(),
        "-m".into(),
        CACHE_DIR_MODE.into(),
        "-o".into(),
        CACHE_DIR_OWNER.into(),
        "-g".into(),
        CACHE_DIR_GROUP.into(),
        path.display().to_string(),
    ]
}

/// `find PATH -mindepth 1 -delete` (run under sudo).
///
/// Removes the directory's contents but keeps the directory itself, so
/// its ownership and mode survive a clear.
pub fn clear_args(path: &Path) -> Vec<String> {
    vec![
        "find".into(),
        path.display().to_string(),
        "-mindepth".into(),
        "1".into(),
        "-delete".into(),
    ]
}

/// Create the cache directory with fixed ownership and permissions.
///
/// Holds the cache lock for the duration of the delegated command.
pub fn setup(path: &Path, verbosity: Verbosity) -> Result<(), CacheError> {
    let _lock = CacheLock::acquire(path)?;
    run_privileged(&setup_args(path), verbosity)
}

/// Remove the cache directory's contents.
///
/// Holds the cache lock for the duration of the delegated command. A
/// missing directory is left for the delegate to report.
pub fn clear(path: &Path, verbosity: Verbosity) -> Result<(), CacheError> {
    let _lock = CacheLock::acquire(path)?;
    run_privileged(&clear_args(path), verbosity)
}

/// Run a command under `sudo`, streaming output through.
fn run_privileged(args: &[String], verbosity: Verbosity) -> Result<(), CacheError> {
    output::debug(format!("+ sudo {}", args.join(" ")), verbosity);

    let status = Command::new("sudo")
        .args(args)
        .status()
        .map_err(CacheError::Spawn)?;

    if !status.success() {
        return Err(CacheError::Failed { status });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn ensure_exists_accepts_directory() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_exists(dir.path()).is_ok());
    }

    #[test]
    fn ensure_exists_rejects_missing_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent");

        let err = ensure_exists(&missing).unwrap_err();
        assert!(matches!(err, CacheError::Missing(_)));
    }

    #[test]
    fn ensure_exists_rejects_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file");
        std::fs::write(&file, "not a directory").unwrap();

        let err = ensure_exists(&file).unwrap_err();
        assert!(matches!(err, CacheError::NotADirectory(_)));
    }

    #[test]
    fn setup_args_pin_ownership_and_mode() {
        let args = setup_args(&PathBuf::from("/var/cache/mud-manager"));
        assert_eq!(
            args,
            vec![
                "install",
                "-d",
                "-m",
                "0755",
                "-o",
                "root",
                "-g",
                "root",
                "/var/cache/mud-manager",
            ]
        );
    }

    #[test]
    fn clear_args_keep_the_directory_itself() {
        let args = clear_args(&PathBuf::from("/var/cache/mud-manager"));
        assert_eq!(
            args,
            vec!["find", "/var/cache/mud-manager", "-mindepth", "1", "-delete"]
        );
    }
}
