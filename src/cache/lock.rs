//! cache::lock
//!
//! Exclusive advisory lock for cache-directory mutations.
//!
//! # Architecture
//!
//! `setup-cache-dir` and `clear-cache-dir` both mutate the same host
//! directory; two concurrent invocations racing there could interleave a
//! create with a recursive delete. The lock makes the second mutator
//! fail fast instead.
//!
//! # Storage
//!
//! The lock file lives under the system temp directory, keyed by the
//! cache path, so it can be created without elevated privileges even
//! when the cache directory itself (or its parent) is root-owned.
//!
//! # Invariants
//!
//! - Lock must be held for the entire delegated mutation
//! - Lock is automatically released on drop (RAII pattern)
//! - Lock acquisition is non-blocking (fails fast if locked)

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

/// Errors from locking operations.
#[derive(Debug, Error)]
pub enum LockError {
    /// Another process already holds the lock.
    #[error("cache directory is locked by another mudctl process")]
    AlreadyLocked,

    /// Failed to create the lock file or its directory.
    #[error("failed to create lock file: {0}")]
    CreateFailed(String),

    /// I/O error during lock operations.
    #[error("lock i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// An exclusive lock over a cache directory.
///
/// The lock is automatically released when this guard is dropped.
#[derive(Debug)]
pub struct CacheLock {
    file: File,
    path: PathBuf,
}

impl CacheLock {
    /// Acquire the lock for the given cache directory.
    ///
    /// Non-blocking: fails immediately with `LockError::AlreadyLocked`
    /// if another process holds it.
    pub fn acquire(cache_dir: &Path) -> Result<Self, LockError> {
        let path = lock_path(cache_dir)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| LockError::CreateFailed(format!("{}: {}", parent.display(), e)))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| LockError::CreateFailed(format!("{}: {}", path.display(), e)))?;

        file.try_lock_exclusive()
            .map_err(|_| LockError::AlreadyLocked)?;

        Ok(Self { file, path })
    }

    /// Path of the lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for CacheLock {
    fn drop(&mut self) {
        // Unlock errors on drop are unreportable; the OS releases the
        // lock when the file closes anyway.
        let _ = fs2::FileExt::unlock(&self.file);
    }
}

/// Lock file path for a cache directory.
///
/// The cache path is flattened into a single file name so distinct
/// cache directories get distinct locks.
fn lock_path(cache_dir: &Path) -> Result<PathBuf, LockError> {
    let key: String = cache_dir
        .to_string_lossy()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    if key.is_empty() {
        return Err(LockError::CreateFailed(
            "cache directory path is empty".into(),
        ));
    }

    Ok(std::env::temp_dir().join("mudctl").join(format!("{key}.lock")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn acquire_and_release() {
        let dir = TempDir::new().unwrap();

        let lock = CacheLock::acquire(dir.path()).unwrap();
        assert!(lock.path().exists());
        drop(lock);

        // Released on drop; reacquisition succeeds.
        let _again = CacheLock::acquire(dir.path()).unwrap();
    }

    #[test]
    fn second_acquisition_fails_while_held() {
        let dir = TempDir::new().unwrap();

        let _held = CacheLock::acquire(dir.path()).unwrap();
        let err = CacheLock::acquire(dir.path()).unwrap_err();
        assert!(matches!(err, LockError::AlreadyLocked));
    }

    #[test]
    fn distinct_cache_dirs_use_distinct_locks() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();

        let _lock_a = CacheLock::acquire(a.path()).unwrap();
        // A different cache directory is lockable concurrently.
        let _lock_b = CacheLock::acquire(b.path()).unwrap();
    }
}
