//! Shared fixture for end-to-end tests.
//!
//! Delegated commands are intercepted by stub `docker` and `sudo`
//! executables placed at the front of `PATH`. Each stub appends its
//! program name and argv to a record file and plays back canned
//! behavior from environment variables, so tests can pin exact
//! delegated command lines without a container runtime or root.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Stub delegate: record argv, optionally emit stdout, exit as told.
const STUB_SCRIPT: &str = r#"#!/bin/sh
printf '%s %s\n' "$(basename "$0")" "$*" >> "$MUDCTL_TEST_RECORD"
if [ -n "$MUDCTL_STUB_STDOUT" ]; then
    printf '%s' "$MUDCTL_STUB_STDOUT"
fi
exit "${MUDCTL_STUB_EXIT:-0}"
"#;

/// Test fixture owning the stub directory and the record file.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    /// Create a fixture with stubbed `docker` and `sudo` on PATH.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let bin = dir.path().join("bin");
        fs::create_dir(&bin).expect("failed to create stub bin dir");

        for name in ["docker", "sudo"] {
            let path = bin.join(name);
            fs::write(&path, STUB_SCRIPT).expect("failed to write stub");
            let mut perms = fs::metadata(&path).expect("stub metadata").permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms).expect("failed to chmod stub");
        }

        Self { dir }
    }

    /// A scratch path inside the fixture (not created).
    pub fn scratch(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// A created directory inside the fixture.
    pub fn mkdir(&self, name: &str) -> PathBuf {
        let path = self.scratch(name);
        fs::create_dir_all(&path).expect("failed to create dir");
        path
    }

    /// Recorded delegate invocations, one per line: `program argv...`.
    pub fn recorded(&self) -> Vec<String> {
        match fs::read_to_string(self.dir.path().join("record")) {
            Ok(contents) => contents.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// A `mudctl` command wired to the stubs and isolated from the
    /// host's real configuration.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("mudctl").expect("mudctl binary");
        let path = format!(
            "{}:{}",
            self.dir.path().join("bin").display(),
            std::env::var("PATH").unwrap_or_default()
        );
        cmd.env("PATH", path)
            .env("MUDCTL_TEST_RECORD", self.dir.path().join("record"))
            // Keep host configuration and lock files out of the test.
            .env("HOME", self.dir.path())
            .env("TMPDIR", self.dir.path())
            .env_remove("MUDCTL_CONFIG")
            .env_remove("XDG_CONFIG_HOME");
        cmd
    }
}
