//! End-to-end tests for configuration layering.
//!
//! Covers the precedence contract (defaults, then config file, then CLI
//! flags) and the failure modes for unreadable, unparseable, and
//! invalid config files.

#![cfg(unix)]

mod common;

use std::fs;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn config_file_overrides_defaults() {
    let env = TestEnv::new();
    let config = env.scratch("config.toml");
    fs::write(
        &config,
        r#"
        image = "ghcr.io/osmud/mud-manager"
        tag = "0.9"
        "#,
    )
    .unwrap();

    env.cmd()
        .env("MUDCTL_CONFIG", &config)
        .arg("docker-pull")
        .assert()
        .success();

    assert_eq!(
        env.recorded(),
        vec!["docker pull ghcr.io/osmud/mud-manager:0.9"]
    );
}

#[test]
fn flags_override_config_file() {
    let env = TestEnv::new();
    let cache = env.mkdir("cache");
    let config = env.scratch("config.toml");
    fs::write(&config, "bind_port = 9000\n").unwrap();

    env.cmd()
        .env("MUDCTL_CONFIG", &config)
        .args([
            "--mud-cache-path",
            cache.to_str().unwrap(),
            "--bind-port",
            "9999",
            "docker-run",
        ])
        .assert()
        .success();

    let recorded = env.recorded();
    assert_eq!(recorded.len(), 1);
    assert!(
        recorded[0].contains("--publish 0.0.0.0:9999:9999"),
        "got: {}",
        recorded[0]
    );
}

#[test]
fn config_file_fields_not_overridden_still_apply() {
    let env = TestEnv::new();
    let config = env.scratch("config.toml");
    fs::write(
        &config,
        r#"
        container_name = "mud-prod"
        tag = "2.0"
        "#,
    )
    .unwrap();

    env.cmd()
        .env("MUDCTL_CONFIG", &config)
        .args(["--docker-image-tag", "2.1", "docker-kill"])
        .assert()
        .success();

    // The kill targets the file-configured name; the tag flag only
    // affects image operations.
    assert_eq!(env.recorded(), vec!["docker kill mud-prod"]);
}

#[test]
fn explicit_config_flag_reads_that_file() {
    let env = TestEnv::new();
    let config = env.scratch("elsewhere.toml");
    fs::write(&config, "container_name = \"mud-elsewhere\"\n").unwrap();

    env.cmd()
        .args(["--config", config.to_str().unwrap(), "docker-kill"])
        .assert()
        .success();

    assert_eq!(env.recorded(), vec!["docker kill mud-elsewhere"]);
}

#[test]
fn missing_explicit_config_is_fatal() {
    let env = TestEnv::new();
    let missing = env.scratch("nope.toml");

    env.cmd()
        .args(["--config", missing.to_str().unwrap(), "docker-pull"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read config file"));

    assert!(env.recorded().is_empty());
}

#[test]
fn unparseable_config_is_fatal() {
    let env = TestEnv::new();
    let config = env.scratch("config.toml");
    fs::write(&config, "imaeg = \"typo\"\n").unwrap();

    env.cmd()
        .env("MUDCTL_CONFIG", &config)
        .arg("docker-pull")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to parse config file"));

    assert!(env.recorded().is_empty());
}

#[test]
fn invalid_config_value_is_fatal() {
    let env = TestEnv::new();
    let config = env.scratch("config.toml");
    fs::write(&config, "container_name = \"-bad\"\n").unwrap();

    env.cmd()
        .env("MUDCTL_CONFIG", &config)
        .arg("docker-pull")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid config value"));

    assert!(env.recorded().is_empty());
}

#[test]
fn invalid_flag_value_is_fatal_before_delegation() {
    let env = TestEnv::new();

    env.cmd()
        .args(["--docker-image", "osmud/mud-manager:latest", "docker-pull"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must not embed a tag"));

    assert!(env.recorded().is_empty());
}

#[test]
fn zero_port_is_rejected() {
    let env = TestEnv::new();

    env.cmd()
        .args(["--bind-port", "0", "docker-pull"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("bind port must be nonzero"));

    assert!(env.recorded().is_empty());
}
