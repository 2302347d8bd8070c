//! docker::args
//!
//! Pure argument assembly for `docker` invocations.
//!
//! Each function maps the resolved [`ServiceConfig`] to the full argument
//! list passed to the `docker` binary. Keeping assembly separate from
//! execution lets tests pin the exact delegated command lines.

use crate::core::service::{ServiceConfig, CACHE_MOUNT_POINT};

/// Number of trailing log lines shown when following logs.
pub const TRACE_TAIL_LINES: u32 = 50;

/// `docker pull IMAGE:TAG`
pub fn pull_args(config: &ServiceConfig) -> Vec<String> {
    vec!["pull".into(), config.image_with_tag()]
}

/// `docker run` for the detached service container.
///
/// The container gets a read-only root filesystem, the restart policy
/// `unless-stopped`, the cache directory mounted at
/// [`CACHE_MOUNT_POINT`], and the service port published on the
/// configured bind address.
pub fn run_args(config: &ServiceConfig) -> Vec<String> {
    vec![
        "run".into(),
        "--detach".into(),
        "--restart".into(),
        "unless-stopped".into(),
        "--read-only".into(),
        "--name".into(),
        config.container_name.to_string(),
        "--volume".into(),
        format!("{}:{}", config.cache_dir.display(), CACHE_MOUNT_POINT),
        "--publish".into(),
        format!(
            "{}:{}:{}",
            config.bind_address, config.bind_port, config.bind_port
        ),
        config.image_with_tag(),
    ]
}

/// `docker run` for a throwaway interactive shell in the service image.
pub fn run_shell_args(config: &ServiceConfig) -> Vec<String> {
    vec![
        "run".into(),
        "--rm".into(),
        "--interactive".into(),
        "--tty".into(),
        "--entrypoint".into(),
        "/bin/sh".into(),
        config.image_with_tag(),
    ]
}

/// `docker container rm NAME`
pub fn rm_args(config: &ServiceConfig) -> Vec<String> {
    vec![
        "container".into(),
        "rm".into(),
        config.container_name.to_string(),
    ]
}

/// `docker kill NAME`
pub fn kill_args(config: &ServiceConfig) -> Vec<String> {
    vec!["kill".into(), config.container_name.to_string()]
}

/// `docker logs --timestamps NAME`
pub fn logs_args(config: &ServiceConfig) -> Vec<String> {
    vec![
        "logs".into(),
        "--timestamps".into(),
        config.container_name.to_string(),
    ]
}

/// `docker logs --timestamps --follow --tail N NAME`
pub fn trace_args(config: &ServiceConfig) -> Vec<String> {
    vec![
        "logs".into(),
        "--timestamps".into(),
        "--follow".into(),
        "--tail".into(),
        TRACE_TAIL_LINES.to_string(),
        config.container_name.to_string(),
    ]
}

/// `docker inspect NAME`
pub fn inspect_args(config: &ServiceConfig) -> Vec<String> {
    vec!["inspect".into(), config.container_name.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FileConfig;
    use crate::core::service::Overrides;

    fn default_config() -> ServiceConfig {
        ServiceConfig::resolve(&FileConfig::default(), &Overrides::default()).unwrap()
    }

    #[test]
    fn pull_uses_qualified_image() {
        assert_eq!(
            pull_args(&default_config()),
            vec!["pull", "osmud/mud-manager:latest"]
        );
    }

    #[test]
    fn run_mounts_cache_and_publishes_port() {
        let args = run_args(&default_config());
        assert_eq!(
            args,
            vec![
                "run",
                "--detach",
                "--restart",
                "unless-stopped",
                "--read-only",
                "--name",
                "mud-manager",
                "--volume",
                "/var/cache/mud-manager:/var/lib/mud-manager",
                "--publish",
                "0.0.0.0:8888:8888",
                "osmud/mud-manager:latest",
            ]
        );
    }

    #[test]
    fn run_respects_port_override() {
        let flags = Overrides {
            bind_port: Some(9999),
            ..Default::default()
        };
        let config = ServiceConfig::resolve(&FileConfig::default(), &flags).unwrap();

        let args = run_args(&config);
        assert!(args.contains(&"0.0.0.0:9999:9999".to_string()));
    }

    #[test]
    fn shell_overrides_entrypoint() {
        assert_eq!(
            run_shell_args(&default_config()),
            vec![
                "run",
                "--rm",
                "--interactive",
                "--tty",
                "--entrypoint",
                "/bin/sh",
                "osmud/mud-manager:latest",
            ]
        );
    }

    #[test]
    fn logs_are_timestamped() {
        assert_eq!(
            logs_args(&default_config()),
            vec!["logs", "--timestamps", "mud-manager"]
        );
    }

    #[test]
    fn trace_follows_with_tail_limit() {
        assert_eq!(
            trace_args(&default_config()),
            vec!["logs", "--timestamps", "--follow", "--tail", "50", "mud-manager"]
        );
    }

    #[test]
    fn rm_kill_inspect_target_container_name() {
        let config = default_config();
        assert_eq!(rm_args(&config), vec!["container", "rm", "mud-manager"]);
        assert_eq!(kill_args(&config), vec!["kill", "mud-manager"]);
        assert_eq!(inspect_args(&config), vec!["inspect", "mud-manager"]);
    }
}
