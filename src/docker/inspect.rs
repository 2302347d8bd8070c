//! docker::inspect
//!
//! Deserialization of `docker inspect` output.
//!
//! `docker inspect NAME` prints a JSON array with one object per queried
//! container. Only the network settings are modeled here; everything
//! else in the payload is ignored.

use std::collections::BTreeMap;
use std::net::IpAddr;

use serde::Deserialize;

use super::cli::DockerError;
use crate::core::types::ContainerName;

/// One element of the `docker inspect` array.
#[derive(Debug, Deserialize)]
pub struct ContainerInspect {
    #[serde(rename = "NetworkSettings", default)]
    pub network_settings: NetworkSettings,
}

/// The `NetworkSettings` object.
///
/// The top-level `IPAddress` is populated for the default bridge
/// network; containers attached to named networks carry their address
/// under `Networks` instead.
#[derive(Debug, Default, Deserialize)]
pub struct NetworkSettings {
    #[serde(rename = "IPAddress", default)]
    pub ip_address: String,

    #[serde(rename = "Networks", default)]
    pub networks: BTreeMap<String, NetworkEndpoint>,
}

/// Per-network endpoint settings.
#[derive(Debug, Default, Deserialize)]
pub struct NetworkEndpoint {
    #[serde(rename = "IPAddress", default)]
    pub ip_address: String,
}

/// Extract the container's IP address from raw `docker inspect` output.
///
/// Prefers the top-level bridge address, falling back to the first
/// attached network that reports one.
///
/// # Errors
///
/// Returns `DockerError::Inspect` if the payload does not parse and
/// `DockerError::NoAddress` if the container has no address assigned --
/// the delegate succeeded, the lookup came back empty.
pub fn primary_address(container: &ContainerName, raw: &str) -> Result<IpAddr, DockerError> {
    let parsed: Vec<ContainerInspect> =
        serde_json::from_str(raw).map_err(|e| DockerError::Inspect(e.to_string()))?;

    let first = parsed
        .first()
        .ok_or_else(|| DockerError::Inspect("empty inspect array".into()))?;

    let settings = &first.network_settings;
    let candidate = if !settings.ip_address.is_empty() {
        Some(settings.ip_address.as_str())
    } else {
        settings
            .networks
            .values()
            .map(|endpoint| endpoint.ip_address.as_str())
            .find(|addr| !addr.is_empty())
    };

    let addr = candidate.ok_or_else(|| DockerError::NoAddress {
        container: container.clone(),
    })?;

    addr.parse()
        .map_err(|_| DockerError::Inspect(format!("'{}' is not an IP address", addr)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name() -> ContainerName {
        ContainerName::new("mud-manager").unwrap()
    }

    #[test]
    fn bridge_address_preferred() {
        let raw = r#"[{"NetworkSettings": {"IPAddress": "172.17.0.2", "Networks": {}}}]"#;
        let addr = primary_address(&name(), raw).unwrap();
        assert_eq!(addr.to_string(), "172.17.0.2");
    }

    #[test]
    fn falls_back_to_named_network() {
        let raw = r#"[{
            "NetworkSettings": {
                "IPAddress": "",
                "Networks": {
                    "mudnet": {"IPAddress": "10.0.3.7"}
                }
            }
        }]"#;
        let addr = primary_address(&name(), raw).unwrap();
        assert_eq!(addr.to_string(), "10.0.3.7");
    }

    #[test]
    fn no_address_is_a_distinct_error() {
        let raw = r#"[{"NetworkSettings": {"IPAddress": "", "Networks": {}}}]"#;
        let err = primary_address(&name(), raw).unwrap_err();
        assert!(matches!(err, DockerError::NoAddress { .. }));
    }

    #[test]
    fn unknown_fields_ignored() {
        let raw = r#"[{
            "Id": "abc123",
            "State": {"Running": true},
            "NetworkSettings": {"IPAddress": "172.17.0.9", "MacAddress": "02:42:ac:11:00:09"}
        }]"#;
        let addr = primary_address(&name(), raw).unwrap();
        assert_eq!(addr.to_string(), "172.17.0.9");
    }

    #[test]
    fn garbage_payload_is_an_inspect_error() {
        let err = primary_address(&name(), "not json").unwrap_err();
        assert!(matches!(err, DockerError::Inspect(_)));
    }

    #[test]
    fn malformed_address_is_an_inspect_error() {
        let raw = r#"[{"NetworkSettings": {"IPAddress": "not-an-ip"}}]"#;
        let err = primary_address(&name(), raw).unwrap_err();
        assert!(matches!(err, DockerError::Inspect(_)));
    }
}
