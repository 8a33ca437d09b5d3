use pnet::datalink;
use std::net::IpAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("no usable network interface address found")]
    NoAddress,

    #[error("hostname lookup failed: {0}")]
    Hostname(#[source] std::io::Error),
}

/// Read-only host identity lookups. Each call is a fresh snapshot; nothing is
/// cached between requests.
pub trait HostProbe: Send + Sync {
    fn primary_ip(&self) -> Result<IpAddr, ProbeError>;
    fn hostname(&self) -> Result<String, ProbeError>;
    fn username(&self) -> Result<String, ProbeError>;
}

/// Probe backed by the operating system.
pub struct SystemProbe;

impl HostProbe for SystemProbe {
    fn primary_ip(&self) -> Result<IpAddr, ProbeError> {
        first_unicast_address(&datalink::interfaces())
    }

    fn hostname(&self) -> Result<String, ProbeError> {
        let name = hostname::get().map_err(ProbeError::Hostname)?;
        Ok(name.to_string_lossy().into_owned())
    }

    fn username(&self) -> Result<String, ProbeError> {
        Ok(whoami::username())
    }
}

/// First address of an interface that is up, not loopback, and carries a
/// routable unicast address.
fn first_unicast_address(interfaces: &[datalink::NetworkInterface]) -> Result<IpAddr, ProbeError> {
    interfaces
        .iter()
        .filter(|iface| iface.is_up() && !iface.is_loopback())
        .flat_map(|iface| iface.ips.iter())
        .map(|network| network.ip())
        .find(|ip| !ip.is_loopback() && !ip.is_unspecified())
        .ok_or(ProbeError::NoAddress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_ip_never_returns_loopback() {
        match SystemProbe.primary_ip() {
            Ok(ip) => assert!(!ip.is_loopback() && !ip.is_unspecified()),
            // A host with only a loopback interface reports NoAddress.
            Err(ProbeError::NoAddress) => {}
            Err(other) => panic!("unexpected probe error: {other}"),
        }
    }

    #[test]
    fn empty_interface_list_is_no_address() {
        let err = first_unicast_address(&[]).unwrap_err();
        assert!(matches!(err, ProbeError::NoAddress));
    }

    #[test]
    fn hostname_is_non_empty() {
        let name = SystemProbe.hostname().expect("hostname");
        assert!(!name.is_empty());
    }

    #[test]
    fn username_is_non_empty() {
        let user = SystemProbe.username().expect("username");
        assert!(!user.is_empty());
    }
}
