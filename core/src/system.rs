//! Local network configuration, as printed at the start of a diagnostic run.

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;

use sweepr_common::error::SystemError;

#[derive(Debug, Clone)]
pub struct LocalNetwork {
    pub hostname: Option<String>,
    /// Every interface except loopbacks, in the order the OS lists them.
    pub interfaces: Vec<NetworkInterface>,
}

/// Collects the local interface configuration.
///
/// Fails with [`SystemError::NoNetwork`] when no interface is able to carry
/// traffic, in which case scanning anything is pointless.
pub fn local_network() -> Result<LocalNetwork, SystemError> {
    from_interfaces(datalink::interfaces(), sys_info::hostname().ok())
}

fn from_interfaces(
    interfaces: Vec<NetworkInterface>,
    hostname: Option<String>,
) -> Result<LocalNetwork, SystemError> {
    if !interfaces.iter().any(is_usable) {
        return Err(SystemError::NoNetwork);
    }

    let interfaces: Vec<NetworkInterface> = interfaces
        .into_iter()
        .filter(|intf| !intf.is_loopback())
        .collect();

    Ok(LocalNetwork {
        hostname,
        interfaces,
    })
}

/// Up, and neither a loopback nor a tunnel.
fn is_usable(intf: &NetworkInterface) -> bool {
    intf.is_up() && !intf.is_loopback() && !intf.is_point_to_point()
}

pub fn supports_ipv4(intf: &NetworkInterface) -> bool {
    intf.ips.iter().any(|net| matches!(net, IpNetwork::V4(_)))
}

pub fn supports_ipv6(intf: &NetworkInterface) -> bool {
    intf.ips.iter().any(|net| matches!(net, IpNetwork::V6(_)))
}
