use crate::terminal::{colors, format, print};
use colored::*;
use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;
use sweepr_core::system;

pub fn to_key_value_pair_net(ip_net: &[IpNetwork]) -> Vec<(String, ColoredString)> {
    ip_net
        .iter()
        .map(|ip_network| match ip_network {
            IpNetwork::V4(ipv4_network) => {
                let address: ColoredString = ipv4_network.ip().to_string().color(colors::IPV4_ADDR);
                let prefix: ColoredString =
                    ipv4_network.prefix().to_string().color(colors::IPV4_PREFIX);
                let result: ColoredString = format!("{address}/{prefix}").color(colors::SEPARATOR);
                ("IPv4".to_string(), result)
            }
            IpNetwork::V6(ipv6_network) => {
                let address: ColoredString = ipv6_network.ip().to_string().color(colors::IPV6_ADDR);
                let prefix: ColoredString =
                    ipv6_network.prefix().to_string().color(colors::IPV6_PREFIX);
                let value: ColoredString = format!("{address}/{prefix}").color(colors::SEPARATOR);
                let key = format::ipv6_to_type_str(&ipv6_network.ip());
                (key.to_string(), value)
            }
        })
        .collect()
}

fn yes_no(flag: bool) -> ColoredString {
    if flag {
        "yes".color(colors::GOOD)
    } else {
        "no".color(colors::BAD)
    }
}

pub fn print_interface(interface: &NetworkInterface, idx: usize) {
    print::tree_head(idx, &interface.name);

    let mut key_value_pair: Vec<(String, ColoredString)> = Vec::new();
    if !interface.description.is_empty() {
        key_value_pair.push(("Desc".to_string(), interface.description.normal()));
    }
    let status = if interface.is_up() {
        "up".color(colors::GOOD)
    } else {
        "down".color(colors::BAD)
    };
    key_value_pair.push(("Status".to_string(), status));
    key_value_pair.push(("v4".to_string(), yes_no(system::supports_ipv4(interface))));
    key_value_pair.push(("v6".to_string(), yes_no(system::supports_ipv6(interface))));
    key_value_pair.extend(to_key_value_pair_net(&interface.ips));
    if let Some(mac_addr) = interface.mac {
        key_value_pair.push((
            "MAC".to_string(),
            mac_addr.to_string().color(colors::MAC_ADDR),
        ));
    }

    print::as_tree_one_level(key_value_pair);
}
