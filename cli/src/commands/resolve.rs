use std::net::IpAddr;

use sweepr_common::{error, success, warn};
use sweepr_core::network::resolver;

use crate::terminal::{format, print};

/// Resolves and prints `host`. `None` when the lookup itself failed.
pub async fn resolve(host: &str) -> Option<Vec<IpAddr>> {
    print::print_status(format!("Resolving {host}"));

    match resolver::resolve(host).await {
        Ok(addrs) if addrs.is_empty() => {
            warn!("{host} exists but has no addresses");
            Some(addrs)
        }
        Ok(addrs) => {
            let unit: &str = if addrs.len() == 1 { "address" } else { "addresses" };
            success!("{host} resolved to {} {unit}", addrs.len());
            print::as_tree_one_level(format::ip_to_key_value_pair(&addrs));
            Some(addrs)
        }
        Err(e) => {
            error!("{e}");
            None
        }
    }
}
