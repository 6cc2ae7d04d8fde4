use sweepr_core::system::{self, LocalNetwork};

use crate::terminal::{network_fmt, print};

pub fn info() -> anyhow::Result<()> {
    let network: LocalNetwork = system::local_network()?;

    let hostname: &str = network.hostname.as_deref().unwrap_or("this host");
    print::print_status(format!("Interface information for {hostname}"));

    for (idx, interface) in network.interfaces.iter().enumerate() {
        network_fmt::print_interface(interface, idx);
    }
    Ok(())
}
