use sweepr_common::config::Config;
use sweepr_common::{success, warn};
use sweepr_core::network::tcp;

pub async fn ping(host: &str, cfg: &Config) {
    let port: u16 = cfg.ping_port;
    if tcp::ping(host, port, cfg.time_budget).await {
        success!("Successful TCP/IP connection established to {host}:{port}");
    } else {
        warn!("Unsuccessful TCP/IP probe to {host}:{port}");
    }
}
