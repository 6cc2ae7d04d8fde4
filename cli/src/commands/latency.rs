use std::net::Ipv4Addr;

use colored::*;
use sweepr_common::config::Config;
use sweepr_common::network::probe::HostLatency;
use sweepr_core::prober;

use crate::terminal::{colors, format, print, spinner::Spinner};

pub async fn latency(reachable: &[Ipv4Addr], cfg: &Config) {
    print::print_status(format!(
        "Measuring average response time for {} connection attempts",
        cfg.probe_attempts
    ));

    let spinner = Spinner::start(format!("Probing {} hosts...", reachable.len()));
    let report: Vec<HostLatency> = prober::measure_latency(reachable, cfg).await;
    drop(spinner);

    for (idx, host) in report.iter().enumerate() {
        print::tree_head(idx, &host.addr.to_string());
        print::as_tree_one_level(vec![
            (
                "Success".to_string(),
                host.sample.successful.to_string().color(colors::GOOD),
            ),
            (
                "Failed".to_string(),
                host.sample.failed.to_string().color(colors::BAD),
            ),
            ("Average".to_string(), format::latency(host.sample.mean_latency())),
        ]);
    }
}
