use std::net::{IpAddr, Ipv4Addr};
use std::time::{Duration, Instant};

use colored::*;
use sweepr_common::config::Config;
use sweepr_common::network::range::AddressRange;
use sweepr_common::{error, success, warn};
use sweepr_core::scanner;

use crate::mprint;
use crate::terminal::{colors, format, print, spinner::Spinner};

/// Sweeps `range` and prints the reachable hosts.
///
/// `None` when the sweep could not be set up; an empty vector when it ran and
/// nobody answered.
pub async fn sweep(range: &AddressRange, resolved: &[IpAddr], cfg: &Config) -> Option<Vec<Ipv4Addr>> {
    print::print_status(format!(
        "Testing connectivity on subnet {range}, port {}",
        cfg.port
    ));
    if range.overruns() {
        warn!(
            "{range} runs past 255.255.255.255 and wraps around to end at {}",
            range.last()
        );
    }

    let spinner = Spinner::start(format!(
        "Waiting {}s for {} handshakes...",
        cfg.time_budget.as_secs(),
        range.host_count()
    ));
    let start_time: Instant = Instant::now();
    let result = scanner::scan_range(range, cfg).await;
    drop(spinner);

    match result {
        Ok(reachable) => {
            sweep_ends(&reachable, resolved, start_time.elapsed());
            Some(reachable)
        }
        Err(e) => {
            error!("Sweep aborted: {e}");
            None
        }
    }
}

fn sweep_ends(reachable: &[Ipv4Addr], resolved: &[IpAddr], total_time: Duration) {
    if reachable.is_empty() {
        print::no_results();
        return;
    }

    let unit: &str = if reachable.len() == 1 { "connection" } else { "connections" };
    success!("{} successful TCP {unit} established", reachable.len());

    for (idx, addr) in reachable.iter().enumerate() {
        let mut line: String = addr.to_string().color(colors::IPV4_ADDR).to_string();
        if resolved.contains(&IpAddr::V4(*addr)) {
            line = format!("{line} {}", "[Host resolved to this address]".color(colors::ACCENT));
        }
        print::tree_head(idx, &line);
    }

    mprint!();
    let hosts: ColoredString = format!("{} reachable hosts", reachable.len()).bold().green();
    let output: ColoredString = format!(
        "Sweep Complete: {hosts} identified in {}",
        format::seconds(total_time)
    )
    .color(colors::TEXT_DEFAULT);
    print::fat_separator();
    print::centerln(&output.to_string());
}
