#![cfg(test)]
use std::net::Ipv4Addr;

use sweepr_common::network::range::AddressRange;
use sweepr_core::{prober, scanner};

use crate::utils::{closed_port, loopback_listener, quick_config};

/// Only 127.0.0.1 listens; the rest of the literal range 127.0.0.1-4 refuses
/// or never answers.
#[tokio::test]
async fn sweep_finds_the_loopback_listener() {
    let (_listener, port) = loopback_listener().await;
    let range: AddressRange = "127.0.0.1/30".parse().unwrap();

    let result = scanner::scan_range(&range, &quick_config(port)).await;

    assert!(result.is_ok(), "Sweep failed: {:?}", result.err());
    assert_eq!(result.unwrap(), vec![Ipv4Addr::LOCALHOST]);
}

#[tokio::test]
async fn sweep_of_a_closed_port_is_empty() -> anyhow::Result<()> {
    let port = closed_port().await;
    let range: AddressRange = "127.0.0.1/32".parse()?;

    let found = scanner::scan_range(&range, &quick_config(port)).await?;

    assert!(found.is_empty(), "Unexpected hosts: {found:?}");
    Ok(())
}

#[tokio::test]
async fn latency_of_a_loopback_listener_is_measurable() {
    let (_listener, port) = loopback_listener().await;

    let report = prober::measure_latency(&[Ipv4Addr::LOCALHOST], &quick_config(port)).await;

    assert_eq!(report.len(), 1);
    let sample = report[0].sample;
    assert_eq!(sample.successful, 3);
    assert_eq!(sample.failed, 0);
    assert!(sample.mean_latency().is_some());
}

#[tokio::test]
async fn latency_of_a_closed_port_is_unmeasurable() {
    let port = closed_port().await;

    let report = prober::measure_latency(&[Ipv4Addr::LOCALHOST], &quick_config(port)).await;

    assert_eq!(report[0].sample.successful, 0);
    assert_eq!(report[0].sample.failed, 3);
    assert_eq!(report[0].sample.mean_latency(), None);
}

#[tokio::test]
async fn sweep_feeds_the_prober() -> anyhow::Result<()> {
    let (_listener, port) = loopback_listener().await;
    let cfg = quick_config(port);
    let range: AddressRange = "127.0.0.1/31".parse()?;

    let reachable = scanner::scan_range(&range, &cfg).await?;
    let report = prober::measure_latency(&reachable, &cfg).await;

    assert_eq!(
        report.iter().map(|host| host.addr).collect::<Vec<_>>(),
        reachable
    );
    assert!(!reachable.is_empty());
    assert!(report.iter().all(|host| host.sample.successful == 3));
    Ok(())
}
