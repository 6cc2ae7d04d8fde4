//! # Latency Prober
//!
//! Measures how long a TCP handshake takes against hosts that are already
//! known to answer. Probes run strictly one after another: concurrent
//! connects would compete with each other and skew the numbers.

use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use sweepr_common::config::Config;
use sweepr_common::network::probe::{HostLatency, ProbeSample};
use sweepr_common::transport::Connector;
use tokio::time::{Instant, timeout};
use tracing::{debug, trace};

use crate::network::tcp::TcpConnector;

pub struct LatencyProber<C = TcpConnector> {
    connector: C,
    port: u16,
    attempts: u32,
    probe_timeout: Option<Duration>,
}

impl LatencyProber<TcpConnector> {
    pub fn new(cfg: &Config) -> Self {
        Self::with_connector(TcpConnector, cfg.port, cfg.probe_attempts)
            .with_timeout(cfg.probe_timeout)
    }
}

impl<C: Connector> LatencyProber<C> {
    pub fn with_connector(connector: C, port: u16, attempts: u32) -> Self {
        Self {
            connector,
            port,
            attempts,
            probe_timeout: None,
        }
    }

    /// Bounds every single probe. A probe hitting the limit counts as failed.
    pub fn with_timeout(mut self, probe_timeout: Option<Duration>) -> Self {
        self.probe_timeout = probe_timeout;
        self
    }

    /// Probes every address in order and reports one sample per address.
    pub async fn probe(&self, addrs: &[Ipv4Addr]) -> Vec<HostLatency> {
        let mut report: Vec<HostLatency> = Vec::with_capacity(addrs.len());
        for &addr in addrs {
            let sample = self.probe_host(addr).await;
            debug!(
                "{addr}: {} ok, {} failed, mean {:?}",
                sample.successful,
                sample.failed,
                sample.mean_latency()
            );
            report.push(HostLatency { addr, sample });
        }
        report
    }

    /// Runs exactly `attempts` probes, whatever their outcome.
    pub async fn probe_host(&self, addr: Ipv4Addr) -> ProbeSample {
        let target = SocketAddr::from((addr, self.port));
        let mut sample = ProbeSample::default();

        for _ in 0..self.attempts {
            match self.probe_once(target).await {
                Ok(elapsed) => sample.record_success(elapsed),
                Err(e) => {
                    trace!("Probe to {target} failed: {e}");
                    sample.record_failure();
                }
            }
        }

        sample
    }

    async fn probe_once(&self, target: SocketAddr) -> io::Result<Duration> {
        let socket = self.connector.allocate(target)?;

        let started = Instant::now();
        let outcome = match self.probe_timeout {
            Some(limit) => timeout(limit, self.connector.connect(socket, target))
                .await
                .unwrap_or_else(|_elapsed| Err(io::ErrorKind::TimedOut.into())),
            None => self.connector.connect(socket, target).await,
        };
        let elapsed = started.elapsed();

        drop(outcome?);
        Ok(elapsed)
    }
}

/// Convenience wrapper probing over real TCP with the tunables of `cfg`.
pub async fn measure_latency(addrs: &[Ipv4Addr], cfg: &Config) -> Vec<HostLatency> {
    LatencyProber::new(cfg).probe(addrs).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Behavior, MockConnector};

    const PORT: u16 = 1433;

    fn assert_close(actual: Duration, expected: Duration) {
        let diff = actual.abs_diff(expected);
        assert!(
            diff < Duration::from_millis(1),
            "expected ~{expected:?}, got {actual:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn steady_host_reports_its_latency() {
        let latency = Duration::from_millis(40);
        let (connector, counters) = MockConnector::new(move |_| Behavior::AcceptAfter(latency));
        let prober = LatencyProber::with_connector(connector, PORT, 5);

        let sample = prober.probe_host(Ipv4Addr::new(10, 0, 0, 5)).await;

        assert_eq!(sample.successful, 5);
        assert_eq!(sample.failed, 0);
        assert_close(sample.mean_latency().unwrap(), latency);
        assert_eq!(counters.allocated(), 5);
        assert_eq!(counters.open(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn unreachable_host_is_unmeasurable() {
        let (connector, counters) = MockConnector::new(|_| Behavior::Refuse);
        let prober = LatencyProber::with_connector(connector, PORT, 5);

        let sample = prober.probe_host(Ipv4Addr::new(10, 0, 0, 6)).await;

        assert_eq!(sample.successful, 0);
        assert_eq!(sample.failed, 5);
        assert_eq!(sample.mean_latency(), None);
        assert_eq!(counters.open(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn every_host_gets_every_attempt_in_input_order() {
        let (connector, counters) = MockConnector::new(|addr| match addr.octets()[3] {
            1 => Behavior::AcceptAfter(Duration::from_millis(5)),
            _ => Behavior::Refuse,
        });
        let prober = LatencyProber::with_connector(connector, PORT, 3);
        let addrs = [
            Ipv4Addr::new(10, 0, 0, 9),
            Ipv4Addr::new(10, 0, 0, 1),
            Ipv4Addr::new(10, 0, 0, 4),
        ];

        let report = prober.probe(&addrs).await;

        assert_eq!(report.iter().map(|h| h.addr).collect::<Vec<_>>(), addrs);
        assert_eq!(report[1].sample.successful, 3);
        assert_eq!(report[0].sample.failed, 3);
        assert_eq!(report[2].sample.failed, 3);
        assert_eq!(counters.allocated(), 9);
        assert_eq!(counters.open(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_probe_hits_the_timeout_and_counts_as_failed() {
        let (connector, counters) = MockConnector::new(|_| Behavior::Hang);
        let prober = LatencyProber::with_connector(connector, PORT, 5)
            .with_timeout(Some(Duration::from_secs(1)));
        let start = Instant::now();

        let sample = prober.probe_host(Ipv4Addr::new(10, 0, 0, 7)).await;

        assert_eq!(sample.failed, 5);
        assert_eq!(sample.mean_latency(), None);
        assert!(start.elapsed() >= Duration::from_secs(5));
        assert_eq!(counters.released(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_allocation_is_a_failed_probe() {
        let (connector, _counters) = MockConnector::new(|_| Behavior::Accept);
        let prober = LatencyProber::with_connector(connector.failing_after(2), PORT, 5);

        let sample = prober.probe_host(Ipv4Addr::new(10, 0, 0, 8)).await;

        assert_eq!(sample.successful, 2);
        assert_eq!(sample.failed, 3);
    }
}
