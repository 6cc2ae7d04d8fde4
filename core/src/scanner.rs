//! # Range Scanner
//!
//! Sweeps an [`AddressRange`] for hosts accepting TCP connections on one port.
//!
//! The scan is a burst followed by a single deadline:
//!
//! 1. Every address gets its own socket and its own task driving the
//!    handshake. Nothing waits for an earlier attempt before issuing the next.
//! 2. The caller is parked for the whole time budget.
//! 3. At the deadline the scanner takes a snapshot of which attempts have
//!    finished, then stops observing the rest. Unfinished attempts are
//!    aborted, which closes their socket mid-handshake.
//!
//! Sockets are owned by their task, so every one of them is released before
//! [`RangeScanner::scan`] returns, including on the setup-failure path.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use sweepr_common::config::Config;
use sweepr_common::error::ScanError;
use sweepr_common::network::range::AddressRange;
use sweepr_common::transport::Connector;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::network::tcp::TcpConnector;

pub struct RangeScanner<C = TcpConnector> {
    connector: Arc<C>,
    port: u16,
    time_budget: Duration,
}

/// One in-flight handshake. The task yields the established stream, or
/// `None` if the connection failed.
struct Attempt<S> {
    addr: Ipv4Addr,
    handle: JoinHandle<Option<S>>,
}

impl RangeScanner<TcpConnector> {
    pub fn new(cfg: &Config) -> Self {
        Self::with_connector(TcpConnector, cfg.port, cfg.time_budget)
    }
}

impl<C: Connector> RangeScanner<C> {
    pub fn with_connector(connector: C, port: u16, time_budget: Duration) -> Self {
        Self {
            connector: Arc::new(connector),
            port,
            time_budget,
        }
    }

    /// Returns the addresses that had an established connection when the
    /// time budget ran out, in enumeration order.
    ///
    /// An empty vector is a valid outcome. The only error is a failure to
    /// allocate sockets for the burst, in which case nothing is reported.
    pub async fn scan(&self, range: &AddressRange) -> Result<Vec<Ipv4Addr>, ScanError> {
        let attempts: Vec<Attempt<C::Stream>> = self.launch(range).await?;
        debug!(
            "Issued {} connection attempts against {range}:{}",
            attempts.len(),
            self.port
        );

        tokio::time::sleep(self.time_budget).await;

        Ok(collect(attempts).await)
    }

    async fn launch(&self, range: &AddressRange) -> Result<Vec<Attempt<C::Stream>>, ScanError> {
        let mut attempts: Vec<Attempt<C::Stream>> = Vec::new();

        for addr in range {
            let target = SocketAddr::from((addr, self.port));
            let socket = match self.connector.allocate(target) {
                Ok(socket) => socket,
                Err(source) => {
                    let allocated = attempts.len();
                    release(attempts).await;
                    return Err(ScanError::Setup {
                        addr,
                        allocated,
                        source,
                    });
                }
            };

            let connector = Arc::clone(&self.connector);
            let handle = tokio::spawn(async move { connector.connect(socket, target).await.ok() });
            attempts.push(Attempt { addr, handle });
        }

        Ok(attempts)
    }
}

/// Convenience wrapper scanning over real TCP with the tunables of `cfg`.
pub async fn scan_range(range: &AddressRange, cfg: &Config) -> Result<Vec<Ipv4Addr>, ScanError> {
    RangeScanner::new(cfg).scan(range).await
}

async fn collect<S>(attempts: Vec<Attempt<S>>) -> Vec<Ipv4Addr> {
    // Sampling point. Whatever finishes after this line does not count.
    let sampled: Vec<(Attempt<S>, bool)> = attempts
        .into_iter()
        .map(|attempt| {
            let finished = attempt.handle.is_finished();
            if !finished {
                attempt.handle.abort();
            }
            (attempt, finished)
        })
        .collect();

    let mut reachable: Vec<Ipv4Addr> = Vec::new();
    let mut failed: usize = 0;
    let mut pending: usize = 0;

    for (attempt, finished) in sampled {
        let outcome = attempt.handle.await;
        match (finished, outcome) {
            (true, Ok(Some(_stream))) => reachable.push(attempt.addr),
            (true, _) => failed += 1,
            (false, _) => pending += 1,
        }
    }

    debug!(
        "Collection window closed: {} connected, {failed} failed, {pending} still pending",
        reachable.len()
    );
    reachable
}

async fn release<S>(attempts: Vec<Attempt<S>>) {
    for attempt in &attempts {
        attempt.handle.abort();
    }
    for attempt in attempts {
        let _ = attempt.handle.await;
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
