use std::time::Duration;

use sweepr_common::config::Config;
use tokio::net::TcpListener;

/// A listener on an ephemeral loopback port. Handshakes complete in the
/// kernel backlog, so nothing has to call `accept`.
pub async fn loopback_listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let port = listener.local_addr().expect("listener address").port();
    (listener, port)
}

/// A loopback port nothing listens on.
pub async fn closed_port() -> u16 {
    let (_listener, port) = loopback_listener().await;
    port
}

pub fn quick_config(port: u16) -> Config {
    Config {
        time_budget: Duration::from_millis(500),
        probe_attempts: 3,
        port,
        probe_timeout: Some(Duration::from_secs(2)),
        ..Config::default()
    }
}
