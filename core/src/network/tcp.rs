use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::transport::Connector;
use tokio::net::{TcpSocket, TcpStream};
use tokio::time::timeout;
use tracing::debug;

/// Plain TCP over the operating system's sockets.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

#[async_trait]
impl Connector for TcpConnector {
    type Socket = TcpSocket;
    type Stream = TcpStream;

    fn allocate(&self, addr: SocketAddr) -> io::Result<TcpSocket> {
        match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4(),
            SocketAddr::V6(_) => TcpSocket::new_v6(),
        }
    }

    async fn connect(&self, socket: TcpSocket, addr: SocketAddr) -> io::Result<TcpStream> {
        socket.connect(addr).await
    }
}

/// One-shot liveness check of `host:port`.
///
/// Any outcome other than an established connection within `limit` is
/// reported as `false`; the reason is only logged.
pub async fn ping(host: &str, port: u16, limit: Duration) -> bool {
    match timeout(limit, TcpStream::connect((host, port))).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(e)) => {
            debug!("Ping to {host}:{port} failed: {e}");
            false
        }
        Err(_elapsed) => {
            debug!("Ping to {host}:{port} timed out after {limit:?}");
            false
        }
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
