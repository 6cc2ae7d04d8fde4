//! # Transport Seam
//!
//! The scanner and the prober never touch sockets directly. They go through a
//! [`Connector`], which splits a connection attempt into two steps:
//!
//! 1. [`Connector::allocate`] synchronously reserves the socket. Failing here
//!    means the host is out of resources, not that the target is unreachable.
//! 2. [`Connector::connect`] drives the handshake to completion.
//!
//! Dropping a socket or stream value releases it, so ownership alone
//! guarantees that every attempt is closed on every exit path.

use std::io;
use std::net::SocketAddr;

use async_trait::async_trait;

#[async_trait]
pub trait Connector: Send + Sync + 'static {
    /// An allocated, not yet connected socket.
    type Socket: Send + 'static;
    /// An established connection.
    type Stream: Send + 'static;

    fn allocate(&self, addr: SocketAddr) -> io::Result<Self::Socket>;

    async fn connect(&self, socket: Self::Socket, addr: SocketAddr) -> io::Result<Self::Stream>;
}
