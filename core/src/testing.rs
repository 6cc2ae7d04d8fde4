//! Injectable transport used by the unit tests.
//!
//! Every socket handed out is counted, and counted again when it is dropped,
//! so a test can assert that no attempt outlived the call under test.

use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::transport::Connector;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Behavior {
    Accept,
    AcceptAfter(Duration),
    Refuse,
    /// The handshake never resolves.
    Hang,
}

#[derive(Clone, Default)]
pub(crate) struct Counters {
    allocated: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl Counters {
    pub(crate) fn allocated(&self) -> usize {
        self.allocated.load(Ordering::SeqCst)
    }

    pub(crate) fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    pub(crate) fn open(&self) -> usize {
        self.allocated() - self.released()
    }
}

pub(crate) struct MockSocket {
    released: Arc<AtomicUsize>,
}

impl Drop for MockSocket {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

pub(crate) struct MockConnector<F> {
    behavior: F,
    counters: Counters,
    fail_after: Option<usize>,
}

impl<F> MockConnector<F>
where
    F: Fn(Ipv4Addr) -> Behavior + Send + Sync + 'static,
{
    pub(crate) fn new(behavior: F) -> (Self, Counters) {
        let counters = Counters::default();
        let connector = Self {
            behavior,
            counters: counters.clone(),
            fail_after: None,
        };
        (connector, counters)
    }

    /// Refuses to allocate once `limit` sockets have been handed out.
    pub(crate) fn failing_after(mut self, limit: usize) -> Self {
        self.fail_after = Some(limit);
        self
    }
}

#[async_trait]
impl<F> Connector for MockConnector<F>
where
    F: Fn(Ipv4Addr) -> Behavior + Send + Sync + 'static,
{
    type Socket = MockSocket;
    type Stream = MockSocket;

    fn allocate(&self, _addr: SocketAddr) -> io::Result<MockSocket> {
        if self
            .fail_after
            .is_some_and(|limit| self.counters.allocated() >= limit)
        {
            return Err(io::Error::other("too many open files"));
        }
        self.counters.allocated.fetch_add(1, Ordering::SeqCst);
        Ok(MockSocket {
            released: Arc::clone(&self.counters.released),
        })
    }

    async fn connect(&self, socket: MockSocket, addr: SocketAddr) -> io::Result<MockSocket> {
        let SocketAddr::V4(v4) = addr else {
            return Err(io::ErrorKind::Unsupported.into());
        };

        match (self.behavior)(*v4.ip()) {
            Behavior::Accept => Ok(socket),
            Behavior::AcceptAfter(delay) => {
                tokio::time::sleep(delay).await;
                Ok(socket)
            }
            Behavior::Refuse => {
                drop(socket);
                Err(io::ErrorKind::ConnectionRefused.into())
            }
            Behavior::Hang => {
                let _held = socket;
                std::future::pending().await
            }
        }
    }
}
