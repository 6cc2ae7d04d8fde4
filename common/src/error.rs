use std::io;
use std::net::Ipv4Addr;

use thiserror::Error;

/// Malformed subnet input. Raised before any socket is opened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The text does not have the `a.b.c.d/nn` shape at all.
    #[error("'{0}' is not an IPv4 range (expected a.b.c.d/nn)")]
    Pattern(String),
    #[error("invalid octet '{octet}' in '{input}'")]
    Octet { input: String, octet: String },
    #[error("prefix length /{0} is out of range (0-32)")]
    Prefix(u8),
}

/// Failure to set up the connection burst of a range scan.
///
/// Individual connection failures never end up here; they only exclude an
/// address from the result.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to allocate a socket for {addr} after {allocated} attempts were issued: {source}")]
    Setup {
        addr: Ipv4Addr,
        allocated: usize,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("could not resolve '{host}': {source}")]
    Lookup {
        host: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("no network connection available")]
    NoNetwork,
}
