//! Loopback integration tests for the scanner and the prober, run against
//! real sockets.

#[cfg(test)]
mod sweep;
#[cfg(test)]
mod utils;
