//! # Sweepr Core
//!
//! The two measuring components of a diagnostic run and the small system
//! collaborators around them.
//!
//! * **[`scanner`]**: fires one connection attempt per address of a range and
//!   samples them all after a single deadline.
//! * **[`prober`]**: measures connect latency of already reachable hosts, one
//!   blocking attempt at a time.
//! * **[`network`]**: the real TCP transport, the single-host ping and DNS.
//! * **[`system`]**: local interface configuration.

pub mod network;
pub mod prober;
pub mod scanner;
pub mod system;

#[cfg(test)]
mod testing;
