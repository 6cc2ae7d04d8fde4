//! # IPv4 Address Range
//!
//! A CIDR-style range that is walked **literally**: iteration starts at the
//! address the caller typed, not at the network address of the block, and
//! covers `2^(32 - prefix)` consecutive addresses.
//!
//! `10.0.0.200/24` therefore yields `10.0.0.200 ..= 10.0.1.199`. A walk that
//! would pass `255.255.255.255` wraps around to `0.0.0.0`; use
//! [`AddressRange::overruns`] to detect that case up front.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::RangeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRange {
    base: Ipv4Addr,
    prefix: u8,
}

impl AddressRange {
    pub fn new(base: Ipv4Addr, prefix: u8) -> Result<Self, RangeError> {
        if prefix > 32 {
            return Err(RangeError::Prefix(prefix));
        }
        Ok(Self { base, prefix })
    }

    pub fn base(&self) -> Ipv4Addr {
        self.base
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Number of addresses covered, `2^(32 - prefix)`.
    pub fn host_count(&self) -> u64 {
        1u64 << (32 - u32::from(self.prefix))
    }

    /// Last address produced by [`AddressRange::iter`].
    pub fn last(&self) -> Ipv4Addr {
        let offset = (self.host_count() - 1) as u32;
        Ipv4Addr::from(u32::from(self.base).wrapping_add(offset))
    }

    /// Whether the walk carries past `255.255.255.255` and wraps.
    pub fn overruns(&self) -> bool {
        u64::from(u32::from(self.base)) + self.host_count() > 1u64 << 32
    }

    pub fn iter(&self) -> AddressIter {
        AddressIter {
            next: u32::from(self.base),
            remaining: self.host_count(),
        }
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix)
    }
}

impl<'a> IntoIterator for &'a AddressRange {
    type Item = Ipv4Addr;
    type IntoIter = AddressIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Big-endian counter over the addresses of an [`AddressRange`].
///
/// Incrementing the `u32` form of the address is the same as bumping the last
/// octet and carrying into the higher ones.
#[derive(Debug, Clone)]
pub struct AddressIter {
    next: u32,
    remaining: u64,
}

impl Iterator for AddressIter {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.next = self.next.wrapping_add(1);
        self.remaining -= 1;
        Some(Ipv4Addr::from(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FromStr for AddressRange {
    type Err = RangeError;

    /// Parses `a.b.c.d/nn`.
    ///
    /// The shape is checked first (1-3 digits per octet, 1-2 digits of
    /// prefix); only then are the numbers converted, so `999.0.0.1/24` is an
    /// [`RangeError::Octet`] and not a [`RangeError::Pattern`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((addr_str, prefix_str)) = split_cidr_shape(s) else {
            return Err(RangeError::Pattern(s.to_string()));
        };

        let mut octets = [0u8; 4];
        for (slot, octet_str) in octets.iter_mut().zip(addr_str.split('.')) {
            *slot = octet_str.parse::<u8>().map_err(|_| RangeError::Octet {
                input: s.to_string(),
                octet: octet_str.to_string(),
            })?;
        }

        // Two digits always fit into a u8.
        let prefix = prefix_str
            .parse::<u8>()
            .map_err(|_| RangeError::Pattern(s.to_string()))?;

        AddressRange::new(Ipv4Addr::from(octets), prefix)
    }
}

fn split_cidr_shape(s: &str) -> Option<(&str, &str)> {
    let (addr_str, prefix_str) = s.split_once('/')?;

    let octets: Vec<&str> = addr_str.split('.').collect();
    let valid = octets.len() == 4
        && octets.iter().all(|octet| is_digits(octet, 3))
        && is_digits(prefix_str, 2);

    valid.then_some((addr_str, prefix_str))
}

fn is_digits(part: &str, max_len: usize) -> bool {
    !part.is_empty() && part.len() <= max_len && part.bytes().all(|b| b.is_ascii_digit())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
