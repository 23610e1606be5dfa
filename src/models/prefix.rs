//! IPv4 prefix (CIDR block) model.
//!
//! Provides [`Prefix`], a canonical IPv4 network with containment checks and
//! the exact collapse used by the summarization engine.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;
use thiserror::Error;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Reasons a CIDR string is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefixParseError {
    #[error("missing '/<length>' in {0:?}")]
    MissingLength(String),

    #[error("invalid address {0:?}")]
    InvalidAddress(String),

    #[error("invalid prefix length {0:?}")]
    InvalidLength(String),

    #[error("prefix length {0} is longer than 32")]
    LengthOutOfRange(u8),
}

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ospf_route_summary::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let len = len.min(MAX_LENGTH);
    let right_len = MAX_LENGTH - len;
    ((u32::MAX as u64 >> right_len) << right_len) as u32
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & get_cidr_mask(len))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    let mask = get_cidr_mask(len);
    Ipv4Addr::from((u32::from(addr) & mask) | !mask)
}

/// IPv4 network in CIDR notation, host bits always zero.
///
/// Ordering is by network address, then prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Prefix {
    addr: Ipv4Addr,
    len: u8,
}

impl Prefix {
    /// Build a prefix, masking off any host bits.
    pub fn new(addr: Ipv4Addr, len: u8) -> Result<Prefix, PrefixParseError> {
        if len > MAX_LENGTH {
            return Err(PrefixParseError::LengthOutOfRange(len));
        }
        Ok(Prefix {
            addr: cut_addr(addr, len),
            len,
        })
    }

    /// Parse a CIDR string such as `"10.0.0.0/24"`.
    pub fn parse(text: &str) -> Result<Prefix, PrefixParseError> {
        let text = text.trim();
        let (addr, len) = text
            .split_once('/')
            .ok_or_else(|| PrefixParseError::MissingLength(text.to_string()))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| PrefixParseError::InvalidAddress(addr.to_string()))?;
        if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PrefixParseError::InvalidLength(len.to_string()));
        }
        let len: u8 = len
            .parse()
            .map_err(|_| PrefixParseError::InvalidLength(len.to_string()))?;
        Prefix::new(addr, len)
    }

    /// Network (lowest) address.
    pub fn network(&self) -> Ipv4Addr {
        self.addr
    }

    /// Prefix length.
    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// Broadcast (highest) address.
    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.len)
    }

    /// Dotted-quad netmask, as Fortigate expects it.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(get_cidr_mask(self.len))
    }

    /// Number of addresses in the block.
    pub fn num_addresses(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.len)
    }

    /// True iff every address of `other` lies inside `self`.
    pub fn contains(&self, other: &Prefix) -> bool {
        self.len <= other.len && cut_addr(other.addr, self.len) == self.addr
    }

    /// The enclosing block one bit shorter, `None` for `/0`.
    pub fn parent(&self) -> Option<Prefix> {
        let len = self.len.checked_sub(1)?;
        Some(Prefix {
            addr: cut_addr(self.addr, len),
            len,
        })
    }

    /// The other half of this prefix's parent block.
    fn sibling(&self) -> Option<Prefix> {
        if self.len == 0 {
            return None;
        }
        let bit = 1u32 << (MAX_LENGTH - self.len);
        Some(Prefix {
            addr: Ipv4Addr::from(u32::from(self.addr) ^ bit),
            len: self.len,
        })
    }
}

impl FromStr for Prefix {
    type Err = PrefixParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::parse(s)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prefix::parse(&s).map_err(de::Error::custom)
    }
}

/// Collapse `prefixes` into a single block if their union is exactly one block.
///
/// Duplicates and members nested inside another member are absorbed, then
/// equal-length siblings are merged until nothing changes. Returns `None` when
/// the union leaves a gap or spans more than one block.
pub fn collapse_exact(prefixes: &[Prefix]) -> Option<Prefix> {
    let mut sorted = prefixes.to_vec();
    sorted.sort();

    let mut stack: Vec<Prefix> = Vec::with_capacity(sorted.len());
    for prefix in sorted {
        if stack.last().is_some_and(|top| top.contains(&prefix)) {
            continue;
        }
        let mut current = prefix;
        // Merge with the top of the stack while the two are buddies.
        while let Some(top) = stack.last() {
            if current.sibling() == Some(*top) {
                stack.pop();
                current = current.parent()?;
            } else {
                break;
            }
        }
        stack.push(current);
    }

    match stack.as_slice() {
        [single] => Some(*single),
        _ => None,
    }
}
