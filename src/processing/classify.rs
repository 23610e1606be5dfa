//! Grouping of networks into likely-aggregable clusters.
//!
//! Private address space is split along RFC 1918 lines, everything else by
//! its leading 16 bits.

use crate::models::Prefix;
use std::collections::HashMap;
use std::fmt;

/// Classification key of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// 10.0.0.0/8 as one group.
    Ten,
    /// One /16 slice of 172.16.0.0/12, holding the second octet.
    Private172(u8),
    /// 192.168.0.0/16 as one group.
    Private192,
    /// Any other space, by first and second octet.
    Other(u8, u8),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Ten => write!(f, "10"),
            GroupKey::Private172(second) => write!(f, "172.{second}"),
            GroupKey::Private192 => write!(f, "192.168"),
            GroupKey::Other(first, second) => write!(f, "{first}.{second}"),
        }
    }
}

/// Classify a network by its leading octets.
pub fn classify(prefix: &Prefix) -> GroupKey {
    match prefix.network().octets() {
        [10, ..] => GroupKey::Ten,
        [172, second @ 16..=31, ..] => GroupKey::Private172(second),
        [192, 168, ..] => GroupKey::Private192,
        [first, second, ..] => GroupKey::Other(first, second),
    }
}

/// Group networks by [`GroupKey`].
///
/// Groups come back in the order their key was first seen; members keep the
/// order of `prefixes`.
pub fn group_prefixes(prefixes: &[Prefix]) -> Vec<(GroupKey, Vec<Prefix>)> {
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<(GroupKey, Vec<Prefix>)> = Vec::new();

    for prefix in prefixes {
        let key = classify(prefix);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(*prefix);
    }

    log::trace!(
        "group_prefixes() {} networks -> {} groups",
        prefixes.len(),
        groups.len()
    );
    groups
}
