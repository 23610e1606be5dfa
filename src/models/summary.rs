//! Summary route mapping.

use super::Prefix;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One summary route and the original networks it replaces.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub summary: Prefix,
    pub originals: Vec<Prefix>,
}

/// Insertion-ordered mapping from summary route to the originals it absorbs.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct SummaryMapping {
    entries: Vec<SummaryEntry>,
}

impl SummaryMapping {
    pub fn new() -> SummaryMapping {
        SummaryMapping::default()
    }

    /// Register `summary` for `originals`.
    ///
    /// A summary that is already present keeps its position and gains any
    /// originals it did not list yet.
    pub fn insert(&mut self, summary: Prefix, originals: Vec<Prefix>) {
        match self.entries.iter_mut().find(|e| e.summary == summary) {
            Some(entry) => {
                for original in originals {
                    if !entry.originals.contains(&original) {
                        entry.originals.push(original);
                    }
                }
            }
            None => self.entries.push(SummaryEntry { summary, originals }),
        }
    }

    /// Append every entry of `other`, in its order.
    pub fn extend(&mut self, other: SummaryMapping) {
        for entry in other.entries {
            self.insert(entry.summary, entry.originals);
        }
    }

    pub fn get(&self, summary: &Prefix) -> Option<&[Prefix]> {
        self.entries
            .iter()
            .find(|e| &e.summary == summary)
            .map(|e| e.originals.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SummaryEntry> {
        self.entries.iter()
    }

    /// Summary routes in insertion order.
    pub fn summaries(&self) -> impl Iterator<Item = Prefix> + '_ {
        self.entries.iter().map(|e| e.summary)
    }

    /// Every original claimed by any summary.
    pub fn consumed(&self) -> HashSet<Prefix> {
        self.entries
            .iter()
            .flat_map(|e| e.originals.iter().copied())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
