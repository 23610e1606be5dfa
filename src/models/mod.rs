//! Domain models for OSPF route summarization.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Prefix`] - canonical IPv4 network with containment and exact collapse
//! - [`SummaryMapping`] - summary routes and the networks they replace
//! - [`OspfConfig`] and [`OspfInterface`] - router description read from input

mod ospf;
mod prefix;
mod summary;

// Re-export public types
pub use ospf::{OspfConfig, OspfInterface, DEFAULT_AREA};
pub use prefix::{
    broadcast_addr, collapse_exact, cut_addr, get_cidr_mask, Prefix, PrefixParseError, MAX_LENGTH,
};
pub use summary::{SummaryEntry, SummaryMapping};
