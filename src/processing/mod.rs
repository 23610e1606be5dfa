//! Network summarization engine.
//!
//! - [`classify`] - grouping of networks into aggregable clusters
//! - [`tight_summary`] - one summary per cluster
//! - [`pair_merge`] - pairwise merging of the leftovers
//! - [`optimizer`] - combined mapping and final network list

pub mod classify;
pub mod optimizer;
pub mod pair_merge;
pub mod tight_summary;

// Re-export public functions
pub use classify::{classify, group_prefixes, GroupKey};
pub use optimizer::{
    assemble, find_summary_routes, get_optimized_networks, parse_networks, OptimizedNetworks,
};
pub use pair_merge::{find_contiguous_summaries, merge_pair};
pub use tight_summary::{find_group_summaries, find_tightest_summary};
