//! Assembles the optimized network list from group and pairwise summaries.

use crate::models::{Prefix, SummaryMapping};
use crate::processing::pair_merge::find_contiguous_summaries;
use crate::processing::tight_summary::find_group_summaries;

/// Result of one summarization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizedNetworks {
    /// Summary routes first, then every network no summary absorbed.
    pub networks: Vec<Prefix>,
    pub summaries: SummaryMapping,
}

/// Parse CIDR strings, dropping and logging the malformed ones.
pub fn parse_networks<S: AsRef<str>>(networks: &[S]) -> Vec<Prefix> {
    networks
        .iter()
        .filter_map(|net| match Prefix::parse(net.as_ref()) {
            Ok(prefix) => Some(prefix),
            Err(e) => {
                log::warn!("Skipping network {:?}: {}", net.as_ref(), e);
                None
            }
        })
        .collect()
}

/// Group summaries followed by pairwise summaries over the leftovers.
pub fn find_summary_routes(prefixes: &[Prefix]) -> SummaryMapping {
    let mut sorted = prefixes.to_vec();
    sorted.sort();

    let mut summaries = find_group_summaries(&sorted);
    let pairs = find_contiguous_summaries(&sorted, &summaries);
    summaries.extend(pairs);
    summaries
}

/// Build the output list from `prefixes` (input order) and their summaries.
pub fn assemble(prefixes: &[Prefix], summaries: SummaryMapping) -> OptimizedNetworks {
    let consumed = summaries.consumed();
    let mut networks: Vec<Prefix> = summaries.summaries().collect();
    networks.extend(prefixes.iter().filter(|p| !consumed.contains(*p)).copied());

    OptimizedNetworks {
        networks,
        summaries,
    }
}

/// Summarize a list of CIDR strings.
///
/// Malformed entries are skipped. Empty or single-network input comes back
/// unchanged with no summaries.
pub fn get_optimized_networks<S: AsRef<str>>(networks: &[S]) -> OptimizedNetworks {
    let prefixes = parse_networks(networks);
    let summaries = find_summary_routes(&prefixes);
    let optimized = assemble(&prefixes, summaries);

    log::info!(
        "optimized {} networks into {} ({} summaries)",
        prefixes.len(),
        optimized.networks.len(),
        optimized.summaries.len()
    );
    optimized
}
