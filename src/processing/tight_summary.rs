//! Tightest summary search for one group of networks.

use crate::models::{collapse_exact, cut_addr, Prefix, SummaryMapping};
use crate::processing::classify::group_prefixes;
use colored::Colorize;

/// Loosest candidate length tried by the range search.
pub const MIN_SEARCH_LEN: u8 = 8;
/// Tightest candidate length tried by the range search.
pub const MAX_SEARCH_LEN: u8 = 28;
/// Efficiency at which the range search stops looking.
pub const EFFICIENCY_THRESHOLD: f64 = 0.05;

/// Find the summary for one group.
///
/// First tries an exact collapse. Failing that, scans candidate blocks from
/// /8 to /28 anchored at the lowest member address and takes the first one
/// that reaches [`EFFICIENCY_THRESHOLD`], or else the most efficient one seen.
/// The summary is always strictly shorter than every member.
///
/// Returns the summary and the members it replaces, sorted by address.
pub fn find_tightest_summary(members: &[Prefix]) -> Option<(Prefix, Vec<Prefix>)> {
    if members.len() < 2 {
        return None;
    }
    let mut sorted = members.to_vec();
    sorted.sort_by_key(|p| p.network());

    let min_len = sorted.iter().map(|p| p.prefix_len()).min()?;

    if let Some(collapsed) = collapse_exact(&sorted) {
        if collapsed.prefix_len() < min_len {
            log::debug!("exact collapse {} <- {:?}", collapsed, sorted);
            return Some((collapsed, sorted));
        }
    }

    let low = sorted.iter().map(|p| p.network()).min()?;
    let high = sorted.iter().map(|p| p.broadcast()).max()?;
    let used_addresses: u64 = sorted.iter().map(|p| p.num_addresses()).sum();

    let mut best: Option<(Prefix, f64)> = None;
    for len in MIN_SEARCH_LEN..=MAX_SEARCH_LEN {
        if len >= min_len {
            break;
        }
        let candidate = Prefix::new(cut_addr(low, len), len).ok()?;
        if candidate.broadcast() < high || !sorted.iter().all(|p| candidate.contains(p)) {
            continue;
        }

        let efficiency = used_addresses as f64 / candidate.num_addresses() as f64;
        log::trace!("candidate {} efficiency {:.4}", candidate, efficiency);

        if best.map_or(true, |(_, best_eff)| efficiency > best_eff) {
            best = Some((candidate, efficiency));
        }
        if efficiency >= EFFICIENCY_THRESHOLD {
            log::debug!(
                "range summary {} at {:.1}% efficiency",
                candidate,
                efficiency * 100.0
            );
            return Some((candidate, sorted));
        }
    }

    match best {
        Some((candidate, efficiency)) => {
            log::debug!(
                "range summary {} below threshold, {:.3}% efficiency",
                candidate.to_string().yellow(),
                efficiency * 100.0
            );
            Some((candidate, sorted))
        }
        None => None,
    }
}

/// Summarize every group with at least two members.
pub fn find_group_summaries(prefixes: &[Prefix]) -> SummaryMapping {
    let mut mapping = SummaryMapping::new();

    for (key, members) in group_prefixes(prefixes) {
        if members.len() < 2 {
            continue;
        }
        match find_tightest_summary(&members) {
            Some((summary, originals)) => {
                log::info!(
                    "group {} summarized {} networks into {}",
                    key,
                    originals.len(),
                    summary.to_string().green()
                );
                mapping.insert(summary, originals);
            }
            None => log::debug!("group {} has no valid summary", key),
        }
    }

    mapping
}
