//! Pairwise merging of contiguous networks left over after group summaries.

use crate::models::{collapse_exact, Prefix, SummaryMapping};
use itertools::Itertools;

/// Longest prefix a pairwise summary may have.
pub const MAX_PAIR_SUMMARY_LEN: u8 = 28;

/// Merge two networks into one block strictly looser than both.
///
/// Returns `None` unless the pair tiles a single block exactly and that block
/// is no longer than [`MAX_PAIR_SUMMARY_LEN`].
pub fn merge_pair(a: &Prefix, b: &Prefix) -> Option<Prefix> {
    let merged = collapse_exact(&[*a, *b])?;
    let loosest = a.prefix_len().min(b.prefix_len());
    if merged.prefix_len() < loosest && merged.prefix_len() <= MAX_PAIR_SUMMARY_LEN {
        Some(merged)
    } else {
        None
    }
}

/// Find pairwise summaries among networks not claimed by `existing`.
///
/// `prefixes` should be sorted; every unordered pair is tried in scan order
/// and accepted independently, so one network can appear in several pairs.
pub fn find_contiguous_summaries(
    prefixes: &[Prefix],
    existing: &SummaryMapping,
) -> SummaryMapping {
    let claimed = existing.consumed();
    let remaining: Vec<&Prefix> = prefixes.iter().filter(|p| !claimed.contains(*p)).collect();

    let mut mapping = SummaryMapping::new();
    if remaining.len() < 2 {
        return mapping;
    }

    for (a, b) in remaining.iter().tuple_combinations() {
        if let Some(summary) = merge_pair(a, b) {
            log::debug!("pair {} + {} -> {}", a, b, summary);
            mapping.insert(summary, vec![**a, **b]);
        }
    }

    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Prefix {
        Prefix::parse(s).unwrap()
    }

    #[test]
    fn test_merge_pair_siblings() {
        assert_eq!(
            merge_pair(&p("172.17.0.0/16"), &p("172.16.0.0/16")),
            Some(p("172.16.0.0/15"))
        );
    }

    #[test]
    fn test_merge_pair_rejects_nested() {
        // Collapses to the wider input, which is no reduction.
        assert_eq!(merge_pair(&p("10.0.0.0/24"), &p("10.0.0.0/25")), None);
        assert_eq!(merge_pair(&p("10.0.0.0/24"), &p("10.0.0.0/24")), None);
    }

    #[test]
    fn test_merge_pair_rejects_gap() {
        assert_eq!(merge_pair(&p("192.168.1.0/24"), &p("192.168.3.0/24")), None);
        assert_eq!(merge_pair(&p("10.0.1.0/24"), &p("10.0.2.0/24")), None);
    }

    #[test]
    fn test_merge_pair_length_ceiling() {
        assert_eq!(
            merge_pair(&p("10.0.0.0/29"), &p("10.0.0.8/29")),
            Some(p("10.0.0.0/28"))
        );
        assert_eq!(merge_pair(&p("10.0.0.0/30"), &p("10.0.0.4/30")), None);
    }

    #[test]
    fn test_find_contiguous_summaries_skips_claimed() {
        let prefixes = vec![
            p("10.0.0.0/24"),
            p("10.0.1.0/24"),
            p("172.16.0.0/16"),
            p("172.17.0.0/16"),
        ];
        let mut existing = SummaryMapping::new();
        existing.insert(p("10.0.0.0/23"), vec![p("10.0.0.0/24"), p("10.0.1.0/24")]);

        let pairs = find_contiguous_summaries(&prefixes, &existing);
        let summaries: Vec<Prefix> = pairs.summaries().collect();
        assert_eq!(summaries, vec![p("172.16.0.0/15")]);
        assert_eq!(
            pairs.get(&p("172.16.0.0/15")),
            Some(&[p("172.16.0.0/16"), p("172.17.0.0/16")][..])
        );
    }

    #[test]
    fn test_find_contiguous_summaries_too_few() {
        let pairs = find_contiguous_summaries(&[p("10.0.0.0/24")], &SummaryMapping::new());
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_duplicate_inputs_register_one_summary() {
        let prefixes = vec![p("11.0.0.0/16"), p("11.1.0.0/16"), p("11.1.0.0/16")];
        let pairs = find_contiguous_summaries(&prefixes, &SummaryMapping::new());
        assert_eq!(pairs.len(), 1);
        assert_eq!(
            pairs.get(&p("11.0.0.0/15")),
            Some(&[p("11.0.0.0/16"), p("11.1.0.0/16")][..])
        );
    }
}
