use std::collections::HashSet;

use crate::types::{ItemId, Itemset};

/// Candidate k-itemsets from the frequent (k-1)-itemsets: every union of a
/// previous-level itemset with a disjoint frequent single item, restricted by
/// downward closure to candidates whose (k-1)-subsets are all frequent.
pub fn candidate_itemsets(
    prev_level: &HashSet<Itemset>,
    single_items: &[ItemId],
) -> HashSet<Itemset> {
    let mut candidates = HashSet::new();

    for itemset in prev_level {
        for &item in single_items {
            if !itemset.contains(&item) {
                let mut candidate = itemset.clone();
                candidate.push(item);
                candidate.sort_unstable();
                candidates.insert(candidate);
            }
        }
    }

    candidates.retain(|candidate| all_subsets_frequent(candidate, prev_level));

    candidates
}

/// Downward closure: a candidate can only be frequent if every subset one item
/// smaller already is.
fn all_subsets_frequent(candidate: &[ItemId], prev_level: &HashSet<Itemset>) -> bool {
    let mut subset = Vec::with_capacity(candidate.len() - 1);

    for skip in 0..candidate.len() {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(position, _)| position != skip)
                .map(|(_, &item)| item),
        );

        if !prev_level.contains(subset.as_slice()) {
            return false;
        }
    }

    true
}
