use std::collections::{HashMap, HashSet};

use super::candidates::candidate_itemsets;
use crate::storage::FrequentLevel;
use crate::types::{ItemId, Itemset, Transaction};

/// Level-wise Apriori search. The returned sequence holds, at index k, all
/// frequent itemsets of exact size k; index 0 is the empty sentinel level.
/// The search stops at the first empty level, which is not part of the output.
pub fn apriori_algorithm(transactions: &[Transaction], min_count: usize) -> Vec<FrequentLevel> {
    // Working copies are sorted once so every later subset test is a single
    // merge walk.
    let transactions: Vec<Transaction> = transactions
        .iter()
        .map(|transaction| {
            let mut sorted = transaction.clone();
            sorted.sort_unstable();
            sorted
        })
        .collect();

    let mut levels = vec![FrequentLevel::new(0)];

    let mut current = frequent_single_itemsets(&transactions, min_count);
    let single_items: Vec<ItemId> = current.iter().map(|itemset| itemset[0]).collect();

    let mut size = 1;
    while !current.is_empty() {
        levels.push(collect_level(size, &current));
        size += 1;

        let candidates = candidate_itemsets(&current, &single_items);
        current = frequent_candidates(candidates, &transactions, min_count);
    }

    levels
}

/// L1: every item occurring in at least `min_count` transactions, as a
/// singleton itemset.
fn frequent_single_itemsets(
    transactions: &[Transaction],
    min_count: usize,
) -> HashSet<Itemset> {
    let mut counts: HashMap<ItemId, usize> = HashMap::new();

    for transaction in transactions {
        for &item in transaction {
            *counts.entry(item).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .filter(|&(_, count)| count >= min_count)
        .map(|(item, _)| vec![item])
        .collect()
}

/// Counts each candidate's support by scanning every transaction for subset
/// containment, then keeps the candidates meeting the threshold.
fn frequent_candidates(
    candidates: HashSet<Itemset>,
    transactions: &[Transaction],
    min_count: usize,
) -> HashSet<Itemset> {
    let mut counts: HashMap<Itemset, usize> =
        candidates.into_iter().map(|candidate| (candidate, 0)).collect();

    for transaction in transactions {
        for (candidate, count) in counts.iter_mut() {
            if is_subset(candidate, transaction) {
                *count += 1;
            }
        }
    }

    counts
        .into_iter()
        .filter(|&(_, count)| count >= min_count)
        .map(|(candidate, _)| candidate)
        .collect()
}

/// Subset containment for two ascending-sorted slices.
pub(crate) fn is_subset(needle: &[ItemId], haystack: &[ItemId]) -> bool {
    let mut remaining = haystack.iter();
    needle.iter().all(|item| remaining.any(|other| other == item))
}

fn collect_level(size: usize, itemsets: &HashSet<Itemset>) -> FrequentLevel {
    let mut level = FrequentLevel::new(size);
    for itemset in itemsets {
        level.add_itemset(itemset.clone());
    }
    level
}
