use std::collections::HashMap;

use super::tree::FPTree;
use crate::types::{ItemCounts, ItemId, Transaction};

/// Weighted item frequencies: each occurrence contributes its transaction's
/// multiplicity. `transactions` and `multiplicities` are parallel slices.
pub fn weighted_item_counts(transactions: &[Transaction], multiplicities: &[usize]) -> ItemCounts {
    let mut counts = ItemCounts::new();

    for (transaction, &multiplicity) in transactions.iter().zip(multiplicities) {
        for &item in transaction {
            *counts.entry(item).or_insert(0) += multiplicity;
        }
    }

    counts
}

/// Items meeting the threshold, most frequent first. Ties break toward the
/// smaller item id so that tree shape and recursion order are reproducible;
/// the tie-break never affects which itemsets are mined.
pub fn frequency_order(counts: &ItemCounts, min_count: usize) -> Vec<ItemId> {
    let mut frequent: Vec<(ItemId, usize)> = counts
        .iter()
        .filter(|&(_, &count)| count >= min_count)
        .map(|(&item, &count)| (item, count))
        .collect();

    frequent.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    frequent.into_iter().map(|(item, _)| item).collect()
}

/// Builds the prefix tree: each transaction is stripped of non-qualifying
/// items, sorted by the global frequency order, and inserted with its
/// multiplicity. Transactions left empty after filtering are not inserted.
pub fn build_fp_tree(
    transactions: &[Transaction],
    multiplicities: &[usize],
    order: &[ItemId],
) -> FPTree {
    let rank: HashMap<ItemId, usize> = order
        .iter()
        .enumerate()
        .map(|(position, &item)| (item, position))
        .collect();

    let mut fp_tree = FPTree::new();

    for (transaction, &multiplicity) in transactions.iter().zip(multiplicities) {
        let mut items: Vec<ItemId> = transaction
            .iter()
            .copied()
            .filter(|item| rank.contains_key(item))
            .collect();
        items.sort_unstable_by_key(|item| rank[item]);

        if !items.is_empty() {
            fp_tree.insert_transaction(&items, multiplicity);
        }
    }

    fp_tree
}
