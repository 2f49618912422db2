use rayon::prelude::*;

use super::builder::{build_fp_tree, frequency_order, weighted_item_counts};
use super::tree::FPTree;
use crate::types::{ItemId, Itemset, Transaction};

/// FP-Growth over a weighted transaction multiset. Returns every itemset whose
/// weighted support reaches `min_count`, as a flat unordered collection of
/// non-empty itemsets in canonical form.
///
/// `multiplicities`, when given, must run parallel to `transactions`; `None`
/// means every transaction counts once.
pub fn fp_growth_algorithm(
    transactions: &[Transaction],
    multiplicities: Option<&[usize]>,
    min_count: usize,
) -> Result<Vec<Itemset>, String> {
    if let Some(multiplicities) = multiplicities {
        if multiplicities.len() != transactions.len() {
            return Err(format!(
                "got {} multiplicities for {} transactions",
                multiplicities.len(),
                transactions.len()
            ));
        }
    }

    let ones;
    let multiplicities = match multiplicities {
        Some(multiplicities) => multiplicities,
        None => {
            ones = vec![1; transactions.len()];
            &ones
        }
    };

    let counts = weighted_item_counts(transactions, multiplicities);
    let order = frequency_order(&counts, min_count);

    if transactions.is_empty() || order.is_empty() {
        return Ok(Vec::new());
    }

    let fp_tree = build_fp_tree(transactions, multiplicities, &order);

    // Once each item's pattern base is captured from the shared tree, the
    // per-item sub-problems are independent and can fan out. The recursion
    // below the top level stays sequential.
    let parallel_results: Vec<Vec<Itemset>> = order
        .par_iter()
        .rev()
        .map(|&item| mine_item(&fp_tree, item, min_count))
        .collect();

    let mut itemsets = Vec::new();
    for item_results in parallel_results {
        itemsets.extend(item_results);
    }

    Ok(itemsets)
}

/// Frequent itemsets attributed to `item`: the singleton {item} plus `item`
/// unioned into every itemset mined from its conditional pattern base.
fn mine_item(fp_tree: &FPTree, item: ItemId, min_count: usize) -> Vec<Itemset> {
    let pattern_base = fp_tree.conditional_pattern_base(item);

    let mut conditional_transactions = Vec::with_capacity(pattern_base.len());
    let mut conditional_multiplicities = Vec::with_capacity(pattern_base.len());
    for (path, count) in pattern_base {
        conditional_transactions.push(path);
        conditional_multiplicities.push(count);
    }

    let mut itemsets = vec![vec![item]];

    for sub_itemset in mine(
        &conditional_transactions,
        &conditional_multiplicities,
        min_count,
    ) {
        let mut itemset = sub_itemset;
        itemset.push(item);
        itemset.sort_unstable();
        itemsets.push(itemset);
    }

    itemsets
}

/// One recursive mining pass: count, order, build the conditional tree, then
/// work through its items from least to most frequent. That direction is
/// required: each sub-problem must only see items still frequent at the
/// coarser granularity above it.
fn mine(transactions: &[Transaction], multiplicities: &[usize], min_count: usize) -> Vec<Itemset> {
    let counts = weighted_item_counts(transactions, multiplicities);
    let order = frequency_order(&counts, min_count);

    if transactions.is_empty() || order.is_empty() {
        return Vec::new();
    }

    let fp_tree = build_fp_tree(transactions, multiplicities, &order);

    let mut itemsets = Vec::new();
    for &item in order.iter().rev() {
        itemsets.extend(mine_item(&fp_tree, item, min_count));
    }

    itemsets
}
