use std::collections::HashMap;

pub type ItemId = usize;

/// An itemset in canonical form: sorted ascending, no duplicates. Set equality
/// therefore coincides with `Vec` equality.
pub type Itemset = Vec<ItemId>;

pub type Transaction = Vec<ItemId>;

/// Accumulated (weighted) occurrence count per item.
pub type ItemCounts = HashMap<ItemId, usize>;
