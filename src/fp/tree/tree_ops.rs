use std::collections::HashMap;

use super::tree::{FPNode, FPTree};
use crate::types::ItemId;

impl FPTree {
    /// Inserts one transaction, adding `multiplicity` to the count of every
    /// node along its path. `items` must already be filtered to
    /// frequency-qualifying items and sorted by the global descending-frequency
    /// order; the builder owns that precondition.
    pub fn insert_transaction(&mut self, items: &[ItemId], multiplicity: usize) {
        let mut current_index = self.root_index;

        for &item in items {
            if let Some(&child_index) = self.nodes[current_index].children().get(&item) {
                if let FPNode::Item { count, .. } = &mut self.nodes[child_index] {
                    *count += multiplicity;
                }
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes.push(FPNode::Item {
                    item,
                    count: multiplicity,
                    parent: current_index,
                    children: HashMap::new(),
                });
                self.nodes[current_index].children_mut().insert(item, new_index);
                self.header_table.entry(item).or_default().push(new_index);
                current_index = new_index;
            }
        }
    }

    /// Ancestor items from the node's parent up to (excluding) the root,
    /// returned nearest-the-root first.
    pub fn path_to_root(&self, node_index: usize) -> Vec<ItemId> {
        let mut path = Vec::new();

        let mut current = match &self.nodes[node_index] {
            FPNode::Item { parent, .. } => *parent,
            FPNode::Root { .. } => return path,
        };

        while let FPNode::Item { item, parent, .. } = &self.nodes[current] {
            path.push(*item);
            current = *parent;
        }

        path.reverse();
        path
    }

    /// Conditional pattern base for `item`: one (ancestor path, count) pair per
    /// node carrying the item. Nodes hanging directly off the root contribute
    /// no path and are skipped.
    pub fn conditional_pattern_base(&self, item: ItemId) -> Vec<(Vec<ItemId>, usize)> {
        self.header_table.get(&item).map_or(Vec::new(), |indices| {
            indices
                .iter()
                .filter_map(|&idx| match &self.nodes[idx] {
                    FPNode::Item { count, .. } => {
                        let path = self.path_to_root(idx);
                        (!path.is_empty()).then_some((path, *count))
                    }
                    FPNode::Root { .. } => None,
                })
                .collect()
        })
    }
}
