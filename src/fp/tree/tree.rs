use std::collections::HashMap;

use crate::types::ItemId;

/// A node of the prefix tree, stored in an index-addressed arena. The root
/// carries neither item nor count; item nodes hold their accumulated count and
/// the arena index of their parent as a plain back-reference.
#[derive(Debug, Clone)]
pub enum FPNode {
    Root {
        children: HashMap<ItemId, usize>,
    },
    Item {
        item: ItemId,
        count: usize,
        parent: usize,
        children: HashMap<ItemId, usize>,
    },
}

impl FPNode {
    pub fn children(&self) -> &HashMap<ItemId, usize> {
        match self {
            FPNode::Root { children } | FPNode::Item { children, .. } => children,
        }
    }

    pub fn children_mut(&mut self) -> &mut HashMap<ItemId, usize> {
        match self {
            FPNode::Root { children } | FPNode::Item { children, .. } => children,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    pub header_table: HashMap<ItemId, Vec<usize>>,
    pub root_index: usize,
}

impl FPTree {
    pub fn new() -> Self {
        let nodes = vec![FPNode::Root {
            children: HashMap::new(),
        }];

        Self {
            nodes,
            header_table: HashMap::new(),
            root_index: 0,
        }
    }
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}
