// FP-Tree data structures and operations.

mod tree;
mod tree_ops;

pub use tree::{FPNode, FPTree};
