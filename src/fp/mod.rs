pub mod builder;
pub mod mining;
pub mod tree;

pub use mining::fp_growth_algorithm;
pub use tree::{FPNode, FPTree};
