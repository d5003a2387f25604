//! FP-Growth: prefix-tree construction and recursive conditional mining.

pub mod builder;
mod combinations;
pub mod mining;
pub mod tree;


pub use builder::{FrequencyFilter, build_conditional_fp_tree, build_fp_tree, build_tree, frequency_filter};
pub use mining::FpGrowth;
pub use tree::{FpNode, FpTree, NodeId, ROOT};
