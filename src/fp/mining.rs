use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::combinations::emit_path_combinations;
use super::tree::FpTree;
use crate::config::MiningConfig;
use crate::error::MiningError;
use crate::pattern::{Pattern, PatternCollector};
use crate::transaction::{ItemId, Transaction};
use tracing::{debug, info, trace};

/// Pattern growth over FP-trees.
///
/// Header-table items are visited in ascending item id order, so the output
/// order is reproducible for a given input.
#[derive(Debug, Clone, Default)]
pub struct FpGrowth {
    config: MiningConfig,
}

impl FpGrowth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MiningConfig) -> Self {
        Self { config }
    }

    pub fn run(
        &self,
        transactions: &[Transaction],
        min_support_count: usize,
    ) -> Result<Vec<Pattern>, MiningError> {
        if min_support_count == 0 {
            return Err(MiningError::ZeroMinSupport);
        }

        let tree = build_fp_tree(transactions, min_support_count);
        debug!(
            nodes = tree.node_count(),
            items = tree.header_table().len(),
            "built fp-tree"
        );

        let mut collector = PatternCollector::new();
        self.mine_tree(&tree, &mut Vec::new(), min_support_count, &mut collector);

        info!(
            transactions = transactions.len(),
            min_support_count,
            patterns = collector.len(),
            "fp-growth finished"
        );
        Ok(collector.into_patterns())
    }

    /// Append every frequent extension of `suffix` found in `tree` to `out`.
    ///
    /// `suffix` is restored to its original contents before returning.
    pub(crate) fn mine_tree(
        &self,
        tree: &FpTree,
        suffix: &mut Vec<ItemId>,
        min_count: usize,
        out: &mut PatternCollector,
    ) {
        if self.config.single_path_shortcut {
            if let Some(path) = tree.single_path() {
                emit_path_combinations(&path, suffix, min_count, out);
                return;
            }
        }

        for item in tree.items() {
            let support = tree.item_support(item);
            if support < min_count {
                continue;
            }

            suffix.push(item);
            out.push(suffix.clone(), support);

            let prefix_paths = tree.prefix_paths(item);
            if !prefix_paths.is_empty() {
                let conditional = build_conditional_fp_tree(&prefix_paths, min_count);
                trace!(
                    depth = suffix.len(),
                    nodes = conditional.node_count(),
                    "conditional fp-tree"
                );
                if !conditional.is_empty() {
                    self.mine_tree(&conditional, suffix, min_count, out);
                }
            }

            suffix.pop();
        }
    }
}
