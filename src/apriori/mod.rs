//! Level-wise frequent itemset search.

mod candidates;

pub use candidates::{Level, count_support, frequent_singles, generate_candidates};

use crate::config::MiningConfig;
use crate::error::MiningError;
use crate::pattern::{Pattern, PatternCollector};
use crate::transaction::Transaction;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct Apriori {
    config: MiningConfig,
}

impl Apriori {
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

        let mut collector = PatternCollector::new();
        let mut level = frequent_singles(transactions, min_support_count);
        let mut k = 1;

        while !level.is_empty() {
            debug!(k, frequent = level.len(), "apriori level");
            for (itemset, &support) in &level {
                collector.push_sorted(itemset, support);
            }

            k += 1;
            let candidates = generate_candidates(&level, self.config.prune_candidates);
            debug!(k, candidates = candidates.len(), "apriori candidates");
            if candidates.is_empty() {
                break;
            }
            level = count_support(transactions, candidates, min_support_count);
        }

        info!(
            transactions = transactions.len(),
            min_support_count,
            patterns = collector.len(),
            "apriori finished"
        );
        Ok(collector.into_patterns())
    }
}
