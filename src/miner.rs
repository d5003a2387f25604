use crate::apriori::Apriori;
use crate::config::{MinSupport, MiningConfig};
use crate::error::MiningError;
use crate::fp::FpGrowth;
use crate::pattern::Pattern;
use crate::transaction::Transaction;
use std::collections::HashSet;
use tracing::warn;

/// Common surface of the frequent itemset engines.
pub trait ItemsetMiner {
    fn name(&self) -> &'static str;

    /// Every itemset contained in at least `min_support_count` transactions,
    /// with its support.
    fn mine(
        &self,
        transactions: &[Transaction],
        min_support_count: usize,
    ) -> Result<Vec<Pattern>, MiningError>;

    fn mine_with_support(
        &self,
        transactions: &[Transaction],
        min_support: MinSupport,
    ) -> Result<Vec<Pattern>, MiningError> {
        let count = min_support.to_count(transactions.len())?;
        self.mine(transactions, count)
    }
}

impl ItemsetMiner for Apriori {
    fn name(&self) -> &'static str {
        "apriori"
    }

    fn mine(
        &self,
        transactions: &[Transaction],
        min_support_count: usize,
    ) -> Result<Vec<Pattern>, MiningError> {
        self.run(transactions, min_support_count)
    }
}

impl ItemsetMiner for FpGrowth {
    fn name(&self) -> &'static str {
        "fp-growth"
    }

    fn mine(
        &self,
        transactions: &[Transaction],
        min_support_count: usize,
    ) -> Result<Vec<Pattern>, MiningError> {
        self.run(transactions, min_support_count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Apriori,
    FpGrowth,
}

impl Algorithm {
    pub fn miner(self, config: MiningConfig) -> Box<dyn ItemsetMiner + Send + Sync> {
        match self {
            Algorithm::Apriori => Box::new(Apriori::with_config(config)),
            Algorithm::FpGrowth => Box::new(FpGrowth::with_config(config)),
        }
    }
}

/// Results of both engines on the same input.
#[derive(Debug, Clone)]
pub struct EngineResults {
    pub apriori: Vec<Pattern>,
    pub fp_growth: Vec<Pattern>,
}

impl EngineResults {
    pub fn agree(&self) -> bool {
        same_patterns(&self.apriori, &self.fp_growth)
    }

    /// Patterns reported by exactly one engine, in ascending order.
    pub fn differences(&self) -> Vec<&Pattern> {
        let apriori: HashSet<&Pattern> = self.apriori.iter().collect();
        let fp_growth: HashSet<&Pattern> = self.fp_growth.iter().collect();
        let mut differing: Vec<&Pattern> = apriori.symmetric_difference(&fp_growth).copied().collect();
        differing.sort_unstable();
        differing
    }

    /// `Ok` when both engines found the same pattern set.
    pub fn check(&self) -> Result<(), MiningError> {
        let differing = self.differences();
        let Some(&first) = differing.first() else {
            return Ok(());
        };

        warn!(
            apriori = self.apriori.len(),
            fp_growth = self.fp_growth.len(),
            differing = differing.len(),
            first = ?first,
            "engines disagree"
        );
        Err(MiningError::EnginesDisagree {
            apriori: self.apriori.len(),
            fp_growth: self.fp_growth.len(),
            differing: differing.len(),
            first: first.clone(),
        })
    }
}

/// Run Apriori and FP-Growth side by side on the rayon pool.
pub fn mine_both(
    transactions: &[Transaction],
    min_support_count: usize,
    config: MiningConfig,
) -> Result<EngineResults, MiningError> {
    let (apriori, fp_growth) = rayon::join(
        || Apriori::with_config(config).run(transactions, min_support_count),
        || FpGrowth::with_config(config).run(transactions, min_support_count),
    );
    Ok(EngineResults {
        apriori: apriori?,
        fp_growth: fp_growth?,
    })
}

/// Run both engines and return the FP-Growth patterns if the two agree.
pub fn mine_checked(
    transactions: &[Transaction],
    min_support_count: usize,
    config: MiningConfig,
) -> Result<Vec<Pattern>, MiningError> {
    let results = mine_both(transactions, min_support_count, config)?;
    results.check()?;
    Ok(results.fp_growth)
}

/// Set equality of two pattern lists, ignoring emission order.
pub fn same_patterns(left: &[Pattern], right: &[Pattern]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let left: HashSet<&Pattern> = left.iter().collect();
    right.iter().all(|pattern| left.contains(pattern))
}
