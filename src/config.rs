use crate::error::MiningError;

/// Minimum support threshold, either absolute or relative to the number of
/// transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    Count(usize),
    Fraction(f64),
}

impl MinSupport {
    /// Resolve to an absolute count. Fractions round up and never drop below 1.
    pub fn to_count(self, num_transactions: usize) -> Result<usize, MiningError> {
        match self {
            MinSupport::Count(0) => Err(MiningError::ZeroMinSupport),
            MinSupport::Count(count) => Ok(count),
            MinSupport::Fraction(fraction) => {
                if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
                    return Err(MiningError::InvalidSupportFraction(fraction));
                }
                let count = (fraction * num_transactions as f64).ceil() as usize;
                Ok(count.max(1))
            }
        }
    }
}

impl From<usize> for MinSupport {
    fn from(count: usize) -> Self {
        MinSupport::Count(count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiningConfig {
    /// Drop Apriori candidates that have an infrequent (k-1)-subset before
    /// counting them.
    pub prune_candidates: bool,
    /// Enumerate single-path FP-trees directly instead of recursing.
    pub single_path_shortcut: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            prune_candidates: true,
            single_path_shortcut: true,
        }
    }
}

impl MiningConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prune_candidates(mut self, enabled: bool) -> Self {
        self.prune_candidates = enabled;
        self
    }

    pub fn with_single_path_shortcut(mut self, enabled: bool) -> Self {
        self.single_path_shortcut = enabled;
        self
    }
}
