use crate::pattern::Pattern;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MiningError {
    #[error("minimum support count must be at least 1")]
    ZeroMinSupport,

    #[error("minimum support fraction must be in (0, 1], got {0}")]
    InvalidSupportFraction(f64),

    #[error(
        "engines disagree on {differing} patterns (apriori found {apriori}, fp-growth found {fp_growth}), first: {first:?}"
    )]
    EnginesDisagree {
        apriori: usize,
        fp_growth: usize,
        /// Size of the symmetric difference.
        differing: usize,
        /// Smallest pattern found by only one engine.
        first: Pattern,
    },
}
