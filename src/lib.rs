//! Frequent itemset mining.
//!
//! Two independent engines compute the same result: every itemset contained
//! in at least `min_support_count` transactions, paired with its support.
//!
//! - [`Apriori`]: level-wise candidate generation and support counting.
//! - [`FpGrowth`]: prefix-tree compression and recursive conditional mining.
//!
//! ```
//! use priors_mine::{Apriori, FpGrowth, Transaction, same_patterns};
//!
//! let transactions: Vec<Transaction> = vec![
//!     [1, 2, 3].into(),
//!     [1, 2].into(),
//!     [1, 3].into(),
//!     [2, 3].into(),
//! ];
//!
//! let apriori = Apriori::new().run(&transactions, 2).unwrap();
//! let fp_growth = FpGrowth::new().run(&transactions, 2).unwrap();
//! assert_eq!(fp_growth.len(), 6);
//! assert!(same_patterns(&apriori, &fp_growth));
//! ```

pub mod apriori;
pub mod config;
pub mod error;
pub mod fp;
pub mod miner;
pub mod pattern;
pub mod report;
pub mod transaction;

#[cfg(feature = "python")]
mod python;

pub use apriori::Apriori;
pub use config::{MinSupport, MiningConfig};
pub use error::MiningError;
pub use fp::FpGrowth;
pub use miner::{Algorithm, EngineResults, ItemsetMiner, mine_both, mine_checked, same_patterns};
pub use pattern::{Pattern, PatternCollector, PatternRef};
pub use report::top_patterns;
pub use transaction::{ItemId, Transaction, transactions_from_matrix};
