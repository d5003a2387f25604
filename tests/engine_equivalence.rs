use priors_mine::{
    Algorithm, Apriori, FpGrowth, ItemsetMiner, MiningConfig, Pattern, Transaction, same_patterns,
};
use proptest::prelude::*;
use rstest::rstest;
use std::collections::{BTreeMap, BTreeSet};

fn transactions(rows: &[&[usize]]) -> Vec<Transaction> {
    rows.iter().map(|row| Transaction::new(row.iter().copied())).collect()
}

fn as_map(patterns: &[Pattern]) -> BTreeMap<Vec<usize>, usize> {
    patterns.iter().map(|p| (p.items.clone(), p.support)).collect()
}

fn brute_force_support(transactions: &[Transaction], itemset: &[usize]) -> usize {
    transactions.iter().filter(|tx| tx.contains_all(itemset)).count()
}

fn all_configs() -> Vec<MiningConfig> {
    let mut configs = Vec::new();
    for prune in [true, false] {
        for shortcut in [true, false] {
            configs.push(
                MiningConfig::new()
                    .with_prune_candidates(prune)
                    .with_single_path_shortcut(shortcut),
            );
        }
    }
    configs
}

#[rstest]
#[case::apriori(Algorithm::Apriori)]
#[case::fp_growth(Algorithm::FpGrowth)]
fn test_reference_example(#[case] algorithm: Algorithm) {
    let txs = transactions(&[&[1, 2, 3], &[1, 2], &[1, 3], &[2, 3]]);
    let patterns = algorithm.miner(MiningConfig::default()).mine(&txs, 2).unwrap();

    let expected: BTreeMap<Vec<usize>, usize> = [
        (vec![1], 3),
        (vec![2], 3),
        (vec![3], 3),
        (vec![1, 2], 2),
        (vec![1, 3], 2),
        (vec![2, 3], 2),
    ]
    .into_iter()
    .collect();
    assert_eq!(as_map(&patterns), expected);
    assert!(!patterns.iter().any(|p| p.items == vec![1, 2, 3]));
}

#[rstest]
#[case::apriori(Algorithm::Apriori)]
#[case::fp_growth(Algorithm::FpGrowth)]
fn test_unreachable_threshold(#[case] algorithm: Algorithm) {
    let txs = transactions(&[&[1, 2], &[2, 3], &[2, 4]]);
    let patterns = algorithm.miner(MiningConfig::default()).mine(&txs, 4).unwrap();
    assert!(patterns.is_empty());
}

#[rstest]
#[case::apriori(Algorithm::Apriori)]
#[case::fp_growth(Algorithm::FpGrowth)]
fn test_empty_input(#[case] algorithm: Algorithm) {
    let patterns = algorithm.miner(MiningConfig::default()).mine(&[], 1).unwrap();
    assert!(patterns.is_empty());
}

#[rstest]
#[case::apriori(Algorithm::Apriori, 1)]
#[case::apriori_threshold(Algorithm::Apriori, 7)]
#[case::fp_growth(Algorithm::FpGrowth, 1)]
#[case::fp_growth_threshold(Algorithm::FpGrowth, 7)]
fn test_uniform_repetition(#[case] algorithm: Algorithm, #[case] min_support_count: usize) {
    let txs: Vec<Transaction> = (0..7).map(|_| Transaction::from([2, 4, 6, 8, 10])).collect();
    let patterns = algorithm
        .miner(MiningConfig::default())
        .mine(&txs, min_support_count)
        .unwrap();

    // Every non-empty subset of five items.
    assert_eq!(patterns.len(), 31);
    assert!(patterns.iter().all(|p| p.support == 7));
    assert!(patterns.iter().any(|p| p.items == vec![2, 4, 6, 8, 10]));
}

#[test]
fn test_concrete_engines_share_mine() {
    let txs = transactions(&[&[1, 2, 3], &[1, 2], &[1, 3], &[2, 3]]);

    let apriori = Apriori::new().mine(&txs, 2).unwrap();
    let fp_growth = FpGrowth::new().mine(&txs, 2).unwrap();
    assert_eq!(apriori.len(), 6);
    assert!(same_patterns(&apriori, &fp_growth));

    assert!(Apriori::new().mine(&[], 1).unwrap().is_empty());
    assert!(FpGrowth::new().mine(&[], 1).unwrap().is_empty());
}

#[test]
fn test_duplicate_items_collapse() {
    let txs = vec![Transaction::new(vec![3, 3, 1]), Transaction::new(vec![1, 3, 1])];
    let patterns = FpGrowth::new().run(&txs, 2).unwrap();
    assert_eq!(as_map(&patterns)[&vec![1usize, 3]], 2);
    assert_eq!(as_map(&patterns)[&vec![3usize]], 2);
}

#[test]
fn test_configs_agree_on_dense_input() {
    let txs = transactions(&[
        &[1, 2, 3, 4, 5],
        &[1, 2, 3, 4],
        &[1, 2, 3],
        &[2, 3, 4, 5],
        &[1, 3, 5],
        &[2, 4],
        &[1, 2, 4, 5],
        &[3, 4, 5],
    ]);

    let reference = Apriori::new().run(&txs, 2).unwrap();
    for config in all_configs() {
        for algorithm in [Algorithm::Apriori, Algorithm::FpGrowth] {
            let patterns = algorithm.miner(config).mine(&txs, 2).unwrap();
            assert!(same_patterns(&reference, &patterns), "{algorithm:?} {config:?}");
        }
    }
}

fn transaction_strategy() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(
        prop::collection::btree_set(1usize..=10, 0..6)
            .prop_map(Transaction::new),
        0..30,
    )
}

proptest! {
    #[test]
    fn prop_engines_agree(txs in transaction_strategy(), min_support_count in 1usize..6) {
        for config in all_configs() {
            let apriori = Apriori::with_config(config).run(&txs, min_support_count).unwrap();
            let fp_growth = FpGrowth::with_config(config).run(&txs, min_support_count).unwrap();
            prop_assert_eq!(as_map(&apriori), as_map(&fp_growth));
            prop_assert_eq!(apriori.len(), fp_growth.len());
        }
    }

    #[test]
    fn prop_supports_are_exact(txs in transaction_strategy(), min_support_count in 1usize..6) {
        let patterns = FpGrowth::new().run(&txs, min_support_count).unwrap();
        for pattern in &patterns {
            prop_assert!(pattern.support >= min_support_count);
            prop_assert_eq!(pattern.support, brute_force_support(&txs, &pattern.items));
        }
    }

    #[test]
    fn prop_single_items_match_direct_count(txs in transaction_strategy(), min_support_count in 1usize..6) {
        let patterns = Apriori::new().run(&txs, min_support_count).unwrap();
        let found = as_map(&patterns);

        let items: BTreeSet<usize> = txs.iter().flat_map(|tx| tx.items().iter().copied()).collect();
        for item in items {
            let count = brute_force_support(&txs, &[item]);
            if count >= min_support_count {
                prop_assert_eq!(found.get(&vec![item]), Some(&count));
            } else {
                prop_assert!(!found.contains_key(&vec![item]));
            }
        }
    }

    #[test]
    fn prop_closure_monotonicity(txs in transaction_strategy(), min_support_count in 1usize..6) {
        let patterns = FpGrowth::new().run(&txs, min_support_count).unwrap();
        let found = as_map(&patterns);

        for pattern in patterns.iter().filter(|p| p.len() > 1) {
            for skip in 0..pattern.len() {
                let subset: Vec<usize> = pattern
                    .items
                    .iter()
                    .enumerate()
                    .filter(|&(idx, _)| idx != skip)
                    .map(|(_, &item)| item)
                    .collect();
                let subset_support = found.get(&subset).copied();
                prop_assert!(subset_support.is_some_and(|s| s >= pattern.support));
            }
        }
    }

    #[test]
    fn prop_idempotent(txs in transaction_strategy(), min_support_count in 1usize..6) {
        prop_assert_eq!(
            Apriori::new().run(&txs, min_support_count).unwrap(),
            Apriori::new().run(&txs, min_support_count).unwrap()
        );
        prop_assert_eq!(
            FpGrowth::new().run(&txs, min_support_count).unwrap(),
            FpGrowth::new().run(&txs, min_support_count).unwrap()
        );
    }
}
