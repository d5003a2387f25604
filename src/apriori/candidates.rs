use crate::transaction::{ItemId, Transaction};
use std::collections::{BTreeMap, BTreeSet};

/// Frequent itemsets of one size, keyed by their ascending item sequence.
pub type Level = BTreeMap<Vec<ItemId>, usize>;

pub fn frequent_singles(transactions: &[Transaction], min_count: usize) -> Level {
    let mut counts: BTreeMap<ItemId, usize> = BTreeMap::new();
    for transaction in transactions {
        for &item in transaction.items() {
            *counts.entry(item).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .filter(|&(_, count)| count >= min_count)
        .map(|(item, count)| (vec![item], count))
        .collect()
}

/// Join (k-1)-itemsets sharing their first k-2 items into k-candidates.
///
/// Keys of `prev` are ascending sequences in lexicographic order, so every
/// pair with a common prefix is contiguous and the joined candidate stays
/// ascending. Candidates are collected into a set, which removes any duplicate
/// produced by different pairs.
pub fn generate_candidates(prev: &Level, prune: bool) -> BTreeSet<Vec<ItemId>> {
    let itemsets: Vec<&Vec<ItemId>> = prev.keys().collect();
    let mut candidates = BTreeSet::new();
    let mut scratch = Vec::new();

    for (i, left) in itemsets.iter().enumerate() {
        let prefix_len = left.len() - 1;

        for right in &itemsets[i + 1..] {
            if left[..prefix_len] != right[..prefix_len] {
                break;
            }

            let mut candidate = Vec::with_capacity(left.len() + 1);
            candidate.extend_from_slice(left);
            candidate.push(right[prefix_len]);

            if prune && has_infrequent_subset(&candidate, prev, &mut scratch) {
                continue;
            }
            candidates.insert(candidate);
        }
    }

    candidates
}

/// True if dropping any single item from `candidate` yields an itemset
/// missing from `prev`.
pub fn has_infrequent_subset(candidate: &[ItemId], prev: &Level, scratch: &mut Vec<ItemId>) -> bool {
    (0..candidate.len()).any(|skip| {
        scratch.clear();
        scratch.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(idx, _)| idx != skip)
                .map(|(_, &item)| item),
        );
        !prev.contains_key(scratch.as_slice())
    })
}

pub fn count_support(
    transactions: &[Transaction],
    candidates: BTreeSet<Vec<ItemId>>,
    min_count: usize,
) -> Level {
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let support = transactions
                .iter()
                .filter(|transaction| transaction.contains_all(&candidate))
                .count();
            (support >= min_count).then_some((candidate, support))
        })
        .collect()
}
