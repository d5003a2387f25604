use super::tree::FpTree;
use crate::transaction::{ItemId, Transaction};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Frequent items of one tree and their (weighted) counts.
pub type FrequencyFilter = BTreeMap<ItemId, usize>;

/// Count every item across a weighted batch and keep those reaching `min_count`.
pub fn frequency_filter<'a, I>(batch: I, min_count: usize) -> FrequencyFilter
where
    I: IntoIterator<Item = (&'a [ItemId], usize)>,
{
    let mut counts = FrequencyFilter::new();
    for (items, weight) in batch {
        for &item in items {
            *counts.entry(item).or_insert(0) += weight;
        }
    }
    counts.retain(|_, count| *count >= min_count);
    counts
}

/// Drop items missing from `filter` and order the rest by descending count,
/// ties broken by ascending item id.
pub fn canonical_order(items: &[ItemId], filter: &FrequencyFilter) -> Vec<ItemId> {
    let mut ranked: Vec<(ItemId, usize)> = items
        .iter()
        .filter_map(|&item| filter.get(&item).map(|&count| (item, count)))
        .collect();
    ranked.sort_unstable_by_key(|&(item, count)| (Reverse(count), item));
    ranked.into_iter().map(|(item, _)| item).collect()
}

pub fn build_tree<'a, I>(batch: I, filter: &FrequencyFilter) -> FpTree
where
    I: IntoIterator<Item = (&'a [ItemId], usize)>,
{
    let mut tree = FpTree::new();
    for (items, weight) in batch {
        let path = canonical_order(items, filter);
        if !path.is_empty() {
            tree.insert_path(&path, weight);
        }
    }
    tree
}

pub fn build_fp_tree(transactions: &[Transaction], min_count: usize) -> FpTree {
    let filter = frequency_filter(transactions.iter().map(|tx| (tx.items(), 1)), min_count);
    build_tree(transactions.iter().map(|tx| (tx.items(), 1)), &filter)
}

pub fn build_conditional_fp_tree(prefix_paths: &[(Vec<ItemId>, usize)], min_count: usize) -> FpTree {
    let batch = || prefix_paths.iter().map(|(path, count)| (path.as_slice(), *count));
    let filter = frequency_filter(batch(), min_count);
    build_tree(batch(), &filter)
}
