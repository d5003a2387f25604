use crate::pattern::Pattern;
use std::cmp::Reverse;

/// Patterns with at least `min_len` items, highest support first (ties by
/// itemset), truncated to `limit`.
pub fn top_patterns(patterns: &[Pattern], min_len: usize, limit: usize) -> Vec<&Pattern> {
    let mut selected: Vec<&Pattern> = patterns.iter().filter(|p| p.len() >= min_len).collect();
    selected.sort_by(|a, b| {
        Reverse(a.support)
            .cmp(&Reverse(b.support))
            .then_with(|| a.items.cmp(&b.items))
    });
    selected.truncate(limit);
    selected
}
