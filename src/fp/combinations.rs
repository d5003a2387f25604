use crate::pattern::PatternCollector;
use crate::transaction::ItemId;

/// Emit `suffix` extended by every non-empty combination of `path` nodes.
///
/// `path` runs from the root downwards, so counts never increase along it and
/// the support of a combination is the count of its deepest node.
pub fn emit_path_combinations(
    path: &[(ItemId, usize)],
    suffix: &[ItemId],
    min_count: usize,
    out: &mut PatternCollector,
) {
    let usable = path.partition_point(|&(_, count)| count >= min_count);
    let path = &path[..usable];

    for k in 1..=path.len() {
        let mut callback = |combination: &[usize]| {
            let mut pattern = Vec::with_capacity(suffix.len() + combination.len());
            pattern.extend_from_slice(suffix);
            pattern.extend(combination.iter().map(|&idx| path[idx].0));
            let deepest = combination[combination.len() - 1];
            out.push(pattern, path[deepest].1);
        };
        generate_combinations_recursive(path.len(), k, 0, &mut Vec::with_capacity(k), &mut callback);
    }
}

/// Calls `callback` with every ascending `k`-combination of `0..n`.
pub fn generate_combinations_recursive<F>(
    n: usize,
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    for i in start..n {
        current.push(i);
        generate_combinations_recursive(n, k, i + 1, current, callback);
        current.pop();
    }
}
