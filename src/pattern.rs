use crate::transaction::ItemId;

/// A frequent itemset and the number of transactions containing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    /// Ascending, no duplicates.
    pub items: Vec<ItemId>,
    pub support: usize,
}

impl Pattern {
    pub fn new(mut items: Vec<ItemId>, support: usize) -> Self {
        items.sort_unstable();
        items.dedup();
        Self { items, support }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Borrowed view of one collected pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRef<'a> {
    pub items: &'a [ItemId],
    pub support: usize,
}

/// Append-only pattern output shared by both engines. Itemsets live in one
/// flat buffer addressed by `(start, len)` offsets.
#[derive(Debug, Clone, Default)]
pub struct PatternCollector {
    items: Vec<ItemId>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

impl PatternCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonicalizes `items` to ascending order before storing.
    pub fn push(&mut self, mut items: Vec<ItemId>, support: usize) -> usize {
        items.sort_unstable();
        items.dedup();
        self.push_sorted(&items, support)
    }

    pub(crate) fn push_sorted(&mut self, items: &[ItemId], support: usize) -> usize {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get(&self, idx: usize) -> Option<PatternRef<'_>> {
        let &(start, len) = self.offsets.get(idx)?;
        Some(PatternRef {
            items: &self.items[start..start + len],
            support: self.supports[idx],
        })
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PatternRef<'_>> {
        self.offsets
            .iter()
            .zip(&self.supports)
            .map(|(&(start, len), &support)| PatternRef {
                items: &self.items[start..start + len],
                support,
            })
    }

    pub fn into_patterns(self) -> Vec<Pattern> {
        self.offsets
            .iter()
            .zip(&self.supports)
            .map(|(&(start, len), &support)| Pattern {
                items: self.items[start..start + len].to_vec(),
                support,
            })
            .collect()
    }
}
