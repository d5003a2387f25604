use ndarray::ArrayView2;
use std::ops::Deref;

/// Item identifier. `0` is reserved for empty or skipped input fields.
pub type ItemId = usize;

/// A set of items, stored ascending and without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Transaction {
    items: Vec<ItemId>,
}

impl Transaction {
    pub fn new(items: impl IntoIterator<Item = ItemId>) -> Self {
        let mut items: Vec<ItemId> = items.into_iter().filter(|&item| item != 0).collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// True when every item of `itemset` (ascending) is in this transaction.
    pub fn contains_all(&self, itemset: &[ItemId]) -> bool {
        is_sorted_subset(itemset, &self.items)
    }
}

impl Deref for Transaction {
    type Target = [ItemId];

    fn deref(&self) -> &[ItemId] {
        &self.items
    }
}

impl AsRef<[ItemId]> for Transaction {
    fn as_ref(&self) -> &[ItemId] {
        &self.items
    }
}

impl From<Vec<ItemId>> for Transaction {
    fn from(items: Vec<ItemId>) -> Self {
        Self::new(items)
    }
}

impl<const N: usize> From<[ItemId; N]> for Transaction {
    fn from(items: [ItemId; N]) -> Self {
        Self::new(items)
    }
}

impl FromIterator<ItemId> for Transaction {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Merge-based subset test over two ascending slices.
pub fn is_sorted_subset(needle: &[ItemId], haystack: &[ItemId]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }

    let mut rest = haystack.iter();
    'outer: for &wanted in needle {
        for &item in rest.by_ref() {
            if item == wanted {
                continue 'outer;
            }
            if item > wanted {
                return false;
            }
        }
        return false;
    }
    true
}

/// Convert a binary transaction matrix (rows are transactions, columns are
/// items) into transactions. Column `j` becomes item `j + 1`.
pub fn transactions_from_matrix(matrix: ArrayView2<i32>) -> Vec<Transaction> {
    matrix
        .rows()
        .into_iter()
        .map(|row| {
            let items = row
                .iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(|(col, _)| col + 1)
                .collect();
            Transaction { items }
        })
        .collect()
}
