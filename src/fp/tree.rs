use crate::transaction::ItemId;
use std::collections::BTreeMap;

/// Index of a node in its tree's arena.
pub type NodeId = usize;

/// The sentinel root is always the first node of the arena.
pub const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
pub struct FpNode {
    /// `None` only for the root.
    pub item: Option<ItemId>,
    pub count: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Next node carrying the same item, threaded from the header table.
    pub next: Option<NodeId>,
}

impl FpNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: Vec::new(),
            next: None,
        }
    }

    pub fn new_item(item: ItemId, count: usize, parent: NodeId, next: Option<NodeId>) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: Vec::new(),
            next,
        }
    }
}

/// Prefix tree stored as an arena. Parent, child and chain links are indices
/// into `nodes`, so the whole tree is released with the arena.
#[derive(Debug, Clone)]
pub struct FpTree {
    nodes: Vec<FpNode>,
    header_table: BTreeMap<ItemId, NodeId>,
}

impl Default for FpTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FpTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FpNode::new_root()],
            header_table: BTreeMap::new(),
        }
    }

    pub fn node(&self, id: NodeId) -> &FpNode {
        &self.nodes[id]
    }

    /// Number of item-carrying nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// True when no item was ever inserted.
    pub fn is_empty(&self) -> bool {
        self.header_table.is_empty()
    }

    /// Chain head for every item, ascending by item id.
    pub fn header_table(&self) -> &BTreeMap<ItemId, NodeId> {
        &self.header_table
    }

    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.header_table.keys().copied()
    }

    /// Insert an already ordered path, adding `count` to every node on it.
    pub fn insert_path(&mut self, path: &[ItemId], count: usize) {
        let mut current = ROOT;

        for &item in path {
            let existing = self.nodes[current]
                .children
                .iter()
                .copied()
                .find(|&child| self.nodes[child].item == Some(item));

            current = match existing {
                Some(child) => {
                    self.nodes[child].count += count;
                    child
                }
                None => {
                    let new_id = self.nodes.len();
                    let previous_head = self.header_table.insert(item, new_id);
                    self.nodes
                        .push(FpNode::new_item(item, count, current, previous_head));
                    self.nodes[current].children.push(new_id);
                    new_id
                }
            };
        }
    }

    /// Nodes carrying `item`, most recently created first.
    pub fn chain(&self, item: ItemId) -> Chain<'_> {
        Chain {
            tree: self,
            next: self.header_table.get(&item).copied(),
        }
    }

    pub fn item_support(&self, item: ItemId) -> usize {
        self.chain(item).map(|id| self.nodes[id].count).sum()
    }

    /// Items on the path from the root down to `id`, both excluded, ordered
    /// root first.
    pub fn ancestors(&self, id: NodeId) -> Vec<ItemId> {
        let mut path = Vec::new();
        let mut current = self.nodes[id].parent;

        while let Some(idx) = current {
            if let Some(item) = self.nodes[idx].item {
                path.push(item);
            }
            current = self.nodes[idx].parent;
        }

        path.reverse();
        path
    }

    /// Conditional pattern base of `item`: every non-empty ancestor path of a
    /// node carrying it, weighted by that node's count.
    pub fn prefix_paths(&self, item: ItemId) -> Vec<(Vec<ItemId>, usize)> {
        self.chain(item)
            .filter_map(|id| {
                let path = self.ancestors(id);
                (!path.is_empty()).then_some((path, self.nodes[id].count))
            })
            .collect()
    }

    /// The `(item, count)` pairs from the root downwards if no node has more
    /// than one child.
    pub fn single_path(&self) -> Option<Vec<(ItemId, usize)>> {
        let mut path = Vec::new();
        let mut current = &self.nodes[ROOT];

        loop {
            match current.children.as_slice() {
                [] => return Some(path),
                &[child] => {
                    current = &self.nodes[child];
                    if let Some(item) = current.item {
                        path.push((item, current.count));
                    }
                }
                _ => return None,
            }
        }
    }
}

/// Walks an item's occurrence chain.
pub struct Chain<'a> {
    tree: &'a FpTree,
    next: Option<NodeId>,
}

impl Iterator for Chain<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.nodes[id].next;
        Some(id)
    }
}
