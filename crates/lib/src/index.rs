//! Name index over product identifiers.
//!
//! [`PrefixIndex`] is a character trie keyed by product name. The terminal
//! node of each name holds the identifiers of every live product carrying
//! exactly that name. Nodes live in an arena and refer to their children by
//! index; removed nodes go on a free list and are reused by later inserts.
//!
//! Lookups are exact-name only. The trie layout would allow prefix queries,
//! but none are exposed.

use std::collections::HashMap;

use crate::product::ProductId;

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<char, usize>,
    ids: Vec<ProductId>,
    terminal: bool,
}

impl Node {
    fn reset(&mut self) {
        self.children.clear();
        self.ids.clear();
        self.terminal = false;
    }

    fn is_prunable(&self) -> bool {
        !self.terminal && self.children.is_empty()
    }
}

/// Trie mapping product names to the identifiers that share them.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
    free_list: Vec<usize>,
    name_count: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            free_list: Vec::new(),
            name_count: 0,
        }
    }

    /// Records `id` under `name`, creating one node per character as needed.
    ///
    /// The same `(name, id)` pair may be inserted more than once; each insert
    /// adds another occurrence that must be removed separately.
    pub fn insert(&mut self, name: &str, id: ProductId) {
        let mut current = ROOT;
        for ch in name.chars() {
            current = match self.nodes[current].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.allocate_node();
                    self.nodes[current].children.insert(ch, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current];
        if !node.terminal {
            node.terminal = true;
            self.name_count += 1;
        }
        node.ids.push(id);
    }

    /// Identifiers recorded under exactly `name`, in insertion order.
    ///
    /// Returns an empty slice when the name is unknown.
    pub fn search(&self, name: &str) -> &[ProductId] {
        match self.find_node(name) {
            Some(idx) if self.nodes[idx].terminal => &self.nodes[idx].ids,
            _ => &[],
        }
    }

    /// Whether at least one identifier is recorded under `name`.
    pub fn contains(&self, name: &str) -> bool {
        !self.search(name).is_empty()
    }

    /// Removes one occurrence of `id` from `name`.
    ///
    /// When the last identifier for a name goes away the name stops being
    /// terminal, and every node on its path that is neither terminal nor has
    /// children is pruned, walking back towards the root.
    ///
    /// Returns `false` if `id` was not recorded under `name`.
    pub fn remove(&mut self, name: &str, id: ProductId) -> bool {
        let mut path = Vec::new();
        let mut current = ROOT;
        for ch in name.chars() {
            let next = match self.nodes[current].children.get(&ch) {
                Some(&idx) => idx,
                None => return false,
            };
            path.push((current, ch, next));
            current = next;
        }

        let node = &mut self.nodes[current];
        if !node.terminal {
            return false;
        }
        let Some(pos) = node.ids.iter().position(|&existing| existing == id) else {
            return false;
        };
        node.ids.remove(pos);
        if !node.ids.is_empty() {
            return true;
        }

        node.terminal = false;
        self.name_count -= 1;

        while let Some((parent, ch, child)) = path.pop() {
            if !self.nodes[child].is_prunable() {
                break;
            }
            self.nodes[parent].children.remove(&ch);
            self.recycle_node(child);
        }
        true
    }

    /// Number of distinct names with at least one identifier.
    pub fn name_count(&self) -> usize {
        self.name_count
    }

    /// Whether the index holds no names.
    pub fn is_empty(&self) -> bool {
        self.name_count == 0
    }

    /// Number of live nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Removes every name while keeping the allocated storage.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[ROOT].reset();
        self.free_list.clear();
        self.name_count = 0;
    }

    fn find_node(&self, name: &str) -> Option<usize> {
        let mut current = ROOT;
        for ch in name.chars() {
            current = *self.nodes[current].children.get(&ch)?;
        }
        Some(current)
    }

    fn allocate_node(&mut self) -> usize {
        match self.free_list.pop() {
            Some(idx) => idx,
            None => {
                self.nodes.push(Node::default());
                self.nodes.len() - 1
            }
        }
    }

    fn recycle_node(&mut self, idx: usize) {
        self.nodes[idx].reset();
        self.free_list.push(idx);
    }
}
