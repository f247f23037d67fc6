use std::fmt::{Debug, Formatter};

use tracing::debug;

use crate::alphabet::normalize_key;
use crate::error::Rejected;
use crate::wordlist::dictionary::Slot;
use crate::wordlist::index::{Index, Inserted};
use crate::wordlist::trie::iterators::{PostOrder, PreOrder};
use crate::wordlist::trie::node::{NodeId, TrieNode};

/// A 27-way trie over `a..z` and the end-of-word marker, mapping keys to
/// dictionary slots.
///
/// Nodes live in an arena and refer to their children by index, so walks,
/// listings and teardown never recurse.
#[derive(Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    built: bool,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            nodes: vec![TrieNode::default()],
            built: false,
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.index()]
    }

    /// Inserts a key, refusing keys that are already present.
    ///
    /// The key is case-folded and fully validated before the first node is
    /// created, so a rejected key leaves the trie untouched.
    pub fn insert(&mut self, key: &str, slot: Slot) -> Result<Inserted, Rejected> {
        let key = normalize_key(key)?;
        if let Some(existing) = self.get_node(&key).and_then(|id| self.node(id).slot()) {
            return Err(Rejected::Duplicate { key, slot: existing });
        }

        let (end, nodes_created) = self.extend_path(&key);
        self.node_mut(end).slots.push(slot);
        self.built = false;
        Ok(Inserted::new(slot, nodes_created))
    }

    /// Records `slot` as one more owner of `key`.
    ///
    /// Returns `false` when `slot` already owned the key. Other owners are
    /// kept, so two terms sharing a key are both reachable.
    pub fn insert_shared(&mut self, key: &str, slot: Slot) -> Result<bool, Rejected> {
        let key = normalize_key(key)?;
        let (end, _) = self.extend_path(&key);
        let node = self.node_mut(end);
        if node.slots.contains(&slot) {
            debug!(%key, slot, "key already owned by slot");
            return Ok(false);
        }
        if node.is_terminal() {
            debug!(%key, slot, owners = ?node.slots, "key shared between slots");
        }
        node.slots.push(slot);
        self.built = false;
        Ok(true)
    }

    /// Walks `key`, creating missing nodes. `key` must already be normalized.
    fn extend_path(&mut self, key: &str) -> (NodeId, usize) {
        let mut current = NodeId::ROOT;
        let mut created = 0;
        for c in key.chars() {
            current = match self.node(current).get_child(c) {
                Some(child) => child,
                None => {
                    let child = NodeId::from_index(self.nodes.len());
                    let node = TrieNode::child_of(self.node(current), c);
                    self.nodes.push(node);
                    self.node_mut(current).set_child(c, child);
                    created += 1;
                    child
                }
            }
        }
        (current, created)
    }

    /// Finds the node spelling `key`. `key` must already be normalized.
    pub(crate) fn get_node(&self, key: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for c in key.chars() {
            current = self.node(current).get_child(c)?;
        }
        Some(current)
    }

    pub fn search(&self, key: &str) -> Option<Slot> {
        let key = normalize_key(key).ok()?;
        self.get_node(&key).and_then(|id| self.node(id).slot())
    }

    /// Every owner of `key`, in insertion order.
    pub fn search_all(&self, key: &str) -> &[Slot] {
        match normalize_key(key).ok().and_then(|key| self.get_node(&key)) {
            Some(id) => &self.node(id).slots,
            None => &[],
        }
    }

    pub(crate) fn preorder(&self, start: NodeId) -> PreOrder<'_> {
        PreOrder::new(self, start)
    }

    pub(crate) fn postorder(&self, start: NodeId) -> PostOrder<'_> {
        PostOrder::new(self, start)
    }

    /// Computes each node's subtree weight, children before parents.
    pub fn decorate(&mut self) {
        let order: Vec<NodeId> = self.postorder(NodeId::ROOT).collect();
        for id in order {
            let below: usize = self.node(id).child_ids()
                .map(|c| self.node(c).weight)
                .sum();
            let node = self.node_mut(id);
            node.weight = node.slots.len() + below;
        }
        self.built = true;
    }

    pub fn is_decorated(&self) -> bool {
        self.built
    }

    /// Releases every node below the root, deepest first, and clears the
    /// root. Returns the number of nodes released.
    pub fn destroy(&mut self) -> usize {
        let order: Vec<NodeId> = self.postorder(NodeId::ROOT)
            .filter(|id| *id != NodeId::ROOT)
            .collect();
        for id in &order {
            drop(std::mem::take(self.node_mut(*id)));
        }
        self.nodes.truncate(1);
        self.nodes[0] = TrieNode::default();
        self.built = false;
        order.len()
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        let root = self.node(NodeId::ROOT);
        root.child_ids().next().is_none() && !root.is_terminal()
    }
}

impl Index for Trie {
    fn add(&mut self, key: &str, slot: Slot) -> Result<Inserted, Rejected> {
        self.insert(key, slot)
    }

    fn contains(&self, key: &str) -> bool {
        self.search(key).is_some()
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        self.preorder(NodeId::ROOT).for_each(|id| { l.entry(self.node(id)); });
        l.finish()
    }
}
