use std::fmt::{Debug, Formatter};

use crate::alphabet::{get_idx, is_letter, ALPHABET, EOW};
use crate::wordlist::dictionary::Slot;

/// Position of a node in its trie's arena.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub(crate) struct NodeId(u32);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(idx: usize) -> NodeId {
        NodeId(idx as u32)
    }
}

#[derive(Default, Clone)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<NodeId>; ALPHABET.len()],
    /// Empty unless a key terminates here.
    pub(crate) slots: Vec<Slot>,
    pub(crate) letter: char,
    pub(crate) depth: usize,
    /// Slots stored in this subtree. Only meaningful after decoration.
    pub(crate) weight: usize,
}

impl TrieNode {
    pub(crate) fn child_of(parent: &TrieNode, letter: char) -> TrieNode {
        TrieNode {
            letter,
            depth: parent.depth + 1,
            ..Default::default()
        }
    }

    pub(crate) fn get_child(&self, c: char) -> Option<NodeId> {
        if !is_letter(c) && c != EOW {
            return None;
        }
        self.children[get_idx(c)]
    }

    pub(crate) fn set_child(&mut self, c: char, id: NodeId) {
        self.children[get_idx(c)] = Some(id);
    }

    pub(crate) fn is_terminal(&self) -> bool {
        !self.slots.is_empty()
    }

    pub(crate) fn slot(&self) -> Option<Slot> {
        self.slots.first().copied()
    }

    /// Child ids in alphabet order, end-of-word branch last.
    pub(crate) fn child_ids(&self) -> impl DoubleEndedIterator<Item=NodeId> + '_ {
        self.children.iter().flatten().copied()
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("depth", &self.depth)
            .field("weight", &self.weight)
            .field("slots", &self.slots)
            .field("children", &self.children.iter()
                .enumerate()
                .filter(|(_, x)| x.is_some())
                .map(|(idx, _)| ALPHABET[idx] as char)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
