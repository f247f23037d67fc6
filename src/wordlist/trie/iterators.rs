use crate::wordlist::trie::node::NodeId;
use crate::wordlist::trie::trie::Trie;

/// Preorder walk of a subtree: a node, then its children in alphabet order.
#[derive(Debug)]
pub(crate) struct PreOrder<'a> {
    trie: &'a Trie,
    stack: Vec<NodeId>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(trie: &'a Trie, start: NodeId) -> PreOrder<'a> {
        PreOrder { trie, stack: vec![start] }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // reversed so the lowest letter is popped first
        self.stack.extend(self.trie.node(id).child_ids().rev());
        Some(id)
    }
}

/// Postorder walk of a subtree: every child before its parent.
#[derive(Debug)]
pub(crate) struct PostOrder<'a> {
    trie: &'a Trie,
    stack: Vec<(NodeId, bool)>,
}

impl<'a> PostOrder<'a> {
    pub(crate) fn new(trie: &'a Trie, start: NodeId) -> PostOrder<'a> {
        PostOrder { trie, stack: vec![(start, false)] }
    }
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, expanded)) = self.stack.pop() {
            if expanded {
                return Some(id);
            }
            self.stack.push((id, true));
            self.stack.extend(self.trie.node(id).child_ids().rev().map(|c| (c, false)));
        }
        None
    }
}
