use crate::alphabet::normalize_key;
use crate::wordlist::dictionary::Slot;
use crate::wordlist::trie::node::NodeId;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// Slots of every key starting with `prefix`, in preorder: a node's own
    /// slots, then its children `a..z`, then the end-of-word branch.
    ///
    /// A slot appears once per key that carries it, so the list can repeat
    /// slots when several keys share an owner.
    pub fn prefix_list(&self, prefix: &str) -> Vec<Slot> {
        match self.prefix_node(prefix) {
            None => vec![],
            Some(start) => self.preorder(start)
                .flat_map(|id| self.node(id).slots.iter().copied())
                .collect(),
        }
    }

    /// Every slot in the trie, in preorder.
    pub fn list(&self) -> Vec<Slot> {
        self.prefix_list("")
    }

    /// Number of slots below `prefix`. Constant in the size of the subtree
    /// once the trie is decorated.
    pub fn prefix_count(&self, prefix: &str) -> usize {
        match self.prefix_node(prefix) {
            None => 0,
            Some(id) if self.is_decorated() => self.node(id).weight,
            Some(id) => self.preorder(id).map(|x| self.node(x).slots.len()).sum(),
        }
    }

    fn prefix_node(&self, prefix: &str) -> Option<NodeId> {
        let prefix = normalize_key(prefix).ok()?;
        self.get_node(&prefix)
    }
}


#[cfg(test)]
mod tests {
    use crate::wordlist::index::Index;
    use crate::wordlist::trie::trie::Trie;

    fn vocabulary() -> Trie {
        let mut trie = Trie::new();
        trie.add_all(vec!["abbess", "abbasid", "cab", "abbas"]);
        trie
    }

    #[test]
    fn lists_words_with_prefix_in_alphabet_order() {
        let trie = vocabulary();
        assert_eq!(trie.prefix_list("abb"), vec![3, 1, 0]);
        assert_eq!(trie.prefix_list("ABBA"), vec![3, 1]);
    }

    #[test]
    fn whole_word_is_its_own_prefix() {
        let trie = vocabulary();
        assert_eq!(trie.prefix_list("cab"), vec![2]);
    }

    #[test]
    fn missing_prefix_lists_nothing() {
        let trie = vocabulary();
        assert!(trie.prefix_list("abx").is_empty());
        assert!(trie.prefix_list("a-b").is_empty());
        assert_eq!(trie.prefix_count("zzz"), 0);
    }

    #[test]
    fn list_walks_whole_trie() {
        let trie = vocabulary();
        assert_eq!(trie.list(), vec![3, 1, 0, 2]);
        assert!(Trie::new().list().is_empty());
    }

    #[test]
    fn marker_branch_sorts_last() {
        let mut trie = Trie::new();
        trie.insert("ab$c", 0).unwrap();
        trie.insert("abz", 1).unwrap();
        trie.insert("aba", 2).unwrap();
        assert_eq!(trie.prefix_list("ab"), vec![2, 1, 0]);
    }

    #[test]
    fn prefix_listing_is_deterministic() {
        let trie = vocabulary();
        assert_eq!(trie.prefix_list("a"), trie.prefix_list("a"));
        assert_eq!(trie.list(), trie.clone().list());
    }

    #[test]
    fn count_agrees_with_listing_before_and_after_decoration() {
        let mut trie = vocabulary();
        let before = trie.prefix_count("abba");
        trie.decorate();
        assert_eq!(before, 2);
        assert_eq!(trie.prefix_count("abba"), trie.prefix_list("abba").len());
    }
}
