//! The permuterm index: every rotation of `term$` in one trie, so that any
//! single-wildcard query becomes a prefix listing.

pub mod rotations;
pub mod pattern;
pub mod resolver;

use tracing::debug;

use crate::alphabet::{normalize, EOW};
use crate::error::Rejected;
use crate::wordlist::dictionary::Slot;
use crate::wordlist::index::{Index, Inserted};
use crate::wordlist::trie::Trie;

pub use pattern::WildcardPattern;
pub use rotations::rotations;

#[derive(Debug, Default, Clone)]
pub struct PermutermIndex {
    trie: Trie,
}

impl PermutermIndex {
    pub fn new() -> PermutermIndex {
        Default::default()
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn decorate(&mut self) {
        self.trie.decorate()
    }

    pub fn destroy(&mut self) -> usize {
        self.trie.destroy()
    }
}

impl Index for PermutermIndex {
    /// Indexes every rotation of `word` under `slot`. A rotation some other
    /// slot already owns gains `slot` as a second owner.
    fn add(&mut self, word: &str, slot: Slot) -> Result<Inserted, Rejected> {
        let word = normalize(word)?;
        let before = self.trie.node_count();
        for rotation in rotations(&word) {
            if !self.trie.insert_shared(&rotation, slot)? {
                debug!(%rotation, slot, "rotation already indexed");
            }
        }
        Ok(Inserted::new(slot, self.trie.node_count() - before))
    }

    fn contains(&self, word: &str) -> bool {
        match normalize(word) {
            Ok(word) => self.trie.search(&format!("{}{}", word, EOW)).is_some(),
            Err(_) => false,
        }
    }
}
