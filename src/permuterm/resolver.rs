use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{QueryError, Result};
use crate::permuterm::pattern::WildcardPattern;
use crate::permuterm::PermutermIndex;
use crate::wordlist::dictionary::Slot;

impl PermutermIndex {
    /// Slots of every term matching a wildcard pattern, each reported once,
    /// in the order the permuterm trie lists them.
    pub fn resolve(&self, pattern: &str) -> Result<Vec<Slot>> {
        let parsed = WildcardPattern::parse(pattern).map_err(|err| {
            if let QueryError::UnsupportedWildcardPattern(_) = err {
                warn!(%pattern, "unsupported wildcard pattern");
            }
            err
        })?;
        Ok(self.resolve_pattern(&parsed))
    }

    pub fn resolve_pattern(&self, pattern: &WildcardPattern) -> Vec<Slot> {
        let key = pattern.permuterm_key();
        let mut seen = HashSet::with_capacity(self.trie().prefix_count(&key));
        let slots: Vec<Slot> = self.trie().prefix_list(&key)
            .into_iter()
            .filter(|slot| seen.insert(*slot))
            .collect();
        debug!(%pattern, %key, matches = slots.len(), "resolved wildcard");
        slots
    }
}
