use serde::Serialize;

/// Position of a term in the dictionary. Stable for the life of a session.
pub type Slot = usize;

/// Original-case terms in insertion order.
///
/// Append-only: slots are never reused or compacted, so tries can hold
/// plain slot numbers instead of the strings themselves.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Dictionary {
    terms: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Default::default()
    }

    pub fn push(&mut self, term: &str) -> Slot {
        self.terms.push(term.to_string());
        self.terms.len() - 1
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.terms.get(slot).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn next_slot(&self) -> Slot {
        self.terms.len()
    }

    pub fn iter(&self) -> impl Iterator<Item=&str> + '_ {
        self.terms.iter().map(String::as_str)
    }

    /// Looks up each slot in turn, skipping any that were never handed out.
    pub fn resolve<'a>(&'a self, slots: &[Slot]) -> Vec<&'a str> {
        slots.iter().filter_map(|slot| self.get(*slot)).collect()
    }
}


#[cfg(test)]
mod tests {
    use crate::wordlist::dictionary::Dictionary;

    #[test]
    fn slots_follow_insertion_order() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.next_slot(), 0);
        assert_eq!(dict.push("Abbas"), 0);
        assert_eq!(dict.push("cab"), 1);
        assert_eq!(dict.get(0), Some("Abbas"));
        assert_eq!(dict.get(2), None);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["Abbas", "cab"]);
    }

    #[test]
    fn resolve_keeps_slot_order() {
        let mut dict = Dictionary::new();
        dict.push("a");
        dict.push("b");
        assert_eq!(dict.resolve(&[1, 0, 9, 1]), vec!["b", "a", "b"]);
    }
}
