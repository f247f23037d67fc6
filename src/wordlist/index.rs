use derive_new::new;

use crate::error::Rejected;
use crate::wordlist::dictionary::Slot;

/// A successful insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Inserted {
    pub slot: Slot,
    pub nodes_created: usize,
}

/// Something terms can be indexed into under a dictionary slot.
pub trait Index {
    fn add(&mut self, word: &str, slot: Slot) -> Result<Inserted, Rejected>;
    fn contains(&self, word: &str) -> bool;

    /// Adds every item, numbering accepted items from zero. Returns how many
    /// were accepted.
    fn add_all<'a, I>(&mut self, items: I) -> usize
        where I: IntoIterator<Item=&'a str> {
        let mut accepted = 0;
        for item in items {
            if self.add(item, accepted).is_ok() {
                accepted += 1;
            }
        }
        accepted
    }
}
