pub mod trie;
pub mod search;

mod node;
mod iterators;

pub use trie::Trie;
