pub mod trie;
pub mod index;
pub mod dictionary;
pub mod answer;
pub mod wordlist;
