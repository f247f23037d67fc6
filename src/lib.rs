//! A dictionary index answering exact lookups and `ab*`, `*ab`, `a*b` and
//! `*ab*` wildcard queries through a permuterm trie.

pub mod alphabet;
pub mod error;
pub mod permuterm;
pub mod wordlist;
