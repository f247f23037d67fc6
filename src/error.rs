//! Error types for loading and querying a wordlist.
//!
//! Everything except [`LoadError`] is recoverable: a rejected term skips one
//! token of the load, a failed query skips one token of the query stream.

use std::io;
use std::path::PathBuf;

use derive_new::new;
use thiserror::Error;

use crate::wordlist::dictionary::Slot;

/// A character outside the accepted alphabet.
#[derive(Debug, Error, Clone, PartialEq, Eq, new)]
#[error("invalid character {ch:?} at position {position} in {text:?}")]
pub struct InvalidCharacter {
    pub text: String,
    pub ch: char,
    pub position: usize,
}

/// Why a key was not inserted into a trie.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejected {
    #[error(transparent)]
    InvalidCharacter(#[from] InvalidCharacter),

    /// The case-folded key already terminates at a node holding `slot`.
    #[error("{key:?} is already indexed at slot {slot}")]
    Duplicate { key: String, slot: Slot },
}

/// Why a query produced no answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error(transparent)]
    InvalidCharacter(#[from] InvalidCharacter),

    /// Anything other than `X*`, `*Y`, `X*Y` or `*X*`.
    #[error("Unavailable wildcard pattern: {0:?}")]
    UnsupportedWildcardPattern(String),

    #[error("[{0}] not found!")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read wordlist {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, QueryError>;
