use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::mem::take;
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use rayon::prelude::*;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::alphabet::{normalize, WILDCARD};
use crate::error::{LoadError, QueryError, Rejected, Result};
use crate::permuterm::PermutermIndex;
use crate::wordlist::answer::Answer;
use crate::wordlist::dictionary::{Dictionary, Slot};
use crate::wordlist::index::Index;
use crate::wordlist::trie::Trie;

/// How terms are laid out in a word list file.
///
/// Without a delimiter every whitespace-separated token is a term. With one,
/// each line is split on it and only `word_column` (default 0) is indexed.
#[derive(TypedBuilder, Debug, Clone, Default)]
pub struct FileFormat {
    #[builder(default, setter(into))]
    delimiter: Option<char>,
    #[builder(default, setter(into))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn terms<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self.delimiter {
            None => line.split_whitespace().collect(),
            Some(delimiter) => line.split(delimiter)
                .nth(self.word_column.unwrap_or(0))
                .map(str::trim)
                .filter(|x| !x.is_empty())
                .into_iter()
                .collect(),
        }
    }
}

/// The load phase: terms go in, a read-only [`Wordlist`] comes out.
#[derive(Debug, Default)]
pub struct WordlistBuilder {
    trie: Trie,
    permuterm: PermutermIndex,
    dictionary: Dictionary,
    rejected: usize,
}

impl WordlistBuilder {
    pub fn new() -> WordlistBuilder {
        Default::default()
    }

    /// Indexes one term under the next free slot.
    ///
    /// A rejected term allocates no slot and adds nothing to either trie.
    pub fn add(&mut self, term: &str) -> std::result::Result<Slot, Rejected> {
        let result = self.index_term(term);
        if let Err(err) = &result {
            self.rejected += 1;
            debug!(%term, %err, "term rejected");
        }
        result
    }

    fn index_term(&mut self, term: &str) -> std::result::Result<Slot, Rejected> {
        let folded = normalize(term)?;
        let slot = self.dictionary.next_slot();
        self.trie.add(&folded, slot)?;
        self.permuterm.add(&folded, slot)?;
        Ok(self.dictionary.push(term))
    }

    pub fn add_all<'f, I>(&mut self, items: I) -> &mut WordlistBuilder
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().for_each(|x| { self.add(x).ok(); });
        self
    }

    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Decorates both tries and hands them over. The builder is left empty.
    pub fn build(&mut self) -> Wordlist {
        let start = Instant::now();
        let rejected = take(&mut self.rejected);
        self.trie.decorate();
        self.permuterm.decorate();
        let wordlist = Wordlist {
            trie: take(&mut self.trie),
            permuterm: take(&mut self.permuterm),
            dictionary: take(&mut self.dictionary),
        };
        info!(terms = wordlist.len(),
              rejected,
              trie_nodes = wordlist.trie.node_count(),
              permuterm_nodes = wordlist.permuterm.trie().node_count(),
              "built wordlist in {:.3}s", start.elapsed().as_secs_f64());
        wordlist
    }
}

/// The query phase: a frozen dictionary with its trie and permuterm index.
#[derive(Debug, Clone)]
pub struct Wordlist {
    trie: Trie,
    permuterm: PermutermIndex,
    dictionary: Dictionary,
}

impl Wordlist {
    pub fn builder() -> WordlistBuilder {
        WordlistBuilder::new()
    }

    pub fn from_words<'f, I>(items: I) -> Wordlist
        where I: IntoIterator<Item=&'f str> {
        Self::builder().add_all(items).build()
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: FileFormat) -> std::result::Result<Wordlist, LoadError> {
        let path = path.as_ref();
        info!("Reading words from {:?}", path);
        let io_error = |source| LoadError::Io { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(io_error)?;
        Self::from_reader(BufReader::new(file), &format).map_err(io_error)
    }

    /// Reads terms line by line. Lines that are not valid UTF-8 are skipped;
    /// any other read error aborts the load.
    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat) -> io::Result<Wordlist> {
        let start = Instant::now();
        let mut builder = Self::builder();
        let mut failures: usize = 0;

        for line in reader.lines() {
            match line {
                Ok(line) => { builder.add_all(format.terms(&line)); }
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!(%e, "skipping unreadable line");
                    failures += 1;
                }
                Err(e) => return Err(e),
            }
        }

        info!(accepted = builder.len(), rejected = builder.rejected(), failures,
              "read words in {:.3}s", start.elapsed().as_secs_f64());
        Ok(builder.build())
    }

    delegate! {
        to self.dictionary {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn get(&self, slot: Slot) -> Option<&str>;
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn permuterm(&self) -> &PermutermIndex {
        &self.permuterm
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    /// Exact lookup, returning the term as it was loaded.
    pub fn lookup(&self, word: &str) -> Result<&str> {
        let folded = normalize(word)?;
        self.trie.search(&folded)
            .and_then(|slot| self.dictionary.get(slot))
            .ok_or_else(|| QueryError::NotFound(word.to_string()))
    }

    /// Wildcard lookup through the permuterm index.
    pub fn search(&self, pattern: &str) -> Result<Vec<&str>> {
        let slots = self.permuterm.resolve(pattern)?;
        Ok(self.dictionary.resolve(&slots))
    }

    /// Terms starting with `prefix`, read straight off the term trie.
    pub fn prefix_search(&self, prefix: &str) -> Result<Vec<&str>> {
        let folded = normalize(prefix)?;
        Ok(self.dictionary.resolve(&self.trie.prefix_list(&folded)))
    }

    /// Routes a token to wildcard search if it has a `*`, else exact lookup.
    pub fn query(&self, token: &str) -> Answer {
        let query = token.to_string();
        let outcome = if token.contains(WILDCARD) {
            self.search(token).map(|terms| Answer::Matches {
                query: query.clone(),
                terms: terms.into_iter().map(str::to_string).collect(),
            })
        } else {
            self.lookup(token).map(|term| Answer::Found {
                query: query.clone(),
                term: term.to_string(),
            })
        };
        match outcome {
            Ok(answer) => answer,
            Err(QueryError::NotFound(_)) => Answer::NotFound { query },
            Err(err) => Answer::Rejected { query, reason: err.to_string() },
        }
    }

    /// Answers a batch of tokens in parallel. Answers keep the input order.
    pub fn query_many<S>(&self, tokens: &[S]) -> Vec<Answer>
        where S: AsRef<str> + Sync {
        tokens.par_iter()
            .map(|token| self.query(token.as_ref()))
            .collect()
    }
}
