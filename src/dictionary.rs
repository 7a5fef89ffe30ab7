//! Word store management for fuzzy matching.
//!
//! A [`Dictionary`] holds the normalized word list as an ordered sequence.
//! Words are normalized once at load time and queries are folded with the
//! same rule, so membership checks and suggestion scans can never disagree
//! about casing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::MAX_WORD_LEN;
use crate::error::Result;

/// Fold a raw token to its stored form: strip any trailing newline or
/// carriage return, then lowercase ASCII letters. Non-ASCII characters pass
/// through unchanged.
fn fold(raw: &str) -> String {
    raw.trim_end_matches(['\r', '\n'])
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Normalize a query token. Applies the same folding rule as the loader and
/// truncates to the stored length bound, so an overlong query degrades to a
/// prefix lookup instead of failing.
pub(crate) fn normalize_query(raw: &str) -> String {
    let folded = fold(raw);
    if folded.chars().count() < MAX_WORD_LEN {
        folded
    } else {
        folded.chars().take(MAX_WORD_LEN - 1).collect()
    }
}

/// An ordered store of normalized words.
///
/// Built once from a word list, immutable until the next reload. Duplicates
/// are tolerated; each occurrence is scanned independently. Capacity grows
/// geometrically as words are accepted (`Vec` doubling), and a growth failure
/// aborts the load rather than yielding a partial store.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary { words: Vec::new() }
    }

    /// Load a dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::load_from_reader(BufReader::new(file))
    }

    /// Load a dictionary from any buffered reader.
    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        dictionary.reload_from_reader(reader)?;
        Ok(dictionary)
    }

    /// Replace the store's content from a reader.
    ///
    /// The previous content is released before any new word is accepted. On
    /// failure the store is left empty, never half-populated, so callers can
    /// always trust [`Dictionary::is_empty`] after a failed reload. Returns
    /// the number of words accepted.
    pub fn reload_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        self.words = Vec::new();
        match self.fill(reader) {
            Ok(count) => Ok(count),
            Err(e) => {
                self.words = Vec::new();
                Err(e)
            }
        }
    }

    fn fill<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        for line in reader.lines() {
            let word = fold(&line?);
            let length = word.chars().count();
            // Overlong lines are excluded outright, not truncated; a clipped
            // word would produce false matches. Empty lines carry no word.
            if length == 0 || length >= MAX_WORD_LEN {
                continue;
            }
            self.words.try_reserve(1)?;
            self.words.push(word);
        }
        debug!("dictionary load finished, {} words accepted", self.words.len());
        Ok(self.words.len())
    }

    /// Check whether a word is present in the store.
    ///
    /// The query is normalized with the loader's folding rule, then matched
    /// with a linear scan; first match wins.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }
        let needle = normalize_query(word);
        self.words.iter().any(|w| *w == needle)
    }

    /// Number of stored words, counting duplicates.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if no dictionary content is loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The stored words, in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
