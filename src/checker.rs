//! Spell checker facade combining the word store and the suggestion engine.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use parking_lot::RwLock;

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::suggest::{Suggestion, SuggestionConfig, SuggestionEngine, SuggestionParams};

/// A spell checker with an explicit dictionary lifecycle.
///
/// The word store starts empty, is populated by [`SpellChecker::load_dictionary`],
/// and can be reloaded or unloaded at any time. Queries take shared access and
/// a (re)load takes exclusive access, so concurrent readers never observe a
/// partially built dictionary. Until a load succeeds, every query reports
/// "no dictionary" semantics: membership is false and suggestion lists are
/// empty.
pub struct SpellChecker {
    dictionary: RwLock<Dictionary>,
    engine: SuggestionEngine,
}

impl SpellChecker {
    /// Create a checker with no dictionary loaded.
    pub fn new() -> Self {
        SpellChecker {
            dictionary: RwLock::new(Dictionary::new()),
            engine: SuggestionEngine::new(),
        }
    }

    /// Create a checker with a custom suggestion policy.
    pub fn with_config(config: SuggestionConfig) -> Self {
        SpellChecker {
            dictionary: RwLock::new(Dictionary::new()),
            engine: SuggestionEngine::with_config(config),
        }
    }

    /// Load (or reload) the dictionary from a word list file.
    ///
    /// Any previously held content is released up front, so a failed load
    /// leaves the checker with no dictionary rather than stale content.
    /// Returns the number of words accepted.
    pub fn load_dictionary<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let mut dictionary = self.dictionary.write();
        *dictionary = Dictionary::new();

        let file = File::open(path)?;
        let count = dictionary.reload_from_reader(BufReader::new(file))?;
        info!("loaded {} words from {}", count, path.display());
        Ok(count)
    }

    /// Release the dictionary. Subsequent queries report no dictionary until
    /// the next successful load.
    pub fn unload(&self) {
        *self.dictionary.write() = Dictionary::new();
    }

    /// Check whether a word is spelled correctly.
    pub fn is_word_correct(&self, word: &str) -> bool {
        self.dictionary.read().contains(word)
    }

    /// Ranked correction candidates for a word.
    ///
    /// `word_length` is the query length as the caller defines it; the
    /// shorter-than-query and length-difference filters are applied against
    /// this value. The result is capped and sorted by the suggestion engine.
    pub fn suggestions(
        &self,
        word: &str,
        tolerance: usize,
        word_length: usize,
        length_tolerance: usize,
    ) -> Vec<Suggestion> {
        let params = SuggestionParams {
            tolerance,
            query_length: word_length,
            length_tolerance,
        };
        self.engine.suggest(&self.dictionary.read(), word, &params)
    }

    /// Number of words in the loaded dictionary.
    pub fn word_count(&self) -> usize {
        self.dictionary.read().len()
    }

    /// True if a dictionary with at least one word is loaded.
    pub fn is_loaded(&self) -> bool {
        !self.dictionary.read().is_empty()
    }
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}
