//! Suggestion generation: the pruned dictionary scan and ranking.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::MAX_SUGGESTIONS;
use crate::dictionary::{Dictionary, normalize_query};
use crate::levenshtein::DistanceMatcher;

/// A candidate correction paired with its edit distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Restricted Damerau-Levenshtein distance from the query.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: usize) -> Self {
        Suggestion { word, distance }
    }
}

/// Caller-supplied parameters for a single suggestion query.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionParams {
    /// Maximum acceptable edit distance.
    pub tolerance: usize,
    /// The query's length as the caller defines it. This is a parameter, not
    /// a value derived from the query string; callers must keep the two
    /// consistent.
    pub query_length: usize,
    /// Maximum absolute difference between a candidate's length and
    /// `query_length`.
    pub length_tolerance: usize,
}

/// Policy configuration for the suggestion scan.
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    /// Reject candidates shorter than the query. On by default; note that
    /// this excludes corrections like "wordx" -> "word" even when they are
    /// editwise close.
    pub reject_shorter: bool,
    /// Hard cap on candidates buffered before ranking. Once the scan has
    /// accepted this many, it stops; later candidates are dropped even if
    /// they would rank higher.
    pub max_suggestions: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            reject_shorter: true,
            max_suggestions: MAX_SUGGESTIONS,
        }
    }
}

/// Scans a word store for candidates within tolerance of a query.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Create a new suggestion engine with the default configuration.
    pub fn new() -> Self {
        SuggestionEngine::default()
    }

    /// Create a new suggestion engine with a custom configuration.
    pub fn with_config(config: SuggestionConfig) -> Self {
        SuggestionEngine { config }
    }

    /// The engine's current configuration.
    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Collect and rank suggestions for a potentially misspelled word.
    ///
    /// Candidates are visited in store order and pruned by length before any
    /// distance is computed. An empty or unloaded store yields an empty
    /// result. A candidate whose distance computation fails for lack of
    /// working memory is skipped; the scan itself never fails.
    pub fn suggest(
        &self,
        dictionary: &Dictionary,
        word: &str,
        params: &SuggestionParams,
    ) -> Vec<Suggestion> {
        if dictionary.is_empty() {
            return Vec::new();
        }

        let matcher = DistanceMatcher::new(normalize_query(word));
        let mut accepted = Vec::new();

        for candidate in dictionary.words() {
            let candidate_length = candidate.chars().count();

            if self.config.reject_shorter && candidate_length < params.query_length {
                continue;
            }
            if candidate_length.abs_diff(params.query_length) > params.length_tolerance {
                continue;
            }

            let distance = match matcher.distance(candidate) {
                Ok(distance) => distance,
                // Skip the candidate, keep scanning.
                Err(e) => {
                    trace!("skipping candidate {candidate:?}: {e}");
                    continue;
                }
            };

            if distance <= params.tolerance {
                accepted.push(Suggestion::new(candidate.clone(), distance));
                if accepted.len() >= self.config.max_suggestions {
                    debug!(
                        "suggestion cap of {} reached for {:?}, stopping scan",
                        self.config.max_suggestions,
                        matcher.query()
                    );
                    break;
                }
            }
        }

        rank_suggestions(&mut accepted);
        accepted
    }
}

/// Sort suggestions by ascending distance, then alphabetically by word.
///
/// The sort is stable, so suggestions that compare equal keep their store
/// order.
pub fn rank_suggestions(suggestions: &mut [Suggestion]) {
    suggestions.sort_by(|a, b| {
        a.distance
            .cmp(&b.distance)
            .then_with(|| a.word.cmp(&b.word))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dictionary(words: &[&str]) -> Dictionary {
        let input = words.join("\n");
        Dictionary::load_from_reader(Cursor::new(input)).unwrap()
    }

    fn params(tolerance: usize, query_length: usize, length_tolerance: usize) -> SuggestionParams {
        SuggestionParams {
            tolerance,
            query_length,
            length_tolerance,
        }
    }

    #[test]
    fn test_transposed_query_ranks_closest_first() {
        let dict = dictionary(&["anyway", "any", "airway"]);
        let engine = SuggestionEngine::new();

        let suggestions = engine.suggest(&dict, "nayway", &params(3, 6, 2));

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].word, "anyway");
        assert_eq!(suggestions[0].distance, 1);
        assert_eq!(suggestions[1].word, "airway");
        assert!(suggestions[1].distance > 1);
        // "any" is shorter than the query and must not appear.
        assert!(suggestions.iter().all(|s| s.word != "any"));
    }

    #[test]
    fn test_empty_store_yields_empty_result() {
        let engine = SuggestionEngine::new();
        let suggestions = engine.suggest(&Dictionary::new(), "word", &params(2, 4, 2));
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_tolerance_bound() {
        let dict = dictionary(&["word", "ward", "wild", "sword"]);
        let engine = SuggestionEngine::new();

        let suggestions = engine.suggest(&dict, "word", &params(1, 4, 2));

        for s in &suggestions {
            assert!(s.distance <= 1, "{} exceeded tolerance", s.word);
        }
        assert!(suggestions.iter().any(|s| s.word == "word" && s.distance == 0));
        assert!(suggestions.iter().any(|s| s.word == "ward"));
        assert!(suggestions.iter().all(|s| s.word != "wild"));
    }

    #[test]
    fn test_length_tolerance_prunes_before_distance() {
        let dict = dictionary(&["word", "wordiness"]);
        let engine = SuggestionEngine::new();

        // "wordiness" is 5 characters longer than the query; with a length
        // tolerance of 2 it must be pruned no matter the tolerance.
        let suggestions = engine.suggest(&dict, "word", &params(9, 4, 2));

        assert!(suggestions.iter().all(|s| s.word != "wordiness"));
    }

    #[test]
    fn test_shorter_candidates_rejected_by_default() {
        let dict = dictionary(&["the"]);
        let engine = SuggestionEngine::new();

        let suggestions = engine.suggest(&dict, "thee", &params(2, 4, 2));
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_allow_shorter_policy() {
        let dict = dictionary(&["word"]);
        let engine = SuggestionEngine::with_config(SuggestionConfig {
            reject_shorter: false,
            ..Default::default()
        });

        let suggestions = engine.suggest(&dict, "wordx", &params(2, 5, 2));

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].word, "word");
        assert_eq!(suggestions[0].distance, 1);
    }

    #[test]
    fn test_cap_stops_scan() {
        // 5 qualifying duplicates ahead of a better candidate; with a cap of
        // 3 the scan must stop before ever seeing the exact match.
        let dict = dictionary(&["wore", "wore", "wore", "wore", "wore", "word"]);
        let engine = SuggestionEngine::with_config(SuggestionConfig {
            max_suggestions: 3,
            ..Default::default()
        });

        let suggestions = engine.suggest(&dict, "word", &params(2, 4, 2));

        assert_eq!(suggestions.len(), 3);
        assert!(suggestions.iter().all(|s| s.word == "wore"));
    }

    #[test]
    fn test_ranking_order() {
        let dict = dictionary(&["cords", "words", "wordy", "worde"]);
        let engine = SuggestionEngine::new();

        let suggestions = engine.suggest(&dict, "word", &params(2, 4, 2));

        for pair in suggestions.windows(2) {
            assert!(
                pair[0].distance < pair[1].distance
                    || (pair[0].distance == pair[1].distance && pair[0].word <= pair[1].word)
            );
        }
    }

    #[test]
    fn test_rank_suggestions_is_deterministic() {
        let mut a = vec![
            Suggestion::new("beta".to_string(), 2),
            Suggestion::new("alpha".to_string(), 2),
            Suggestion::new("gamma".to_string(), 1),
        ];
        let mut b = a.clone();
        b.reverse();

        rank_suggestions(&mut a);
        rank_suggestions(&mut b);

        assert_eq!(a, b);
        assert_eq!(a[0].word, "gamma");
        assert_eq!(a[1].word, "alpha");
        assert_eq!(a[2].word, "beta");
    }

    #[test]
    fn test_query_is_normalized_before_scan() {
        let dict = dictionary(&["anyway"]);
        let engine = SuggestionEngine::new();

        let suggestions = engine.suggest(&dict, "NayWay", &params(3, 6, 2));

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].distance, 1);
    }
}
