//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, QuillArgs};
use crate::error::Result;
use crate::suggest::Suggestion;

/// Membership verdict for one word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordVerdict {
    pub word: String,
    pub correct: bool,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub verdicts: Vec<WordVerdict>,
    pub words_checked: usize,
    pub misspelled: usize,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResults {
    pub word: String,
    pub suggestions: Vec<Suggestion>,
    pub duration_ms: u64,
}

/// A misspelled word found in a passage of text, with its corrections.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextError {
    pub word: String,
    pub suggestions: Vec<Suggestion>,
}

/// Result structure for the check-text command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextCheckResults {
    pub word_count: usize,
    pub error_count: usize,
    pub errors: Vec<TextError>,
}

/// Word list statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub word_count: usize,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanFormat>(
    message: &str,
    result: &T,
    args: &QuillArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanFormat>(message: &str, result: &T, args: &QuillArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }
    result.print_human();
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &QuillArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Human-readable rendering for a command result.
pub trait HumanFormat {
    fn print_human(&self);
}

impl HumanFormat for CheckResults {
    fn print_human(&self) {
        for verdict in &self.verdicts {
            let mark = if verdict.correct { "ok" } else { "misspelled" };
            println!("{}: {}", verdict.word, mark);
        }
        println!();
        println!(
            "{} of {} words misspelled",
            self.misspelled, self.words_checked
        );
    }
}

impl HumanFormat for SuggestResults {
    fn print_human(&self) {
        if self.suggestions.is_empty() {
            println!("No suggestions found for '{}'", self.word);
        } else {
            println!("Suggestions for '{}':", self.word);
            for suggestion in &self.suggestions {
                println!("  {} (distance: {})", suggestion.word, suggestion.distance);
            }
        }
        println!();
        println!("Scan time: {}ms", self.duration_ms);
    }
}

impl HumanFormat for TextCheckResults {
    fn print_human(&self) {
        if self.errors.is_empty() {
            println!("No spelling errors found");
        } else {
            for error in &self.errors {
                let corrections: Vec<&str> = error
                    .suggestions
                    .iter()
                    .map(|s| s.word.as_str())
                    .collect();
                if corrections.is_empty() {
                    println!("{}: no suggestions", error.word);
                } else {
                    println!("{}: {}", error.word, corrections.join(", "));
                }
            }
        }
        println!();
        println!(
            "Found {} potential errors in {} words",
            self.error_count, self.word_count
        );
    }
}

impl HumanFormat for DictionaryStats {
    fn print_human(&self) {
        println!("Word list: {}", self.path);
        println!("Words accepted: {}", self.word_count);
        println!("Load time: {}ms", self.duration_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_results_round_trip() {
        let results = SuggestResults {
            word: "nayway".to_string(),
            suggestions: vec![Suggestion::new("anyway".to_string(), 1)],
            duration_ms: 3,
        };

        let json = serde_json::to_string(&results).unwrap();
        let back: SuggestResults = serde_json::from_str(&json).unwrap();

        assert_eq!(back.word, "nayway");
        assert_eq!(back.suggestions.len(), 1);
        assert_eq!(back.suggestions[0].word, "anyway");
        assert_eq!(back.suggestions[0].distance, 1);
    }

    #[test]
    fn test_check_results_serialization() {
        let results = CheckResults {
            verdicts: vec![WordVerdict {
                word: "helo".to_string(),
                correct: false,
            }],
            words_checked: 1,
            misspelled: 1,
        };

        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("\"correct\":false"));
    }
}
