//! Command implementations for the Quill CLI.

use std::path::Path;
use std::time::Instant;

use crate::checker::SpellChecker;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::normalize_query;
use crate::error::{QuillError, Result};
use crate::suggest::SuggestionConfig;

/// Execute a CLI command.
pub fn execute_command(args: QuillArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_words(check_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest_word(suggest_args.clone(), &args),
        Command::CheckText(text_args) => check_text(text_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Load a checker from a word list file, failing if no words are accepted.
fn load_checker(
    path: &Path,
    config: SuggestionConfig,
    cli_args: &QuillArgs,
) -> Result<SpellChecker> {
    if cli_args.verbosity() > 1 {
        println!("Loading word list from: {}", path.display());
    }

    let checker = SpellChecker::with_config(config);
    let count = checker.load_dictionary(path)?;
    if count == 0 {
        return Err(QuillError::DictionaryUnavailable);
    }

    if cli_args.verbosity() > 1 {
        println!("Accepted {count} words");
    }
    Ok(checker)
}

/// Check the spelling of one or more words.
fn check_words(args: CheckArgs, cli_args: &QuillArgs) -> Result<()> {
    let checker = load_checker(&args.dictionary, SuggestionConfig::default(), cli_args)?;

    let verdicts: Vec<WordVerdict> = args
        .words
        .iter()
        .map(|word| WordVerdict {
            word: word.clone(),
            correct: checker.is_word_correct(word),
        })
        .collect();

    let misspelled = verdicts.iter().filter(|v| !v.correct).count();
    let results = CheckResults {
        words_checked: verdicts.len(),
        misspelled,
        verdicts,
    };

    output_result("Spell check complete", &results, cli_args)
}

/// Suggest corrections for a single word.
fn suggest_word(args: SuggestArgs, cli_args: &QuillArgs) -> Result<()> {
    let config = SuggestionConfig {
        reject_shorter: !args.allow_shorter,
        ..Default::default()
    };
    let checker = load_checker(&args.dictionary, config, cli_args)?;

    let word_length = normalize_query(&args.word).chars().count();
    let start_time = Instant::now();
    let mut suggestions = checker.suggestions(
        &args.word,
        args.tolerance,
        word_length,
        args.length_tolerance,
    );
    let duration = start_time.elapsed();

    if let Some(limit) = args.limit {
        suggestions.truncate(limit);
    }

    let results = SuggestResults {
        word: args.word,
        suggestions,
        duration_ms: duration.as_millis() as u64,
    };

    output_result("Suggestion scan complete", &results, cli_args)
}

/// Spell check every word of a passage of text.
fn check_text(args: CheckTextArgs, cli_args: &QuillArgs) -> Result<()> {
    let checker = load_checker(&args.dictionary, SuggestionConfig::default(), cli_args)?;

    let words = extract_words(&args.text);
    let word_count = words.len();
    let mut errors = Vec::new();
    let mut seen = Vec::new();
    let mut error_count = 0;

    for word in words {
        if checker.is_word_correct(&word) {
            continue;
        }
        error_count += 1;
        if seen.contains(&word) {
            continue;
        }
        seen.push(word.clone());

        let word_length = word.chars().count();
        let mut suggestions =
            checker.suggestions(&word, args.tolerance, word_length, args.length_tolerance);
        suggestions.truncate(args.limit);
        errors.push(TextError { word, suggestions });
    }

    let results = TextCheckResults {
        word_count,
        error_count,
        errors,
    };

    output_result("Text check complete", &results, cli_args)
}

/// Show statistics for a word list.
fn show_stats(args: StatsArgs, cli_args: &QuillArgs) -> Result<()> {
    let start_time = Instant::now();
    let checker = load_checker(&args.dictionary, SuggestionConfig::default(), cli_args)?;
    let duration = start_time.elapsed();

    let results = DictionaryStats {
        path: args.dictionary.to_string_lossy().to_string(),
        word_count: checker.word_count(),
        duration_ms: duration.as_millis() as u64,
    };

    output_result("Word list loaded", &results, cli_args)
}

/// Split a passage into lowercase alphabetic words.
fn extract_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_words() {
        let words = extract_words("Hello, wrold! It's 2 words.");

        assert_eq!(words, ["hello", "wrold", "it", "s", "words"]);
    }

    #[test]
    fn test_extract_words_empty_text() {
        assert!(extract_words("  ,;! 42 ").is_empty());
    }
}
