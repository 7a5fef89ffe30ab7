//! # Quill
//!
//! A fuzzy word matching and spelling suggestion library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Restricted Damerau-Levenshtein edit distance (adjacent transpositions)
//! - Plain text word lists, one word per line
//! - Length-pruned dictionary scan with a hard result cap
//! - Deterministic ranking by distance, then alphabetically
//! - Thread-safe checker with an explicit load/reload lifecycle

pub mod checker;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod levenshtein;
pub mod suggest;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound on word length, in characters.
///
/// Dictionary lines whose normalized length is `MAX_WORD_LEN` or more are
/// excluded at load time rather than truncated, so a clipped prefix can never
/// masquerade as a real word. Queries longer than the bound are truncated to
/// `MAX_WORD_LEN - 1` characters before processing. Every consumer of this
/// bound (library, CLI, tests) must reference this constant rather than
/// repeat the literal.
pub const MAX_WORD_LEN: usize = 50;

/// Hard cap on the number of suggestions buffered for a single query.
///
/// The dictionary scan stops once this many candidates have been accepted,
/// which bounds worst-case time and memory at the cost of possibly dropping
/// better matches that appear later in the store. Callers that consume
/// suggestion lists must size their buffers from this constant.
pub const MAX_SUGGESTIONS: usize = 1000;
