//! Error types for the Quill library.
//!
//! All fallible operations in Quill report failures through the [`QuillError`]
//! enum and the crate-wide [`Result`] alias. Nothing in the core panics or
//! terminates the host process; a query against a checker with no dictionary
//! yields an empty answer rather than an error.
//!
//! # Examples
//!
//! ```
//! use quill::error::{QuillError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(QuillError::invalid_argument("tolerance must be finite"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::collections::TryReserveError;
use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Quill operations.
#[derive(Error, Debug)]
pub enum QuillError {
    /// I/O errors (word list open/read failures)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No dictionary is loaded
    #[error("no dictionary loaded")]
    DictionaryUnavailable,

    /// Transient working memory could not be obtained
    #[error("allocation failure: {0}")]
    Allocation(#[from] TryReserveError),

    /// Invalid argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with QuillError.
pub type Result<T> = std::result::Result<T, QuillError>;

impl QuillError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        QuillError::InvalidArgument(msg.into())
    }

    /// True if this error is local to one candidate comparison rather than
    /// fatal to a whole operation.
    pub fn is_transient(&self) -> bool {
        matches!(self, QuillError::Allocation(_))
    }
}
