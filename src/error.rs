//! Error types for the Wordscan library.
//!
//! All errors are represented by the [`WordscanError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use wordscan::error::{Result, WordscanError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordscanError::invalid_operation("student has no grades"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for Wordscan operations.
///
/// This enum represents all possible errors that can occur in the library.
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for the string-carrying
/// variants.
#[derive(Error, Debug)]
pub enum WordscanError {
    /// Analysis-related errors (tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordscanError.
pub type Result<T> = std::result::Result<T, WordscanError>;

impl WordscanError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WordscanError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        WordscanError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordscanError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WordscanError::analysis("bad token stream");
        assert_eq!(err.to_string(), "Analysis error: bad token stream");

        let err = WordscanError::invalid_operation("student has no grades");
        assert_eq!(
            err.to_string(),
            "Invalid operation: student has no grades"
        );

        let err = WordscanError::other("something else");
        assert_eq!(err.to_string(), "Error: something else");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: WordscanError = json_err.into();
        assert!(matches!(err, WordscanError::Json(_)));
    }
}
