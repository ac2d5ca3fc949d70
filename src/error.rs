//! Error types for the Loxscan scanner

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kinds of lexical error the scanner can encounter
///
/// Both kinds are non-fatal: the scanner records them and keeps going.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LexErrorKind {
    /// A character that starts no known lexeme
    ///
    /// **Triggered by:** stray punctuation or any non-ASCII character
    /// **Example:** `@`, `#`, `[`, `é`
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),

    /// A string literal whose opening quote is never closed
    ///
    /// **Triggered by:** reaching end of source inside a string
    /// **Example:** `print "hello;`
    #[error("Unterminated string")]
    UnterminatedString,
}

/// A single lexical diagnostic produced while scanning
///
/// Displays in the diagnostic channel format, `[line <N>] Error: <message>`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[error("[line {line}] Error: {kind}")]
pub struct LexError {
    /// What went wrong
    pub kind: LexErrorKind,
    /// Line the scanner was on when the error was found (1-indexed)
    pub line: usize,
}

impl LexError {
    /// Creates a diagnostic of the given kind at `line`
    pub fn new(kind: LexErrorKind, line: usize) -> Self {
        LexError { kind, line }
    }

    /// Creates an unexpected-character diagnostic
    pub fn unexpected_character(c: char, line: usize) -> Self {
        LexError::new(LexErrorKind::UnexpectedCharacter(c), line)
    }

    /// Creates an unterminated-string diagnostic
    pub fn unterminated_string(line: usize) -> Self {
        LexError::new(LexErrorKind::UnterminatedString, line)
    }

    /// The message part of the diagnostic, without the line prefix
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Failures of the helpers around the scanner
///
/// Scanning itself never fails; these only come from I/O and output encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Source file could not be read
    #[error("Failed to read '{path}': {message}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O error description
        message: String,
    },

    /// Token stream could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an I/O error for `path`
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Result type for Loxscan operations
pub type Result<T> = std::result::Result<T, Error>;
