//! # Loxscan - a scanner for Lox
//!
//! Loxscan turns the source text of a small Lox-style scripting language into a
//! flat list of typed tokens, ready for a parser.
//!
//! ## Features
//!
//! - **Single pass** - maximal munch with one character of lookahead
//! - **Never gives up** - lexical errors are collected and scanning continues
//! - **Always terminated** - every token list ends with exactly one `EOF`
//! - **Line tracking** - every token and diagnostic carries its line
//!
//! ## Quick Start
//!
//! ```rust
//! use loxscan::{Scanner, SilentReporter, TokenKind};
//!
//! let mut scanner = Scanner::with_reporter("var x = \"hi\";", SilentReporter);
//! let tokens = scanner.scan_tokens();
//!
//! assert!(!scanner.had_error());
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Var,
//!         TokenKind::Identifier,
//!         TokenKind::Equal,
//!         TokenKind::String,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! ## Error Handling
//!
//! Scanning itself never fails. Each lexical error is reported and recorded,
//! and the caller decides what to do with it:
//!
//! ```rust
//! use loxscan::{scan, LexErrorKind};
//!
//! let output = scan("print @;");
//!
//! assert!(output.had_error());
//! assert_eq!(output.errors[0].kind, LexErrorKind::UnexpectedCharacter('@'));
//! assert_eq!(output.errors[0].to_string(), "[line 1] Error: Unexpected character: @");
//! // the rest of the line still scanned
//! assert_eq!(output.tokens.len(), 3);
//! ```
//!
//! `Scanner::new` writes diagnostics to standard error in the
//! `[line <N>] Error: <message>` format. Pass any other [`Reporter`] to
//! [`Scanner::with_reporter`] to route them elsewhere.

pub mod error;
pub mod lexer;

use std::path::Path;

pub use error::{Error, LexError, LexErrorKind, Result};
pub use lexer::{Literal, Reporter, Scanner, SilentReporter, StderrReporter, Token, TokenKind};

/// Version of the Loxscan crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokens and diagnostics from one complete scan
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    /// Scanned tokens, ending with exactly one [`TokenKind::Eof`]
    pub tokens: Vec<Token>,
    /// Lexical errors in source order
    pub errors: Vec<LexError>,
}

impl ScanOutput {
    /// True if any lexical error occurred
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scans `source`, collecting diagnostics instead of printing them
pub fn scan(source: &str) -> ScanOutput {
    let mut scanner = Scanner::with_reporter(source, SilentReporter);
    let tokens = scanner.scan_tokens();

    ScanOutput {
        tokens,
        errors: scanner.errors().to_vec(),
    }
}

/// Reads the file at `path` and scans its contents
pub fn scan_file(path: impl AsRef<Path>) -> Result<ScanOutput> {
    let path = path.as_ref();
    tracing::debug!("scanning {}", path.display());

    let source =
        std::fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), &e))?;
    Ok(scan(&source))
}

/// Encodes tokens as a pretty-printed JSON array
///
/// JSON has no encoding for infinity, so a number literal that overflowed
/// `f64` (a very long digit run) is an [`Error::Serialization`].
pub fn tokens_to_json(tokens: &[Token]) -> Result<String> {
    if let Some(token) = tokens
        .iter()
        .find(|t| matches!(t.literal, Some(Literal::Number(n)) if !n.is_finite()))
    {
        return Err(Error::Serialization(format!(
            "number literal on line {} does not fit in an f64",
            token.line
        )));
    }
    Ok(serde_json::to_string_pretty(tokens)?)
}
