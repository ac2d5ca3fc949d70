//! Lexical analysis for Lox source text
//!
//! Converts source text into a flat list of tokens in a single pass.
//! Diagnostics go through a [`Reporter`] as they are found.

mod report;
mod scanner;
mod token;

pub use report::{Reporter, SilentReporter, StderrReporter};
pub use scanner::Scanner;
pub use token::{Literal, Token, TokenKind};
