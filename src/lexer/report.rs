//! Diagnostic channel for lexical errors
//!
//! The scanner hands every [`LexError`] to a [`Reporter`] the moment it is
//! found, then carries on scanning.

use std::io::Write;

use crate::error::LexError;

/// Receives lexical diagnostics as the scanner finds them
pub trait Reporter {
    /// Called once per lexical error, in source order
    fn report(&mut self, error: &LexError);
}

/// Writes `[line <N>] Error: <message>` lines to standard error
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&mut self, error: &LexError) {
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        if let Err(e) = writeln!(handle, "{}", error) {
            tracing::warn!("Failed to write diagnostic to stderr: {}", e);
        }
    }
}

/// Discards every diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _error: &LexError) {}
}

impl Reporter for Vec<LexError> {
    fn report(&mut self, error: &LexError) {
        self.push(*error);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, error: &LexError) {
        (**self).report(error);
    }
}
