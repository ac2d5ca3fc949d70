use super::report::{Reporter, StderrReporter};
use super::token::{Literal, Token, TokenKind};
use crate::error::LexError;

/// Single-pass scanner turning source text into a flat token list
///
/// Lexical errors never stop a scan. Each one is handed to the scanner's
/// [`Reporter`] and kept in [`errors`](Scanner::errors); callers check
/// [`had_error`](Scanner::had_error) once [`scan_tokens`](Scanner::scan_tokens)
/// returns to decide whether the tokens are worth parsing.
///
/// A scanner is good for one pass over its source.
pub struct Scanner<R = StderrReporter> {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Accumulated diagnostics
    errors: Vec<LexError>,
    /// Where diagnostics are sent as they are found
    reporter: R,
    /// Start position of current lexeme
    start: usize,
    /// Current position in source
    current: usize,
    /// Line on which the current lexeme started
    start_line: usize,
    /// Current line number (1-indexed)
    line: usize,
}

impl Scanner<StderrReporter> {
    /// Creates a scanner that writes diagnostics to standard error
    pub fn new(source: &str) -> Self {
        Scanner::with_reporter(source, StderrReporter)
    }
}

impl<R: Reporter> Scanner<R> {
    /// Creates a scanner that sends diagnostics to `reporter`
    pub fn with_reporter(source: &str, reporter: R) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            errors: Vec::new(),
            reporter,
            start: 0,
            current: 0,
            start_line: 1,
            line: 1,
        }
    }

    /// Scans the whole source and returns its tokens, ending with exactly one
    /// [`TokenKind::Eof`]
    ///
    /// The tokens are moved out to the caller. Diagnostics stay on the
    /// scanner for inspection afterwards.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));

        tracing::trace!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            lines = self.line,
            "scan complete"
        );

        std::mem::take(&mut self.tokens)
    }

    /// True once any lexical error has been found
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Diagnostics found so far, in source order
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Current line number (1-indexed)
    pub fn line(&self) -> usize {
        self.line
    }

    /// Consumes the scanner, returning its reporter
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::BangEqual);
                } else {
                    self.add_token(TokenKind::Bang);
                }
            }
            '=' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::EqualEqual);
                } else {
                    self.add_token(TokenKind::Equal);
                }
            }
            '<' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::LessEqual);
                } else {
                    self.add_token(TokenKind::Less);
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::GreaterEqual);
                } else {
                    self.add_token(TokenKind::Greater);
                }
            }

            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => self.scan_string(),

            c if c.is_ascii_digit() => self.scan_number(),

            c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier_or_keyword(),

            _ => self.error(LexError::unexpected_character(c, self.line)),
        }
    }

    /// Leaves the newline in place so the main loop counts it
    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    fn scan_string(&mut self) {
        while !self.is_at_end() && self.peek() != '"' {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error(LexError::unterminated_string(self.line));
            return;
        }

        self.advance(); // Closing "

        let value: String = self.source[self.start + 1..self.current - 1]
            .iter()
            .collect();
        self.add_token_with_literal(TokenKind::String, Some(Literal::String(value)));
    }

    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A '.' only belongs to the number when a digit follows it
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume .
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        // digits with at most one interior '.' always parse
        let value: f64 = self.lexeme().parse().unwrap_or_default();
        self.add_token_with_literal(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn scan_identifier_or_keyword(&mut self) {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let kind = TokenKind::keyword(&self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn error(&mut self, error: LexError) {
        tracing::debug!(line = error.line, "lexical error: {}", error.kind);
        self.reporter.report(&error);
        self.errors.push(error);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.current += 1;
            true
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_token_with_literal(kind, None);
    }

    fn add_token_with_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.lexeme();
        self.tokens
            .push(Token::new(kind, lexeme, literal, self.start_line));
    }
}
