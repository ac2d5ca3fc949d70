//! End-to-end scanning scenarios through the public API

use loxscan::{scan, LexError, LexErrorKind, Literal, Scanner, Token, TokenKind};
use TokenKind::*;

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn num(n: f64) -> Option<Literal> {
    Some(Literal::Number(n))
}

#[test]
fn arithmetic_expression() {
    let output = scan("(1 + 2) * 3\n");

    assert!(!output.had_error());
    assert_eq!(
        output.tokens,
        vec![
            Token::new(LeftParen, "(".into(), None, 1),
            Token::new(Number, "1".into(), num(1.0), 1),
            Token::new(Plus, "+".into(), None, 1),
            Token::new(Number, "2".into(), num(2.0), 1),
            Token::new(RightParen, ")".into(), None, 1),
            Token::new(Star, "*".into(), None, 1),
            Token::new(Number, "3".into(), num(3.0), 1),
            Token::eof(2),
        ]
    );
}

#[test]
fn variable_declaration_with_string() {
    let output = scan("var x = \"hi\";");

    assert!(!output.had_error());
    assert_eq!(
        kinds(&output.tokens),
        vec![Var, Identifier, Equal, String, Semicolon, Eof]
    );
    assert_eq!(output.tokens[1].lexeme, "x");
    assert_eq!(output.tokens[3].lexeme, "\"hi\"");
    assert_eq!(
        output.tokens[3].literal,
        Some(Literal::String("hi".to_string()))
    );
}

#[test]
fn unterminated_string_yields_only_eof() {
    let output = scan("\"unterminated");

    assert!(output.had_error());
    assert_eq!(output.tokens, vec![Token::eof(1)]);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(
        output.errors[0].to_string(),
        "[line 1] Error: Unterminated string"
    );
}

#[test]
fn comparison_operators() {
    let output = scan("1 <= 2 != 3");

    assert!(!output.had_error());
    assert_eq!(
        kinds(&output.tokens),
        vec![Number, LessEqual, Number, BangEqual, Number, Eof]
    );
    let literals: Vec<_> = output
        .tokens
        .iter()
        .filter(|t| t.kind == Number)
        .map(|t| t.literal.clone())
        .collect();
    assert_eq!(literals, vec![num(1.0), num(2.0), num(3.0)]);
}

#[test]
fn unexpected_character_does_not_stop_scan() {
    let output = scan("var a = 1;\nprint a @ 2;\n");

    assert!(output.had_error());
    assert_eq!(output.errors, vec![LexError::unexpected_character('@', 2)]);
    assert_eq!(
        output.errors[0].to_string(),
        "[line 2] Error: Unexpected character: @"
    );
    assert_eq!(
        kinds(&output.tokens),
        vec![Var, Identifier, Equal, Number, Semicolon, Print, Identifier, Number, Semicolon, Eof]
    );
}

#[test]
fn comment_then_number() {
    let output = scan("// comment\n42");

    assert!(!output.had_error());
    assert_eq!(
        output.tokens,
        vec![Token::new(Number, "42".into(), num(42.0), 2), Token::eof(2)]
    );
}

#[test]
fn identifier_run_is_a_single_token() {
    let output = scan("abc123_x");
    assert_eq!(
        output.tokens,
        vec![Token::new(Identifier, "abc123_x".into(), None, 1), Token::eof(1)]
    );
}

#[test]
fn small_program() {
    let source = r#"
class Greeter {
  greet(name) {
    // say hello
    print "Hello, " + name;
  }
}

fun count(n) {
  for (var i = 0; i < n; i = i + 1) {
    if (i >= 10 and !done) return nil;
  }
  while (true or false) this.x = super.y / 2.5 - -1;
}
"#;
    let output = scan(source);

    assert!(!output.had_error(), "{:?}", output.errors);
    let keywords: Vec<TokenKind> = output
        .tokens
        .iter()
        .map(|t| t.kind)
        .filter(|k| k.is_keyword())
        .collect();
    assert_eq!(
        keywords,
        vec![
            Class, Print, Fun, For, Var, If, And, Return, Nil, While, True, Or, False, This,
            Super
        ]
    );

    let print = output.tokens.iter().position(|t| t.kind == Print).unwrap();
    assert_eq!(output.tokens[print].line, 5);
    assert_eq!(
        output.tokens[print + 1].literal,
        Some(Literal::String("Hello, ".to_string()))
    );

    let last = output.tokens.last().unwrap();
    assert_eq!(last, &Token::eof(15));
}

#[test]
fn scanner_reports_to_custom_reporter() {
    let mut seen: Vec<LexError> = Vec::new();
    let mut scanner = Scanner::with_reporter("[1]\n\"oops", &mut seen);
    let tokens = scanner.scan_tokens();

    assert!(scanner.had_error());
    assert_eq!(scanner.errors().len(), 3);
    assert_eq!(kinds(&tokens), vec![Number, Eof]);
    drop(scanner);

    assert_eq!(
        seen,
        vec![
            LexError::unexpected_character('[', 1),
            LexError::unexpected_character(']', 1),
            LexError::unterminated_string(2),
        ]
    );
}

#[test]
fn tokens_render_for_inspection() {
    let output = scan("print 12 + \"a\";");
    let rendered: Vec<std::string::String> =
        output.tokens.iter().map(|t| t.to_string()).collect();

    assert_eq!(
        rendered,
        vec![
            "PRINT print null",
            "NUMBER 12 12.0",
            "PLUS + null",
            "STRING \"a\" a",
            "SEMICOLON ; null",
            "EOF  null",
        ]
    );
}
