use loxscan::{scan, TokenKind};

fn main() {
    let source = r#"
        // Simple Lox program
        var x = 42;
        var y = 10.5;
        var result = x + y;

        if (result > 50) {
            print "high";
        } else {
            print "low";
        }
    "#;

    println!("=== Lox Scanner Demo ===\n");
    println!("Source code:\n{}\n", source);

    let output = scan(source);

    println!("Tokens generated: {}\n", output.tokens.len());
    println!("Token stream:");
    for (i, token) in output.tokens.iter().enumerate() {
        if token.kind != TokenKind::Eof {
            println!("  {}: {} at line {}", i, token, token.line);
        }
    }

    for err in &output.errors {
        eprintln!("{}", err);
    }
}
