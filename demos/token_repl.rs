//! Line-at-a-time token REPL
//!
//! Usage: cargo run --example token_repl

use loxscan::Scanner;
use std::io::{self, Write};

fn main() {
    println!("Lox token REPL v{}", loxscan::VERSION);
    println!("Type a line of Lox to see its tokens.");
    println!("Type 'exit' or press Ctrl+D to quit.");
    println!();

    let mut line_num = 1;

    loop {
        print!("lox[{}]> ", line_num);
        if let Err(err) = io::stdout().flush() {
            eprintln!("Error flushing stdout: {}", err);
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                eprintln!("Error reading input: {}", err);
                continue;
            }
        }

        let input = input.trim_end_matches(['\n', '\r']);

        match input.trim() {
            "" => continue,
            "exit" | "quit" => break,
            _ => {}
        }

        // Diagnostics are written to stderr as they are found
        let mut scanner = Scanner::new(input);
        for token in scanner.scan_tokens() {
            println!("  {}", token);
        }
        if scanner.had_error() {
            println!("  ({} error(s))", scanner.errors().len());
        }

        line_num += 1;
    }
}
