//! loxscan CLI - print the token stream of a Lox source file

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use loxscan::{tokens_to_json, Scanner, Token, VERSION};
use tracing_subscriber::EnvFilter;

/// Exit status for input that failed to scan
const EXIT_DATA_ERROR: u8 = 65;

#[derive(Parser)]
#[command(
    name = "loxscan",
    about = "Lexical scanner for the Lox scripting language",
    version = VERSION
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a file and print one token per line
    Tokenize {
        /// Lox source file to scan
        file: PathBuf,

        /// Print the tokens as a JSON array instead
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Tokenize { file, json } => tokenize(file, *json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default filter
fn init_logging(verbose: bool) {
    let default = if verbose { "loxscan=debug" } else { "loxscan=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn tokenize(file: &Path, json: bool) -> anyhow::Result<ExitCode> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file {}", file.display()))?;

    let mut scanner = Scanner::new(&source);
    let tokens = scanner.scan_tokens();
    tracing::debug!(
        "{}: {} tokens, {} errors",
        file.display(),
        tokens.len(),
        scanner.errors().len()
    );

    let written = if json {
        let encoded = tokens_to_json(&tokens)?;
        writeln!(io::stdout().lock(), "{}", encoded)
    } else {
        print_tokens(&tokens)
    };

    match written {
        Ok(()) => {}
        // reader went away (e.g. piped into `head`); stop quietly
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed early: {}", e);
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to write tokens")),
    }

    if scanner.had_error() {
        Ok(ExitCode::from(EXIT_DATA_ERROR))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn print_tokens(tokens: &[Token]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    out.flush()
}
