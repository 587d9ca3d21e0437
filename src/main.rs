use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser as ArgParser, ValueEnum};

use lexa::{Interpreter, Parser, Scanner, Token};

/// Command-line front end for the Lexa interpreter
#[derive(ArgParser)]
#[command(name = "lexa", version = lexa::VERSION, about)]
struct Cli {
    /// Pipeline stage to run
    #[arg(value_enum)]
    command: Command,
    /// Source file to process
    file: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    /// Print every scanned token, one per line
    Tokenize,
    /// Parse a single expression and print its parenthesized form
    Parse,
    /// Evaluate a single expression and print the result
    Evaluate,
    /// Execute a whole program
    Run,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.file) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Error reading file {}: {}", cli.file.display(), e);
            process::exit(1);
        }
    };

    let code = match cli.command {
        Command::Tokenize => tokenize(&source),
        Command::Parse => parse(&source),
        Command::Evaluate => evaluate(&source),
        Command::Run => run(&source),
    };
    process::exit(code);
}

fn tokenize(source: &str) -> i32 {
    let (tokens, errors) = Scanner::new(source).scan_tokens();

    for err in &errors {
        eprintln!("{}", err);
    }
    for token in &tokens {
        println!("{}", token);
    }

    if errors.is_empty() {
        0
    } else {
        65
    }
}

/// Scans the source, treating any collected lexical error as fatal
fn scan(source: &str) -> Result<Vec<Token>, i32> {
    let (tokens, errors) = Scanner::new(source).scan_tokens();
    if errors.is_empty() {
        Ok(tokens)
    } else {
        for err in &errors {
            eprintln!("{}", err);
        }
        Err(65)
    }
}

fn parse(source: &str) -> i32 {
    let tokens = match scan(source) {
        Ok(tokens) => tokens,
        Err(code) => return code,
    };

    match Parser::new(tokens).parse_expression() {
        Ok(expr) => {
            println!("{}", expr);
            0
        }
        Err(err) => {
            eprintln!("{}", err);
            err.classify().exit_code()
        }
    }
}

fn evaluate(source: &str) -> i32 {
    let tokens = match scan(source) {
        Ok(tokens) => tokens,
        Err(code) => return code,
    };

    let expr = match Parser::new(tokens).parse_expression() {
        Ok(expr) => expr,
        Err(err) => {
            eprintln!("{}", err);
            return err.classify().exit_code();
        }
    };

    match Interpreter::new().evaluate(&expr) {
        Ok(value) => {
            println!("{}", value);
            0
        }
        Err(err) => {
            eprintln!("{}", err);
            err.classify().exit_code()
        }
    }
}

fn run(source: &str) -> i32 {
    let tokens = match scan(source) {
        Ok(tokens) => tokens,
        Err(code) => return code,
    };

    let statements = match Parser::new(tokens).parse() {
        Ok(statements) => statements,
        Err(err) => {
            eprintln!("{}", err);
            return err.classify().exit_code();
        }
    };

    match Interpreter::new().run(&statements) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}", err);
            err.classify().exit_code()
        }
    }
}
