//! Mondegreen Interpreter CLI

use clap::{Parser, Subcommand};
use mondegreen::error::report_error;
use mondegreen::lexicon::Lexicon;
use mondegreen::{fuzzy, lexer, numeral, parser, LangError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mondegreen", version, about = "Mondegreen - a language you can mishear")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a program
    Run {
        /// Source file to run
        file: PathBuf,
        /// Lexicon file (defaults to the built-in English lexicon)
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
    /// Parse and dump the program as JSON (debug)
    Parse {
        /// Source file to parse
        file: PathBuf,
        /// Lexicon file (defaults to the built-in English lexicon)
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
    /// Tokenize and dump tokens with their numeral encodings (debug)
    Tokens {
        /// Source file to tokenize
        file: PathBuf,
        /// Lexicon file (defaults to the built-in English lexicon)
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run { file, lexicon } => run_file(&file, lexicon.as_deref()),
        Command::Parse { file, lexicon } => parse_file(&file, lexicon.as_deref()),
        Command::Tokens { file, lexicon } => tokens_file(&file, lexicon.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load_lexicon(path: Option<&std::path::Path>) -> Result<Lexicon, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(Lexicon::parse(&text)?)
        }
        None => Ok(Lexicon::english()),
    }
}

fn run_file(
    path: &PathBuf,
    lexicon: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;
    let filename = path.display().to_string();
    let lexicon = load_lexicon(lexicon)?;

    let program = match parser::parse(&source, &lexicon) {
        Ok(program) => program,
        Err(error) => {
            report_error(&filename, &source, &error);
            std::process::exit(1);
        }
    };

    let mut interpreter = mondegreen::interp::Interpreter::new(&lexicon, &program);
    if let Err(error) = interpreter.run() {
        report_error(&filename, &source, &LangError::from(error));
        std::process::exit(1);
    }
    Ok(())
}

fn parse_file(
    path: &PathBuf,
    lexicon: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;
    let lexicon = load_lexicon(lexicon)?;

    let program = parser::parse(&source, &lexicon)?;
    println!("{}", serde_json::to_string_pretty(&program)?);
    Ok(())
}

fn tokens_file(
    path: &PathBuf,
    lexicon: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;
    let lexicon = load_lexicon(lexicon)?;

    for token in lexer::tokenize(&source) {
        let reduced = fuzzy::reduce(&lexicon, &token.text);
        let value = numeral::encode(&lexicon, &token.text);
        println!(
            "{:?} @ {}..{} reduced {:?} = {}",
            token.text, token.span.start, token.span.end, reduced, value
        );
    }
    Ok(())
}
