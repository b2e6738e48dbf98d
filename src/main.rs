//! `typefront` command line driver.
//!
//! Reads one source file, runs the lexer, parser and type checker over it
//! and reports diagnostics. Exits with status 1 if the program is rejected.

use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use typefront::{
    display_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::{type_check, AssignmentRule, ErrorPolicy, TypeCheckerOptions},
};

#[derive(Parser)]
#[command(name = "typefront")]
#[command(version)]
#[command(about = "Parses and type checks a source file", long_about = None)]
struct Cli {
    /// Source file to check
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Stop at the first type error
    #[arg(long)]
    fail_fast: bool,

    /// Accept numeric widening in declarations and assignments
    #[arg(long)]
    widening: bool,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> TypeCheckerOptions {
        TypeCheckerOptions {
            error_policy: if self.fail_fast {
                ErrorPolicy::FailFast
            } else {
                ErrorPolicy::CollectAll
            },
            assignment_rule: if self.widening {
                AssignmentRule::Widening
            } else {
                AssignmentRule::Exact
            },
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    debug!(file = %cli.input.display(), bytes = source.len(), "loaded source");

    if cli.tokens {
        for token in tokenize(&source) {
            println!("{}", token);
        }
    }

    let program = match parse(&source) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source, &cli.input);
            return Ok(ExitCode::FAILURE);
        }
    };

    let (_, errors) = type_check(&program, cli.options());

    if errors.is_empty() {
        println!("The type check was successful.");
        Ok(ExitCode::SUCCESS)
    } else {
        for error in &errors {
            display_error(error, &source, &cli.input);
        }
        Ok(ExitCode::FAILURE)
    }
}
