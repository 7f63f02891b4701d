//! Monkey CLI - interactive front end for the Monkey language.
//!
//! This is the main entry point for the `monkey` binary. It uses clap for
//! argument parsing and dispatches to the appropriate command handler.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    lex::{run_lex, LexArgs},
    repl::{run_repl, ReplArgs},
};
use config::Config;
use error::{CliError, Result};

/// Monkey - lexical front end and REPL for the Monkey language
#[derive(Parser, Debug)]
#[command(name = "monkey")]
#[command(author = "Monkey Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical front end and REPL for the Monkey language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MONKEY_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MONKEY_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MONKEY_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the monkey CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive loop (default)
    ///
    /// Reads one line at a time from stdin and prints the tokens of each
    /// line, or the errors found on it.
    Repl(ReplCommand),

    /// Tokenize a file
    ///
    /// Prints one token per line and exits with an error if any illegal
    /// token was found.
    Lex(LexCommand),
}

/// Arguments for the repl subcommand.
#[derive(Parser, Debug)]
struct ReplCommand {
    /// Prompt printed before each line (default: from config)
    #[arg(short, long)]
    prompt: Option<String>,

    /// Show the end-of-input token on every line
    #[arg(long)]
    show_eof: bool,
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// File to tokenize, or `-` for stdin
    input: PathBuf,

    /// Print tokens as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Parses arguments, loads configuration, initializes logging and runs the
/// selected command.
fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, &config)?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never interleave with REPL or token output.
/// `RUST_LOG` takes precedence over the verbosity flag.
///
/// # Arguments
/// * `verbose` - Whether to enable debug logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command, defaulting to the REPL.
fn execute_command(command: Option<Commands>, config: &Config) -> Result<()> {
    match command {
        None => run_repl(ReplArgs::default(), config),
        Some(Commands::Repl(args)) => run_repl(
            ReplArgs {
                prompt: args.prompt,
                show_eof: args.show_eof,
            },
            config,
        ),
        Some(Commands::Lex(args)) => run_lex(
            LexArgs {
                input: args.input,
                json: args.json,
            },
            config,
        ),
    }
}
