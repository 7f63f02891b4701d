//! Repl command implementation.

use std::io;

use monkey_drv::{Repl, TokenDump};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;

/// Arguments for the repl command.
#[derive(Debug, Default)]
pub struct ReplArgs {
    /// Prompt overriding the configured one.
    pub prompt: Option<String>,
    /// Echo the end-of-input token on every line.
    pub show_eof: bool,
}

/// Runs the interactive loop over stdin and stdout.
///
/// # Arguments
/// * `args` - Command-line overrides
/// * `config` - Loaded configuration
pub fn run_repl(args: ReplArgs, config: &Config) -> Result<()> {
    let mut options = config.repl.options();
    if let Some(prompt) = args.prompt {
        options.prompt = prompt;
    }

    let frontend = TokenDump::new().with_eof(args.show_eof || config.repl.show_eof);
    let mut repl = Repl::new(frontend, options);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = repl.run(stdin.lock(), stdout.lock())?;
    debug!(?stats, "session closed");
    Ok(())
}
