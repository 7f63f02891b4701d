//! The read-eval-print loop.

use std::io::{BufRead, Write};

use monkey_lex::Lexer;
use tracing::{debug, info};

use crate::error::Result;
use crate::frontend::Frontend;

/// Prompt printed before each line when none is configured.
pub const DEFAULT_PROMPT: &str = ">> ";

/// Options for a [`Repl`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplOptions {
    /// Text written before each input line.
    pub prompt: String,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Counters collected over one [`Repl::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplStats {
    /// Non-blank lines read.
    pub lines: usize,
    /// Lines rejected by the parser.
    pub errors: usize,
    /// Values printed.
    pub values: usize,
}

/// Line-at-a-time driver over a [`Frontend`].
///
/// Every line gets a fresh lexer; the frontend, and whatever environment it
/// holds, lives for the whole session.
pub struct Repl<F: Frontend> {
    frontend: F,
    options: ReplOptions,
}

impl<F: Frontend> Repl<F> {
    /// Creates a driver around `frontend`.
    pub fn new(frontend: F, options: ReplOptions) -> Self {
        Self { frontend, options }
    }

    /// Returns the frontend.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Consumes the driver and returns the frontend.
    pub fn into_frontend(self) -> F {
        self.frontend
    }

    /// Runs the loop until `input` is exhausted.
    ///
    /// For each line: write the prompt, read the line, parse it, then either
    /// list the parser errors or evaluate the program and print its value.
    /// Syntax errors never end the loop; only I/O failures do.
    ///
    /// # Returns
    /// * `Result<ReplStats>` - Counters for the session or an I/O error
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<ReplStats> {
        info!(prompt = %self.options.prompt, "starting repl");
        let mut stats = ReplStats::default();
        let mut line = String::new();

        loop {
            write!(output, "{}", self.options.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let source = line.trim_end_matches(&['\n', '\r'][..]);
            if source.trim().is_empty() {
                continue;
            }
            stats.lines += 1;

            let mut lexer = Lexer::new(source);
            match self.frontend.parse(&mut lexer) {
                Err(errors) => {
                    debug!(line = stats.lines, errors = errors.len(), "parse failed");
                    stats.errors += 1;
                    print_parser_errors(&mut output, &errors)?;
                },
                Ok(program) => {
                    debug!(line = stats.lines, "parsed");
                    if let Some(value) = self.frontend.eval(program) {
                        writeln!(output, "{}", value)?;
                        stats.values += 1;
                    }
                },
            }
        }

        info!(
            lines = stats.lines,
            errors = stats.errors,
            values = stats.values,
            "repl finished"
        );
        Ok(stats)
    }
}

fn print_parser_errors<W: Write>(output: &mut W, errors: &[String]) -> Result<()> {
    writeln!(output, "parser errors:")?;
    for message in errors {
        writeln!(output, "\t{}", message)?;
    }
    Ok(())
}
