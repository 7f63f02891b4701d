//! Command implementations for the monkey CLI.
//!
//! This module contains the implementation of all subcommands:
//! - `repl` - Interactive read-eval-print loop
//! - `lex` - Tokenize a file

pub mod lex;
pub mod repl;
