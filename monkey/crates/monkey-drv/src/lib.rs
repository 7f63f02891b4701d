//! monkey-drv - Driver loop for the Monkey language
//!
//! Reads source one line at a time, gives every line a fresh
//! [`monkey_lex::Lexer`], and hands it to a [`Frontend`] that parses and
//! evaluates it. The frontend is the only part that knows the grammar; the
//! driver only cares whether a line produced errors or a value.
//!
//! ```
//! use monkey_drv::{Repl, ReplOptions, TokenDump};
//!
//! let mut repl = Repl::new(TokenDump::new(), ReplOptions::default());
//! let mut output = Vec::new();
//! let stats = repl.run("let x = 5;\n".as_bytes(), &mut output).unwrap();
//! assert_eq!(stats.values, 1);
//! ```

pub mod dump;
pub mod error;
pub mod frontend;
pub mod repl;

pub use dump::{TokenDump, TokenLine};
pub use error::{DriverError, Result};
pub use frontend::Frontend;
pub use repl::{Repl, ReplOptions, ReplStats, DEFAULT_PROMPT};
