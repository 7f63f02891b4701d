//! monkey-lex - Lexical Analyzer for the Monkey Programming Language
//!
//! This crate turns a line (or file) of Monkey source text into a stream of
//! tokens for the parser. Tokens are pulled one at a time with
//! [`Lexer::next_token`]; once the input is exhausted every further call
//! returns [`TokenKind::Eof`].
//!
//! # Example Usage
//!
//! ```
//! use monkey_lex::{Lexer, Token, TokenKind};
//!
//! let mut lexer = Lexer::new("let x = 5;");
//!
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Let, "let"));
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "x"));
//!
//! // Or iterate until end of input
//! for token in Lexer::new("x ** 2") {
//!     println!("{}", token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token types and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Forward-only byte cursor
//! - [`chars`] - Byte classification
//!
//! # Token Categories
//!
//! **Keywords**: `fn`, `let`, `true`, `false`, `if`, `else`, `return`
//!
//! **Identifiers**: `[a-zA-Z_]+` (digits end an identifier)
//!
//! **Literals**: integers (`42`), floats (`3.14`, `+12`), strings (`"hi"`)
//!
//! **Operators**: `=` `+` `-` `!` `*` `/` `**` `<` `>` `==` `!=`
//!
//! **Delimiters**: `,` `;` `:` `(` `)` `{` `}` `[` `]`
//!
//! **Special**: `ILLEGAL` for anything unrecognised, `EOF` at end of input
//!
//! # Errors
//!
//! The lexer has no error type. A character it cannot classify, or a
//! malformed number, comes back as a [`TokenKind::Illegal`] token carrying
//! the offending character, and lexing resumes on the next call.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{classify_number, tokenize, Lexer, NumberState};
pub use token::{keyword_from_ident, lookup_ident, Token, TokenKind};
