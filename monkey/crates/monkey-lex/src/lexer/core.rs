//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use tracing::trace;

use crate::chars::{is_digit, is_letter};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the Monkey programming language.
///
/// The lexer transforms source text into a stream of tokens, one per call to
/// [`Lexer::next_token`]. It never fails: characters it cannot classify come
/// back as [`TokenKind::Illegal`] tokens and scanning continues on the next
/// call.
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace, then dispatches on the current byte. Once the input
    /// is exhausted every call returns [`TokenKind::Eof`] with an empty
    /// literal.
    pub fn next_token(&mut self) -> Token {
        self.cursor.skip_whitespace();
        self.mark_token_start();

        if self.cursor.is_at_end() {
            return Token::eof();
        }

        match self.cursor.current() {
            b'=' => self.lex_equals(),
            b'!' => self.lex_bang(),
            b'*' => self.lex_star(),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'/' => self.single(TokenKind::Slash),
            b'<' => self.single(TokenKind::Lt),
            b'>' => self.single(TokenKind::Gt),
            b';' => self.single(TokenKind::Semicolon),
            b',' => self.single(TokenKind::Comma),
            b':' => self.single(TokenKind::Colon),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b'[' => self.single(TokenKind::LBracket),
            b']' => self.single(TokenKind::RBracket),
            b'"' => self.lex_string(),
            b if is_letter(b) => self.lex_identifier(),
            b if is_digit(b) => self.lex_number(),
            _ => {
                let start = self.cursor.position();
                self.cursor.advance_char();
                let literal = self.cursor.slice_from(start);
                self.illegal(literal, start)
            },
        }
    }

    /// Builds an illegal token and records it in the trace log.
    pub(crate) fn illegal(&self, literal: &str, offset: usize) -> Token {
        trace!(literal, offset, "illegal token");
        Token::new(TokenKind::Illegal, literal)
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the byte offset of the next byte to be lexed.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the byte offset where the most recent token began.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns the line where the most recent token began.
    pub fn token_line(&self) -> u32 {
        self.token_start_line
    }

    /// Returns the column where the most recent token began.
    pub fn token_column(&self) -> u32 {
        self.token_start_column
    }

    /// Returns true once the whole input has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Tokenizes `source` completely, including the trailing [`TokenKind::Eof`].
///
/// # Example
///
/// ```
/// use monkey_lex::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("let x = 5;").into_iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Let,
///         TokenKind::Ident,
///         TokenKind::Assign,
///         TokenKind::Int,
///         TokenKind::Semicolon,
///         TokenKind::Eof,
///     ]
/// );
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
