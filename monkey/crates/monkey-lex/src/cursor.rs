//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which walks the source one byte
//! at a time with a single byte of lookahead. It tracks line/column
//! information for error reporting and never moves backwards.

use crate::chars::is_whitespace;

/// Value of [`Cursor::current`] once the cursor has run past the input.
pub const SENTINEL: u8 = 0;

/// A forward-only cursor over source text.
///
/// `read_position` is always `position + 1`, and `ch` is the byte at
/// `position`, or [`SENTINEL`] when `position` is at or past the end.
///
/// # Example
///
/// ```
/// use monkey_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x = 5;");
///
/// assert_eq!(cursor.current(), b'l');
/// assert_eq!(cursor.peek(), b'e');
/// cursor.advance();
/// assert_eq!(cursor.current(), b'e');
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of `ch`.
    position: usize,

    /// Byte offset of the lookahead byte.
    read_position: usize,

    /// Current byte, or `SENTINEL` past the end.
    ch: u8,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned on the first byte of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            read_position: 1,
            ch: source.as_bytes().first().copied().unwrap_or(SENTINEL),
            line: 1,
            column: 1,
        }
    }

    /// Returns the current byte, or [`SENTINEL`] at the end of the source.
    #[inline]
    pub fn current(&self) -> u8 {
        self.ch
    }

    /// Returns the byte after the current one without consuming anything.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::cursor::{Cursor, SENTINEL};
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek(), b'b');
    ///
    /// let cursor = Cursor::new("a");
    /// assert_eq!(cursor.peek(), SENTINEL);
    /// ```
    #[inline]
    pub fn peek(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(SENTINEL)
    }

    /// Advances the cursor by one byte.
    ///
    /// Updates line and column tracking. Does nothing if already at end, so
    /// the cursor stays pinned on the sentinel.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        let b = self.ch;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if !is_utf8_continuation(b) {
            self.column += 1;
        }

        self.position = self.read_position;
        self.read_position += 1;
        self.ch = self
            .source
            .as_bytes()
            .get(self.position)
            .copied()
            .unwrap_or(SENTINEL);
    }

    /// Advances past the whole character starting at the current byte.
    ///
    /// For ASCII this is a single byte. For a multi-byte UTF-8 sequence the
    /// cursor lands on the next character boundary.
    pub fn advance_char(&mut self) {
        self.advance();
        while !self.is_at_end() && is_utf8_continuation(self.ch) {
            self.advance();
        }
    }

    /// Skips space, tab, newline and carriage return bytes.
    pub fn skip_whitespace(&mut self) {
        while !self.is_at_end() && is_whitespace(self.ch) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the byte offset of the current byte.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the byte offset of the lookahead byte.
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// Returns the source from `start` up to (not including) the current
    /// position.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.advance();
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        let end = self.position.min(self.source.len());
        &self.source[start..end]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[inline]
fn is_utf8_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}
