//! String literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Consumes bytes verbatim up to the next `"` or the end of input. There
    /// are no escape sequences. An unterminated string is not an error: the
    /// token holds whatever was read before the input ran out.
    ///
    /// # Returns
    ///
    /// `TokenKind::String` with the text between the quotes
    pub fn lex_string(&mut self) -> Token {
        // opening quote
        self.cursor.advance();
        let start = self.cursor.position();

        while !self.cursor.is_at_end() && self.cursor.current() != b'"' {
            self.cursor.advance();
        }

        let content = self.cursor.slice_from(start);
        // closing quote, if any
        self.cursor.advance();

        Token::new(TokenKind::String, content)
    }
}
