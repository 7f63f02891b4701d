//! Identifier and keyword lexing.

use crate::chars::is_letter;
use crate::token::{lookup_ident, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers are maximal runs of ASCII letters and underscores; a digit
    /// ends the identifier. The text is then checked against the keyword
    /// table.
    ///
    /// # Returns
    ///
    /// Either a keyword token (e.g., `TokenKind::Let`) or `TokenKind::Ident`
    pub fn lex_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && is_letter(self.cursor.current()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        Token::new(lookup_ident(text), text)
    }
}
