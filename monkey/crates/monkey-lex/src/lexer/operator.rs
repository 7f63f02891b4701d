//! Operator and punctuation lexing.
//!
//! Only `=`, `!` and `*` have two-character forms; the peeked byte is
//! consumed only when the compound form matches.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes assign or equals.
    ///
    /// Handles: `=`, `==`
    pub fn lex_equals(&mut self) -> Token {
        self.compound(b'=', TokenKind::Eq, TokenKind::Assign)
    }

    /// Lexes bang or not-equals.
    ///
    /// Handles: `!`, `!=`
    pub fn lex_bang(&mut self) -> Token {
        self.compound(b'=', TokenKind::NotEq, TokenKind::Bang)
    }

    /// Lexes asterisk or exponent.
    ///
    /// Handles: `*`, `**`
    pub fn lex_star(&mut self) -> Token {
        self.compound(b'*', TokenKind::Exponent, TokenKind::Asterisk)
    }

    /// Consumes the current byte as a one-character token of `kind`.
    pub(crate) fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(start))
    }

    fn compound(&mut self, second: u8, double: TokenKind, single: TokenKind) -> Token {
        let start = self.cursor.position();
        let kind = if self.cursor.peek() == second {
            self.cursor.advance();
            double
        } else {
            single
        };
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(start))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::Lexer;

    fn lex_two(source: &str) -> (Token, Token) {
        let mut lexer = Lexer::new(source);
        (lexer.next_token(), lexer.next_token())
    }

    #[test]
    fn test_compound_operators() {
        assert_eq!(lex_two("==").0, Token::new(TokenKind::Eq, "=="));
        assert_eq!(lex_two("!=").0, Token::new(TokenKind::NotEq, "!="));
        assert_eq!(lex_two("**").0, Token::new(TokenKind::Exponent, "**"));
    }

    #[test]
    fn test_compound_consumes_two_bytes() {
        for source in ["==", "!=", "**"] {
            let mut lexer = Lexer::new(source);
            lexer.next_token();
            assert_eq!(lexer.position(), 2, "{source}");
            assert!(lexer.next_token().is_eof());
        }
    }

    #[test]
    fn test_single_forms() {
        assert_eq!(lex_two("=").0, Token::new(TokenKind::Assign, "="));
        assert_eq!(lex_two("!").0, Token::new(TokenKind::Bang, "!"));
        assert_eq!(lex_two("*").0, Token::new(TokenKind::Asterisk, "*"));
    }

    #[test]
    fn test_mismatched_lookahead_is_not_consumed() {
        let (first, second) = lex_two("=!");
        assert_eq!(first, Token::new(TokenKind::Assign, "="));
        assert_eq!(second, Token::new(TokenKind::Bang, "!"));

        let (first, second) = lex_two("*=");
        assert_eq!(first, Token::new(TokenKind::Asterisk, "*"));
        assert_eq!(second, Token::new(TokenKind::Assign, "="));

        let (first, second) = lex_two("!x");
        assert_eq!(first.kind, TokenKind::Bang);
        assert_eq!(second, Token::new(TokenKind::Ident, "x"));
    }

    #[test]
    fn test_triple_operators_split_greedily() {
        let (first, second) = lex_two("===");
        assert_eq!(first.kind, TokenKind::Eq);
        assert_eq!(second.kind, TokenKind::Assign);

        let (first, second) = lex_two("***");
        assert_eq!(first.kind, TokenKind::Exponent);
        assert_eq!(second.kind, TokenKind::Asterisk);
    }

    #[test]
    fn test_comparison_has_no_compound_form() {
        let (first, second) = lex_two("<=");
        assert_eq!(first.kind, TokenKind::Lt);
        assert_eq!(second.kind, TokenKind::Assign);
    }
}
