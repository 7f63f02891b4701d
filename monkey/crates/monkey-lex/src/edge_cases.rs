//! Edge case tests for monkey-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.is_eof() { break; }
            tokens.push(token);
        }
        tokens
    }

    fn tok(kind: TokenKind, literal: &str) -> Token {
        Token::new(kind, literal)
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source_eof_forever() {
        let mut lexer = Lexer::new("");
        for _ in 0..3 {
            let t = lexer.next_token();
            assert_eq!(t.kind, TokenKind::Eof);
            assert_eq!(t.literal, "");
        }
        assert_eq!(lexer.position(), 0);
    }

    #[test]
    fn test_edge_eof_after_tokens_repeats() {
        let mut lexer = Lexer::new("x");
        lexer.next_token();
        let end = lexer.position();
        assert!(lexer.next_token().is_eof());
        assert!(lexer.next_token().is_eof());
        assert_eq!(lexer.position(), end);
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), [tok(TokenKind::Ident, "x")]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("let {} = 1;", name));
        assert_eq!(t[1], tok(TokenKind::Ident, &name));
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("fn let if");
        assert_eq!(t[0].kind, TokenKind::Function);
        assert_eq!(t[1].kind, TokenKind::Let);
        assert_eq!(t[2].kind, TokenKind::If);
    }

    #[test]
    fn test_edge_bare_dot_is_illegal() {
        assert_eq!(lex_all("."), [tok(TokenKind::Illegal, ".")]);
    }

    #[test]
    fn test_edge_dot_before_digits() {
        assert_eq!(
            lex_all(".5"),
            [tok(TokenKind::Illegal, "."), tok(TokenKind::Int, "5")]
        );
    }

    #[test]
    fn test_edge_bare_plus_is_operator() {
        assert_eq!(lex_all("+"), [tok(TokenKind::Plus, "+")]);
        assert_eq!(
            lex_all("+12"),
            [tok(TokenKind::Plus, "+"), tok(TokenKind::Int, "12")]
        );
    }

    #[test]
    fn test_edge_negative_number_is_minus_then_int() {
        assert_eq!(
            lex_all("-5"),
            [tok(TokenKind::Minus, "-"), tok(TokenKind::Int, "5")]
        );
    }

    #[test]
    fn test_edge_subtraction_without_spaces() {
        // after two digits a sign is rejected and lexed again as an operator
        assert_eq!(
            lex_all("10-2"),
            [
                tok(TokenKind::Illegal, "-"),
                tok(TokenKind::Minus, "-"),
                tok(TokenKind::Int, "2"),
            ]
        );
        // after a single digit the sign still belongs to the literal
        assert_eq!(lex_all("1-2"), [tok(TokenKind::Float, "1-2")]);
        assert_eq!(
            lex_all("10 - 2"),
            [
                tok(TokenKind::Int, "10"),
                tok(TokenKind::Minus, "-"),
                tok(TokenKind::Int, "2"),
            ]
        );
    }

    #[test]
    fn test_edge_scientific_notation_is_illegal() {
        assert_eq!(
            lex_all("1e10"),
            [
                tok(TokenKind::Illegal, "e"),
                tok(TokenKind::Ident, "e"),
                tok(TokenKind::Int, "10"),
            ]
        );
    }

    #[test]
    fn test_edge_trailing_dot_number() {
        assert_eq!(
            lex_all("12. x"),
            [tok(TokenKind::Illegal, "."), tok(TokenKind::Ident, "x")]
        );
    }

    #[test]
    fn test_edge_empty_string() {
        assert_eq!(lex_all("\"\""), [tok(TokenKind::String, "")]);
    }

    #[test]
    fn test_edge_unterminated_string_swallows_rest() {
        assert_eq!(
            lex_all("\"abc; let x = 5"),
            [tok(TokenKind::String, "abc; let x = 5")]
        );
    }

    #[test]
    fn test_edge_all_operators() {
        let t = lex_all("= + - ! * / ** < > == != ; , : ( ) { } [ ]");
        assert_eq!(t.len(), 20);
        assert!(t.iter().all(|t| !t.is_illegal()));
        assert!(t.contains(&tok(TokenKind::Exponent, "**")));
    }

    #[test]
    fn test_edge_unsupported_operators() {
        let t = lex_all("& | % ^ ~ ? . # $ ' \\ `");
        assert_eq!(t.len(), 12);
        assert!(t.iter().all(Token::is_illegal));
    }

    #[test]
    fn test_edge_whitespace_prefix() {
        let bare = lex_all("foo");
        for prefix in [" ", "\t", "\n", "\r", " \t\r\n", "\n\n\n\t  "] {
            assert_eq!(lex_all(&format!("{prefix}foo")), bare, "{prefix:?}");
        }
    }

    #[test]
    fn test_edge_vertical_tab_is_not_whitespace() {
        assert_eq!(
            lex_all("\x0bx"),
            [tok(TokenKind::Illegal, "\x0b"), tok(TokenKind::Ident, "x")]
        );
    }

    #[test]
    fn test_edge_nul_byte_is_illegal_not_eof() {
        assert_eq!(
            lex_all("a\0b"),
            [
                tok(TokenKind::Ident, "a"),
                tok(TokenKind::Illegal, "\0"),
                tok(TokenKind::Ident, "b"),
            ]
        );
    }

    #[test]
    fn test_edge_emoji_is_single_illegal_token() {
        assert_eq!(
            lex_all("x😀y"),
            [
                tok(TokenKind::Ident, "x"),
                tok(TokenKind::Illegal, "😀"),
                tok(TokenKind::Ident, "y"),
            ]
        );
    }
}
