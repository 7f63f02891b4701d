//! A token-printing frontend.
//!
//! [`TokenDump`] stands in for a real parser and evaluator: it drains the
//! lexer, reports illegal tokens the way a parser would, and "evaluates" a
//! line by rendering its tokens.

use std::fmt;

use monkey_lex::{Lexer, Token};

use crate::frontend::Frontend;

/// Frontend that echoes each line's tokens.
#[derive(Debug, Default)]
pub struct TokenDump {
    /// Whether rendered lines end with the `EOF()` token.
    include_eof: bool,

    /// Number of lines evaluated so far.
    evaluated: usize,
}

impl TokenDump {
    /// Creates a frontend that omits the end-of-input token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the end-of-input token is rendered.
    pub fn with_eof(mut self, include_eof: bool) -> Self {
        self.include_eof = include_eof;
        self
    }

    /// Returns the number of lines evaluated so far.
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }
}

/// The rendered tokens of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLine {
    /// 1-based count of evaluated lines, including this one.
    pub number: usize,
    /// Tokens in source order.
    pub tokens: Vec<Token>,
}

impl fmt::Display for TokenLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.number)?;
        for token in &self.tokens {
            write!(f, " {}", token)?;
        }
        Ok(())
    }
}

impl Frontend for TokenDump {
    type Program = Vec<Token>;
    type Value = TokenLine;

    fn parse(&mut self, lexer: &mut Lexer<'_>) -> Result<Self::Program, Vec<String>> {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        loop {
            let token = lexer.next_token();
            if token.is_illegal() {
                errors.push(format!(
                    "illegal token '{}' at column {}",
                    token.literal,
                    lexer.token_column()
                ));
            }
            if token.is_eof() {
                if self.include_eof {
                    tokens.push(token);
                }
                break;
            }
            tokens.push(token);
        }

        if errors.is_empty() {
            Ok(tokens)
        } else {
            Err(errors)
        }
    }

    fn eval(&mut self, program: Self::Program) -> Option<Self::Value> {
        self.evaluated += 1;
        Some(TokenLine {
            number: self.evaluated,
            tokens: program,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_lex::TokenKind;

    #[test]
    fn test_parse_collects_tokens() {
        let mut dump = TokenDump::new();
        let mut lexer = Lexer::new("let x = 5;");
        let program = dump.parse(&mut lexer).unwrap();
        assert_eq!(program.len(), 5);
        assert_eq!(program[3], Token::new(TokenKind::Int, "5"));
    }

    #[test]
    fn test_parse_reports_every_illegal_token() {
        let mut dump = TokenDump::new();
        let mut lexer = Lexer::new("x @ y # z");
        let errors = dump.parse(&mut lexer).unwrap_err();
        assert_eq!(
            errors,
            [
                "illegal token '@' at column 3",
                "illegal token '#' at column 7",
            ]
        );
    }

    #[test]
    fn test_eval_counts_lines() {
        let mut dump = TokenDump::new();
        let first = dump.eval(vec![Token::new(TokenKind::Ident, "a")]).unwrap();
        let second = dump.eval(Vec::new()).unwrap();
        assert_eq!(first.number, 1);
        assert_eq!(second.number, 2);
        assert_eq!(dump.evaluated(), 2);
    }

    #[test]
    fn test_render() {
        let mut dump = TokenDump::new().with_eof(true);
        let mut lexer = Lexer::new("1 ** 2");
        let program = dump.parse(&mut lexer).unwrap();
        let line = dump.eval(program).unwrap();
        assert_eq!(line.to_string(), "[1] INT(1) **(**) INT(2) EOF()");
    }
}
