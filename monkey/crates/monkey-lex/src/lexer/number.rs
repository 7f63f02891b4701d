//! Number literal lexing.
//!
//! Numeric literals are recognised by a small deterministic automaton over
//! the bytes of the literal. Acceptance and classification are separate: the
//! automaton decides whether a span is a well-formed literal, and
//! [`classify_number`] decides whether an accepted span is an integer or a
//! float.

use crate::chars::{is_digit, is_number_continue, is_sign};
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// States of the numeric literal automaton.
///
/// | State | digit | `.` | sign | other |
/// |---|---|---|---|---|
/// | `Initial` | `IntegerDigits` | `FractionStart` | `SignSeen` | reject |
/// | `SignSeen` | `IntegerDigits` | `FractionStart` | reject | reject |
/// | `IntegerDigits` | `IntegerDigits` | `FractionStart` | reject | reject |
/// | `FractionStart` | `FractionDigits` | reject | reject | reject |
/// | `FractionDigits` | `FractionDigits` | reject | reject | reject |
///
/// Exponent markers keep a scan going (see
/// [`is_number_continue`](crate::chars::is_number_continue)) but no state
/// accepts them, so `1e5` is rejected at the `e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberState {
    /// Nothing consumed yet.
    Initial,
    /// A leading `+` or `-`, no digits yet.
    SignSeen,
    /// Inside the integer part.
    IntegerDigits,
    /// A `.` consumed, no fractional digit yet.
    FractionStart,
    /// Inside the fractional part.
    FractionDigits,
}

impl NumberState {
    /// Feeds one byte to the automaton.
    ///
    /// Returns the next state, or `None` if the byte is rejected.
    pub fn step(self, b: u8) -> Option<NumberState> {
        use NumberState::*;

        match self {
            Initial | SignSeen | IntegerDigits if is_digit(b) => Some(IntegerDigits),
            Initial | SignSeen | IntegerDigits if b == b'.' => Some(FractionStart),
            Initial if is_sign(b) => Some(SignSeen),
            FractionStart | FractionDigits if is_digit(b) => Some(FractionDigits),
            _ => None,
        }
    }

    /// Returns true if a scan may stop in this state.
    ///
    /// A lone sign or a trailing dot is not a literal.
    pub fn is_accepting(self) -> bool {
        matches!(
            self,
            NumberState::Initial | NumberState::IntegerDigits | NumberState::FractionDigits
        )
    }
}

/// Classifies an accepted numeric literal.
///
/// A literal made only of ASCII digits is an integer. Anything else, including
/// a sign with no fractional part such as `+12`, is a float.
///
/// # Example
///
/// ```
/// use monkey_lex::{classify_number, TokenKind};
///
/// assert_eq!(classify_number("42"), TokenKind::Int);
/// assert_eq!(classify_number("4.2"), TokenKind::Float);
/// assert_eq!(classify_number("+42"), TokenKind::Float);
/// ```
pub fn classify_number(literal: &str) -> TokenKind {
    if literal.bytes().all(is_digit) {
        TokenKind::Int
    } else {
        TokenKind::Float
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at the current byte.
    ///
    /// The scan covers the maximal run of digits, signs, exponent markers and
    /// dots; the byte that ends the run is left for the next token. A leading
    /// digit anchors the scan and leaves the automaton in
    /// `NumberState::Initial`; a leading sign or dot is fed to it. Every
    /// later byte is checked with [`NumberState::step`] before it is
    /// consumed:
    ///
    /// - a rejected byte aborts the scan and yields `TokenKind::Illegal` with
    ///   that byte as its literal; the bytes before it are discarded and the
    ///   rejected byte stays current for the next token
    /// - a run that ends in a non-accepting state yields `TokenKind::Illegal`
    ///   with the last byte of the run (the lone sign or trailing dot)
    /// - otherwise the run is classified by [`classify_number`]
    ///
    /// So `1-2` is the single literal `Float("1-2")`, while `10-2` stops at
    /// the `-` and leaves it to be lexed as `Minus`.
    ///
    /// `next_token` only calls this on a digit; callers may also start it on
    /// a sign, an exponent marker or a dot.
    ///
    /// # Returns
    ///
    /// `TokenKind::Int`, `TokenKind::Float` or `TokenKind::Illegal`
    pub fn lex_number(&mut self) -> Token {
        let start = self.cursor.position();
        let source = self.cursor.source();
        let first = self.cursor.current();

        if self.cursor.is_at_end() || !is_number_continue(first) {
            // not positioned on a number at all
            self.cursor.advance_char();
            return self.illegal(self.cursor.slice_from(start), start);
        }

        let mut state = NumberState::Initial;
        if !is_digit(first) {
            match state.step(first) {
                Some(next) => state = next,
                None => {
                    // always consumed so the lexer makes progress
                    self.cursor.advance();
                    return self.illegal(&source[start..start + 1], start);
                },
            }
        }
        self.cursor.advance();

        while !self.cursor.is_at_end() && is_number_continue(self.cursor.current()) {
            let offset = self.cursor.position();
            match state.step(self.cursor.current()) {
                Some(next) => state = next,
                None => return self.illegal(&source[offset..offset + 1], offset),
            }
            self.cursor.advance();
        }

        let literal = self.cursor.slice_from(start);
        if !state.is_accepting() {
            let last = literal.len() - 1;
            return self.illegal(&literal[last..], start + last);
        }

        Token::new(classify_number(literal), literal)
    }
}
