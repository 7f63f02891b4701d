//! The seam between the driver loop and the language implementation.
//!
//! The driver knows how to read lines and print results; everything that
//! gives a line meaning sits behind [`Frontend`].

use std::fmt;

use monkey_lex::Lexer;

/// A parser and evaluator pair driven one input line at a time.
///
/// The driver builds a fresh [`Lexer`] for every line and hands it to
/// [`Frontend::parse`], which pulls tokens until it has a whole program or
/// knows the line is malformed. Illegal tokens are ordinary tokens at this
/// point; turning them into messages is the parser's job.
///
/// Anything that must survive between lines, such as variable bindings,
/// lives in the implementor and is carried from one [`Frontend::eval`] call
/// to the next.
pub trait Frontend {
    /// Parsed form of one input line.
    type Program;

    /// Result of evaluating a program.
    type Value: fmt::Display;

    /// Parses one line from `lexer`.
    ///
    /// # Returns
    /// * `Ok(program)` - The parsed program
    /// * `Err(messages)` - One message per syntax error
    fn parse(&mut self, lexer: &mut Lexer<'_>) -> Result<Self::Program, Vec<String>>;

    /// Evaluates a parsed program.
    ///
    /// Returns `None` when there is nothing to print.
    fn eval(&mut self, program: Self::Program) -> Option<Self::Value>;
}
