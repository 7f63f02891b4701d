//! Byte classification helpers for the Monkey lexer.
//!
//! The grammar is ASCII-only: identifiers are letters and underscores,
//! numbers are digits with an optional sign and fraction. Every predicate
//! here works on a single byte.

/// Checks if a byte can appear in an identifier.
///
/// Identifiers are runs of ASCII letters and underscores. Digits are not
/// part of an identifier.
///
/// # Example
///
/// ```
/// use monkey_lex::chars::is_letter;
///
/// assert!(is_letter(b'a'));
/// assert!(is_letter(b'Z'));
/// assert!(is_letter(b'_'));
/// assert!(!is_letter(b'1'));
/// ```
#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte is an ASCII decimal digit.
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Checks if a byte is a sign (`+` or `-`).
#[inline]
pub fn is_sign(b: u8) -> bool {
    b == b'+' || b == b'-'
}

/// Checks if a byte is an exponent marker (`e` or `E`).
#[inline]
pub fn is_exponent(b: u8) -> bool {
    b == b'e' || b == b'E'
}

/// Checks if a byte may start a numeric literal scan.
///
/// # Example
///
/// ```
/// use monkey_lex::chars::is_number_start;
///
/// assert!(is_number_start(b'7'));
/// assert!(is_number_start(b'-'));
/// assert!(is_number_start(b'e'));
/// assert!(!is_number_start(b'.'));
/// ```
#[inline]
pub fn is_number_start(b: u8) -> bool {
    is_digit(b) || is_sign(b) || is_exponent(b)
}

/// Checks if a byte keeps a numeric literal scan going.
///
/// This is wider than what the number automaton accepts: exponent markers
/// always continue the scan and are then rejected by the automaton, and a
/// sign is only kept right after a single leading digit.
#[inline]
pub fn is_number_continue(b: u8) -> bool {
    is_number_start(b) || b == b'.'
}

/// Checks if a byte is skipped between tokens.
///
/// Only space, tab, newline and carriage return count as whitespace.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
