//! Lex command implementation.
//!
//! Tokenizes a whole file and prints one token per line, either as text
//! (`LINE:COLUMN KIND literal`) or as JSON lines.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use monkey_lex::Lexer;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{CliError, Result};

/// Arguments for the lex command.
#[derive(Debug)]
pub struct LexArgs {
    /// File to tokenize, `-` for stdin.
    pub input: PathBuf,
    /// Emit JSON lines.
    pub json: bool,
}

/// One token as written by `lex --json`.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    literal: &'a str,
    line: u32,
    column: u32,
}

/// Executes the lex command.
///
/// Fails with [`CliError::IllegalTokens`] after printing every token if the
/// input contained illegal tokens.
pub fn run_lex(args: LexArgs, config: &Config) -> Result<()> {
    let source = read_input(&args.input)?;
    debug!(input = %args.input.display(), bytes = source.len(), "lexing");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let illegal = write_tokens(&source, args.json || config.lex.json, &mut out)?;
    out.flush()?;

    if illegal > 0 {
        warn!(illegal, "input contains illegal tokens");
        return Err(CliError::IllegalTokens(illegal));
    }
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    Ok(std::fs::read_to_string(input)?)
}

/// Writes every token of `source` to `out` and returns the illegal count.
fn write_tokens<W: Write>(source: &str, json: bool, out: &mut W) -> Result<usize> {
    let mut lexer = Lexer::new(source);
    let mut illegal = 0;

    loop {
        let token = lexer.next_token();
        if token.is_eof() {
            break;
        }
        if token.is_illegal() {
            illegal += 1;
        }

        let (line, column) = (lexer.token_line(), lexer.token_column());
        if json {
            let record = TokenRecord {
                kind: token.kind.as_str(),
                literal: &token.literal,
                line,
                column,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}:{} {} {}", line, column, token.kind, token.literal)?;
        }
    }

    Ok(illegal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str, json: bool) -> (String, usize) {
        let mut out = Vec::new();
        let illegal = write_tokens(source, json, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), illegal)
    }

    #[test]
    fn test_text_output() {
        let (text, illegal) = render("let x = 5;", false);
        assert_eq!(
            text,
            "1:1 LET let\n1:5 IDENT x\n1:7 = =\n1:9 INT 5\n1:10 ; ;\n"
        );
        assert_eq!(illegal, 0);
    }

    #[test]
    fn test_json_output() {
        let (text, _) = render("\"hi\"\n2.5", true);
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["kind"], "STRING");
        assert_eq!(lines[0]["literal"], "hi");
        assert_eq!(lines[1]["kind"], "FLOAT");
        assert_eq!(lines[1]["line"], 2);
        assert_eq!(lines[1]["column"], 1);
    }

    #[test]
    fn test_counts_illegal_tokens() {
        let (text, illegal) = render("a @ b 1e5", false);
        assert_eq!(illegal, 2);
        assert!(text.contains("ILLEGAL @"));
        assert!(text.contains("ILLEGAL e"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render("", false), (String::new(), 0));
    }
}
