//! Token-stream reader
//!
//! Converts the external lexer's output file into a flat [`Token`] vector.
//! The format is one token per line: source line, source column, the kind
//! name, and (for the literal classes) the token text.  Everything after the
//! kind name is kept verbatim apart from surrounding whitespace, so string
//! literals retain their interior spaces.
//!
//! The reader also enforces the producer contract the parser relies on: the
//! stream must terminate in exactly one `End_of_input` token, which is what
//! lets the parser cursor advance without bounds checks.

use super::token::{Token, TokenKind};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Failure while reading a lex file.  All variants are producer-side and
/// fatal before parsing begins.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("line {line}: unknown token kind '{name}'")]
    UnknownToken { name: String, line: usize },

    #[error("line {line}: malformed token line '{text}'")]
    MalformedLine { text: String, line: usize },

    #[error("token stream does not end with End_of_input")]
    MissingEndOfInput,

    #[error("line {line}: End_of_input before the end of the stream")]
    InteriorEndOfInput { line: usize },
}

/// Split one whitespace-delimited field off the front of `rest`.
fn take_field(rest: &str) -> Option<(&str, &str)> {
    let rest = rest.trim_start();
    if rest.is_empty() {
        return None;
    }
    match rest.find(char::is_whitespace) {
        Some(at) => Some((&rest[..at], &rest[at..])),
        None => Some((rest, "")),
    }
}

/// Parse the full lex file into tokens.
///
/// Blank lines are skipped.  Unknown kind names, unparsable positions and
/// truncated lines are reported with the 1-based line number of the lex file
/// itself (not the source positions the lexer recorded).
pub fn read_tokens(source: &str) -> Result<Vec<Token>, ReadError> {
    let lookup: FxHashMap<&str, TokenKind> =
        TokenKind::ALL.iter().map(|&kind| (kind.name(), kind)).collect();

    let mut tokens = Vec::new();
    let mut terminated_at = None;
    for (index, raw) in source.lines().enumerate() {
        let lex_line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }
        // Anything after the terminator would be silently unreachable for
        // the parser, so an interior End_of_input is a producer error.
        if let Some(line) = terminated_at {
            return Err(ReadError::InteriorEndOfInput { line });
        }
        let malformed = || ReadError::MalformedLine {
            text: raw.trim_end().to_string(),
            line: lex_line,
        };

        let (line_field, rest) = take_field(raw).ok_or_else(malformed)?;
        let (column_field, rest) = take_field(rest).ok_or_else(malformed)?;
        let (name, rest) = take_field(rest).ok_or_else(malformed)?;

        let line: usize = line_field.parse().map_err(|_| malformed())?;
        let column: usize = column_field.parse().map_err(|_| malformed())?;
        let kind = *lookup.get(name).ok_or_else(|| ReadError::UnknownToken {
            name: name.to_string(),
            line: lex_line,
        })?;
        if kind == TokenKind::EndOfInput {
            terminated_at = Some(lex_line);
        }

        tokens.push(Token {
            kind,
            text: rest.trim().to_string(),
            line,
            column,
        });
    }

    match tokens.last() {
        Some(last) if last.kind == TokenKind::EndOfInput => Ok(tokens),
        _ => Err(ReadError::MissingEndOfInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_simple_stream() {
        let lex = "1 1 Identifier x\n1 3 Op_assign\n1 5 Integer 42\n1 7 Semicolon\n2 1 End_of_input\n";
        let tokens = read_tokens(lex).unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "x");
        assert_eq!(tokens[2].kind, TokenKind::Integer);
        assert_eq!(tokens[2].text, "42");
        assert_eq!(tokens[4].kind, TokenKind::EndOfInput);
        assert_eq!(tokens[4].line, 2);
    }

    #[test]
    fn string_text_keeps_interior_spaces() {
        let lex = "3 8 String \"count is: \"\n4 1 End_of_input\n";
        let tokens = read_tokens(lex).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::StringLit);
        assert_eq!(tokens[0].text, "\"count is: \"");
    }

    #[test]
    fn skips_blank_lines() {
        let lex = "1 1 Semicolon\n\n\n1 2 End_of_input\n";
        let tokens = read_tokens(lex).unwrap();
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn unknown_kind_name_is_fatal() {
        let lex = "1 1 Op_bogus\n1 2 End_of_input\n";
        let err = read_tokens(lex).unwrap_err();
        match err {
            ReadError::UnknownToken { name, line } => {
                assert_eq!(name, "Op_bogus");
                assert_eq!(line, 1);
            }
            other => panic!("expected UnknownToken, got {other:?}"),
        }
    }

    #[test]
    fn malformed_position_is_fatal() {
        let lex = "one 1 Semicolon\n1 2 End_of_input\n";
        assert!(matches!(
            read_tokens(lex).unwrap_err(),
            ReadError::MalformedLine { line: 1, .. }
        ));
    }

    #[test]
    fn truncated_line_is_fatal() {
        let lex = "1 1\n1 2 End_of_input\n";
        assert!(matches!(
            read_tokens(lex).unwrap_err(),
            ReadError::MalformedLine { line: 1, .. }
        ));
    }

    #[test]
    fn interior_end_of_input_is_rejected() {
        // Tokens after the terminator would never reach the parser, turning
        // a producer bug into silently truncated output.
        let lex = "\
1 1 Identifier x
1 3 Op_assign
1 5 Integer 1
1 6 Semicolon
1 7 End_of_input
2 1 Identifier y
2 3 Op_assign
2 5 Integer 2
2 6 Semicolon
2 7 End_of_input
";
        assert!(matches!(
            read_tokens(lex).unwrap_err(),
            ReadError::InteriorEndOfInput { line: 5 }
        ));
    }

    #[test]
    fn stream_must_end_with_end_of_input() {
        let lex = "1 1 Identifier x\n";
        assert!(matches!(
            read_tokens(lex).unwrap_err(),
            ReadError::MissingEndOfInput
        ));
        assert!(matches!(read_tokens("").unwrap_err(), ReadError::MissingEndOfInput));
    }
}
