//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the token cursor, expectation helpers, the syntax error
//! type, and the top-level parse entry point.
//!
//! # Parser architecture
//!
//! The parser is a recursive-descent / precedence-climbing pair:
//! - This module: Parser struct, cursor helpers, and coordination
//! - `statements`: statement dispatch (if, while, print, putc, blocks, assignment)
//! - `expressions`: precedence climbing over the operator metadata table
//!
//! Parser methods are split across files using `impl Parser` blocks, so each
//! module extends the Parser with related functionality while sharing the
//! same cursor state.  One token of lookahead suffices everywhere; the
//! grammar never requires backtracking.

use super::ast::{Node, NodeKind};
use super::token::{Token, TokenKind};
use thiserror::Error;

/// A grammar violation at a known source position.
///
/// Not recoverable: the parser performs no error synchronization, so the
/// first syntax error aborts the whole parse.
#[derive(Debug, Error)]
#[error("Syntax error at line {line}, column {column}: {message}")]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Recursive descent parser over a pre-lexed token stream.
///
/// The stream must terminate in an `End_of_input` token (the reader
/// guarantees this), which is why the cursor can index without bounds
/// checks.  Recursion depth tracks the nesting depth of the input; the
/// parser does not defend against adversarially deep nesting.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            matches!(tokens.last(), Some(t) if t.kind == TokenKind::EndOfInput),
            "token stream must end with End_of_input"
        );
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire program.
    ///
    /// Statements are folded into one left-deep `Sequence` chain: the first
    /// statement becomes the root, and each later statement pushes the old
    /// root down into the left branch.  Empty input yields `None`.
    pub fn parse(&mut self) -> Result<Option<Node>, SyntaxError> {
        let mut root = None;
        while !self.is_at_end() {
            if let Some(stmt) = self.parse_stmt()? {
                root = Some(match root {
                    None => stmt,
                    Some(prev) => Node::binary(NodeKind::Sequence, prev, stmt),
                });
            }
        }
        Ok(root)
    }

    // ===== Cursor helpers =====

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// Advance the cursor and return the new current token.  Advancing at
    /// `End_of_input` is a no-op, so the cursor never leaves the stream.
    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.current()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::EndOfInput
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, ctx: &str) -> Result<(), SyntaxError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(format!(
                "Expected '{}' {}, found '{}'",
                kind,
                ctx,
                self.current()
            )))
        }
    }

    /// Build a [`SyntaxError`] located at the current token.
    pub(crate) fn error_here(&self, message: String) -> SyntaxError {
        SyntaxError {
            message,
            line: self.current().line,
            column: self.current().column,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Shorthand token constructor for parser unit tests.
    pub fn tok(kind: TokenKind, text: &str) -> Token {
        Token {
            kind,
            text: text.to_string(),
            line: 1,
            column: 1,
        }
    }

    /// Build a parser over `tokens` with the terminator appended.
    pub fn parser_for(mut tokens: Vec<Token>) -> Parser {
        tokens.push(tok(TokenKind::EndOfInput, ""));
        Parser::new(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{parser_for, tok};
    use super::*;
    use crate::parser::ast::dump;

    #[test]
    fn empty_input_parses_to_no_node() {
        let mut parser = parser_for(vec![]);
        assert_eq!(parser.parse().unwrap(), None);
    }

    #[test]
    fn single_statement_is_not_wrapped_in_sequence() {
        let mut parser = parser_for(vec![
            tok(TokenKind::Identifier, "x"),
            tok(TokenKind::OpAssign, ""),
            tok(TokenKind::Integer, "42"),
            tok(TokenKind::Semicolon, ""),
        ]);
        let root = parser.parse().unwrap();
        assert_eq!(dump(root.as_ref()), "Assign\nIdentifier x\nInteger 42\n");
    }

    #[test]
    fn statements_fold_into_left_deep_sequence() {
        let mut parser = parser_for(vec![
            tok(TokenKind::Identifier, "a"),
            tok(TokenKind::OpAssign, ""),
            tok(TokenKind::Integer, "1"),
            tok(TokenKind::Semicolon, ""),
            tok(TokenKind::Identifier, "b"),
            tok(TokenKind::OpAssign, ""),
            tok(TokenKind::Integer, "2"),
            tok(TokenKind::Semicolon, ""),
            tok(TokenKind::Identifier, "c"),
            tok(TokenKind::OpAssign, ""),
            tok(TokenKind::Integer, "3"),
            tok(TokenKind::Semicolon, ""),
        ]);
        let root = parser.parse().unwrap().unwrap();

        // Sequence(Sequence(a, b), c): accumulated structure nests leftward.
        assert_eq!(root.kind, NodeKind::Sequence);
        let left = root.left.as_deref().unwrap();
        assert_eq!(left.kind, NodeKind::Sequence);
        assert_eq!(left.left.as_deref().unwrap().kind, NodeKind::Assign);
        assert_eq!(left.right.as_deref().unwrap().kind, NodeKind::Assign);
        assert_eq!(root.right.as_deref().unwrap().kind, NodeKind::Assign);
    }

    #[test]
    fn bare_semicolons_do_not_contribute_to_the_chain() {
        let mut parser = parser_for(vec![
            tok(TokenKind::Semicolon, ""),
            tok(TokenKind::Identifier, "x"),
            tok(TokenKind::OpAssign, ""),
            tok(TokenKind::Integer, "1"),
            tok(TokenKind::Semicolon, ""),
            tok(TokenKind::Semicolon, ""),
        ]);
        let root = parser.parse().unwrap().unwrap();
        assert_eq!(root.kind, NodeKind::Assign);
    }
}
