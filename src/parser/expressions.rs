//! Expression parsing implementation
//!
//! Precedence climbing over the static operator metadata table in
//! [`token`](super::token).  A single routine, [`Parser::parse_expr`], is
//! parameterized by a minimum precedence: binary operators at or above that
//! precedence are consumed in a loop, and the right operand is parsed by
//! recursing at `precedence + 1` (left-associative) or `precedence`
//! (right-associative).  That offset alone produces the correct nesting for
//! both associativities; there is no separate grammar level per operator.
//!
//! Primaries are parenthesized (possibly comma-separated) expressions, the
//! unary operators, and the three leaf classes.  Unary `+` is an identity
//! and produces no node; unary `-` wraps its operand in `Negate`.
//!
//! All parsing methods are implemented as methods on the [`Parser`] struct.

use super::ast::{Node, NodeKind};
use super::parse::{Parser, SyntaxError};
use super::token::TokenKind;

/// The node kind comma siblings fold with, taken from the metadata table.
/// A table entry without one would fail the build here.
const COMMA_FOLD: NodeKind = match TokenKind::Comma.info().node {
    Some(kind) => kind,
    None => panic!("metadata table attaches no node kind to Comma"),
};

impl Parser {
    /// Parse an expression whose binary operators all have precedence at
    /// least `min_prec`.  Entry point callers pass 0.
    pub fn parse_expr(&mut self, min_prec: i8) -> Result<Node, SyntaxError> {
        let mut left = self.parse_primary()?;

        loop {
            let info = self.current().kind.info();
            if !info.binary || info.precedence < min_prec {
                break;
            }
            // Capture the operator's metadata before stepping past it; the
            // associativity offset belongs to this operator, not the next.
            let Some(kind) = info.node else {
                break;
            };
            self.advance();
            let right = self.parse_expr(info.right_operand_min_prec())?;
            left = Node::binary(kind, left, right);
        }

        Ok(left)
    }

    /// Parse a primary: parenthesized expression, unary operator, or leaf.
    fn parse_primary(&mut self) -> Result<Node, SyntaxError> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::LeftParen => self.paren_expr(),
            TokenKind::OpSubtract => {
                self.advance();
                let operand = self.parse_expr(TokenKind::OpNegate.info().precedence)?;
                Ok(Node::unary(NodeKind::Negate, operand))
            }
            TokenKind::OpAdd => {
                // Unary plus is an identity: no node is produced.
                self.advance();
                self.parse_expr(TokenKind::OpNegate.info().precedence)
            }
            TokenKind::OpNot => {
                self.advance();
                let operand = self.parse_expr(TokenKind::OpNot.info().precedence)?;
                Ok(Node::unary(NodeKind::Not, operand))
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(Node::leaf(NodeKind::Ident, token.text))
            }
            TokenKind::Integer => {
                self.advance();
                Ok(Node::leaf(NodeKind::Int, token.text))
            }
            TokenKind::StringLit => {
                self.advance();
                Ok(Node::leaf(NodeKind::Str, token.text))
            }
            _ => Err(self.error_here(format!("Unexpected token '{token}'"))),
        }
    }

    /// Parse `( expr {, expr} )`.
    ///
    /// Comma-separated siblings fold left into a binary chain using the node
    /// kind the metadata table attaches to `Comma`.
    pub(crate) fn paren_expr(&mut self) -> Result<Node, SyntaxError> {
        self.expect(TokenKind::LeftParen, "before expression")?;
        let mut expr = self.parse_expr(0)?;
        while self.match_token(TokenKind::Comma) {
            let sibling = self.parse_expr(0)?;
            expr = Node::binary(COMMA_FOLD, expr, sibling);
        }
        self.expect(TokenKind::RightParen, "after expression")?;
        Ok(expr)
    }
}
