//! Statement parsing implementation
//!
//! Recursive-descent dispatch over the statement-starting token kinds:
//!
//! - `if` / `else`: condition plus one statement per branch
//! - `while`: condition plus body statement
//! - `print` / `putc`: output statements
//! - assignment: `identifier = expr ;`
//! - `{ ... }` blocks folded into a left-deep `Sequence` chain
//! - bare `;`: an empty statement, represented as the absence of a node
//!
//! A parsed statement may therefore be `None`; callers skip empty results
//! when folding sequences.
//!
//! All parsing methods are implemented as methods on the [`Parser`] struct.

use super::ast::{Node, NodeKind};
use super::parse::{Parser, SyntaxError};
use super::token::TokenKind;

impl Parser {
    /// Parse one statement, or `None` for an empty statement.
    pub fn parse_stmt(&mut self) -> Result<Option<Node>, SyntaxError> {
        match self.current().kind {
            TokenKind::KeywordIf => self.parse_if(),
            TokenKind::KeywordWhile => self.parse_while(),
            TokenKind::KeywordPutc => self.parse_putc(),
            TokenKind::KeywordPrint => self.parse_print(),
            TokenKind::Identifier => self.parse_assignment(),
            TokenKind::LeftBrace => self.parse_block(),
            TokenKind::Semicolon => {
                self.advance();
                Ok(None)
            }
            TokenKind::EndOfInput => Ok(None),
            _ => Err(self.error_here(format!(
                "Expecting start of statement, found '{}'",
                self.current()
            ))),
        }
    }

    /// `if (cond) stmt [else stmt]`
    ///
    /// Emitted as `If(cond, If(then, else))`: the auxiliary right-hand `If`
    /// stores the ternary branch information in a strictly binary tree.
    fn parse_if(&mut self) -> Result<Option<Node>, SyntaxError> {
        self.advance();
        let condition = self.paren_expr()?;
        let then_branch = self.parse_stmt()?;
        let else_branch = if self.match_token(TokenKind::KeywordElse) {
            self.parse_stmt()?
        } else {
            None
        };
        let branches = Node::inner(NodeKind::If, then_branch, else_branch);
        Ok(Some(Node::binary(NodeKind::If, condition, branches)))
    }

    /// `while (cond) stmt`
    fn parse_while(&mut self) -> Result<Option<Node>, SyntaxError> {
        self.advance();
        let condition = self.paren_expr()?;
        let body = self.parse_stmt()?;
        Ok(Some(Node::inner(NodeKind::While, Some(condition), body)))
    }

    /// `putc (expr) ;`
    fn parse_putc(&mut self) -> Result<Option<Node>, SyntaxError> {
        self.advance();
        let expr = self.paren_expr()?;
        self.expect(TokenKind::Semicolon, "after 'putc'")?;
        Ok(Some(Node::unary(NodeKind::Prtc, expr)))
    }

    /// `print ( item {, item} ) ;`
    ///
    /// Each item is either a string literal (wrapped in `Prts`) or an
    /// expression (wrapped in `Prti`); items fold into a left-deep
    /// `Sequence` chain so the dump replays them in source order.
    fn parse_print(&mut self) -> Result<Option<Node>, SyntaxError> {
        self.advance();
        self.expect(TokenKind::LeftParen, "after 'print'")?;
        let mut stmt = None;
        loop {
            let item = if self.check(TokenKind::StringLit) {
                let text = self.current().text.clone();
                self.advance();
                Node::unary(NodeKind::Prts, Node::leaf(NodeKind::Str, text))
            } else {
                Node::unary(NodeKind::Prti, self.parse_expr(0)?)
            };
            stmt = Some(Node::inner(NodeKind::Sequence, stmt, Some(item)));
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RightParen, "after 'print' arguments")?;
        self.expect(TokenKind::Semicolon, "after 'print'")?;
        Ok(stmt)
    }

    /// `identifier = expr ;`
    fn parse_assignment(&mut self) -> Result<Option<Node>, SyntaxError> {
        let target = Node::leaf(NodeKind::Ident, self.current().text.clone());
        self.advance();
        self.expect(TokenKind::OpAssign, "after identifier")?;
        let value = self.parse_expr(0)?;
        self.expect(TokenKind::Semicolon, "after assignment")?;
        Ok(Some(Node::binary(NodeKind::Assign, target, value)))
    }

    /// `{ stmt* }`
    ///
    /// Statements fold into a left-deep `Sequence` chain; the first
    /// statement stands alone until a second arrives.  An empty block is an
    /// empty statement.
    fn parse_block(&mut self) -> Result<Option<Node>, SyntaxError> {
        self.advance();
        let mut node = None;
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            let next = self.parse_stmt()?;
            node = match (node, next) {
                (prev, None) => prev,
                (None, stmt) => stmt,
                (Some(prev), Some(stmt)) => {
                    Some(Node::binary(NodeKind::Sequence, prev, stmt))
                }
            };
        }
        self.expect(TokenKind::RightBrace, "at end of block")?;
        Ok(node)
    }
}
