//! # Introduction
//!
//! tinypar is the syntax-analysis stage of a toy compiler pipeline for a
//! small imperative language.  It consumes the token file written by an
//! external lexer and produces a pre-order text dump of the AST.
//!
//! ## Pipeline
//!
//! ```text
//! Lex file → Reader → Tokens → Parser → AST → Pre-order dump
//! ```
//!
//! 1. [`parser::reader`] turns the fixed-format lex lines into tokens and
//!    rejects anything outside the closed vocabulary.
//! 2. [`parser::parse::Parser`] builds the AST: recursive descent for
//!    statements, precedence climbing for expressions.
//! 3. [`parser::ast::dump`] serializes the tree; the binary writes it to the
//!    output file.
//!
//! ## Supported language
//!
//! Statements: `if/else`, `while`, `print`, `putc`, assignment, `{}` blocks.
//! Expressions: integer/identifier/string leaves, unary `- ! +`, and the
//! arithmetic, comparison, and logical binary operators.
//!
//! Parsing is single-threaded and purely recursive; recursion depth equals
//! the nesting depth of the input, so pathologically deep programs are
//! bounded by the call stack rather than by the parser.

pub mod error;
pub mod parser;

pub use error::Error;

use parser::ast::Node;
use parser::parse::Parser;
use parser::reader::read_tokens;

/// Parse the contents of a lex file into an AST root.
///
/// Returns `Ok(None)` when the token stream holds no statements.
pub fn parse_lex(source: &str) -> Result<Option<Node>, Error> {
    let tokens = read_tokens(source)?;
    let mut parser = Parser::new(tokens);
    Ok(parser.parse()?)
}
