//! Syntax analyzer for the tiny imperative language
//!
//! This module turns a pre-lexed token stream into an Abstract Syntax Tree:
//! - [`token`]: the closed token vocabulary and operator metadata table
//! - [`reader`]: lex-file lines into tokens
//! - [`parse`]: the [`parse::Parser`] struct, cursor, and entry point
//! - [`ast`]: AST node definitions and the pre-order dump
//!
//! # Grammar
//!
//! ```text
//! program   ::= stmt* End_of_input
//! stmt      ::= "if" paren_expr stmt ["else" stmt]
//!             | "while" paren_expr stmt
//!             | "putc" paren_expr ";"
//!             | "print" "(" item {"," item} ")" ";"
//!             | identifier "=" expr ";"
//!             | "{" stmt* "}"
//!             | ";"
//! item      ::= string | expr
//! expr      ::= primary {binop expr}          (precedence climbing)
//! primary   ::= paren_expr | ("-"|"+"|"!") expr | identifier | integer | string
//! paren_expr ::= "(" expr {"," expr} ")"
//! ```
//!
//! # Parser implementation
//!
//! Hand-written recursive descent with a table-driven precedence-climbing
//! expression layer.  Lexical analysis is out of scope: tokens arrive from
//! an external lexer via the reader's fixed line format.

pub mod ast;
pub mod parse;
pub mod reader;
pub mod token;

mod expressions;
mod statements;
