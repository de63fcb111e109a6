//! Token vocabulary and operator metadata
//!
//! The parser consumes tokens produced by an external lexer, so this module
//! defines the closed vocabulary rather than a tokenizer.  Each operator kind
//! carries static metadata (precedence, associativity, arity, produced AST
//! node) consulted by the precedence-climbing expression parser.

use super::ast::NodeKind;
use std::fmt;

/// All token kinds the external lexer may emit.
///
/// The set is closed: a lex file naming anything else is rejected by the
/// reader before parsing begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndOfInput,

    // Operators
    OpMultiply,
    OpDivide,
    OpMod,
    OpAdd,
    OpSubtract,
    OpNegate,
    OpNot,
    OpLess,
    OpLessEqual,
    OpGreater,
    OpGreaterEqual,
    OpEqual,
    OpNotEqual,
    OpAssign,
    OpAnd,
    OpOr,

    // Keywords
    KeywordIf,
    KeywordElse,
    KeywordWhile,
    KeywordPrint,
    KeywordPutc,

    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Semicolon,
    Comma,

    // Literal classes
    Identifier,
    Integer,
    StringLit,
}

/// Static per-operator metadata.
///
/// `precedence` is -1 for tokens that are not operators; higher binds
/// tighter.  `node` is the AST node kind the token produces where one exists
/// (binary/unary operators, the comma fold inside parentheses, and the leaf
/// classes).
#[derive(Debug, Clone, Copy)]
pub struct OpInfo {
    pub precedence: i8,
    pub right_assoc: bool,
    pub binary: bool,
    pub unary: bool,
    pub node: Option<NodeKind>,
}

impl OpInfo {
    /// Minimum precedence for this operator's right operand.
    ///
    /// Left-associative operators re-enter one level higher, so an
    /// equal-precedence neighbor stays with the outer call and the chain
    /// nests leftward; right-associative operators re-enter at the same
    /// level and the chain nests into the right operand.
    pub const fn right_operand_min_prec(&self) -> i8 {
        self.precedence + if self.right_assoc { 0 } else { 1 }
    }
}

const fn op(
    precedence: i8,
    right_assoc: bool,
    binary: bool,
    unary: bool,
    node: Option<NodeKind>,
) -> OpInfo {
    OpInfo {
        precedence,
        right_assoc,
        binary,
        unary,
        node,
    }
}

/// Metadata for tokens that are not operators and produce nothing.
const NONE: OpInfo = op(-1, false, false, false, None);

impl TokenKind {
    /// Every kind in the vocabulary, used to build the reader's name table.
    pub const ALL: [TokenKind; 31] = [
        TokenKind::EndOfInput,
        TokenKind::OpMultiply,
        TokenKind::OpDivide,
        TokenKind::OpMod,
        TokenKind::OpAdd,
        TokenKind::OpSubtract,
        TokenKind::OpNegate,
        TokenKind::OpNot,
        TokenKind::OpLess,
        TokenKind::OpLessEqual,
        TokenKind::OpGreater,
        TokenKind::OpGreaterEqual,
        TokenKind::OpEqual,
        TokenKind::OpNotEqual,
        TokenKind::OpAssign,
        TokenKind::OpAnd,
        TokenKind::OpOr,
        TokenKind::KeywordIf,
        TokenKind::KeywordElse,
        TokenKind::KeywordWhile,
        TokenKind::KeywordPrint,
        TokenKind::KeywordPutc,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::StringLit,
    ];

    /// The kind's name in the lex-file vocabulary.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "End_of_input",
            TokenKind::OpMultiply => "Op_multiply",
            TokenKind::OpDivide => "Op_divide",
            TokenKind::OpMod => "Op_mod",
            TokenKind::OpAdd => "Op_add",
            TokenKind::OpSubtract => "Op_subtract",
            TokenKind::OpNegate => "Op_negate",
            TokenKind::OpNot => "Op_not",
            TokenKind::OpLess => "Op_less",
            TokenKind::OpLessEqual => "Op_lessequal",
            TokenKind::OpGreater => "Op_greater",
            TokenKind::OpGreaterEqual => "Op_greaterequal",
            TokenKind::OpEqual => "Op_equal",
            TokenKind::OpNotEqual => "Op_notequal",
            TokenKind::OpAssign => "Op_assign",
            TokenKind::OpAnd => "Op_and",
            TokenKind::OpOr => "Op_or",
            TokenKind::KeywordIf => "Keyword_if",
            TokenKind::KeywordElse => "Keyword_else",
            TokenKind::KeywordWhile => "Keyword_while",
            TokenKind::KeywordPrint => "Keyword_print",
            TokenKind::KeywordPutc => "Keyword_putc",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Comma => "Comma",
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::StringLit => "String",
        }
    }

    /// Operator metadata for this kind.  Fixed at compile time.
    pub const fn info(self) -> OpInfo {
        match self {
            TokenKind::OpMultiply => op(13, false, true, false, Some(NodeKind::Mul)),
            TokenKind::OpDivide => op(13, false, true, false, Some(NodeKind::Div)),
            TokenKind::OpMod => op(13, false, true, false, Some(NodeKind::Mod)),
            TokenKind::OpAdd => op(12, false, true, false, Some(NodeKind::Add)),
            TokenKind::OpSubtract => op(12, false, true, false, Some(NodeKind::Sub)),
            TokenKind::OpNegate => op(14, false, false, true, Some(NodeKind::Negate)),
            TokenKind::OpNot => op(14, false, false, true, Some(NodeKind::Not)),
            TokenKind::OpLess => op(10, false, true, false, Some(NodeKind::Less)),
            TokenKind::OpLessEqual => op(10, false, true, false, Some(NodeKind::LessEq)),
            TokenKind::OpGreater => op(10, false, true, false, Some(NodeKind::Greater)),
            TokenKind::OpGreaterEqual => op(10, false, true, false, Some(NodeKind::GreaterEq)),
            TokenKind::OpEqual => op(9, false, true, false, Some(NodeKind::Eq)),
            TokenKind::OpNotEqual => op(9, false, true, false, Some(NodeKind::NotEq)),
            TokenKind::OpAnd => op(5, false, true, false, Some(NodeKind::And)),
            TokenKind::OpOr => op(4, false, true, false, Some(NodeKind::Or)),
            TokenKind::OpAssign => op(-1, false, false, false, Some(NodeKind::Assign)),
            TokenKind::KeywordIf => op(-1, false, false, false, Some(NodeKind::If)),
            TokenKind::KeywordWhile => op(-1, false, false, false, Some(NodeKind::While)),
            TokenKind::Comma => op(-1, false, false, false, Some(NodeKind::Prti)),
            TokenKind::Identifier => op(-1, false, false, false, Some(NodeKind::Ident)),
            TokenKind::Integer => op(-1, false, false, false, Some(NodeKind::Int)),
            TokenKind::StringLit => op(-1, false, false, false, Some(NodeKind::Str)),
            _ => NONE,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One token of the input stream.
///
/// `text` is non-empty only for the three literal classes; `line` and
/// `column` locate the token in the original source for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplicative_binds_tighter_than_additive() {
        assert!(TokenKind::OpMultiply.info().precedence > TokenKind::OpAdd.info().precedence);
        assert!(TokenKind::OpDivide.info().precedence > TokenKind::OpSubtract.info().precedence);
    }

    #[test]
    fn unary_binds_tighter_than_any_binary() {
        let unary = TokenKind::OpNegate.info().precedence;
        for kind in TokenKind::ALL {
            let info = kind.info();
            if info.binary {
                assert!(unary > info.precedence, "{kind} outranks unary negate");
            }
        }
    }

    #[test]
    fn no_operator_in_the_grammar_is_right_associative() {
        for kind in TokenKind::ALL {
            assert!(!kind.info().right_assoc, "{kind} flagged right-associative");
        }
    }

    #[test]
    fn associativity_drives_the_right_operand_precedence_bound() {
        let left_assoc = op(9, false, true, false, None);
        assert_eq!(left_assoc.right_operand_min_prec(), 10);

        // No grammar operator is right-associative, so the right-deep case
        // is exercised with a hand-built entry.
        let right_assoc = op(9, true, true, false, None);
        assert_eq!(right_assoc.right_operand_min_prec(), 9);
    }

    #[test]
    fn non_operators_have_no_precedence() {
        assert_eq!(TokenKind::Semicolon.info().precedence, -1);
        assert_eq!(TokenKind::Identifier.info().precedence, -1);
        assert_eq!(TokenKind::OpAssign.info().precedence, -1);
    }

    #[test]
    fn vocabulary_names_are_unique() {
        let mut names: Vec<&str> = TokenKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TokenKind::ALL.len());
    }
}
