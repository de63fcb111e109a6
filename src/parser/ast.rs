//! AST definitions and the pre-order dump
//!
//! The tree is deliberately uniform: every node is a [`NodeKind`] tag with at
//! most two children and an optional payload, rather than a struct-per-form
//! enum.  The statement grammar leans on this shape: `Sequence` chains nest
//! leftward, and an `If` node's right child is always an auxiliary `If`
//! holding the true/false branches, so the dump is a plain pre-order walk.

use std::fmt;

/// Discriminant for every AST node form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    // Leaves (carry a payload)
    Ident,
    Str,
    Int,
    // Structure
    Sequence,
    If,
    While,
    Assign,
    // Output statements
    Prtc,
    Prts,
    Prti,
    // Unary operators
    Negate,
    Not,
    // Binary operators
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Eq,
    NotEq,
    And,
    Or,
}

impl NodeKind {
    /// Canonical name used in the AST dump.
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Ident => "Identifier",
            NodeKind::Str => "String",
            NodeKind::Int => "Integer",
            NodeKind::Sequence => "Sequence",
            NodeKind::If => "If",
            NodeKind::While => "While",
            NodeKind::Assign => "Assign",
            NodeKind::Prtc => "Prtc",
            NodeKind::Prts => "Prts",
            NodeKind::Prti => "Prti",
            NodeKind::Negate => "Negate",
            NodeKind::Not => "Not",
            NodeKind::Mul => "Multiply",
            NodeKind::Div => "Divide",
            NodeKind::Mod => "Mod",
            NodeKind::Add => "Add",
            NodeKind::Sub => "Subtract",
            NodeKind::Less => "Less",
            NodeKind::LessEq => "LessEqual",
            NodeKind::Greater => "Greater",
            NodeKind::GreaterEq => "GreaterEqual",
            NodeKind::Eq => "Equal",
            NodeKind::NotEq => "NotEqual",
            NodeKind::And => "And",
            NodeKind::Or => "Or",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One node of the AST.
///
/// Exactly the three leaf kinds (`Ident`, `Int`, `Str`) carry `Some(value)`;
/// every other kind carries only children.  Each node exclusively owns its
/// children: the tree is strict, with no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
    pub value: Option<String>,
}

impl Node {
    /// A leaf node carrying the token text as payload.
    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Node {
        Node {
            kind,
            left: None,
            right: None,
            value: Some(value.into()),
        }
    }

    /// An interior node over two optional subtrees.
    pub fn inner(kind: NodeKind, left: Option<Node>, right: Option<Node>) -> Node {
        Node {
            kind,
            left: left.map(Box::new),
            right: right.map(Box::new),
            value: None,
        }
    }

    /// An operator node with a single operand in the left slot.
    pub fn unary(kind: NodeKind, operand: Node) -> Node {
        Node::inner(kind, Some(operand), None)
    }

    /// An operator node with both operands present.
    pub fn binary(kind: NodeKind, left: Node, right: Node) -> Node {
        Node::inner(kind, Some(left), Some(right))
    }
}

/// Serialize a tree to its pre-order text dump.
///
/// Each node renders its kind name on one line; leaves append a space and
/// their payload; an absent node renders as `;`.  Every line is
/// newline-terminated.  The walk is pure, so dumping the same tree twice
/// yields byte-identical output.
pub fn dump(root: Option<&Node>) -> String {
    let mut out = String::new();
    write_node(root, &mut out);
    out
}

fn write_node(node: Option<&Node>, out: &mut String) {
    let Some(node) = node else {
        out.push_str(";\n");
        return;
    };
    match &node.value {
        Some(value) => {
            out.push_str(node.kind.name());
            out.push(' ');
            out.push_str(value);
            out.push('\n');
        }
        None => {
            out.push_str(node.kind.name());
            out.push('\n');
            write_node(node.left.as_deref(), out);
            write_node(node.right.as_deref(), out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_root_renders_semicolon() {
        assert_eq!(dump(None), ";\n");
    }

    #[test]
    fn leaf_renders_kind_and_payload() {
        let node = Node::leaf(NodeKind::Int, "42");
        assert_eq!(dump(Some(&node)), "Integer 42\n");
    }

    #[test]
    fn interior_node_renders_children_in_preorder() {
        let tree = Node::binary(
            NodeKind::Assign,
            Node::leaf(NodeKind::Ident, "x"),
            Node::leaf(NodeKind::Int, "42"),
        );
        assert_eq!(dump(Some(&tree)), "Assign\nIdentifier x\nInteger 42\n");
    }

    #[test]
    fn missing_child_renders_semicolon_line() {
        let tree = Node::unary(NodeKind::Negate, Node::leaf(NodeKind::Int, "1"));
        assert_eq!(dump(Some(&tree)), "Negate\nInteger 1\n;\n");
    }

    #[test]
    fn dump_is_idempotent() {
        let tree = Node::binary(
            NodeKind::Add,
            Node::leaf(NodeKind::Int, "1"),
            Node::leaf(NodeKind::Int, "2"),
        );
        assert_eq!(dump(Some(&tree)), dump(Some(&tree)));
    }
}
