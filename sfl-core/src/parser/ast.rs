use std::fmt::Display;

use crate::scanner::prelude::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Block,
    If,
    While,
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
    Variable,
    Number,
    String,
    FunctionCall,
}

impl NodeKind {
    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeKind::Variable | NodeKind::Number | NodeKind::String)
    }

    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            NodeKind::Add
            | NodeKind::Subtract
            | NodeKind::Multiply
            | NodeKind::Divide
            | NodeKind::Equals
        )
    }

    /// Binary node kind an operator token folds into.
    pub fn from_operator(kind: TokenKind) -> Option<NodeKind> {
        Some(match kind {
            TokenKind::Plus => NodeKind::Add,
            TokenKind::Minus => NodeKind::Subtract,
            TokenKind::Star => NodeKind::Multiply,
            TokenKind::Slash => NodeKind::Divide,
            TokenKind::Equal => NodeKind::Equals,
            _ => return None
        })
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A node of the program tree. Each node owns its children; the arity is fixed
/// by `kind`:
///
/// - `Block`, `FunctionCall`: any number of statements / arguments
/// - `If`, `While`: condition, body block
/// - `Assign`: target `Variable`, value expression
/// - binary kinds: left, right
/// - `Variable`, `Number`, `String`: none, the value is `token.text`
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub token: Token,
    pub children: Vec<Node>,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(kind: NodeKind, token: Token, children: Vec<Node>) -> Self {
        Self { token, children, kind }
    }

    pub fn leaf(kind: NodeKind, token: Token) -> Self {
        Self { token, children: vec![], kind }
    }

    pub fn block(token: Token, statements: Vec<Node>) -> Self {
        Self { token, children: statements, kind: NodeKind::Block }
    }

    pub fn binary(kind: NodeKind, token: Token, left: Node, right: Node) -> Self {
        Self { token, children: vec![left, right], kind }
    }

    pub fn call(token: Token, arguments: Vec<Node>) -> Self {
        Self { token, children: arguments, kind: NodeKind::FunctionCall }
    }

    /// Name of a variable or callee, literal text of a number or string.
    pub fn text(&self) -> &str {
        &self.token.text
    }

    /// Indented one-node-per-line dump.
    pub fn tree_string(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, depth: usize) {
        out.push_str(&"  ".repeat(depth));

        match self.kind {
            NodeKind::Variable | NodeKind::Number => {
                out.push_str(&format!("{} {}", self.kind, self.token.text))
            },
            NodeKind::String => out.push_str(&format!("{} {:?}", self.kind, self.token.text)),
            NodeKind::FunctionCall => out.push_str(&format!("{} {}", self.kind, self.token.text)),
            _ => out.push_str(&format!("{}", self.kind)),
        }

        if self.token.kind != TokenKind::Eof {
            out.push_str(&format!(" @{}:{}", self.token.line, self.token.column));
        }

        out.push('\n');

        for child in &self.children {
            child.write_tree(out, depth + 1);
        }
    }
}

/// Bracket form: `Block[Add[Variable(a),Number(1)]]`.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_terminal() {
            return write!(f, "{}({})", self.kind, self.token.text);
        }

        if self.kind == NodeKind::FunctionCall {
            write!(f, "{}({})", self.kind, self.token.text)?;
        } else {
            write!(f, "{}", self.kind)?;
        }

        let children = self.children.iter()
            .map(|child| format!("{child}"))
            .collect::<Vec<String>>();

        write!(f, "[{}]", children.join(","))
    }
}
