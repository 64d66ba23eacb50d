use thiserror::Error;

use crate::{
    environment::prelude::ValueError,
    parser::prelude::{Node, NodeKind},
    scanner::prelude::Token
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeErrorType {
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },
    #[error(transparent)]
    Operand(#[from] ValueError),
    #[error("unknown function `{name}`")]
    UnknownFunction { name: String },
    #[error("function `{name}` does not produce a value")]
    NoValue { name: String },
    #[error("invalid number literal `{literal}`")]
    InvalidNumber { literal: String },
    #[error("failed to write output: {kind}")]
    Io { kind: std::io::ErrorKind },
    /// The tree violates its own shape rules; not caused by the program text.
    #[error("internal error: expected {expected}, found a {found} node")]
    Internal {
        expected: &'static str,
        found: NodeKind,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{error} at {}:{}", .token.line, .token.column)]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub node: NodeKind,
    pub token: Token,
}

impl RuntimeError {
    pub fn at(node: &Node, error: impl Into<RuntimeErrorType>) -> Self {
        Self {
            error: error.into(),
            node: node.kind,
            token: node.token.clone(),
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self.error, RuntimeErrorType::Internal { .. })
    }

    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            RuntimeErrorType::UndefinedVariable { name } => {
                ("Undefined variable", vec![format!("`{name}` is read before anything is assigned to it")])
            },
            RuntimeErrorType::Operand(ValueError::KindMismatch { left, right, .. }) => {
                ("Type mismatch", vec![format!("Left operand is a {left}, right operand is a {right}")])
            },
            RuntimeErrorType::Operand(ValueError::UnsupportedKind { operation, kind }) => {
                ("Unsupported operands", vec![format!("Cannot {operation} two {kind}s")])
            },
            RuntimeErrorType::UnknownFunction { name } => {
                ("Unknown function", vec![format!("`{name}` is not defined, the only function is `print`")])
            },
            RuntimeErrorType::NoValue { name } => {
                ("Not a value", vec![format!("`{name}(...)` can only be used as a statement")])
            },
            RuntimeErrorType::InvalidNumber { .. } => ("Invalid number", vec![]),
            RuntimeErrorType::Io { kind } => ("Output failed", vec![format!("{kind}")]),
            RuntimeErrorType::Internal { expected, found } => {
                ("Internal error", vec![format!("Expected {expected}, found a {found} node")])
            },
        }
    }
}
