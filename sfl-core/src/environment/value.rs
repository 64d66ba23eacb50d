use std::fmt::Display;

use thiserror::Error;

pub const TRUE: Value = Value::Number(1.0);
pub const FALSE: Value = Value::Number(0.0);

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    String,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Number => write!(f, "number"),
            ValueKind::String => write!(f, "string"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Equality,
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Addition => "add",
            Operation::Subtraction => "subtract",
            Operation::Multiplication => "multiply",
            Operation::Division => "divide",
            Operation::Equality => "compare",
        };

        write!(f, "{name}")
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    #[error("cannot {operation} values with types {left} and {right}")]
    KindMismatch {
        operation: Operation,
        left: ValueKind,
        right: ValueKind,
    },
    #[error("cannot {operation} two {kind}s")]
    UnsupportedKind {
        operation: Operation,
        kind: ValueKind,
    },
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
        }
    }

    /// Truthiness: a number is true only when it is exactly `1`, a string when
    /// it is non-empty.
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Number(value) => *value == 1.0,
            Self::String(value) => !value.is_empty(),
        }
    }

    pub fn add(&self, other: &Value) -> Result<Value, ValueError> {
        match (self, other) {
            (Self::Number(left), Self::Number(right)) => Ok(Self::Number(left + right)),
            (Self::String(left), Self::String(right)) => Ok(Self::String(format!("{left}{right}"))),
            _ => Err(self.mismatch(other, Operation::Addition)),
        }
    }

    pub fn sub(&self, other: &Value) -> Result<Value, ValueError> {
        self.arithmetic(other, Operation::Subtraction, |left, right| left - right)
    }

    pub fn mul(&self, other: &Value) -> Result<Value, ValueError> {
        self.arithmetic(other, Operation::Multiplication, |left, right| left * right)
    }

    pub fn div(&self, other: &Value) -> Result<Value, ValueError> {
        self.arithmetic(other, Operation::Division, |left, right| left / right)
    }

    /// `1` when both sides hold the same value, `0` otherwise.
    pub fn equals(&self, other: &Value) -> Result<Value, ValueError> {
        let equal = match (self, other) {
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            _ => return Err(self.mismatch(other, Operation::Equality)),
        };

        Ok(if equal { TRUE } else { FALSE })
    }

    fn arithmetic(
        &self,
        other: &Value,
        operation: Operation,
        apply: impl Fn(f64, f64) -> f64
    ) -> Result<Value, ValueError> {
        match (self, other) {
            (Self::Number(left), Self::Number(right)) => Ok(Self::Number(apply(*left, *right))),
            (Self::String(_), Self::String(_)) => Err(ValueError::UnsupportedKind {
                operation,
                kind: ValueKind::String,
            }),
            _ => Err(self.mismatch(other, operation)),
        }
    }

    fn mismatch(&self, other: &Value, operation: Operation) -> ValueError {
        ValueError::KindMismatch {
            operation,
            left: self.kind(),
            right: other.kind(),
        }
    }
}

/// Renders numbers with six fractional digits, then drops trailing zeros and a
/// dangling decimal point: `2.000000` => `2`, `2.500000` => `2.5`.
pub fn format_number(value: f64) -> String {
    let mut text = format!("{value:.6}");

    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }

    text
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(value) => write!(f, "{}", format_number(*value)),
            Value::String(value) => write!(f, "{value}"),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
