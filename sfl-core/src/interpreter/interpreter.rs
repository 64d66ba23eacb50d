use std::io::Write;

use crate::{
    environment::prelude::{Environment, Value},
    parser::prelude::{Node, NodeKind}
};
use super::error::{RuntimeError, RuntimeErrorType};

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Tree-walking executor. `print` output goes to `out` as statements run.
pub struct Interpreter<W: Write> {
    out: W,
}

impl Interpreter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Runs the program rooted at `ast` against `env`.
    pub fn run(&mut self, ast: &Node, env: &mut Environment) -> RuntimeResult<()> {
        log::debug!("running {} top-level statements", ast.children.len());

        self.block(ast, env)?;
        self.out.flush().map_err(|err| RuntimeError::at(ast, RuntimeErrorType::Io { kind: err.kind() }))?;

        log::debug!("run finished with {} bound variables", env.len());

        Ok(())
    }

    /// Runs against a fresh environment and hands it back.
    pub fn execute(&mut self, ast: &Node) -> RuntimeResult<Environment> {
        let mut env = Environment::new();
        self.run(ast, &mut env)?;

        Ok(env)
    }

    fn block(&mut self, node: &Node, env: &mut Environment) -> RuntimeResult<()> {
        expect_kind(node, NodeKind::Block, "a block")?;

        for statement in &node.children {
            self.statement(statement, env)?;
        }

        Ok(())
    }

    fn statement(&mut self, node: &Node, env: &mut Environment) -> RuntimeResult<()> {
        log::trace!("{} at {}:{}", node.kind, node.token.line, node.token.column);

        match node.kind {
            NodeKind::Block => self.block(node, env),
            NodeKind::Assign => self.assign(node, env),
            NodeKind::If => {
                let (condition, body) = condition_and_body(node)?;

                if self.expression(condition, env)?.as_bool() {
                    self.block(body, env)?;
                }

                Ok(())
            },
            NodeKind::While => {
                let (condition, body) = condition_and_body(node)?;

                while self.expression(condition, env)?.as_bool() {
                    self.block(body, env)?;
                }

                Ok(())
            },
            NodeKind::FunctionCall => self.call(node, env).map(|_| ()),
            // expression statement, the value is dropped
            kind if kind.is_binary() || kind.is_terminal() => self.expression(node, env).map(|_| ()),
            _ => Err(internal(node, "a statement")),
        }
    }

    fn assign(&mut self, node: &Node, env: &mut Environment) -> RuntimeResult<()> {
        let (target, value) = match node.children.as_slice() {
            [target, value] => (target, value),
            _ => return Err(internal(node, "an assignment with a target and a value")),
        };

        expect_kind(target, NodeKind::Variable, "a variable")?;

        let value = self.expression(value, env)?;

        log::trace!("{} = {value}", target.text());
        env.set(target.text(), value);

        Ok(())
    }

    /// Calls a builtin. `print` writes each argument, left to right, with no
    /// separator or newline, and yields no value.
    fn call(&mut self, node: &Node, env: &mut Environment) -> RuntimeResult<Option<Value>> {
        match node.text() {
            "print" => {
                for argument in &node.children {
                    let value = self.expression(argument, env)?;

                    write!(self.out, "{value}")
                        .map_err(|err| RuntimeError::at(node, RuntimeErrorType::Io { kind: err.kind() }))?;
                }

                Ok(None)
            },
            name => Err(RuntimeError::at(node, RuntimeErrorType::UnknownFunction {
                name: name.to_string()
            })),
        }
    }

    fn expression(&mut self, node: &Node, env: &mut Environment) -> RuntimeResult<Value> {
        match node.kind {
            NodeKind::Number => node.text()
                .parse::<f64>()
                .map(Value::Number)
                .map_err(|_| RuntimeError::at(node, RuntimeErrorType::InvalidNumber {
                    literal: node.text().to_string()
                })),
            NodeKind::String => Ok(Value::String(node.text().to_string())),
            NodeKind::Variable => env.get(node.text())
                .cloned()
                .ok_or_else(|| RuntimeError::at(node, RuntimeErrorType::UndefinedVariable {
                    name: node.text().to_string()
                })),
            NodeKind::Add
            | NodeKind::Subtract
            | NodeKind::Multiply
            | NodeKind::Divide
            | NodeKind::Equals => self.binary(node, env),
            NodeKind::FunctionCall => match self.call(node, env)? {
                Some(value) => Ok(value),
                None => Err(RuntimeError::at(node, RuntimeErrorType::NoValue {
                    name: node.text().to_string()
                })),
            },
            _ => Err(internal(node, "an expression")),
        }
    }

    fn binary(&mut self, node: &Node, env: &mut Environment) -> RuntimeResult<Value> {
        let (left, right) = match node.children.as_slice() {
            [left, right] => (left, right),
            _ => return Err(internal(node, "a binary operation with two operands")),
        };

        let left = self.expression(left, env)?;
        let right = self.expression(right, env)?;

        let result = match node.kind {
            NodeKind::Add => left.add(&right),
            NodeKind::Subtract => left.sub(&right),
            NodeKind::Multiply => left.mul(&right),
            NodeKind::Divide => left.div(&right),
            NodeKind::Equals => left.equals(&right),
            _ => return Err(internal(node, "a binary operation")),
        };

        result.map_err(|err| RuntimeError::at(node, err))
    }
}

fn condition_and_body(node: &Node) -> RuntimeResult<(&Node, &Node)> {
    match node.children.as_slice() {
        [condition, body] => Ok((condition, body)),
        _ => Err(internal(node, "a condition and a body")),
    }
}

fn expect_kind(node: &Node, kind: NodeKind, expected: &'static str) -> RuntimeResult<()> {
    if node.kind == kind {
        Ok(())
    } else {
        Err(internal(node, expected))
    }
}

fn internal(node: &Node, expected: &'static str) -> RuntimeError {
    RuntimeError::at(node, RuntimeErrorType::Internal { expected, found: node.kind })
}

/// Runs `ast` against `env`, printing to standard output.
pub fn run(ast: &Node, env: &mut Environment) -> RuntimeResult<()> {
    Interpreter::stdout().run(ast, env)
}
