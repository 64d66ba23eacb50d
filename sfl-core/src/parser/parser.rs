use crate::scanner::prelude::{Token, TokenKind};
use super::ast::{Node, NodeKind};
use super::error::{expected_token, parse_error, ParseError, ParseErrorType};

/// Binding strength of the binary operator levels, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Precedence {
    Lowest,
    Sum,
    Product,
    Equals,
    Primary,
}

impl Precedence {
    pub fn tighter(self) -> Self {
        match self {
            Self::Lowest => Self::Sum,
            Self::Sum => Self::Product,
            Self::Product => Self::Equals,
            Self::Equals | Self::Primary => Self::Primary,
        }
    }
}

impl From<TokenKind> for Precedence {
    fn from(value: TokenKind) -> Self {
        match value {
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Star | TokenKind::Slash => Self::Product,
            TokenKind::Equal => Self::Equals,
            _ => Self::Lowest,
        }
    }
}

/// Deepest nesting of expressions and blocks the parser accepts.
pub const MAX_NESTING: usize = 128;

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
    eof: Token,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(last) => Token::eof(last.end_line, last.end_column, last.span.end),
            None => Token::eof(1, 1, 0),
        };

        Self {
            tokens,
            position: 0,
            depth: 0,
            eof,
        }
    }

    /// Current token; the end-of-input sentinel once the tokens run out.
    pub fn current(&self) -> &Token {
        self.peek(0)
    }

    pub fn peek(&self, offset: usize) -> &Token {
        self.tokens.get(self.position + offset).unwrap_or(&self.eof)
    }

    pub fn step(&mut self) -> Token {
        let token = self.current().clone();

        if self.position < self.tokens.len() {
            self.position += 1;
        }

        token
    }

    pub fn expect_one(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.current().is(kind) {
            Ok(self.step())
        } else {
            parse_error(
                ParseErrorType::UnexpectedToken { expected: vec![expected_token(kind)] },
                self.current()
            )
        }
    }

    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T, ParseError>) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING {
            return parse_error(ParseErrorType::TooDeep { limit: MAX_NESTING }, self.current());
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;

        result
    }

    /// Parses the whole token list into a root `Block`.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        let statements = self.parse_program()?;

        if self.current().is(TokenKind::End) {
            return parse_error(ParseErrorType::UnmatchedEnd, self.current());
        }

        log::debug!("parsed {} top-level statements", statements.len());

        Ok(Node::block(Token::eof(1, 1, 0), statements))
    }

    // program := statement* (stops at `end` or end of input)
    fn parse_program(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut statements = vec![];

        while !matches!(self.current().kind, TokenKind::End | TokenKind::Eof) {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Node, ParseError> {
        match self.current().kind {
            TokenKind::If => self.parse_conditional(NodeKind::If),
            TokenKind::While => self.parse_conditional(NodeKind::While),
            TokenKind::Function => parse_error(
                ParseErrorType::NotImplemented { feature: "user-defined functions" },
                self.current()
            ),
            TokenKind::Identifier if self.peek(1).is(TokenKind::Assign) => self.parse_assignment(),
            _ => {
                let expression = self.parse_expression()?;
                self.expect_one(TokenKind::Semicolon)?;

                Ok(expression)
            }
        }
    }

    // ('if' | 'while') expression block
    fn parse_conditional(&mut self, kind: NodeKind) -> Result<Node, ParseError> {
        let token = self.step();
        let condition = self.parse_expression()?;
        let body = self.parse_block()?;

        Ok(Node::new(kind, token, vec![condition, body]))
    }

    fn parse_block(&mut self) -> Result<Node, ParseError> {
        self.nested(|parser| {
            let begin = parser.expect_one(TokenKind::Begin)?;
            let statements = parser.parse_program()?;
            parser.expect_one(TokenKind::End)?;

            Ok(Node::block(begin, statements))
        })
    }

    fn parse_assignment(&mut self) -> Result<Node, ParseError> {
        let target = self.expect_one(TokenKind::Identifier)?;
        let token = self.expect_one(TokenKind::Assign)?;
        let value = self.parse_expression()?;
        self.expect_one(TokenKind::Semicolon)?;

        Ok(Node::new(
            NodeKind::Assign,
            token,
            vec![Node::leaf(NodeKind::Variable, target), value]
        ))
    }

    pub fn parse_expression(&mut self) -> Result<Node, ParseError> {
        self.nested(|parser| parser.parse_binary(Precedence::Lowest.tighter()))
    }

    // Folds `level` operators to the left: a + b + c => Add(Add(a, b), c).
    fn parse_binary(&mut self, level: Precedence) -> Result<Node, ParseError> {
        if level == Precedence::Primary {
            return self.parse_primary();
        }

        let mut left = self.parse_binary(level.tighter())?;

        while Precedence::from(self.current().kind) == level {
            let token = self.step();
            let kind = match NodeKind::from_operator(token.kind) {
                Some(kind) => kind,
                None => return parse_error(
                    ParseErrorType::UnexpectedToken { expected: vec!["an operator".to_string()] },
                    &token
                ),
            };
            let right = self.parse_binary(level.tighter())?;

            left = Node::binary(kind, token, left, right);
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        match self.current().kind {
            TokenKind::LParen => {
                self.step();
                let expression = self.parse_expression()?;
                self.expect_one(TokenKind::RParen)?;

                Ok(expression)
            },
            TokenKind::Identifier if self.peek(1).is(TokenKind::LParen) => self.parse_call(),
            TokenKind::Identifier => Ok(Node::leaf(NodeKind::Variable, self.step())),
            TokenKind::Number => Ok(Node::leaf(NodeKind::Number, self.step())),
            TokenKind::String => Ok(Node::leaf(NodeKind::String, self.step())),
            TokenKind::Eof => parse_error(ParseErrorType::UnexpectedEof, self.current()),
            _ => parse_error(
                ParseErrorType::UnexpectedToken {
                    expected: [TokenKind::LParen, TokenKind::Identifier, TokenKind::Number, TokenKind::String]
                        .into_iter()
                        .map(expected_token)
                        .collect(),
                },
                self.current()
            ),
        }
    }

    // identifier '(' (expression (',' expression)*)? ')'
    fn parse_call(&mut self) -> Result<Node, ParseError> {
        let name = self.expect_one(TokenKind::Identifier)?;
        self.expect_one(TokenKind::LParen)?;

        let mut arguments = vec![];

        if !self.current().is(TokenKind::RParen) {
            loop {
                arguments.push(self.parse_expression()?);

                if !self.current().is(TokenKind::Comma) {
                    break;
                }
                self.step();
            }
        }

        self.expect_one(TokenKind::RParen)?;

        Ok(Node::call(name, arguments))
    }
}

pub fn parse(tokens: Vec<Token>) -> Result<Node, ParseError> {
    Parser::new(tokens).parse()
}
