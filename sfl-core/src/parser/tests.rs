use crate::{
    scanner::prelude::{scan, Token, TokenKind},
    parser::prelude::{parse, Node, NodeKind, ParseError, ParseErrorType, MAX_NESTING},
    utils::prelude::SrcSpan
};

fn parse_str(input: &str) -> Result<Node, ParseError> {
    parse(scan(input).expect("input should scan"))
}

fn tok(kind: TokenKind, text: &str) -> Token {
    Token::new(text, 0, 0, kind, SrcSpan::default())
}

#[test]
fn test_empty() -> Result<(), ParseError> {
    let root = parse(vec![])?;

    assert_eq!(root.kind, NodeKind::Block);
    assert!(root.children.is_empty());
    assert_eq!(format!("{root}"), "Block[]");

    Ok(())
}

#[test]
fn test_minimal() -> Result<(), ParseError> {
    let root = parse(vec![tok(TokenKind::Identifier, "a"), tok(TokenKind::Semicolon, ";")])?;

    assert_eq!(format!("{root}"), "Block[Variable(a)]");

    Ok(())
}

#[test]
fn test_left_associative() -> Result<(), ParseError> {
    let root = parse(vec![
        tok(TokenKind::Identifier, "a"),
        tok(TokenKind::Plus, "+"),
        tok(TokenKind::Identifier, "b"),
        tok(TokenKind::Plus, "+"),
        tok(TokenKind::Identifier, "c"),
        tok(TokenKind::Semicolon, ";"),
    ])?;

    assert_eq!(format!("{root}"), "Block[Add[Add[Variable(a),Variable(b)],Variable(c)]]");

    let root = parse_str("a - b - c; a / b * c;")?;

    assert_eq!(
        format!("{root}"),
        "Block[Subtract[Subtract[Variable(a),Variable(b)],Variable(c)],\
         Multiply[Divide[Variable(a),Variable(b)],Variable(c)]]"
    );

    Ok(())
}

#[test]
fn test_precedence() -> Result<(), ParseError> {
    let root = parse_str("a+b*c;")?;
    assert_eq!(format!("{root}"), "Block[Add[Variable(a),Multiply[Variable(b),Variable(c)]]]");

    let root = parse_str("a*b+c;")?;
    assert_eq!(format!("{root}"), "Block[Add[Multiply[Variable(a),Variable(b)],Variable(c)]]");

    let root = parse_str("(a+b)*c;")?;
    assert_eq!(format!("{root}"), "Block[Multiply[Add[Variable(a),Variable(b)],Variable(c)]]");

    // `==` binds tighter than the arithmetic operators
    let root = parse_str("a == b + 1;")?;
    assert_eq!(format!("{root}"), "Block[Add[Equals[Variable(a),Variable(b)],Number(1)]]");

    let root = parse_str("a * b == c;")?;
    assert_eq!(format!("{root}"), "Block[Multiply[Variable(a),Equals[Variable(b),Variable(c)]]]");

    Ok(())
}

#[test]
fn test_operator_tokens_become_nodes() -> Result<(), ParseError> {
    let root = parse_str("x = 1 + 2;")?;
    let assign = &root.children[0];

    assert_eq!(assign.kind, NodeKind::Assign);
    assert_eq!(assign.token.kind, TokenKind::Assign);
    assert_eq!(assign.children[0].kind, NodeKind::Variable);
    assert_eq!(assign.children[0].text(), "x");

    let add = &assign.children[1];
    assert_eq!(add.token.text, "+");
    assert_eq!((add.token.line, add.token.column), (1, 7));
    assert!(add.children.iter().all(|child| child.children.is_empty()));

    Ok(())
}

#[test]
fn test_statements() -> Result<(), ParseError> {
    let input = r#"
        a = 0;
        while a == 0 begin
            a = 1;
        end
        if a begin print(a, "done"); end
        print();
    "#;

    let root = parse_str(input)?;

    assert_eq!(
        format!("{root}"),
        "Block[Assign[Variable(a),Number(0)],\
         While[Equals[Variable(a),Number(0)],Block[Assign[Variable(a),Number(1)]]],\
         If[Variable(a),Block[FunctionCall(print)[Variable(a),String(done)]]],\
         FunctionCall(print)[]]"
    );

    Ok(())
}

#[test]
fn test_nested_blocks() -> Result<(), ParseError> {
    let root = parse_str("if a begin while b begin end end")?;

    assert_eq!(format!("{root}"), "Block[If[Variable(a),Block[While[Variable(b),Block[]]]]]");

    Ok(())
}

#[test]
fn test_call_arguments() -> Result<(), ParseError> {
    let root = parse_str("f(a + 1, g(b), \"s\");")?;
    let call = &root.children[0];

    assert_eq!(call.kind, NodeKind::FunctionCall);
    assert_eq!(call.text(), "f");
    assert_eq!(call.children.len(), 3);
    assert_eq!(call.children[1].kind, NodeKind::FunctionCall);

    Ok(())
}

#[test]
fn test_identifier_statement_needs_semicolon() {
    let err = parse_str("a + b").unwrap_err();

    assert_eq!(err.token.kind, TokenKind::Eof);
    assert!(matches!(err.error, ParseErrorType::UnexpectedToken { .. }));
}

#[test]
fn test_bare_end() {
    let err = parse_str("a = 1; end").unwrap_err();

    assert_eq!(err.error, ParseErrorType::UnmatchedEnd);
    assert_eq!((err.token.line, err.token.column), (1, 8));
}

#[test]
fn test_function_not_implemented() {
    let err = parse_str("function f() begin end").unwrap_err();

    assert!(matches!(err.error, ParseErrorType::NotImplemented { .. }));
    assert_eq!(err.token.kind, TokenKind::Function);
}

#[test]
fn test_errors() {
    let cases = vec![
        ("if a print(a); end", TokenKind::Identifier),
        ("while a begin a = 1;", TokenKind::Eof),
        ("a = ;", TokenKind::Semicolon),
        ("print(a b);", TokenKind::Identifier),
        ("(a + b;", TokenKind::Semicolon),
        ("a = 2 ** 3;", TokenKind::Power),
        ("a = 1", TokenKind::Eof),
        ("begin end", TokenKind::Begin),
    ];

    for (input, found) in cases {
        match parse_str(input) {
            Err(err) => assert_eq!(err.token.kind, found, "wrong offending token for {input:?}: {err}"),
            Ok(root) => panic!("Expected Err for {input:?} but got Ok({root})"),
        }
    }

    let err = parse_str("a = 1 +").unwrap_err();
    assert_eq!(err.error, ParseErrorType::UnexpectedEof);
}

#[test]
fn test_eof_position() {
    let err = parse_str("print(a").unwrap_err();

    assert_eq!(err.token.kind, TokenKind::Eof);
    assert_eq!((err.token.line, err.token.column), (1, 8));
    assert_eq!(err.token.span.start, 7);
}

#[test]
fn test_eof_after_multiline_string() {
    let err = parse_str("print(\"a\nbcdef\"").unwrap_err();

    assert_eq!(err.token.kind, TokenKind::Eof);
    assert_eq!((err.token.line, err.token.column), (2, 7));
}

fn parenthesized(depth: usize) -> String {
    format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_nesting_limit() -> Result<(), ParseError> {
    let root = parse_str(&parenthesized(MAX_NESTING - 1))?;
    assert_eq!(root.to_string(), "Block[Assign[Variable(x),Number(1)]]");

    let err = parse_str(&parenthesized(MAX_NESTING)).unwrap_err();
    assert_eq!(err.error, ParseErrorType::TooDeep { limit: MAX_NESTING });
    assert_eq!(err.token.kind, TokenKind::LParen);

    Ok(())
}

#[test]
fn test_deep_nesting_is_an_error() {
    for depth in [1_000, 20_000] {
        let err = parse_str(&parenthesized(depth)).unwrap_err();
        assert_eq!(err.error, ParseErrorType::TooDeep { limit: MAX_NESTING });
    }

    let blocks = format!("{}x = 1;{}", "while 1 begin ".repeat(500), "end ".repeat(500));
    let err = parse_str(&blocks).unwrap_err();
    assert_eq!(err.error, ParseErrorType::TooDeep { limit: MAX_NESTING });
}

#[test]
fn test_tree_string() -> Result<(), ParseError> {
    let root = parse_str("x = \"hi\";")?;

    assert_eq!(
        root.tree_string(),
        "Block\n  Assign @1:3\n    Variable x @1:1\n    String \"hi\" @1:5\n"
    );

    Ok(())
}
