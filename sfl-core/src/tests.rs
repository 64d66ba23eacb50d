use std::path::Path;

use crate::{
    environment::prelude::{Environment, Value},
    read_source, run_in,
    scanner::prelude::LexErrorType,
    utils::prelude::Error
};

#[test]
fn test_read_source_stops_at_sentinel() -> Result<(), Error> {
    let input = "a = 1;\nprint(a);\nEOF\nprint(\"ignored\");\n";

    let src = read_source(Path::new("<stdin>"), input.as_bytes(), Some("EOF"))?;

    assert_eq!(src, "a = 1;\nprint(a);\n");

    Ok(())
}

#[test]
fn test_read_without_sentinel() -> Result<(), Error> {
    let input = "a = 1;\r\nEOF\nb = 2;";

    assert_eq!(read_source(Path::new("f"), input.as_bytes(), None)?, input);
    assert_eq!(read_source(Path::new("f"), "x = 1;\nEOF".as_bytes(), Some("EOF"))?, "x = 1;\n");
    assert_eq!(read_source(Path::new("f"), "x = 1;\r\nEOF\r\n".as_bytes(), Some("EOF"))?, "x = 1;\r\n");

    Ok(())
}

#[test]
fn test_crlf_sentinel_on_last_line() -> Result<(), Error> {
    let src = read_source(Path::new("f"), "x = 1;\r\nEOF\r".as_bytes(), Some("EOF"))?;

    assert_eq!(src, "x = 1;\r\n");

    Ok(())
}

#[test]
fn test_invalid_utf8() {
    let input: &[u8] = b"a = 1;\nb = \xff;";

    match read_source(Path::new("bad"), input, None) {
        Err(Error::Lex { error, src, .. }) => {
            assert_eq!(error.error, LexErrorType::InvalidUtf8);
            assert_eq!((error.line, error.col), (2, 5));
            assert_eq!(src, "a = 1;\nb = ");
        },
        other => panic!("expected a lexical error, got {other:?}"),
    }
}

#[test]
fn test_run_in_keeps_bindings() -> Result<(), Error> {
    let mut env = Environment::new();
    let mut out = Vec::new();

    run_in(Path::new("repl"), "a = 2;", &mut env, &mut out)?;
    run_in(Path::new("repl"), "print(a * a);", &mut env, &mut out)?;

    assert_eq!(out, b"4");
    assert_eq!(env.get("a"), Some(&Value::Number(2.0)));

    Ok(())
}
