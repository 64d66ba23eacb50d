use std::path::Path;

use sfl_core::{
    environment::prelude::Value,
    run_source,
    utils::prelude::Error
};

fn run(src: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    run_source(Path::new("program.sfl"), src, &mut out)?;

    Ok(String::from_utf8(out).expect("output should be utf8"))
}

#[test]
fn countdown() -> Result<(), Error> {
    let src = r#"
        # prints 3 2 1 and a newline
        n = 3;
        while (n == 0) == 0 begin
            print(n, " ");
            n = n - 1;
        end
        print("\n");
    "#;

    assert_eq!(run(src)?, "3 2 1 \n");

    Ok(())
}

#[test]
fn string_building() -> Result<(), Error> {
    let src = r#"
        word = "";
        count = 0;
        while (count == 3) == 0 begin
            word = word + "ab";
            count = count + 1;
        end
        if word == "ababab" begin
            print("built ", word);
        end
    "#;

    assert_eq!(run(src)?, "built ababab");

    Ok(())
}

#[test]
fn fractions() -> Result<(), Error> {
    assert_eq!(run("print(5 / 2, \",\", 10 / 4 * 2, \",\", .5 + .25);")?, "2.5,5,0.75");

    Ok(())
}

#[test]
fn final_environment() -> Result<(), Error> {
    let env = run_source(Path::new("program.sfl"), "a = 1; b = a + 1; a = \"a\";", std::io::sink())?;

    assert_eq!(env.get("a"), Some(&Value::from("a")));
    assert_eq!(env.get("b"), Some(&Value::Number(2.0)));

    Ok(())
}

#[test]
fn each_stage_reports_its_own_error() {
    assert!(matches!(run("a = 1..2;"), Err(Error::Lex { .. })));
    assert!(matches!(run("a = (1;"), Err(Error::Parse { .. })));
    assert!(matches!(run("function f begin end"), Err(Error::Parse { .. })));
    assert!(matches!(run("print(nope);"), Err(Error::Runtime { .. })));
}

#[test]
fn deep_nesting_fails_cleanly() -> Result<(), Error> {
    let nested = |depth: usize| format!("print({}7{});", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(run(&nested(100))?, "7");

    match run(&nested(5_000)) {
        Err(err @ Error::Parse { .. }) => assert!(err.pretty_string().contains("Nesting too deep")),
        other => panic!("expected a syntax error, got {other:?}"),
    }

    Ok(())
}
