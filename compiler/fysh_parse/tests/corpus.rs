//! Whole-program corpus: glyph source in, canonical rendering out.

use fysh_fmt::render;
use fysh_parse::{parse_source, FrontEndError};
use pretty_assertions::assert_eq;

fn rendered_items(source: &str) -> Vec<String> {
    match parse_source(source) {
        Ok(program) => program.items.iter().map(render).collect(),
        Err(err) => panic!("parse error: {err}"),
    }
}

fn check(source: &str, expected: &[&str]) {
    assert_eq!(rendered_items(source), expected);
}

#[test]
fn expressions_without_whitespace_between_statements() {
    let cases = [
        ("><(({o> ~", "1;"),
        ("><fysh> ~", "fysh;"),
        ("><fysh> <3 ><{({o> ~", "(fysh * 5);"),
        ("><fysh> ><{({o> <3 ><(({o> ~", "(fysh + (5 * 1));"),
        ("><fyshy> | ><{({o> ^ ><(({o> ~", "(fyshy | (5 ^ 1));"),
        ("><fysh1> ><fysh2> ><fysh3> ~", "(fysh1 + (fysh2 + fysh3));"),
        ("><{{> <3 ><{(({({> <3 ><{({{{{({{> ~", "((3 * 37) * 379);"),
        ("><{{> <3 (><{(({({> <3 ><{({{{{({{>) ~", "(3 * (37 * 379));"),
        ("><fysh> o~ ><{({{{{({{> ~", "(fysh > 379);"),
        ("[>(sub) ><{({{{{({{>] ~", "sub(379);"),
        ("[><{({{{{({{>] ~", "[379];"),
        ("[><{({{{{({{> - ><{({{{{({{>] ~", "[379, 379];"),
        ("<{{{>< ~", "-7;"),
        ("!!><}> ~", "(!1);"),
        ("!><}> ~", "(~1);"),
        ("!!!><}> ~", "(!(~1));"),
        ("!(!!><}>) ~", "(~(!1));"),
        (
            "><{{(({(> </3 ><{(> <3 ><{(> ><{({(> ~",
            "(((50 / 2) * 2) + 10);",
        ),
    ];
    let source: String = cases.iter().map(|(glyphs, _)| *glyphs).collect();
    let expected: Vec<&str> = cases.iter().map(|(_, text)| *text).collect();
    check(&source, &expected);
}

#[test]
fn subroutine_with_if_else() {
    let source = "
>(abs) ><num>
><>
\t><(((^> [><num> o~ ><)))>]
\t><>
\t\t<~ ><num> ~
\t<><
\t><(((*>
\t><>
\t\t<~ <num>< ~
\t<><
<><
";
    check(
        source,
        &["sub abs(num) {\nif ((num > 0)) {\nreturn num;\n} else {\nreturn (-num);\n}\n}"],
    );
}

#[test]
fn assignment_in_both_facings() {
    let source = "
><fysh> = ><(({o> ~
<fysh>< = ><(({o> ~
";
    check(source, &["fysh = 1;", "fysh = (-1);"]);
}

#[test]
fn increment_and_decrement() {
    check(">><fysh> ~ <fysh><< ~", &["fysh++;", "fysh--;"]);
    check(">><fysh>~<fysh><<~", &["fysh++;", "fysh--;"]);
}

#[test]
fn tanks() {
    let source = "
><numbers> = [><})}> - ><}})> - ><}}}> - <({><] ~
><avg> = [>(average) ><numbers>] ~
><avg> = [(average)< ><numbers>] ~
";
    check(
        source,
        &[
            "numbers = [5, 6, 7, -1];",
            "avg = average(numbers);",
            "avg = (-average(numbers));",
        ],
    );
}

#[test]
fn bubbles_bowls_and_loops() {
    let source = r"
><{{(((> (+o ><{> ~

o+) ><steven> ~
(+o ><###> ~

><(((^> [><steven> o~ ><}}>]
><>
        <~ ><steven> ~
<><

><(((@> [><{>]
><>
        ><{{(((o> (+o ><{> ~
        ><{{(((o> (+o ><(> ~
<><

><//> With Fysh Bowl
><(((@> (><{>)
><>
	><\/> ~
	<\/>< ~
<><
";
    check(
        source,
        &[
            "(24 (+o 1);",
            "o+) steven;",
            "(+o ><###>;",
            "if ((steven > 3)) {\nreturn steven;\n}",
            "while (1) {\n(24 (+o 1);\n(24 (+o 0);\n}",
            "while (1) {\nbreak;\nbreak;\n}",
        ],
    );
}

#[test]
fn missing_terminator_is_an_error() {
    let err = match parse_source("><fysh> = ><{> ~ ><fysh>") {
        Ok(program) => panic!("expected an error, parsed {} items", program.len()),
        Err(err) => err,
    };
    assert!(matches!(err, FrontEndError::Parse(_)), "{err}");
    assert_eq!(err.to_diagnostic().code.as_str(), "E1003");
}

#[test]
fn unicode_glyph_alternatives() {
    check("><{({°> ♡ ><{> ~", &["(5 * 1);"]);
    check("><{> ≈≈ ><{> ~", &["(1 == 1);"]);
    check("><{> ~≈ ><{> ~", &["(1 != 1);"]);
}
