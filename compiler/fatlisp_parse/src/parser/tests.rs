use super::*;
use fatlisp_ir::LexErrorKind;
use fatlisp_value::ValueKind;
use pretty_assertions::assert_eq;

fn forms(source: &str) -> Vec<Value> {
    let root = parse("test", source).unwrap();
    root.as_list().unwrap().to_vec()
}

fn render(source: &str) -> String {
    parse("test", source).unwrap().to_string()
}

fn error(source: &str) -> ParseError {
    parse("test", source).unwrap_err()
}

#[test]
fn round_trips_through_display() {
    assert_eq!(render("(+ 1 2)"), "((+ 1 2))");
    assert_eq!(
        render("(def double (fn (x) (+ x x)))\n(double 21)"),
        "((def double (fn (x) (+ x x))) (double 21))"
    );
}

#[test]
fn floats_render_as_readable_literals() {
    let source = "'(0.00001 100000000000000000000.0 2.5 -3.0 1e300)";
    let source = source.replace("1e300", &format!("1{}.0", "0".repeat(300)));
    let first = parse("test", &source).unwrap();
    assert_eq!(
        first.to_string(),
        format!(
            "((quote (0.00001 100000000000000000000.0 2.5 -3.0 1{}.0)))",
            "0".repeat(300)
        )
    );
    let again = parse("test", &first.to_string()).unwrap();
    assert_eq!(again.as_list().unwrap()[0], first);
}

#[test]
fn empty_source_is_empty_root() {
    assert_eq!(forms(""), Vec::<Value>::new());
    assert_eq!(forms("  \n"), Vec::<Value>::new());
}

#[test]
fn root_spans_whole_source() {
    let root = parse("test", "(a) b").unwrap();
    assert_eq!(root.origin, Span::new(0, 5));
}

#[test]
fn literals_are_classified() {
    assert_eq!(
        forms("1 -2 2.5 \"s t\" true false nil sym"),
        vec![
            Value::int(1),
            Value::int(-2),
            Value::float(2.5),
            Value::string("s t"),
            Value::bool(true),
            Value::bool(false),
            Value::nil(),
            Value::ident("sym"),
        ]
    );
}

#[test]
fn values_carry_token_origin() {
    let forms = forms("(foo 12)");
    let list = forms[0].as_list().unwrap();
    assert_eq!(forms[0].origin, Span::new(0, 8));
    assert_eq!(list[0].origin, Span::new(1, 4));
    assert_eq!(list[1].origin, Span::new(5, 7));
}

#[test]
fn huge_integer_falls_back_to_float() {
    assert_eq!(forms("99999999999999999999"), vec![Value::float(1e20)]);
}

#[test]
fn malformed_number_is_an_error() {
    let err = error("(add 1.2.3 1)");
    assert_eq!(
        err.kind,
        ParseErrorKind::InvalidNumber {
            text: "1.2.3".to_string()
        }
    );
    assert_eq!(err.span, Span::new(5, 10));
    assert_eq!(err.to_string(), "invalid number: 1.2.3");
}

#[test]
fn strings_keep_escapes_verbatim() {
    assert_eq!(forms(r#""a \"b\"""#), vec![Value::string(r#"a \"b\""#)]);
}

#[test]
fn quote_identifier() {
    let forms = forms("'foo");
    assert_eq!(
        forms,
        vec![Value::list(vec![Value::ident("quote"), Value::ident("foo")])]
    );
    assert_eq!(forms[0].origin, Span::new(0, 4));
}

#[test]
fn quote_list_opened_after_marker() {
    assert_eq!(render("'(1 2 3)"), "((quote (1 2 3)))");
}

#[test]
fn quote_inside_list() {
    assert_eq!(render("(puts 'a \"b\" '(c))"), "((puts (quote a) \"b\" (quote (c))))");
}

#[test]
fn nested_quotes_expand_inside_out() {
    assert_eq!(render("''a"), "((quote (quote a)))");
}

#[test]
fn quoted_empty_list() {
    assert_eq!(render("'()"), "((quote ()))");
}

#[test]
fn dangling_quote_at_end() {
    let err = error("(a) '");
    assert_eq!(err.kind, ParseErrorKind::DanglingQuote);
    assert_eq!(err.span, Span::new(4, 5));
}

#[test]
fn dangling_quote_before_close() {
    let err = error("(a ')");
    assert_eq!(err.kind, ParseErrorKind::DanglingQuote);
    assert_eq!(err.span, Span::new(3, 4));
}

#[test]
fn unexpected_close() {
    let err = error("(a))");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedCloseList);
    assert_eq!(err.span, Span::new(3, 4));
}

#[test]
fn lexer_errors_surface() {
    assert_eq!(
        error("(a").kind,
        ParseErrorKind::Lex(LexErrorKind::UnterminatedList)
    );
    assert_eq!(
        error("\"abc").kind,
        ParseErrorKind::Lex(LexErrorKind::UnterminatedString)
    );
    let err = error("(add 42d)");
    assert_eq!(err.kind, ParseErrorKind::Lex(LexErrorKind::InvalidNumber));
    assert_eq!(err.span, Span::new(5, 7));
}

#[test]
fn nesting_depth() {
    let root = parse("test", "(((x)))").unwrap();
    let mut value = root.as_list().unwrap()[0].clone();
    let mut depth = 0;
    while let ValueKind::List(items) = &value.kind {
        depth += 1;
        let next = items[0].clone();
        value = next;
    }
    assert_eq!(depth, 3);
    assert_eq!(value, Value::ident("x"));
}

mod proptest_parser {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_panics(source in any::<String>()) {
            let _ = parse("prop", &source);
        }

        #[test]
        fn never_panics_on_lisp_like(source in "[()' a-z0-9.+\"-]{0,60}") {
            let _ = parse("prop", &source);
        }

        #[test]
        fn finite_floats_reparse_exactly(x in any::<f64>()) {
            prop_assume!(x.is_finite());
            let text = Value::float(x).to_string();
            let parsed = parse("prop", &text).unwrap();
            prop_assert_eq!(&parsed.as_list().unwrap()[0], &Value::float(x));
        }

        #[test]
        fn display_reparses_to_same_tree(
            atoms in proptest::collection::vec("[a-z]{1,5}|[0-9]{1,6}|\"[a-z ]{0,5}\"", 0..10)
        ) {
            let source = format!("({})", atoms.join(" "));
            let first = parse("prop", &source).unwrap();
            let again = parse("prop", &first.to_string()).unwrap();
            let inner = again.as_list().unwrap();
            prop_assert_eq!(inner.len(), 1);
            prop_assert_eq!(&inner[0], &first);
        }
    }
}
