use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex("test", source).into_iter().map(|t| t.kind).collect()
}

fn texts(source: &str) -> Vec<&str> {
    lex("test", source).into_iter().map(|t| t.text).collect()
}

#[test]
fn simple_call() {
    use TokenKind::*;
    assert_eq!(
        kinds("(add 1 2)"),
        vec![StartList, Identifier, Number, Number, CloseList, Eof]
    );
    assert_eq!(texts("(add 1 2)"), vec!["(", "add", "1", "2", ")", ""]);
}

#[test]
fn spans_are_byte_ranges() {
    let tokens = lex("test", " (foo\n\t\"x\")");
    let spans: Vec<Span> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(1, 2),
            Span::new(2, 5),
            Span::new(7, 10),
            Span::new(10, 11),
            Span::point(11),
        ]
    );
}

#[test]
fn signs_start_numbers_only_before_digits() {
    use TokenKind::*;
    assert_eq!(kinds("-5 +3 - + -x"), vec![Number, Number, Identifier, Identifier, Identifier, Eof]);
    assert_eq!(texts("-x"), vec!["-x", ""]);
}

#[test]
fn number_body_is_greedy() {
    assert_eq!(texts("1.5.3 1-2"), vec!["1.5.3", "1-2", ""]);
    assert_eq!(kinds("3.14")[0], TokenKind::Number);
}

#[test]
fn number_may_touch_parens() {
    use TokenKind::*;
    assert_eq!(kinds("(1)(2)"), vec![StartList, Number, CloseList, StartList, Number, CloseList, Eof]);
}

#[test]
fn number_followed_by_letter_is_invalid() {
    let tokens = lex("test", "(add 42d 1)");
    let last = tokens[tokens.len() - 1];
    assert_eq!(last.kind, TokenKind::Error(LexErrorKind::InvalidNumber));
    assert_eq!(last.span, Span::new(5, 7));
    assert_eq!(last.text, "42");
    assert_eq!(tokens.len(), 3);
}

#[test]
fn number_followed_by_quote_char_is_invalid() {
    assert_eq!(
        kinds("1\"a\""),
        vec![TokenKind::Error(LexErrorKind::InvalidNumber)]
    );
}

#[test]
fn strings_keep_quotes_and_escapes() {
    let tokens = lex("test", r#"("a b" "say \"hi\"")"#);
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].text, "\"a b\"");
    assert_eq!(tokens[2].text, r#""say \"hi\"""#);
    assert_eq!(tokens[3].kind, TokenKind::CloseList);
}

#[test]
fn string_ends_identifier() {
    assert_eq!(texts("abc\"d\""), vec!["abc", "\"d\"", ""]);
}

#[test]
fn unterminated_string() {
    let tokens = lex("test", "(puts \"abc");
    let last = tokens[tokens.len() - 1];
    assert_eq!(last.kind, TokenKind::Error(LexErrorKind::UnterminatedString));
    assert_eq!(last.span, Span::new(6, 10));
}

#[test]
fn trailing_backslash_in_string() {
    assert_eq!(
        kinds("\"abc\\"),
        vec![TokenKind::Error(LexErrorKind::UnterminatedString)]
    );
}

#[test]
fn unterminated_list() {
    let tokens = lex("test", "(a (b)");
    let last = tokens[tokens.len() - 1];
    assert_eq!(last.kind, TokenKind::Error(LexErrorKind::UnterminatedList));
    assert_eq!(last.span, Span::point(6));
}

#[test]
fn extra_close_is_not_a_lex_error() {
    use TokenKind::*;
    assert_eq!(kinds("())"), vec![StartList, CloseList, CloseList, Eof]);
}

#[test]
fn quote_is_one_byte_marker() {
    use TokenKind::*;
    let tokens = lex("test", "'(1) 'a");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![Quote, StartList, Number, CloseList, Quote, Identifier, Eof]
    );
    assert_eq!(tokens[0].span, Span::new(0, 1));
    assert_eq!(tokens[4].span, Span::new(5, 6));
}

#[test]
fn identifiers_take_any_other_bytes() {
    assert_eq!(texts("héllo a'b <= nil"), vec!["héllo", "a'b", "<=", "nil", ""]);
}

#[test]
fn carriage_return_is_not_whitespace() {
    assert_eq!(texts("a\r\nb"), vec!["a\r", "b", ""]);
}

#[test]
fn empty_input() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds(" \n\t "), vec![TokenKind::Eof]);
}

#[test]
fn peek_does_not_consume() {
    let mut lexer = Lexer::new("test", "(a)");
    assert_eq!(lexer.peek_token().kind, TokenKind::StartList);
    assert_eq!(lexer.peek_token().kind, TokenKind::StartList);
    assert_eq!(lexer.next_token().kind, TokenKind::StartList);
    assert_eq!(lexer.nesting, 1);
    assert_eq!(lexer.next_token().text, "a");
    assert_eq!(lexer.next_token().kind, TokenKind::CloseList);
    assert_eq!(lexer.nesting, 0);
}

#[test]
fn keeps_returning_eof_after_error() {
    let mut lexer = Lexer::new("test", "(");
    assert_eq!(lexer.next_token().kind, TokenKind::StartList);
    assert!(matches!(lexer.next_token().kind, TokenKind::Error(_)));
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.peek_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn oversized_source_yields_one_error() {
    let mut lexer = Lexer::too_large("big.fl");
    let tok = lexer.peek_token();
    assert_eq!(tok.kind, TokenKind::Error(LexErrorKind::SourceTooLarge));
    assert_eq!(tok.span, Span::point(0));
    assert_eq!(lexer.next().map(|t| t.kind), Some(tok.kind));
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn iterator_is_fused() {
    let mut lexer = Lexer::new("test", "a");
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Identifier));
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.name(), "test");
}

#[test]
fn iterator_after_peeked_terminal() {
    let mut lexer = Lexer::new("test", "");
    assert_eq!(lexer.peek_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(lexer.next(), None);
}

mod proptest_lexer {
    use super::*;
    use proptest::prelude::*;

    fn lisp_like() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                Just("(".to_string()),
                Just(")".to_string()),
                Just("'".to_string()),
                Just(" ".to_string()),
                Just("\n".to_string()),
                Just("\"".to_string()),
                Just("\\".to_string()),
                "[a-z+*/<=-]{1,4}",
                "[+-]?[0-9.]{1,4}",
            ],
            0..40,
        )
        .prop_map(|parts| parts.concat())
    }

    fn check_stream(source: &str) -> Result<(), TestCaseError> {
        let tokens = lex("prop", source);
        let last = tokens.last().copied();
        prop_assert!(last.is_some_and(|t| t.is_terminal()));
        prop_assert_eq!(tokens.iter().filter(|t| t.is_terminal()).count(), 1);
        let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let mut prev_end = 0;
        for token in &tokens {
            prop_assert!(token.span.start >= prev_end, "{:?} overlaps", token);
            prop_assert!(token.span.end <= len);
            prev_end = token.span.end;
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn never_panics_on_arbitrary_text(source in any::<String>()) {
            check_stream(&source)?;
        }

        #[test]
        fn terminates_with_single_terminal_token(source in lisp_like()) {
            check_stream(&source)?;
        }

        #[test]
        fn balanced_parens_never_report_unterminated_list(depth in 0usize..20) {
            let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
            let tokens = lex("prop", &source);
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        }
    }
}
