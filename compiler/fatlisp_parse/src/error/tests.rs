use super::*;
use fatlisp_diagnostic::SourceFile;

#[test]
fn lex_errors_keep_lexer_message() {
    let err = ParseError::new(
        ParseErrorKind::Lex(LexErrorKind::UnterminatedString),
        Span::new(6, 10),
    );
    assert_eq!(err.to_string(), "unexpected end of file");
    assert_eq!(err.code(), ErrorCode::E0002);
}

#[test]
fn diagnostic_renders_position() {
    let source = SourceFile::new("t.fl", "(a\n  ) )");
    let err = ParseError::new(ParseErrorKind::UnexpectedCloseList, Span::new(7, 8));
    let rendered = err.to_diagnostic().locate(&source).to_string();
    assert_eq!(rendered, "t.fl:2:5 unexpected ')'");
}

#[test]
fn codes() {
    let at = Span::DUMMY;
    assert_eq!(
        ParseError::new(ParseErrorKind::InvalidNumber { text: "1.2.3".into() }, at).code(),
        ErrorCode::E1001
    );
    assert_eq!(
        ParseError::new(ParseErrorKind::DanglingQuote, at).code(),
        ErrorCode::E1003
    );
    assert_eq!(
        ParseError::new(ParseErrorKind::Lex(LexErrorKind::InvalidNumber), at).code(),
        ErrorCode::E0001
    );
}

#[test]
fn oversized_source_reports_at_start() {
    let source = SourceFile::new("big.fl", "");
    let err = ParseError::new(ParseErrorKind::Lex(LexErrorKind::SourceTooLarge), Span::point(0));
    assert_eq!(err.code(), ErrorCode::E0004);
    assert_eq!(
        err.to_diagnostic().locate(&source).to_string(),
        "big.fl:1:1 source exceeds 4294967295 bytes"
    );
}
