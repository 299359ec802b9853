use std::error::Error as _;

use dia_ir::{Span, TokenKind};
use pretty_assertions::assert_eq;

use super::*;

// === Rendering ===

#[test]
fn test_report_for_invalid_char() {
    let piece = Piece::new(Span::new(0, 2), 1, 0, "'a", "'a");
    let err = piece.error(LexErrorKind::InvalidChar);
    assert_eq!(
        err.to_string(),
        "Invalid character token at line 1 near:\n'a\n^^\n"
    );
}

#[test]
fn test_report_points_at_column() {
    let err = LexError::new(LexErrorKind::UnknownChar, 3, 4, 1, "a = \\b");
    assert_eq!(err.to_string(), "Unknown token at line 3 near:\na = \\b\n    ^\n");
}

#[test]
fn test_empty_width_still_shows_caret() {
    let err = LexError::new(LexErrorKind::UnclosedParen, 1, 3, 0, "(a(");
    assert!(err.to_string().ends_with("(a(\n   ^\n"));
}

#[test]
fn test_multi_line_source() {
    let piece = Piece::new(Span::new(2, 8), 1, 2, "\"\"\"a\nb", "x \"\"\"a\nb");
    let err = piece.error(LexErrorKind::UnterminatedString);
    assert_eq!(
        err.to_string(),
        "Unterminated string literal at line 1 near:\nx \"\"\"a\nb\n  ^^^^^^\n"
    );
}

// === Kinds ===

#[test]
fn test_escape_message_names_escape() {
    let kind = LexErrorKind::InvalidEscape { escape: 'q' };
    assert_eq!(kind.to_string(), "Unknown escape sequence '\\q'");
}

#[test]
fn test_unexpected_token_message() {
    let kind = LexErrorKind::UnexpectedToken {
        expected: "integer",
        found: TokenTag::Str,
    };
    assert_eq!(kind.to_string(), "Expected integer token, found <TOK STR>");
}

#[test]
fn test_error_class() {
    assert_eq!(LexErrorKind::Indentation.class(), ErrorClass::Lexical);
    assert_eq!(LexErrorKind::NonAscii { byte: 0xC3 }.class(), ErrorClass::Lexical);
    assert_eq!(LexErrorKind::UngetPastLineStart.class(), ErrorClass::Internal);
    assert_eq!(LexErrorKind::EvictCurrent.class(), ErrorClass::Internal);
    assert_eq!(LexErrorKind::WindowUnderflow.class(), ErrorClass::Internal);
}

#[test]
fn test_source_is_kind() {
    let err = LexError::new(LexErrorKind::ParenMismatch, 1, 0, 1, ")");
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("Parentheses don't fit together"));
}

#[test]
fn test_locate_token() {
    let piece = Piece::new(Span::new(4, 7), 2, 0, "bla", "bla");
    let token = Token::new(TokenKind::Comment, piece);
    let err = token.error(LexErrorKind::IllegalIdPart);
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 0);
    assert_eq!(err.width, 3);
    assert_eq!(err.source_line, "bla");
}
