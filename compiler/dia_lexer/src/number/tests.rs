use pretty_assertions::assert_eq;

use crate::{lex, LexConfig, LexErrorKind, TokenKind};

fn int(src: &str) -> i64 {
    let tokens = lex(src, LexConfig::default()).unwrap();
    match tokens[0].kind {
        TokenKind::Int(value) => value,
        ref other => panic!("expected an integer, got {other:?}"),
    }
}

fn int_error(src: &str) -> LexErrorKind {
    lex(src, LexConfig::default()).unwrap_err().kind
}

#[test]
fn test_decimal() {
    assert_eq!(int("0"), 0);
    assert_eq!(int("42"), 42);
    assert_eq!(int("001230"), 1230);
    assert_eq!(int("1_000_000"), 1_000_000);
}

#[test]
fn test_prefixed_bases() {
    assert_eq!(int("0b0110"), 6);
    assert_eq!(int("0c17"), 15);
    assert_eq!(int("0x01_F"), 31);
    assert_eq!(int("0xff"), 255);
}

#[test]
fn test_explicit_base() {
    assert_eq!(int("0r036_10"), 36);
    assert_eq!(int("0r2_101"), 5);
    assert_eq!(int("0r16ff"), 255);
}

#[test]
fn test_prefix_without_digits_is_zero() {
    assert_eq!(int("0x"), 0);
    assert_eq!(int("0b_"), 0);
}

#[test]
fn test_digits_stop_at_base() {
    let tokens = lex("0b012", LexConfig::default()).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Int(1));
    assert_eq!(tokens[0].content(), "0b01");
    assert_eq!(tokens[1].kind, TokenKind::Int(2));
}

#[test]
fn test_number_then_operator() {
    let tokens = lex("2*3", LexConfig::default()).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Int(2));
    assert_eq!(tokens[1].content(), "*");
    assert_eq!(tokens[2].kind, TokenKind::Int(3));
}

#[test]
fn test_invalid_explicit_base() {
    assert_eq!(int_error("0r1_0"), LexErrorKind::InvalidBase);
    assert_eq!(int_error("0r37_0"), LexErrorKind::InvalidBase);
    assert_eq!(int_error("0r_1"), LexErrorKind::InvalidBase);
}

#[test]
fn test_overflow_is_fatal() {
    assert_eq!(int("9223372036854775807"), i64::MAX);
    assert_eq!(int_error("9223372036854775808"), LexErrorKind::IntOverflow);
}

#[test]
fn test_overflow_report_covers_literal() {
    let err = lex("x = 0xFFFFFFFFFFFFFFFFF", LexConfig::default()).unwrap_err();
    assert_eq!(err.column, 4);
    assert_eq!(err.width, 19);
}
