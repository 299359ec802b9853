use super::*;
use crate::EOF;

#[test]
fn eof_is_in_no_class() {
    assert!(!is_blank(EOF));
    assert!(!is_line_break(EOF));
    assert!(!is_digit(EOF));
    assert!(!is_id_start(EOF));
    assert!(!is_id_char(EOF));
    assert!(!is_operator(EOF));
    assert!(!is_number_char(EOF, 36));
}

#[test]
fn identifier_classes() {
    assert!(is_id_start(b'_'));
    assert!(is_id_start(b'Q'));
    assert!(!is_id_start(b'1'));
    assert!(!is_id_start(b'.'));
    assert!(is_id_char(b'.'));
    assert!(is_id_char(b'9'));
    assert!(!is_id_char(b'-'));
}

#[test]
fn operator_chars() {
    for &b in b"+-*/%^<>!=&|,?@$~" {
        assert!(is_operator(b), "{}", char::from(b));
    }
    for &b in b"#:;()_.'\"`" {
        assert!(!is_operator(b), "{}", char::from(b));
    }
}

#[test]
fn parens_pair_up() {
    assert_eq!(closing_paren(b'('), Some(b')'));
    assert_eq!(closing_paren(b'['), Some(b']'));
    assert_eq!(closing_paren(b'{'), Some(b'}'));
    assert_eq!(closing_paren(b')'), None);
    assert!(is_open_paren(b'{'));
    assert!(is_close_paren(b']'));
}

#[test]
fn number_chars_respect_base() {
    assert!(is_number_char(b'1', 2));
    assert!(!is_number_char(b'2', 2));
    assert!(is_number_char(b'7', 8));
    assert!(!is_number_char(b'8', 8));
    assert!(is_number_char(b'f', 16));
    assert!(is_number_char(b'F', 16));
    assert!(!is_number_char(b'g', 16));
    assert!(is_number_char(b'z', 36));
    assert!(is_number_char(b'_', 2));
}

#[test]
fn digit_values() {
    assert_eq!(digit_value(b'0'), Some(0));
    assert_eq!(digit_value(b'a'), Some(10));
    assert_eq!(digit_value(b'Z'), Some(35));
    assert_eq!(digit_value(b'-'), None);
}
