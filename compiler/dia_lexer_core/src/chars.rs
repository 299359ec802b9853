//! Byte classes.
//!
//! The lexer only accepts ASCII, so everything here works on `u8`.
//! The EOF sentinel (`0xFF`) is in none of the classes.

/// Characters that make up operators. Runs of them form one operator.
pub const OPERATOR_CHARS: &[u8] = b"+-*/%^<>!=&|,?@$~";

/// Space or tab.
#[inline]
pub fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

#[inline]
pub fn is_line_break(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub fn is_upper(b: u8) -> bool {
    b.is_ascii_uppercase()
}

#[inline]
pub fn is_lower(b: u8) -> bool {
    b.is_ascii_lowercase()
}

/// First byte of an identifier.
#[inline]
pub fn is_id_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Any byte of an identifier, dots included.
#[inline]
pub fn is_id_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.'
}

#[inline]
pub fn is_operator(b: u8) -> bool {
    OPERATOR_CHARS.contains(&b)
}

#[inline]
pub fn is_open_paren(b: u8) -> bool {
    matches!(b, b'(' | b'[' | b'{')
}

#[inline]
pub fn is_close_paren(b: u8) -> bool {
    matches!(b, b')' | b']' | b'}')
}

/// Closing bracket for an opening one.
pub fn closing_paren(open: u8) -> Option<u8> {
    match open {
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        b'{' => Some(b'}'),
        _ => None,
    }
}

/// Value of a digit in bases up to 36; letters count from 10.
#[inline]
pub fn digit_value(b: u8) -> Option<u32> {
    char::from(b).to_digit(36)
}

/// Digit of `base` or the `_` separator.
#[inline]
pub fn is_number_char(b: u8, base: u32) -> bool {
    b == b'_' || digit_value(b).is_some_and(|d| d < base)
}

#[cfg(test)]
mod tests;
