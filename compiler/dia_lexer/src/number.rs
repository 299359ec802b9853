//! Integer literals.
//!
//! A literal starting with `0` may pick its base with a letter:
//! `0b` binary, `0c` octal, `0x` hexadecimal, or `0r<decimal>` for any
//! base from 2 to 36. `_` separates digits anywhere after the prefix.

use dia_diagnostic::{LexErrorKind, LexResult, Locate};
use dia_ir::TokenKind;
use dia_lexer_core::chars::{is_digit, is_number_char};
use dia_lexer_core::Mark;

use crate::lexer::{Lexer, Step};

impl Lexer {
    pub(crate) fn number(&mut self) -> LexResult<Step> {
        if !is_digit(self.cur) {
            return Ok(Step::DECLINE);
        }
        let mark = self.mark();
        let value = self.int_literal(mark)?;
        Ok(Step::emit(self.token(TokenKind::Int(value), mark)))
    }

    fn int_literal(&mut self, mark: Mark) -> LexResult<i64> {
        let mut base = 10;
        if self.cur == b'0' {
            self.bump()?;
            base = self.base_prefix()?;
        }

        let mut digits = String::new();
        while is_number_char(self.cur, base) {
            if self.cur != b'_' {
                digits.push(char::from(self.cur));
            }
            self.bump()?;
        }
        if digits.is_empty() {
            return Ok(0);
        }
        i64::from_str_radix(&digits, base)
            .map_err(|_| self.piece(mark).error(LexErrorKind::IntOverflow))
    }

    /// Base selected by the letter after a leading `0`; 10 if there is none.
    fn base_prefix(&mut self) -> LexResult<u32> {
        let base = match self.cur {
            b'b' => 2,
            b'c' => 8,
            b'x' => 16,
            b'r' => {
                self.bump()?;
                return self.explicit_base();
            }
            _ => return Ok(10),
        };
        self.bump()?;
        Ok(base)
    }

    /// Decimal digits after `0r`.
    fn explicit_base(&mut self) -> LexResult<u32> {
        let mark = self.mark();
        let mut base: u32 = 0;
        while is_digit(self.cur) {
            base = base
                .saturating_mul(10)
                .saturating_add(u32::from(self.cur - b'0'));
            self.bump()?;
        }
        if !(2..=36).contains(&base) {
            return Err(self.piece(mark).error(LexErrorKind::InvalidBase));
        }
        Ok(base)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
