//! Typed payload access for tokens.
//!
//! A parser that has already checked a token's tag can pull the payload
//! out directly; asking for the wrong payload is an internal error.

use dia_diagnostic::{LexError, LexErrorKind, LexResult, Locate};
use dia_ir::{Ident, Token, TokenKind};

pub trait TokenAccess {
    fn int_value(&self) -> LexResult<i64>;
    fn char_value(&self) -> LexResult<u8>;
    fn str_value(&self) -> LexResult<&str>;
    fn ident(&self) -> LexResult<&Ident>;
    fn multi_dedent_levels(&self) -> LexResult<u32>;
}

impl TokenAccess for Token {
    fn int_value(&self) -> LexResult<i64> {
        match self.kind {
            TokenKind::Int(value) => Ok(value),
            _ => Err(unexpected(self, "integer")),
        }
    }

    fn char_value(&self) -> LexResult<u8> {
        match self.kind {
            TokenKind::Char(value) => Ok(value),
            _ => Err(unexpected(self, "character")),
        }
    }

    fn str_value(&self) -> LexResult<&str> {
        match &self.kind {
            TokenKind::Str(value) => Ok(value),
            _ => Err(unexpected(self, "string")),
        }
    }

    fn ident(&self) -> LexResult<&Ident> {
        match &self.kind {
            TokenKind::Id(ident) => Ok(ident),
            _ => Err(unexpected(self, "identifier")),
        }
    }

    fn multi_dedent_levels(&self) -> LexResult<u32> {
        match self.kind {
            TokenKind::MultiDedent { levels } => Ok(levels),
            _ => Err(unexpected(self, "multi dedent")),
        }
    }
}

fn unexpected(token: &Token, expected: &'static str) -> LexError {
    token.error(LexErrorKind::UnexpectedToken {
        expected,
        found: token.tag(),
    })
}
