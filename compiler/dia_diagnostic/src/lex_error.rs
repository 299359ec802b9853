//! Lexer error types.
//!
//! A [`LexError`] is always fatal. Its [`LexErrorKind`] says what went
//! wrong; the rest locates it for the caret report.

use std::fmt;

use dia_ir::{Piece, Token, TokenTag};
use thiserror::Error;

use crate::render::write_report;

pub type LexResult<T> = Result<T, LexError>;

/// Whether an error is the input's fault or a broken internal contract.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorClass {
    /// Malformed source text.
    Lexical,
    /// A caller broke an API contract (e.g. stepping back too far).
    Internal,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    // === Characters ===
    /// Byte outside the ASCII range.
    #[error("Unable to handle non-ASCII character")]
    NonAscii { byte: u8 },
    /// Character that starts no token.
    #[error("Unknown token")]
    UnknownChar,

    // === Literals ===
    /// Malformed or unterminated character literal.
    #[error("Invalid character token")]
    InvalidChar,
    #[error("Unterminated string literal")]
    UnterminatedString,
    /// Line break inside a single-delimiter string.
    #[error("Line break in single line string")]
    NewlineInString,
    #[error("Unknown escape sequence '\\{escape}'")]
    InvalidEscape { escape: char },
    /// Nine or more delimiters in a row.
    #[error("Too many string delimiters")]
    TooManyDelimiters,
    /// Explicit `0r` base outside 2..=36.
    #[error("Invalid integer base")]
    InvalidBase,
    #[error("Integer literal out of range")]
    IntOverflow,

    // === Brackets ===
    #[error("Too deeply nested parentheses")]
    ParenOverflow,
    #[error("Too many closing parentheses")]
    ParenUnderflow,
    #[error("Parentheses don't fit together")]
    ParenMismatch,
    #[error("Unclosed parenthesis at end of input")]
    UnclosedParen,

    // === Identifiers ===
    /// Empty part, as in `a..b` or `a.`.
    #[error("Illegal identifier")]
    EmptyIdPart,
    #[error("Illegal start of identifier part")]
    IllegalIdStart,
    #[error("Illegal character in identifier part")]
    IllegalIdChar,
    /// Part matches no identifier kind.
    #[error("Illegal identifier part")]
    IllegalIdPart,
    /// Constant part in a position other than the first two.
    #[error("Illegal constant identifier part")]
    IllegalConstantPart,
    #[error("Illegal function identifier")]
    IllegalFunction,
    #[error("Illegal value after function identifier part")]
    ValueAfterFunction,

    // === Layout ===
    /// Indentation step that is not a whole or half level.
    #[error("Indentation error")]
    Indentation,

    // === Internal ===
    #[error("Unable to unget characters beyond the beginning of the current line")]
    UngetPastLineStart,
    #[error("Unable to go beyond the start of the token buffer")]
    WindowUnderflow,
    #[error("Unable to remove current token from buffer")]
    EvictCurrent,
    #[error("Unable to dedent below column zero")]
    DedentUnderflow,
    #[error("Expected {expected} token, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenTag,
    },
}

impl LexErrorKind {
    pub fn class(&self) -> ErrorClass {
        match self {
            LexErrorKind::UngetPastLineStart
            | LexErrorKind::WindowUnderflow
            | LexErrorKind::EvictCurrent
            | LexErrorKind::DedentUnderflow
            | LexErrorKind::UnexpectedToken { .. } => ErrorClass::Internal,
            _ => ErrorClass::Lexical,
        }
    }
}

/// A fatal lexer error with the location needed for its report.
///
/// `line` is 1-based, `column` is 0-based. `source_line` holds every line
/// the error touches, joined by `\n`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
    pub column: u32,
    pub width: u32,
    pub source_line: String,
}

impl LexError {
    pub fn new(
        kind: LexErrorKind,
        line: u32,
        column: u32,
        width: u32,
        source_line: impl Into<String>,
    ) -> Self {
        LexError {
            kind,
            line,
            column,
            width,
            source_line: source_line.into(),
        }
    }

    /// Error covering the whole piece.
    pub fn at_piece(kind: LexErrorKind, piece: &Piece) -> Self {
        LexError {
            kind,
            line: piece.start_line(),
            column: piece.start_column(),
            width: u32::try_from(piece.len()).unwrap_or(u32::MAX),
            source_line: piece.whole_line().to_string(),
        }
    }

    #[inline]
    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(
            f,
            &self.kind.to_string(),
            self.line,
            &self.source_line,
            self.column,
            self.width,
        )
    }
}

impl std::error::Error for LexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Build an error located at a piece of source.
pub trait Locate {
    fn error(&self, kind: LexErrorKind) -> LexError;
}

impl Locate for Piece {
    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::at_piece(kind, self)
    }
}

impl Locate for Token {
    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::at_piece(kind, &self.piece)
    }
}

#[cfg(test)]
mod tests;
