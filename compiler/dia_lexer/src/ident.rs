//! Identifiers.
//!
//! An identifier is a dotted run like `mod.Func` or `mod.CONST.val`. Each
//! part is classified by its letter case, then the parts together decide
//! the kind of the whole identifier:
//!
//! | part shape                                   | kind     |
//! |----------------------------------------------|----------|
//! | all lowercase letters and digits             | module   |
//! | leading uppercase, no lowercase              | constant |
//! | leading lowercase, no `_`, no two adjacent uppercase | value |
//! | leading uppercase, some lowercase, no `_`, no two adjacent uppercase | function |
//!
//! A leading `_` marks a part as protected; protected parts are never
//! modules or constants.

use dia_diagnostic::{LexErrorKind, LexResult, Locate};
use dia_ir::{IdKind, IdPart, Ident, Token, TokenKind};
use dia_lexer_core::chars::{is_digit, is_id_char, is_id_start, is_lower, is_upper};
use smallvec::SmallVec;

use crate::lexer::{Lexer, Step};

impl Lexer {
    pub(crate) fn identifier(&mut self) -> LexResult<Step> {
        if !is_id_start(self.cur) {
            return Ok(Step::DECLINE);
        }
        let mark = self.mark();
        while is_id_char(self.cur) {
            self.bump()?;
        }
        let piece = self.piece(mark);
        let mut ident = classify_identifier(piece.content()).map_err(|kind| piece.error(kind))?;
        ident.half_applied = !piece.spacing().is_balanced();
        Ok(Step::emit(Token::new(TokenKind::Id(ident), piece)))
    }
}

/// Split a dotted identifier and classify it.
///
/// ```
/// use dia_ir::IdKind;
/// use dia_lexer::classify_identifier;
///
/// assert_eq!(classify_identifier("mod.CONST.val").map(|id| id.kind), Ok(IdKind::Constant));
/// assert_eq!(classify_identifier("mod.FuncAli").map(|id| id.kind), Ok(IdKind::Function));
/// assert_eq!(classify_identifier("bla.val").map(|id| id.kind), Ok(IdKind::Value));
/// ```
pub fn classify_identifier(text: &str) -> Result<Ident, LexErrorKind> {
    let mut parts: SmallVec<[IdPart; 2]> = SmallVec::new();
    for text in text.split('.') {
        let (kind, protected) = classify_part(text)?;
        parts.push(IdPart {
            text: text.to_string(),
            kind,
            protected,
        });
    }
    let kind = combine_parts(&mut parts)?;
    Ok(Ident {
        parts,
        kind,
        half_applied: false,
    })
}

/// Kind and protection of a single part.
fn classify_part(text: &str) -> Result<(IdKind, bool), LexErrorKind> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Err(LexErrorKind::EmptyIdPart);
    }
    let protected = bytes[0] == b'_';
    let rest = if protected { &bytes[1..] } else { bytes };
    let Some((&first, tail)) = rest.split_first() else {
        return Err(LexErrorKind::IllegalIdStart);
    };
    let first_upper = is_upper(first);
    let first_lower = is_lower(first);
    if !first_upper && !first_lower {
        return Err(LexErrorKind::IllegalIdStart);
    }

    let mut got_upper = false;
    let mut got_lower = false;
    let mut got_under = false;
    let mut double_upper = false;
    let mut prev_upper = first_upper;
    for &b in tail {
        let upper = is_upper(b);
        if upper {
            got_upper = true;
            double_upper |= prev_upper;
        } else if is_lower(b) {
            got_lower = true;
        } else if b == b'_' {
            got_under = true;
        } else if !is_digit(b) {
            return Err(LexErrorKind::IllegalIdChar);
        }
        prev_upper = upper;
    }

    let kind = if first_lower && !got_upper && !got_under && !protected {
        IdKind::Module
    } else if first_upper && !got_lower && !protected {
        IdKind::Constant
    } else if first_lower && !got_under && !double_upper {
        IdKind::Value
    } else if first_upper && got_lower && !got_under && !double_upper {
        IdKind::Function
    } else {
        return Err(LexErrorKind::IllegalIdPart);
    };
    Ok((kind, protected))
}

/// Kind of the whole identifier; demotes part kinds to their role.
///
/// A constant in one of the first two parts makes everything after it a
/// value. A function may only follow a single module prefix and must be
/// last. A module after the first part is a field access, i.e. a value.
fn combine_parts(parts: &mut [IdPart]) -> Result<IdKind, LexErrorKind> {
    let mut kind = IdKind::Module;
    for (i, part) in parts.iter_mut().enumerate() {
        if kind == IdKind::Constant {
            if !matches!(part.kind, IdKind::Module | IdKind::Value) {
                return Err(LexErrorKind::IllegalConstantPart);
            }
            part.kind = IdKind::Value;
            continue;
        }
        match part.kind {
            IdKind::Constant => {
                if i > 1 || kind != IdKind::Module {
                    return Err(LexErrorKind::IllegalConstantPart);
                }
                kind = IdKind::Constant;
            }
            IdKind::Function => {
                if i > 1 || kind != IdKind::Module {
                    return Err(LexErrorKind::IllegalFunction);
                }
                kind = IdKind::Function;
            }
            IdKind::Module => {
                if kind == IdKind::Function {
                    return Err(LexErrorKind::ValueAfterFunction);
                }
                if i > 0 {
                    part.kind = IdKind::Value;
                    kind = IdKind::Value;
                }
            }
            IdKind::Value => {
                if kind == IdKind::Function {
                    return Err(LexErrorKind::ValueAfterFunction);
                }
                kind = IdKind::Value;
            }
        }
    }
    Ok(kind)
}
