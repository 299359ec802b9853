//! Token types for the Diamond lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] (with its payload) and the [`Piece`]
//! of source it was read from. [`TokenTag`] is the payload-free
//! discriminant, used for printing and for cheap kind checks.

use std::fmt;

use smallvec::SmallVec;

use crate::Piece;

/// A token with the source piece it covers.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub piece: Piece,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, piece: Piece) -> Self {
        Token { kind, piece }
    }

    #[inline]
    pub fn tag(&self) -> TokenTag {
        self.kind.tag()
    }

    #[inline]
    pub fn content(&self) -> &str {
        self.piece.content()
    }

    /// Whitespace and comments; dropped unless trivia is requested.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Space { .. } | TokenKind::Comment)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("<EOF>"),
            _ => f.write_str(self.piece.content()),
        }
    }
}

/// Token kind with its decoded payload.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Eof,
    /// Line break or run of `;` at bracket depth 0.
    Newline,
    Colon,
    /// Indentation grew by one full level (4 columns).
    Indent,
    /// Indentation grew by half a level (2 columns).
    HalfIndent,
    Dedent,
    HalfDedent,
    ParenOpen,
    ParenClose,
    /// A colon followed (modulo trivia) by a line break.
    BlockStart,
    Comment,
    /// Run of blanks. `amount` counts tab stops as the configured width.
    Space { amount: u32, at_line_start: bool },
    /// Indentation shrank by `levels` half levels. Split by the token buffer.
    MultiDedent { levels: u32 },
    Id(Ident),
    /// Run of operator characters.
    Operator { half_applied: bool },
    Int(i64),
    Str(String),
    Char(u8),
}

impl TokenKind {
    pub fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Eof => TokenTag::Eof,
            TokenKind::Newline => TokenTag::Newline,
            TokenKind::Colon => TokenTag::Colon,
            TokenKind::Indent => TokenTag::Indent,
            TokenKind::HalfIndent => TokenTag::HalfIndent,
            TokenKind::Dedent => TokenTag::Dedent,
            TokenKind::HalfDedent => TokenTag::HalfDedent,
            TokenKind::ParenOpen => TokenTag::ParenOpen,
            TokenKind::ParenClose => TokenTag::ParenClose,
            TokenKind::BlockStart => TokenTag::BlockStart,
            TokenKind::Comment => TokenTag::Comment,
            TokenKind::Space { .. } => TokenTag::Space,
            TokenKind::MultiDedent { .. } => TokenTag::MultiDedent,
            TokenKind::Id(id) => match id.kind {
                IdKind::Module => TokenTag::ModuleId,
                IdKind::Value => TokenTag::ValueId,
                IdKind::Constant => TokenTag::ConstId,
                IdKind::Function => TokenTag::FuncId,
            },
            TokenKind::Operator { .. } => TokenTag::Operator,
            TokenKind::Int(_) => TokenTag::Int,
            TokenKind::Str(_) => TokenTag::Str,
            TokenKind::Char(_) => TokenTag::Char,
        }
    }
}

/// Payload-free token discriminant.
///
/// Identifiers get one tag per identifier kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenTag {
    Eof,
    Newline,
    Colon,
    Indent,
    HalfIndent,
    Dedent,
    HalfDedent,
    ParenOpen,
    ParenClose,
    BlockStart,
    Comment,
    Space,
    MultiDedent,
    ConstId,
    ModuleId,
    ValueId,
    FuncId,
    Operator,
    Int,
    Str,
    Char,
}

impl TokenTag {
    pub fn name(self) -> &'static str {
        match self {
            TokenTag::Eof => "<TOK EOF>",
            TokenTag::Newline => "<TOK NL>",
            TokenTag::Colon => "<TOK COLON>",
            TokenTag::Indent => "<TOK INDENT>",
            TokenTag::HalfIndent => "<TOK HALF INDENT>",
            TokenTag::Dedent => "<TOK DEDENT>",
            TokenTag::HalfDedent => "<TOK HALF DEDENT>",
            TokenTag::ParenOpen => "<TOK PAREN OPEN>",
            TokenTag::ParenClose => "<TOK PAREN CLOSE>",
            TokenTag::BlockStart => "<TOK BLOCK START>",
            TokenTag::Comment => "<TOK COMMENT>",
            TokenTag::Space => "<TOK SPACE>",
            TokenTag::MultiDedent => "<TOK MULTI DEDENT>",
            TokenTag::ConstId => "<TOK CONST ID>",
            TokenTag::ModuleId => "<TOK MODULE ID>",
            TokenTag::ValueId => "<TOK VAL ID>",
            TokenTag::FuncId => "<TOK FUNC ID>",
            TokenTag::Operator => "<TOK OP ID>",
            TokenTag::Int => "<TOK INT>",
            TokenTag::Str => "<TOK STR>",
            TokenTag::Char => "<TOK CHAR>",
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of an identifier or one of its parts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IdKind {
    Module,
    Value,
    Constant,
    Function,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IdKind::Module => "module",
            IdKind::Value => "value",
            IdKind::Constant => "constant",
            IdKind::Function => "function",
        })
    }
}

/// One dot-separated segment of an identifier.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IdPart {
    pub text: String,
    pub kind: IdKind,
    /// Written with a leading `_`.
    pub protected: bool,
}

/// A dotted identifier such as `mod.Func` or `bla.val`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ident {
    pub parts: SmallVec<[IdPart; 2]>,
    pub kind: IdKind,
    /// Whitespace on exactly one side.
    pub half_applied: bool,
}

impl Ident {
    /// True if any part is protected.
    pub fn is_protected(&self) -> bool {
        self.parts.iter().any(|part| part.protected)
    }

    /// Part texts joined with `.`.
    pub fn full_name(&self) -> String {
        let mut name = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                name.push('.');
            }
            name.push_str(&part.text);
        }
        name
    }
}

#[cfg(test)]
mod tests;
