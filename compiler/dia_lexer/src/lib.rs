//! Lexer for Diamond.
//!
//! Two layers:
//! - [`Lexer`] turns a [`SourceBuffer`] into raw tokens, tracking
//!   indentation (in half levels of 2 columns) and bracket nesting
//! - [`TokenBuffer`] reshapes that stream for the parser: `:` before a
//!   line break becomes `BlockStart`, multi-level dedents are split into
//!   single `Dedent`/`HalfDedent` tokens, and a window of recent tokens
//!   allows stepping back
//!
//! ```
//! use dia_ir::TokenTag;
//! use dia_lexer::{LexConfig, Lexer, SourceBuffer, TokenBuffer};
//!
//! let lexer = Lexer::new(SourceBuffer::new("If x:\n    y"), LexConfig::default())?;
//! let mut tokens = TokenBuffer::new(lexer);
//! let mut tags = Vec::new();
//! loop {
//!     let token = tokens.next_token()?;
//!     tags.push(token.tag());
//!     if token.tag() == TokenTag::Eof {
//!         break;
//!     }
//! }
//! assert_eq!(
//!     tags,
//!     [
//!         TokenTag::FuncId,
//!         TokenTag::ModuleId,
//!         TokenTag::BlockStart,
//!         TokenTag::Indent,
//!         TokenTag::ModuleId,
//!         TokenTag::Dedent,
//!         TokenTag::Eof,
//!     ]
//! );
//! # Ok::<(), dia_diagnostic::LexError>(())
//! ```

mod access;
mod ident;
mod lexer;
mod literal;
mod number;
mod token_buffer;

pub use access::TokenAccess;
pub use ident::classify_identifier;
pub use lexer::Lexer;
pub use token_buffer::{TokenBuffer, MAX_TOKENS};

pub use dia_diagnostic::{LexError, LexErrorKind, LexResult};
pub use dia_ir::{Token, TokenKind, TokenTag};
pub use dia_lexer_core::{LexConfig, SourceBuffer};

/// Lex `source` to the end with the raw [`Lexer`], `Eof` included.
pub fn lex(source: &str, config: LexConfig) -> LexResult<Vec<Token>> {
    Lexer::new(SourceBuffer::new(source), config)?.tokenize()
}
