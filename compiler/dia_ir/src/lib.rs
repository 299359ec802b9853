//! Diamond IR - shared front end types
//!
//! This crate contains the data structures produced by the Diamond lexer
//! and consumed by everything downstream of it:
//! - Spans for byte ranges in a source buffer
//! - Pieces: a span plus the text needed to report on it
//! - Tokens, token kinds and their printable tags
//! - Identifiers split into classified parts
//!
//! Every type is `Clone + Eq + Hash + Debug` so tokens can be compared in
//! tests and stored in hashed collections by later passes.

mod piece;
mod span;
mod token;

pub use piece::{Piece, Spacing};
pub use span::Span;
pub use token::{IdKind, IdPart, Ident, Token, TokenKind, TokenTag};
