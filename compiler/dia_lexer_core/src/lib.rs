//! Low-level pieces of the Diamond lexer.
//!
//! - [`SourceBuffer`]: one-byte-at-a-time reader over the source with line
//!   tracking, single-step unget, marks and pieces
//! - [`chars`]: byte classes shared by the lexing rules
//! - [`LexConfig`]: tab width and trivia settings

pub mod chars;
mod config;
mod source_buffer;

pub use config::{LexConfig, DEFAULT_TAB_WIDTH, MAX_PARENS};
pub use source_buffer::{Mark, SourceBuffer, EOF};
