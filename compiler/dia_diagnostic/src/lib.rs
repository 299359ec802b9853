//! Fatal diagnostics for the Diamond front end.
//!
//! Lexing stops at the first problem. Every problem becomes a [`LexError`]
//! that carries its location and the source line(s) around it, and renders
//! as a caret report:
//!
//! ```text
//! Invalid character token at line 1 near:
//! 'a
//! ^^
//! ```

mod lex_error;
mod render;

pub use lex_error::{ErrorClass, LexError, LexErrorKind, LexResult, Locate};
pub use render::{caret_line, write_report};
