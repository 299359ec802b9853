//! Source pieces: a span together with the text needed to report on it.

use std::fmt;

use crate::Span;

/// How a piece sits between its neighbours on the line.
///
/// The start and end of a line count as whitespace.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Spacing {
    /// Whitespace on both sides, or on neither.
    Balanced,
    /// Whitespace only in front.
    FrontOnly,
    /// Whitespace only behind.
    BackOnly,
}

impl Spacing {
    #[inline]
    pub fn is_balanced(self) -> bool {
        self == Spacing::Balanced
    }
}

/// A slice of the source with its location.
///
/// Lines are 1-based and columns are 0-based byte offsets into the line.
/// `whole_line` holds every line the piece touches, without line
/// terminators, joined by `\n`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    span: Span,
    line: u32,
    column: u32,
    content: String,
    whole_line: String,
}

impl Piece {
    pub fn new(
        span: Span,
        line: u32,
        column: u32,
        content: impl Into<String>,
        whole_line: impl Into<String>,
    ) -> Self {
        Piece {
            span,
            line,
            column,
            content: content.into(),
            whole_line: whole_line.into(),
        }
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn start_line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn start_column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn whole_line(&self) -> &str {
        &self.whole_line
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whitespace around the piece on its first line.
    pub fn spacing(&self) -> Spacing {
        let line = self
            .whole_line
            .split('\n')
            .next()
            .unwrap_or_default()
            .as_bytes();
        let start = self.column as usize;
        let front = start == 0 || line.get(start - 1).map_or(true, |&b| is_blank(b));
        let back = self.content.contains('\n')
            || line
                .get(start + self.content.len())
                .map_or(true, |&b| is_blank(b));
        match (front, back) {
            (true, false) => Spacing::FrontOnly,
            (false, true) => Spacing::BackOnly,
            _ => Spacing::Balanced,
        }
    }
}

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} @ {}:{} ({:?})",
            self.content, self.line, self.column, self.span
        )
    }
}
