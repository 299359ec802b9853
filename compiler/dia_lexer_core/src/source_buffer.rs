//! One-byte-at-a-time reader over Diamond source.
//!
//! The buffer owns the whole input and hands it out with [`SourceBuffer::get_char`].
//! Line starts are recorded as they are reached, so locating a position is
//! a binary search over a growing table. Line breaks are `\n`, `\r\n` or a
//! lone `\r`.
//!
//! Positions:
//! - the *current* byte is the one most recently returned by `get_char`
//! - a [`Mark`] remembers the current byte; a piece made from a mark runs
//!   from the mark up to (excluding) the current byte
//! - at end of input the current position is the input length and every
//!   further read returns [`EOF`] without moving

use std::borrow::Cow;
use std::io::{self, Read};

use dia_diagnostic::{LexError, LexErrorKind, LexResult};
use dia_ir::{Piece, Span};

/// Sentinel returned at end of input. Never a valid (ASCII) source byte.
pub const EOF: u8 = 0xFF;

/// Saved position of the current byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Mark {
    offset: u32,
}

impl Mark {
    #[inline]
    pub fn offset(self) -> u32 {
        self.offset
    }
}

#[derive(Clone, Debug)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    /// Bytes handed out so far; the current byte sits at `read - 1`.
    read: usize,
    /// Byte offset of every line start reached so far. Never empty.
    line_starts: Vec<usize>,
    /// End of the latest line, excluding its terminator.
    line_end: usize,
    /// Cleared by `mark_consumed` until the next line is entered.
    at_line_start: bool,
}

impl SourceBuffer {
    pub fn new(source: impl Into<Vec<u8>>) -> Self {
        let bytes = source.into();
        let line_end = find_line_end(&bytes, 0);
        SourceBuffer {
            bytes,
            read: 0,
            line_starts: vec![0],
            line_end,
            at_line_start: true,
        }
    }

    /// Read all of `reader` into a new buffer.
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(SourceBuffer::new(bytes))
    }

    /// The raw input.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Advance and return the next byte, or [`EOF`].
    ///
    /// Non-ASCII bytes are fatal.
    pub fn get_char(&mut self) -> LexResult<u8> {
        if self.read > self.bytes.len() {
            return Ok(EOF);
        }
        let pos = self.read;
        self.read += 1;
        self.enter(pos);
        match self.bytes.get(pos) {
            None => Ok(EOF),
            Some(&byte) if !byte.is_ascii() => Err(self.error(LexErrorKind::NonAscii { byte })),
            Some(&byte) => Ok(byte),
        }
    }

    /// Step back one byte.
    ///
    /// Can move to just before the start of the current line, but no
    /// further: the line table only knows lines that were entered.
    pub fn unget_char(&mut self) -> LexResult<()> {
        if self.read <= self.line_start() {
            return Err(self.error(LexErrorKind::UngetPastLineStart));
        }
        self.read -= 1;
        Ok(())
    }

    /// True until something on the current line is consumed, and the
    /// current byte is still at (or before) the line start.
    pub fn at_start_of_line(&self) -> bool {
        self.at_line_start && self.read <= self.line_start() + 1
    }

    /// Record that the start of the current line has been dealt with.
    #[inline]
    pub fn mark_consumed(&mut self) {
        self.at_line_start = false;
    }

    #[inline]
    pub fn new_mark(&self) -> Mark {
        Mark {
            offset: to_u32(self.position()),
        }
    }

    /// Piece from `mark` up to the current byte.
    pub fn new_piece(&self, mark: Mark) -> Piece {
        self.piece_for(Span::new(mark.offset, to_u32(self.position())))
    }

    /// Piece for any span of already read input.
    pub fn piece_for(&self, span: Span) -> Piece {
        let len = self.bytes.len();
        let end = (span.end as usize).min(len);
        let start = (span.start as usize).min(end);
        let first = self.line_index(start);
        let last = self.line_index(end);

        let mut whole_line = String::new();
        for i in first..=last {
            if i > first {
                whole_line.push('\n');
            }
            whole_line.push_str(&self.line_text(i));
        }

        Piece::new(
            Span::from_offsets(start, end),
            to_u32(first + 1),
            to_u32(start - self.line_starts[first]),
            lossy(&self.bytes[start..end]),
            whole_line,
        )
    }

    /// Fatal error at the current byte.
    pub fn error(&self, kind: LexErrorKind) -> LexError {
        let line = self.line_starts.len() - 1;
        LexError::new(
            kind,
            to_u32(line + 1),
            to_u32(self.position().saturating_sub(self.line_start())),
            1,
            self.line_text(line),
        )
    }

    /// 1-based line of the current byte.
    #[inline]
    pub fn line(&self) -> u32 {
        to_u32(self.line_starts.len())
    }

    /// 0-based column of the current byte.
    #[inline]
    pub fn column(&self) -> u32 {
        to_u32(self.position().saturating_sub(self.line_start()))
    }

    /// Offset of the current byte; the input length at end of input.
    #[inline]
    fn position(&self) -> usize {
        self.read.saturating_sub(1)
    }

    #[inline]
    fn line_start(&self) -> usize {
        self.line_starts.last().copied().unwrap_or(0)
    }

    /// Register a line start at `pos` if the byte before it ends a line.
    fn enter(&mut self, pos: usize) {
        if pos == 0 || pos <= self.line_start() {
            return;
        }
        let starts_line = match self.bytes[pos - 1] {
            b'\n' => true,
            b'\r' => self.bytes.get(pos) != Some(&b'\n'),
            _ => false,
        };
        if starts_line {
            self.line_starts.push(pos);
            self.line_end = find_line_end(&self.bytes, pos);
            self.at_line_start = true;
        }
    }

    /// Index of the line containing `offset`.
    fn line_index(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    fn line_text(&self, line: usize) -> Cow<'_, str> {
        let start = self.line_starts[line];
        let end = if line + 1 == self.line_starts.len() {
            self.line_end
        } else {
            find_line_end(&self.bytes, start)
        };
        String::from_utf8_lossy(&self.bytes[start..end])
    }
}

fn find_line_end(bytes: &[u8], start: usize) -> usize {
    memchr::memchr2(b'\n', b'\r', &bytes[start..]).map_or(bytes.len(), |i| start + i)
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
