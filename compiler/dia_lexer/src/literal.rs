//! Character and string literals.
//!
//! Strings come in two families: `"` decodes backslash escapes, `` ` ``
//! (raw) keeps them verbatim. The number of delimiters in the opening run
//! picks the form:
//!
//! | run  | form |
//! |------|------|
//! | 1    | single line, ends at the next delimiter |
//! | 2, 6 | empty |
//! | 3    | multi line, ends at the next run of 3 or more |
//! | 4, 5 | multi line, content starts with `run - 3` delimiters |
//! | 7, 8 | just `run - 6` delimiters |
//!
//! In multi-line strings shorter runs are content, and a closing run longer
//! than 3 keeps its surplus delimiters as content.

use dia_diagnostic::{LexErrorKind, LexResult, Locate};
use dia_ir::TokenKind;
use dia_lexer_core::chars::is_line_break;
use dia_lexer_core::{Mark, EOF};

use crate::lexer::{Lexer, Step};

/// Byte for an escape letter. Backslash and the quote characters escape
/// to themselves.
pub(crate) fn unescape(letter: u8) -> Option<u8> {
    let byte = match letter {
        b'0' => 0,
        b'a' => 0x07,
        b'b' => 0x08,
        b'd' => 0x7F,
        b'e' => 0x1B,
        b'f' => 0x0C,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        b'v' => 0x0B,
        b'\\' | b'\'' | b'"' | b'`' => letter,
        _ => return None,
    };
    Some(byte)
}

impl Lexer {
    pub(crate) fn char_literal(&mut self) -> LexResult<Step> {
        if self.cur != b'\'' {
            return Ok(Step::DECLINE);
        }
        let mark = self.mark();
        self.bump()?;
        let value = match self.cur {
            EOF | b'\n' | b'\r' => return Err(self.piece(mark).error(LexErrorKind::InvalidChar)),
            b'\\' => {
                self.bump()?;
                self.escape(mark, LexErrorKind::InvalidChar)?
            }
            byte => byte,
        };
        self.bump()?;
        if self.cur != b'\'' {
            return Err(self.piece(mark).error(LexErrorKind::InvalidChar));
        }
        self.bump()?;
        Ok(Step::emit(self.token(TokenKind::Char(value), mark)))
    }

    pub(crate) fn string_literal(&mut self) -> LexResult<Step> {
        let delim = self.cur;
        if delim != b'"' && delim != b'`' {
            return Ok(Step::DECLINE);
        }
        let raw = delim == b'`';
        let mark = self.mark();
        let run = self.delimiter_run(delim)?;

        let mut value = Vec::new();
        match run {
            1 => self.single_line_body(delim, raw, mark, &mut value)?,
            2 | 6 => {}
            3..=5 => {
                value.resize(run - 3, delim);
                self.multi_line_body(delim, raw, mark, &mut value)?;
            }
            7 | 8 => value.resize(run - 6, delim),
            _ => return Err(self.piece(mark).error(LexErrorKind::TooManyDelimiters)),
        }
        let value = String::from_utf8_lossy(&value).into_owned();
        Ok(Step::emit(self.token(TokenKind::Str(value), mark)))
    }

    /// Consume a run of `delim` and return its length.
    fn delimiter_run(&mut self, delim: u8) -> LexResult<usize> {
        let mut run = 0;
        while self.cur == delim {
            run += 1;
            self.bump()?;
        }
        Ok(run)
    }

    fn single_line_body(
        &mut self,
        delim: u8,
        raw: bool,
        mark: Mark,
        value: &mut Vec<u8>,
    ) -> LexResult<()> {
        loop {
            match self.cur {
                EOF => return Err(self.piece(mark).error(LexErrorKind::UnterminatedString)),
                byte if is_line_break(byte) => {
                    return Err(self.piece(mark).error(LexErrorKind::NewlineInString));
                }
                byte if byte == delim => {
                    self.bump()?;
                    return Ok(());
                }
                b'\\' if !raw => {
                    self.bump()?;
                    let byte = self.escape(mark, LexErrorKind::UnterminatedString)?;
                    value.push(byte);
                }
                byte => value.push(byte),
            }
            self.bump()?;
        }
    }

    fn multi_line_body(
        &mut self,
        delim: u8,
        raw: bool,
        mark: Mark,
        value: &mut Vec<u8>,
    ) -> LexResult<()> {
        loop {
            match self.cur {
                EOF => return Err(self.piece(mark).error(LexErrorKind::UnterminatedString)),
                byte if byte == delim => {
                    let run = self.delimiter_run(delim)?;
                    if run >= 3 {
                        value.resize(value.len() + run - 3, delim);
                        return Ok(());
                    }
                    value.resize(value.len() + run, delim);
                    continue;
                }
                b'\\' if !raw => {
                    self.bump()?;
                    let byte = self.escape(mark, LexErrorKind::UnterminatedString)?;
                    value.push(byte);
                }
                byte => value.push(byte),
            }
            self.bump()?;
        }
    }

    /// Decode the escape letter under the cursor without consuming it.
    /// `at_eof` is reported if input ends instead.
    fn escape(&self, mark: Mark, at_eof: LexErrorKind) -> LexResult<u8> {
        if self.cur == EOF {
            return Err(self.piece(mark).error(at_eof));
        }
        unescape(self.cur).ok_or_else(|| {
            self.error(LexErrorKind::InvalidEscape {
                escape: char::from(self.cur),
            })
        })
    }
}
