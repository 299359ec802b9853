//! The raw lexer.
//!
//! Lexing is a list of rules tried in a fixed order against the current
//! byte. A rule either declines, consumes input without producing a token
//! (skipped whitespace, comments, bracketed line breaks), or produces a
//! token. After a rule consumes input the list starts over.

use dia_diagnostic::{LexError, LexErrorKind, LexResult, Locate};
use dia_ir::{Piece, Span, Token, TokenKind};
use dia_lexer_core::chars::{
    closing_paren, is_blank, is_close_paren, is_line_break, is_open_paren, is_operator,
};
use dia_lexer_core::{LexConfig, Mark, SourceBuffer, EOF, MAX_PARENS};
use tracing::{debug, trace};

/// Outcome of one rule.
pub(crate) struct Step {
    token: Option<Token>,
    moved: bool,
}

impl Step {
    /// Rule does not apply here.
    pub(crate) const DECLINE: Step = Step {
        token: None,
        moved: false,
    };

    /// Input consumed, nothing to report.
    pub(crate) fn skipped() -> Step {
        Step {
            token: None,
            moved: true,
        }
    }

    pub(crate) fn emit(token: Token) -> Step {
        Step {
            token: Some(token),
            moved: true,
        }
    }
}

type Rule = fn(&mut Lexer) -> LexResult<Step>;

const RULES: &[Rule] = &[
    Lexer::blank,
    Lexer::eof,
    Lexer::comment,
    Lexer::line_break,
    Lexer::semicolon,
    Lexer::colon,
    Lexer::paren,
    Lexer::number,
    Lexer::operator,
    Lexer::identifier,
    Lexer::char_literal,
    Lexer::string_literal,
    Lexer::unknown,
];

/// Produces raw tokens from a source buffer.
///
/// Indentation is tracked in half levels of 2 columns; a tab counts as
/// `tab_width` columns. Raw output may contain `MultiDedent`, which the
/// [`TokenBuffer`](crate::TokenBuffer) splits up.
pub struct Lexer {
    pub(crate) src: SourceBuffer,
    pub(crate) config: LexConfig,
    /// Byte most recently read from `src`.
    pub(crate) cur: u8,
    indent_level: u32,
    parens: [(u8, Mark); MAX_PARENS],
    depth: usize,
}

impl Lexer {
    /// Create a lexer and read the first byte.
    pub fn new(mut src: SourceBuffer, config: LexConfig) -> LexResult<Self> {
        let cur = src.get_char()?;
        Ok(Lexer {
            src,
            config,
            cur,
            indent_level: 0,
            parens: [(0, Mark::default()); MAX_PARENS],
            depth: 0,
        })
    }

    /// Next raw token. After `Eof`, every call returns `Eof` again.
    pub fn next_token(&mut self) -> LexResult<Token> {
        loop {
            for rule in RULES {
                let step = rule(self)?;
                if let Some(token) = step.token {
                    trace!(tag = %token.tag(), content = token.content(), "token");
                    return Ok(token);
                }
                if step.moved {
                    break;
                }
            }
        }
    }

    /// Every token up to and including `Eof`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                debug!(count = tokens.len(), "lexed");
                return Ok(tokens);
            }
        }
    }

    /// Fatal error at the current byte.
    pub fn error(&self, kind: LexErrorKind) -> LexError {
        self.src.error(kind)
    }

    /// Current indentation in half levels.
    #[inline]
    pub fn indent_level(&self) -> u32 {
        self.indent_level
    }

    #[inline]
    pub fn config(&self) -> &LexConfig {
        &self.config
    }

    /// Piece for an already lexed span.
    pub fn piece_for(&self, span: Span) -> Piece {
        self.src.piece_for(span)
    }

    #[inline]
    pub(crate) fn bump(&mut self) -> LexResult<()> {
        self.cur = self.src.get_char()?;
        Ok(())
    }

    #[inline]
    pub(crate) fn mark(&self) -> Mark {
        self.src.new_mark()
    }

    #[inline]
    pub(crate) fn piece(&self, mark: Mark) -> Piece {
        self.src.new_piece(mark)
    }

    pub(crate) fn token(&self, kind: TokenKind, mark: Mark) -> Token {
        Token::new(kind, self.piece(mark))
    }

    /// Skip blanks and return the columns they span.
    fn skip_blanks(&mut self) -> LexResult<u32> {
        let mut amount = 0;
        while is_blank(self.cur) {
            amount += self.config.blank_width(self.cur);
            self.bump()?;
        }
        Ok(amount)
    }

    /// Skipped input that the round trip must still see in trivia mode.
    fn trivia(&self, mark: Mark, amount: u32, at_line_start: bool) -> Step {
        if self.config.keep_trivia {
            Step::emit(self.token(
                TokenKind::Space {
                    amount,
                    at_line_start,
                },
                mark,
            ))
        } else {
            Step::skipped()
        }
    }

    // === Rules ===

    fn blank(&mut self) -> LexResult<Step> {
        if self.depth == 0 && self.src.at_start_of_line() {
            return self.indentation();
        }
        if !is_blank(self.cur) {
            return Ok(Step::DECLINE);
        }
        let at_line_start = self.src.at_start_of_line();
        let mark = self.mark();
        let amount = self.skip_blanks()?;
        Ok(self.trivia(mark, amount, at_line_start))
    }

    /// Leading whitespace of a line outside brackets.
    ///
    /// Blank and comment-only lines leave the level alone. Otherwise the
    /// column change must be a whole number of half levels, and may grow
    /// by at most one full level.
    fn indentation(&mut self) -> LexResult<Step> {
        let mark = self.mark();
        let columns = self.skip_blanks()?;
        if self.cur == b'#' || self.cur == EOF || is_line_break(self.cur) {
            return Ok(self.leading_space(mark, columns));
        }
        self.src.mark_consumed();

        let target = i64::from(columns);
        let current = i64::from(self.indent_level) * 2;
        let kind = match target - current {
            0 => return Ok(self.leading_space(mark, columns)),
            2 => {
                self.indent_level += 1;
                TokenKind::HalfIndent
            }
            4 => {
                self.indent_level += 2;
                TokenKind::Indent
            }
            delta if delta < 0 && delta % 2 == 0 => {
                let levels = u32::try_from(-delta / 2).unwrap_or(u32::MAX);
                self.indent_level -= levels;
                TokenKind::MultiDedent { levels }
            }
            _ => return Err(self.piece(mark).error(LexErrorKind::Indentation)),
        };
        debug!(columns, level = self.indent_level, "indentation changed");
        Ok(Step::emit(self.token(kind, mark)))
    }

    fn leading_space(&self, mark: Mark, columns: u32) -> Step {
        if columns == 0 {
            Step::DECLINE
        } else {
            self.trivia(mark, columns, true)
        }
    }

    fn eof(&mut self) -> LexResult<Step> {
        if self.cur != EOF {
            return Ok(Step::DECLINE);
        }
        if self.depth > 0 {
            let (_, open) = self.parens[self.depth - 1];
            let span = Span::new(open.offset(), open.offset() + 1);
            return Err(self.piece_for(span).error(LexErrorKind::UnclosedParen));
        }
        let mark = self.mark();
        if self.indent_level > 0 {
            let levels = self.indent_level;
            self.indent_level = 0;
            return Ok(Step::emit(
                self.token(TokenKind::MultiDedent { levels }, mark),
            ));
        }
        Ok(Step::emit(self.token(TokenKind::Eof, mark)))
    }

    fn comment(&mut self) -> LexResult<Step> {
        if self.cur != b'#' {
            return Ok(Step::DECLINE);
        }
        let mark = self.mark();
        while self.cur != EOF && !is_line_break(self.cur) {
            self.bump()?;
        }
        if self.config.keep_trivia {
            Ok(Step::emit(self.token(TokenKind::Comment, mark)))
        } else {
            Ok(Step::skipped())
        }
    }

    fn line_break(&mut self) -> LexResult<Step> {
        if !is_line_break(self.cur) {
            return Ok(Step::DECLINE);
        }
        let mark = self.mark();
        let first = self.cur;
        self.bump()?;
        if first == b'\r' && self.cur == b'\n' {
            self.bump()?;
        }
        Ok(self.newline(mark))
    }

    /// A run of `;` ends a line like a line break does.
    fn semicolon(&mut self) -> LexResult<Step> {
        if self.cur != b';' {
            return Ok(Step::DECLINE);
        }
        let mark = self.mark();
        while self.cur == b';' {
            self.bump()?;
        }
        Ok(self.newline(mark))
    }

    /// Inside brackets line ends are plain whitespace.
    fn newline(&self, mark: Mark) -> Step {
        if self.depth == 0 {
            Step::emit(self.token(TokenKind::Newline, mark))
        } else {
            self.trivia(mark, 0, false)
        }
    }

    fn colon(&mut self) -> LexResult<Step> {
        if self.cur != b':' {
            return Ok(Step::DECLINE);
        }
        let mark = self.mark();
        self.bump()?;
        Ok(Step::emit(self.token(TokenKind::Colon, mark)))
    }

    fn paren(&mut self) -> LexResult<Step> {
        let byte = self.cur;
        let mark = self.mark();
        let kind = if is_open_paren(byte) {
            if self.depth >= MAX_PARENS {
                return Err(self.error(LexErrorKind::ParenOverflow));
            }
            self.parens[self.depth] = (byte, mark);
            self.depth += 1;
            TokenKind::ParenOpen
        } else if is_close_paren(byte) {
            if self.depth == 0 {
                return Err(self.error(LexErrorKind::ParenUnderflow));
            }
            let (open, _) = self.parens[self.depth - 1];
            if closing_paren(open) != Some(byte) {
                return Err(self.error(LexErrorKind::ParenMismatch));
            }
            self.depth -= 1;
            TokenKind::ParenClose
        } else {
            return Ok(Step::DECLINE);
        };
        self.bump()?;
        Ok(Step::emit(self.token(kind, mark)))
    }

    fn operator(&mut self) -> LexResult<Step> {
        if !is_operator(self.cur) {
            return Ok(Step::DECLINE);
        }
        let mark = self.mark();
        while is_operator(self.cur) {
            self.bump()?;
        }
        let piece = self.piece(mark);
        let half_applied = !piece.spacing().is_balanced();
        Ok(Step::emit(Token::new(
            TokenKind::Operator { half_applied },
            piece,
        )))
    }

    fn unknown(&mut self) -> LexResult<Step> {
        Err(self.error(LexErrorKind::UnknownChar))
    }
}
