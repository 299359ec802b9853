//! Parser-facing token stream.
//!
//! Wraps a [`Lexer`] and rewrites its output:
//! - `:` followed (across trivia) by a line break becomes one `BlockStart`
//!   whose text is the colon and the line break; trivia seen in between is
//!   emitted after it
//! - `MultiDedent` is split into an optional `HalfDedent` and full `Dedent`s
//!
//! The most recent tokens are kept in a window so the parser can step back
//! with [`TokenBuffer::back`]. Raw tokens read ahead wait in a separate
//! queue, so each step adds at most one token to the window.

use std::collections::VecDeque;

use dia_diagnostic::{LexError, LexErrorKind, LexResult, Locate};
use dia_ir::{Piece, Token, TokenKind, TokenTag};
use tracing::debug;

use crate::access::TokenAccess;
use crate::Lexer;

/// Tokens kept for stepping back.
pub const MAX_TOKENS: usize = 128;

pub struct TokenBuffer {
    lexer: Lexer,
    window: VecDeque<Token>,
    /// Index in `window` of the token last handed out.
    cursor: Option<usize>,
    /// Raw tokens read ahead of the window, still to be transformed.
    pending: VecDeque<Token>,
    /// Indentation in half levels, as seen by the parser.
    indent_level: u32,
}

impl TokenBuffer {
    pub fn new(lexer: Lexer) -> Self {
        TokenBuffer {
            lexer,
            window: VecDeque::with_capacity(MAX_TOKENS + 1),
            cursor: None,
            pending: VecDeque::new(),
            indent_level: 0,
        }
    }

    /// Next token: replayed from the window after [`back`](Self::back), otherwise
    /// freshly lexed.
    pub fn next_token(&mut self) -> LexResult<Token> {
        let next = match self.cursor {
            Some(i) if i + 1 < self.window.len() => i + 1,
            _ => {
                let first_new = self.window.len();
                while self.window.len() == first_new {
                    self.produce()?;
                }
                first_new
            }
        };
        self.cursor = Some(next);
        self.trim_window()?;
        self.current()
            .cloned()
            .ok_or_else(|| self.error(LexErrorKind::WindowUnderflow))
    }

    /// Step back one token; the next `next_token` returns it again.
    pub fn back(&mut self) -> LexResult<()> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                Ok(())
            }
            _ => Err(self.error(LexErrorKind::WindowUnderflow)),
        }
    }

    /// Token last handed out.
    pub fn current(&self) -> Option<&Token> {
        self.cursor.and_then(|i| self.window.get(i))
    }

    /// Fatal error at the lexer's current position.
    pub fn error(&self, kind: LexErrorKind) -> LexError {
        self.lexer.error(kind)
    }

    #[inline]
    pub fn indent_level(&self) -> u32 {
        self.indent_level
    }

    /// Transform one raw token. Pushes at most one token to the window.
    fn produce(&mut self) -> LexResult<()> {
        let token = match self.pending.pop_front() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        match token.tag() {
            TokenTag::Colon => return self.block_start(token),
            TokenTag::MultiDedent => return self.split_dedent(&token),
            TokenTag::Indent => self.indent_level += 2,
            TokenTag::HalfIndent => self.indent_level += 1,
            _ => {}
        }
        self.window.push_back(token);
        Ok(())
    }

    /// The `n`th raw token after the ones already taken, lexing as needed.
    fn peek(&mut self, n: usize) -> LexResult<&Token> {
        while self.pending.len() <= n {
            let token = self.lexer.next_token()?;
            self.pending.push_back(token);
        }
        self.pending
            .get(n)
            .ok_or_else(|| self.lexer.error(LexErrorKind::WindowUnderflow))
    }

    /// Fuse a colon with a following line break. Trivia in between stays
    /// pending and comes out after the `BlockStart`.
    fn block_start(&mut self, colon: Token) -> LexResult<()> {
        let mut n = 0;
        while self.peek(n)?.is_trivia() {
            n += 1;
        }
        if self.peek(n)?.kind != TokenKind::Newline {
            self.window.push_back(colon);
            return Ok(());
        }
        let Some(newline) = self.pending.remove(n) else {
            return Err(self.error(LexErrorKind::WindowUnderflow));
        };
        let span = colon.piece.span().merge(newline.piece.span());
        let piece = Piece::new(
            span,
            colon.piece.start_line(),
            colon.piece.start_column(),
            format!("{}{}", colon.content(), newline.content()),
            self.lexer.piece_for(span).whole_line(),
        );
        let block = Token::new(TokenKind::BlockStart, piece);
        debug!(line = block.piece.start_line(), "block start");
        self.window.push_back(block);
        Ok(())
    }

    /// Replace a `MultiDedent` with pending `HalfDedent`/`Dedent` tokens.
    fn split_dedent(&mut self, token: &Token) -> LexResult<()> {
        let levels = token.multi_dedent_levels()?;
        if levels > self.indent_level {
            return Err(token.error(LexErrorKind::DedentUnderflow));
        }
        self.indent_level -= levels;
        debug!(levels, level = self.indent_level, "split dedent");
        for _ in 0..levels / 2 {
            self.pending
                .push_front(Token::new(TokenKind::Dedent, token.piece.clone()));
        }
        if levels % 2 == 1 {
            self.pending
                .push_front(Token::new(TokenKind::HalfDedent, token.piece.clone()));
        }
        Ok(())
    }

    /// Drop the oldest tokens beyond `MAX_TOKENS`; never the current one.
    fn trim_window(&mut self) -> LexResult<()> {
        while self.window.len() > MAX_TOKENS {
            match self.cursor {
                Some(i) if i > 0 => {
                    if let Some(old) = self.window.pop_front() {
                        debug!(line = old.piece.start_line(), "evicted token");
                    }
                    self.cursor = Some(i - 1);
                }
                _ => return Err(self.error(LexErrorKind::EvictCurrent)),
            }
        }
        Ok(())
    }
}

impl Iterator for TokenBuffer {
    type Item = LexResult<Token>;

    /// Yields tokens up to and including `Eof`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.current().is_some_and(|t| t.kind == TokenKind::Eof) {
            return None;
        }
        Some(self.next_token())
    }
}
