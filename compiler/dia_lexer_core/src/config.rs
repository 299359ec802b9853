//! Lexer settings.

/// Columns a tab advances indentation by.
pub const DEFAULT_TAB_WIDTH: u32 = 4;

/// Deepest allowed nesting of `(`, `[` and `{`.
pub const MAX_PARENS: usize = 8;

/// Settings for one lexing run.
///
/// ```
/// use dia_lexer_core::LexConfig;
///
/// let config = LexConfig::default().with_trivia(true);
/// assert_eq!(config.tab_width, 4);
/// assert!(config.keep_trivia);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LexConfig {
    pub tab_width: u32,
    /// Emit `Space` and `Comment` tokens instead of skipping them.
    pub keep_trivia: bool,
}

impl Default for LexConfig {
    fn default() -> Self {
        LexConfig {
            tab_width: DEFAULT_TAB_WIDTH,
            keep_trivia: false,
        }
    }
}

impl LexConfig {
    #[must_use]
    pub fn with_tab_width(mut self, tab_width: u32) -> Self {
        self.tab_width = tab_width;
        self
    }

    #[must_use]
    pub fn with_trivia(mut self, keep_trivia: bool) -> Self {
        self.keep_trivia = keep_trivia;
        self
    }

    /// Columns taken by a blank: 1 for a space, `tab_width` for a tab.
    #[inline]
    pub fn blank_width(&self, byte: u8) -> u32 {
        if byte == b'\t' {
            self.tab_width
        } else {
            1
        }
    }
}
