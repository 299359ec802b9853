//! `dia lex`: print the token stream of a source.

use std::io::{self, Write};

use dia_diagnostic::LexResult;
use dia_ir::{Token, TokenKind};
use dia_lexer::{LexConfig, Lexer, SourceBuffer, TokenBuffer};
use tracing::debug;

use crate::CliError;

/// Where the source text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceArg {
    File(String),
    /// `-`
    Stdin,
    /// `-c`: every argument is one source line.
    CommandLine(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    pub config: LexConfig,
    /// Print raw lexer output instead of the parser-facing stream.
    pub raw: bool,
    pub source: SourceArg,
}

/// Parse the arguments following `dia lex`.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, CliError> {
    let mut config = LexConfig::default();
    let mut raw = false;
    let mut command_line = false;
    let mut rest = Vec::new();

    for arg in args {
        if !rest.is_empty() {
            rest.push(arg.clone());
            continue;
        }
        match arg.as_str() {
            "--trivia" => config = config.with_trivia(true),
            "--raw" => raw = true,
            "-c" => command_line = true,
            "-" => rest.push(arg.clone()),
            _ if arg.starts_with("--tab-width=") => {
                let value = &arg["--tab-width=".len()..];
                let width = value
                    .parse::<u32>()
                    .ok()
                    .filter(|&w| w > 0)
                    .ok_or_else(|| CliError::InvalidTabWidth(value.to_string()))?;
                config = config.with_tab_width(width);
            }
            _ if arg.starts_with('-') => return Err(CliError::UnknownOption(arg.clone())),
            _ => rest.push(arg.clone()),
        }
    }

    let source = if command_line {
        if rest.is_empty() {
            return Err(CliError::MissingSourceLines);
        }
        SourceArg::CommandLine(rest)
    } else {
        match rest.first().map(String::as_str) {
            None => return Err(CliError::MissingPath),
            Some("-") => SourceArg::Stdin,
            Some(path) => SourceArg::File(path.to_string()),
        }
    };

    Ok(LexOptions {
        config,
        raw,
        source,
    })
}

/// Read the source named by `source`.
pub fn load_source(source: &SourceArg) -> Result<SourceBuffer, CliError> {
    match source {
        SourceArg::File(path) => std::fs::read(path)
            .map(SourceBuffer::new)
            .map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            }),
        SourceArg::Stdin => {
            SourceBuffer::from_reader(io::stdin().lock()).map_err(|source| CliError::Read {
                path: "-".to_string(),
                source,
            })
        }
        SourceArg::CommandLine(lines) => {
            let mut text = String::new();
            for line in lines {
                text.push_str(line);
                text.push('\n');
            }
            Ok(SourceBuffer::new(text))
        }
    }
}

/// Lex `src` and write one line per token, `Eof` included.
///
/// Tokens printed before a lexical error stay in `out`.
pub fn lex_to_writer(
    src: SourceBuffer,
    opts: &LexOptions,
    out: &mut impl Write,
) -> Result<usize, CliError> {
    let lexer = Lexer::new(src, opts.config)?;
    let mut count = 0;
    if opts.raw {
        let mut lexer = lexer;
        loop {
            let token = lexer.next_token()?;
            writeln!(out, "{}", describe(&token))?;
            count += 1;
            if token.kind == TokenKind::Eof {
                break;
            }
        }
    } else {
        for token in TokenBuffer::new(lexer) {
            writeln!(out, "{}", describe(&token?))?;
            count += 1;
        }
    }
    debug!(count, raw = opts.raw, "printed tokens");
    Ok(count)
}

/// One display line: tag, escaped source text and decoded payload.
///
/// ```
/// use dia_lexer::{lex, LexConfig};
///
/// let tokens = lex("0x01_F", LexConfig::default())?;
/// assert_eq!(diac::commands::describe(&tokens[0]), "<TOK INT> 0x01_F = 31");
/// # Ok::<(), dia_lexer::LexError>(())
/// ```
pub fn describe(token: &Token) -> String {
    let tag = token.tag();
    let text = escape_breaks(token.content());
    match &token.kind {
        TokenKind::Eof => tag.to_string(),
        TokenKind::Int(value) => format!("{tag} {text} = {value}"),
        TokenKind::Char(value) => {
            format!("{tag} {text} = {}", escape_breaks(&char::from(*value).to_string()))
        }
        TokenKind::Str(value) => format!("{tag} {text} = \"{}\"", escape_breaks(value)),
        TokenKind::MultiDedent { levels } => format!("{tag} levels={levels}"),
        TokenKind::Space {
            amount,
            at_line_start,
        } => {
            if *at_line_start {
                format!("{tag} \"{text}\" = {amount} at line start")
            } else {
                format!("{tag} \"{text}\" = {amount}")
            }
        }
        TokenKind::Operator { half_applied: true } => format!("{tag} {text} (half applied)"),
        TokenKind::Id(ident) => {
            let mut line = format!("{tag} {text}");
            if ident.is_protected() {
                line.push_str(" (protected)");
            }
            if ident.half_applied {
                line.push_str(" (half applied)");
            }
            line
        }
        _ => format!("{tag} {text}"),
    }
}

/// Line breaks and tabs as `\n`, `\r`, `\t`; everything else as is.
fn escape_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Lex the whole source into a `Vec`, for callers that want tokens rather
/// than text.
pub fn collect_tokens(src: SourceBuffer, opts: &LexOptions) -> LexResult<Vec<Token>> {
    let lexer = Lexer::new(src, opts.config)?;
    if opts.raw {
        lexer.tokenize()
    } else {
        TokenBuffer::new(lexer).collect()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
