//! Command handlers for the `dia` CLI.

mod lex;

pub use lex::{
    collect_tokens, describe, lex_to_writer, load_source, parse_lex_options, LexOptions, SourceArg,
};
