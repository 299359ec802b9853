//! Driver errors.

use std::io;

use dia_diagnostic::LexError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Need source line(s) as argument(s)!")]
    MissingSourceLines,
    #[error("Need name of source file as argument!")]
    MissingPath,
    #[error("Unknown option '{0}'")]
    UnknownOption(String),
    #[error("Invalid tab width '{0}'")]
    InvalidTabWidth(String),
    #[error("Unable to read source file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Unable to write output: {0}")]
    Write(#[from] io::Error),
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// `FATAL ERROR: <message>`, always ending in a newline.
pub fn fatal_report(err: &CliError) -> String {
    let mut report = format!("FATAL ERROR: {err}");
    if !report.ends_with('\n') {
        report.push('\n');
    }
    report
}
