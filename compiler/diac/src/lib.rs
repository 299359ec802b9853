//! Diamond command line driver.
//!
//! The library half holds everything testable: argument parsing, source
//! loading, token printing and error reporting. `main.rs` only dispatches
//! and decides the exit code.

pub mod commands;
mod error;

use std::sync::Once;

pub use error::{fatal_report, CliError};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=dia_lexer=trace dia lex file.dia`. Safe to call repeatedly.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
