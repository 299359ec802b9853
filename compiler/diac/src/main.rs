//! Diamond compiler CLI.

use std::io::{self, BufWriter, Write};

use diac::commands::{lex_to_writer, load_source, parse_lex_options};
use diac::{fatal_report, init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            if let Err(err) = lex(&args[2..]) {
                eprint!("{}", fatal_report(&err));
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn lex(args: &[String]) -> Result<(), CliError> {
    let opts = parse_lex_options(args)?;
    let src = load_source(&opts.source)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = lex_to_writer(src, &opts, &mut out);
    // Tokens seen before an error are still shown.
    out.flush()?;
    result.map(|_| ())
}

fn print_usage() {
    eprintln!("Diamond Compiler");
    eprintln!();
    eprintln!("Usage: dia <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex <file>          Print the tokens of a source file ('-' reads stdin)");
    eprintln!("  lex -c <line>...    Print the tokens of lines given as arguments");
    eprintln!("  help                Show this message");
    eprintln!();
    eprintln!("Lex options:");
    eprintln!("  --trivia            Keep spaces and comments in the token stream");
    eprintln!("  --raw               Show raw lexer tokens (no block starts, unsplit dedents)");
    eprintln!("  --tab-width=<n>     Columns per tab (default: 4)");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=dia_lexer=debug) for tracing output.");
}
