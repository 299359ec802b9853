use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn run(list: &[&str]) -> Result<String, CliError> {
    let opts = parse_lex_options(&args(list))?;
    let src = load_source(&opts.source)?;
    let mut out = Vec::new();
    lex_to_writer(src, &opts, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

// === Argument parsing ===

#[test]
fn test_file_argument() {
    let opts = parse_lex_options(&args(&["prog.dia"])).unwrap();
    assert_eq!(opts.source, SourceArg::File("prog.dia".to_string()));
    assert_eq!(opts.config, LexConfig::default());
    assert!(!opts.raw);
}

#[test]
fn test_flags() {
    let opts = parse_lex_options(&args(&["--trivia", "--raw", "--tab-width=8", "x.dia"])).unwrap();
    assert!(opts.raw);
    assert!(opts.config.keep_trivia);
    assert_eq!(opts.config.tab_width, 8);
}

#[test]
fn test_command_line_source_keeps_dashes_after_first_line() {
    let opts = parse_lex_options(&args(&["-c", "a - b", "-x"])).unwrap();
    assert_eq!(
        opts.source,
        SourceArg::CommandLine(args(&["a - b", "-x"]))
    );
}

#[test]
fn test_stdin_argument() {
    let opts = parse_lex_options(&args(&["-"])).unwrap();
    assert_eq!(opts.source, SourceArg::Stdin);
}

#[test]
fn test_missing_sources() {
    assert!(matches!(
        parse_lex_options(&args(&[])),
        Err(CliError::MissingPath)
    ));
    assert!(matches!(
        parse_lex_options(&args(&["-c"])),
        Err(CliError::MissingSourceLines)
    ));
}

#[test]
fn test_bad_options() {
    assert!(matches!(
        parse_lex_options(&args(&["--tab-width=0", "x"])),
        Err(CliError::InvalidTabWidth(w)) if w == "0"
    ));
    assert!(matches!(
        parse_lex_options(&args(&["--verbose", "x"])),
        Err(CliError::UnknownOption(o)) if o == "--verbose"
    ));
}

// === Source loading ===

#[test]
fn test_command_line_lines_end_in_newlines() {
    let src = load_source(&SourceArg::CommandLine(args(&["a", "b"]))).unwrap();
    assert_eq!(src.bytes(), b"a\nb\n");
}

#[test]
fn test_missing_file() {
    let err = load_source(&SourceArg::File("/nonexistent/x.dia".to_string())).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Unable to read source file '/nonexistent/x.dia': "));
}

// === Output ===

#[test]
fn test_block_output() {
    let out = run(&["-c", "If x:", "    y"]).unwrap();
    assert_eq!(
        out,
        "<TOK FUNC ID> If\n\
         <TOK MODULE ID> x (half applied)\n\
         <TOK BLOCK START> :\\n\n\
         <TOK INDENT>     \n\
         <TOK MODULE ID> y\n\
         <TOK NL> \\n\n\
         <TOK DEDENT> \n\
         <TOK EOF>\n"
    );
}

#[test]
fn test_raw_output_keeps_colon_and_multi_dedent() {
    let out = run(&["--raw", "-c", "a:", "    b"]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "<TOK COLON> :");
    assert_eq!(lines[2], "<TOK NL> \\n");
    assert!(lines.contains(&"<TOK MULTI DEDENT> levels=2"));
    assert_eq!(lines.last(), Some(&"<TOK EOF>"));
}

#[test]
fn test_lex_error_propagates() {
    let err = run(&["-c", "a \\ b"]).unwrap_err();
    assert!(matches!(err, CliError::Lex(_)));
    assert_eq!(
        crate::fatal_report(&err),
        "FATAL ERROR: Unknown token at line 1 near:\na \\ b\n  ^\n"
    );
}

#[test]
fn test_describe_payloads() {
    let config = LexConfig::default().with_trivia(true);
    let tokens = dia_lexer::lex("x = 'a' \"b\\n\" _p", config).unwrap();
    let lines: Vec<String> = tokens.iter().map(describe).collect();
    assert_eq!(
        lines,
        vec![
            "<TOK MODULE ID> x".to_string(),
            "<TOK SPACE> \" \" = 1".to_string(),
            "<TOK OP ID> =".to_string(),
            "<TOK SPACE> \" \" = 1".to_string(),
            "<TOK CHAR> 'a' = a".to_string(),
            "<TOK SPACE> \" \" = 1".to_string(),
            "<TOK STR> \"b\\n\" = \"b\\n\"".to_string(),
            "<TOK SPACE> \" \" = 1".to_string(),
            "<TOK VAL ID> _p (protected)".to_string(),
            "<TOK EOF>".to_string(),
        ]
    );
}

#[test]
fn test_collect_tokens_matches_writer() {
    let opts = parse_lex_options(&args(&["-c", "a:", "    b"])).unwrap();
    let tokens = collect_tokens(load_source(&opts.source).unwrap(), &opts).unwrap();
    let mut out = Vec::new();
    let count = lex_to_writer(load_source(&opts.source).unwrap(), &opts, &mut out).unwrap();
    assert_eq!(tokens.len(), count);
}
