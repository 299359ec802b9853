//! Caret report rendering.

use std::fmt;

/// Marker line: `column` spaces then `width` carets, at least one.
pub fn caret_line(column: u32, width: u32) -> String {
    let mut line = " ".repeat(column as usize);
    line.push_str(&"^".repeat(width.max(1) as usize));
    line
}

/// Write `<message> at line N near:` followed by the source and marker lines.
///
/// Every line of the report ends in `\n`.
pub fn write_report(
    f: &mut impl fmt::Write,
    message: &str,
    line: u32,
    source_line: &str,
    column: u32,
    width: u32,
) -> fmt::Result {
    writeln!(f, "{message} at line {line} near:")?;
    writeln!(f, "{source_line}")?;
    writeln!(f, "{}", caret_line(column, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn caret_line_has_at_least_one_caret() {
        assert_eq!(caret_line(0, 0), "^");
        assert_eq!(caret_line(3, 2), "   ^^");
    }

    #[test]
    fn report_layout() {
        let mut out = String::new();
        write_report(&mut out, "Unknown token", 2, "a \\ b", 2, 1).unwrap_or_default();
        assert_eq!(out, "Unknown token at line 2 near:\na \\ b\n  ^\n");
    }
}
