//! Caret-and-tilde rendering of a source span for error messages.

use crate::lexer::{Lexer, Source};
use std::fmt::Write;

/// Render a diagnostic for the lexer's current token:
///
/// ```text
/// <path>:<line>:<column>: error: <message>
/// <line> | <line text>
///        | <spaces>^~~~
/// ```
///
/// Lines and columns are reported 1-based.
/// Falls back to the bare message when no valid token or no sources are
/// available.
pub fn render_error(
    w: &mut dyn Write,
    sources: &[Source],
    lexer: &Lexer,
    message: &str,
) -> std::fmt::Result {
    let token = lexer.token(0);
    if !token.valid() || sources.is_empty() || token.location.file >= sources.len() {
        return write!(w, "{}", message);
    }

    let location = token.location;
    let source = &sources[location.file];
    let line_start = match lexer.line_pos(location.file, location.line) {
        Some(pos) => pos,
        None => return write!(w, "{}", message),
    };

    writeln!(
        w,
        "{}:{}:{}: error: {}",
        source.path,
        location.line + 1,
        location.column + 1,
        message
    )?;

    let line_number = (location.line + 1).to_string();
    write!(w, "{} | ", line_number)?;
    let content = source.content.as_bytes();
    let mut iter = line_start;
    while iter < content.len() && content[iter] != b'\n' {
        w.write_char(content[iter] as char)?;
        iter += 1;
    }
    writeln!(w)?;

    for _ in 0..line_number.len() {
        w.write_char(' ')?;
    }
    write!(w, " | ")?;
    for _ in 0..location.column {
        w.write_char(' ')?;
    }
    w.write_char('^')?;
    for _ in 0..location.size.saturating_sub(1) {
        w.write_char('~')?;
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenType;

    #[test]
    fn renders_caret_under_the_token() {
        let sources = vec![Source::new("test.cw", "\nstruct A {\n\n")];
        let mut lexer = Lexer::new();
        lexer.reset(&sources);
        assert_eq!(lexer.token(0).ty, TokenType::Struct);

        let mut out = String::new();
        render_error(&mut out, &sources, &lexer, "expect declaration").unwrap();
        let expected =
            "test.cw:2:1: error: expect declaration\n2 | struct A {\n  | ^~~~~~\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn caret_moves_with_the_column() {
        let sources = vec![Source::new("test.cw", "\nstruct A {\n\n")];
        let mut lexer = Lexer::new();
        lexer.reset(&sources);
        lexer.advance();
        assert_eq!(lexer.token(0).ty, TokenType::Identifier);

        let mut out = String::new();
        render_error(&mut out, &sources, &lexer, "unexpected name").unwrap();
        let expected =
            "test.cw:2:8: error: unexpected name\n2 | struct A {\n  |        ^\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn falls_back_to_the_bare_message() {
        // no sources bound
        let lexer = Lexer::new();
        let mut out = String::new();
        render_error(&mut out, &[], &lexer, "boom").unwrap();
        assert_eq!(out, "boom");

        // current token is invalid
        let sources = vec![Source::new("test.cw", "@\n")];
        let mut lexer = Lexer::new();
        lexer.reset(&sources);
        assert!(!lexer.token(0).valid());
        let mut out = String::new();
        render_error(&mut out, &sources, &lexer, "boom").unwrap();
        assert_eq!(out, "boom");
    }
}
