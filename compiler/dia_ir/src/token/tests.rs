use pretty_assertions::assert_eq;
use smallvec::smallvec;

use super::*;
use crate::Span;

fn piece(text: &str) -> Piece {
    let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
    Piece::new(Span::new(0, len), 1, 0, text, text)
}

fn part(text: &str, kind: IdKind) -> IdPart {
    IdPart {
        text: text.to_string(),
        kind,
        protected: text.starts_with('_'),
    }
}

#[test]
fn test_display_uses_content() {
    let token = Token::new(TokenKind::Int(31), piece("0x01_F"));
    assert_eq!(token.to_string(), "0x01_F");
}

#[test]
fn test_display_eof() {
    let token = Token::new(TokenKind::Eof, piece(""));
    assert_eq!(token.to_string(), "<EOF>");
}

#[test]
fn test_tag_names() {
    assert_eq!(TokenTag::Eof.to_string(), "<TOK EOF>");
    assert_eq!(TokenTag::Newline.to_string(), "<TOK NL>");
    assert_eq!(TokenTag::HalfDedent.to_string(), "<TOK HALF DEDENT>");
    assert_eq!(TokenTag::BlockStart.to_string(), "<TOK BLOCK START>");
    assert_eq!(TokenTag::Operator.to_string(), "<TOK OP ID>");
    assert_eq!(TokenTag::ValueId.to_string(), "<TOK VAL ID>");
}

#[test]
fn test_identifier_tag_follows_kind() {
    for (kind, tag) in [
        (IdKind::Module, TokenTag::ModuleId),
        (IdKind::Value, TokenTag::ValueId),
        (IdKind::Constant, TokenTag::ConstId),
        (IdKind::Function, TokenTag::FuncId),
    ] {
        let ident = Ident {
            parts: smallvec![part("x", kind)],
            kind,
            half_applied: false,
        };
        assert_eq!(TokenKind::Id(ident).tag(), tag);
    }
}

#[test]
fn test_trivia() {
    let space = Token::new(
        TokenKind::Space {
            amount: 2,
            at_line_start: false,
        },
        piece("  "),
    );
    let comment = Token::new(TokenKind::Comment, piece("# x"));
    let colon = Token::new(TokenKind::Colon, piece(":"));
    assert!(space.is_trivia());
    assert!(comment.is_trivia());
    assert!(!colon.is_trivia());
}

#[test]
fn test_ident_helpers() {
    let ident = Ident {
        parts: smallvec![part("mod", IdKind::Module), part("_Func", IdKind::Function)],
        kind: IdKind::Function,
        half_applied: false,
    };
    assert_eq!(ident.full_name(), "mod._Func");
    assert!(ident.is_protected());
}
