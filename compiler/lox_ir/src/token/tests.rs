use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_matches_output_format() {
    let tok = Token::bare(TokenKind::EqualEqual, b"==", 1);
    assert_eq!(tok.to_string(), "EQUAL_EQUAL == null");
}

#[test]
fn eof_renders_with_empty_lexeme() {
    assert_eq!(Token::eof(3).to_string(), "EOF  null");
    assert_eq!(Token::eof(3).line, 3);
}

#[test]
fn string_token_renders_raw_literal() {
    let tok = Token::new(TokenKind::String, b"\"hi\"", Literal::String(b"hi"), 1);
    assert_eq!(tok.to_string(), "STRING \"hi\" hi");
}

#[test]
fn number_token_renders_canonical_literal() {
    let tok = Token::new(TokenKind::Number, b"42", Literal::Number(42.0), 1);
    assert_eq!(tok.to_string(), "NUMBER 42 42.0");
}

#[test]
fn debug_includes_line() {
    let tok = Token::bare(TokenKind::Identifier, b"x", 7);
    assert_eq!(format!("{tok:?}"), "Identifier \"x\" None @ line 7");
}

#[test]
fn write_line_keeps_raw_bytes() {
    let tok = Token::new(
        TokenKind::String,
        b"\"\xe9t\xe9\"",
        Literal::String(b"\xe9t\xe9"),
        1,
    );
    let mut out = Vec::new();
    tok.write_line(&mut out).unwrap();
    assert_eq!(out, b"STRING \"\xe9t\xe9\" \xe9t\xe9\n");
    assert_eq!(tok.to_string(), "STRING \"\u{fffd}t\u{fffd}\" \u{fffd}t\u{fffd}");
}

#[test]
fn write_line_matches_display_for_utf8() {
    let tok = Token::eof(2);
    let mut out = Vec::new();
    tok.write_line(&mut out).unwrap();
    assert_eq!(out, format!("{tok}\n").into_bytes());
}

// === TokenKind ===

#[test]
fn all_is_in_discriminant_order() {
    for (i, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(*kind as usize, i, "{kind:?} out of order");
    }
}

#[test]
fn names_are_upper_snake_and_unique() {
    let mut seen = std::collections::HashSet::new();
    for kind in TokenKind::ALL {
        let name = kind.name();
        assert!(
            name.bytes().all(|b| b.is_ascii_uppercase() || b == b'_'),
            "{name} is not upper snake case"
        );
        assert!(seen.insert(name), "duplicate name {name}");
    }
}

#[test]
fn operators_and_keywords_have_fixed_lexemes() {
    for kind in TokenKind::ALL {
        let fixed = kind.is_operator() || kind.is_keyword();
        assert_eq!(kind.lexeme().is_some(), fixed, "{kind:?}");
    }
}

#[test]
fn keyword_lexemes_spell_their_names() {
    for kind in TokenKind::ALL.into_iter().filter(|k| k.is_keyword()) {
        assert_eq!(kind.lexeme().map(str::to_ascii_uppercase).as_deref(), Some(kind.name()));
    }
}

#[test]
fn category_boundaries() {
    assert!(TokenKind::LeftParen.is_operator());
    assert!(TokenKind::LessEqual.is_operator());
    assert!(!TokenKind::Identifier.is_operator());
    assert!(!TokenKind::Identifier.is_keyword());
    assert!(TokenKind::And.is_keyword());
    assert!(TokenKind::While.is_keyword());
    assert!(!TokenKind::Eof.is_keyword());
    assert!(!TokenKind::Eof.is_operator());
}
