use super::*;
use lox_ir::{Literal, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Tokenize and render each token the way the CLI prints it.
fn render(source: &str) -> Vec<String> {
    tokenize(source)
        .tokens
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).tokens.iter().map(|t| t.kind).collect()
}

// ─── Scenarios ─────────────────────────────────────────────────

#[test]
fn empty_source() {
    let out = tokenize("");
    assert_eq!(out.tokens, vec![Token::eof(1)]);
    assert!(out.errors.is_empty());
    assert!(!out.had_error());
}

#[test]
fn comment_only() {
    let out = tokenize("// comment only");
    assert_eq!(render("// comment only"), vec!["EOF  null"]);
    assert!(!out.had_error());
}

#[test]
fn unterminated_string() {
    let out = tokenize("\"abc");
    assert_eq!(out.errors, vec![LexError::UnterminatedString { line: 1 }]);
    assert!(out.had_error());
    assert_eq!(out.tokens, vec![Token::eof(1)]);
}

#[test]
fn number_then_dot() {
    let out = tokenize("7.");
    assert_eq!(render("7."), vec!["NUMBER 7 7.0", "DOT . null", "EOF  null"]);
    assert!(!out.had_error());
}

#[test]
fn if_comparison() {
    assert_eq!(
        render("if x == 1"),
        vec![
            "IF if null",
            "IDENTIFIER x null",
            "EQUAL_EQUAL == null",
            "NUMBER 1 1.0",
            "EOF  null",
        ]
    );
    assert!(!tokenize("if x == 1").had_error());
}

#[test]
fn unexpected_at_sign() {
    let out = tokenize("@");
    assert_eq!(
        out.errors,
        vec![LexError::UnexpectedCharacter { line: 1, byte: b'@' }]
    );
    assert!(out.had_error());
    assert_eq!(out.tokens, vec![Token::eof(1)]);
}

#[test]
fn every_punctuation_and_operator() {
    assert_eq!(
        kinds("(){},.-+;/* ! != = == > >= < <="),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Semicolon,
            TokenKind::Slash,
            TokenKind::Star,
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn small_program() {
    let source = "var greeting = \"hi\";\nfun add(a, b) {\n  return a + b; // sum\n}\nprint 12.50;\n";
    assert_eq!(
        render(source),
        vec![
            "VAR var null",
            "IDENTIFIER greeting null",
            "EQUAL = null",
            "STRING \"hi\" hi",
            "SEMICOLON ; null",
            "FUN fun null",
            "IDENTIFIER add null",
            "LEFT_PAREN ( null",
            "IDENTIFIER a null",
            "COMMA , null",
            "IDENTIFIER b null",
            "RIGHT_PAREN ) null",
            "LEFT_BRACE { null",
            "RETURN return null",
            "IDENTIFIER a null",
            "PLUS + null",
            "IDENTIFIER b null",
            "SEMICOLON ; null",
            "RIGHT_BRACE } null",
            "PRINT print null",
            "NUMBER 12.50 12.5",
            "SEMICOLON ; null",
            "EOF  null",
        ]
    );
}

#[test]
fn token_lines() {
    let out = tokenize("a\n\"x\ny\"\nb");
    let lines: Vec<u32> = out.tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn eof_line_is_final_line() {
    assert_eq!(tokenize("x\n").tokens.last(), Some(&Token::eof(2)));
    assert_eq!(tokenize("\n\n\n").tokens, vec![Token::eof(4)]);
}

#[test]
fn errors_do_not_stop_the_scan() {
    let out = tokenize("a @ b # c");
    assert_eq!(out.errors.len(), 2);
    assert_eq!(
        kinds("a @ b # c"),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn string_literal_value() {
    let out = tokenize("\"a b\"");
    assert_eq!(out.tokens[0].literal, Literal::String(b"a b"));
}

#[test]
fn diagnostics_render_in_order() {
    let out = tokenize("$\n\"open");
    let lines: Vec<String> = out.diagnostics().map(|d| d.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "[line 1] Error: Unexpected character: $",
            "[line 2] Error: Unterminated string.",
        ]
    );
}

#[test]
fn huge_number_is_out_of_range() {
    let source = format!("1{}", "0".repeat(400));
    let out = tokenize(&source);
    assert!(out.had_error());
    assert_eq!(
        out.diagnostics().next().map(|d| d.message),
        Some(format!("Number literal out of range: {source}"))
    );
    assert_eq!(out.tokens, vec![Token::eof(1)]);
}

#[test]
fn latin1_source_tokenizes() {
    let out = tokenize(b"// caf\xe9\nprint \"\xe9\";");
    assert!(!out.had_error());
    assert_eq!(
        out.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Print,
            TokenKind::String,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
    assert_eq!(out.tokens[1].literal, Literal::String(b"\xe9"));
}

#[test]
fn each_stray_byte_is_reported() {
    let out = tokenize("é");
    assert_eq!(out.errors.len(), 2);
    let lines: Vec<String> = out.diagnostics().map(|d| d.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "[line 1] Error: Unexpected character: \\xc3",
            "[line 1] Error: Unexpected character: \\xa9",
        ]
    );
}

// ─── Properties ────────────────────────────────────────────────

/// Source text biased toward Lox-looking input, with some stray bytes.
fn lox_like() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("\n".to_owned()),
            Just(" ".to_owned()),
            Just("\"".to_owned()),
            Just("//".to_owned()),
            Just(".".to_owned()),
            "[a-z_]{1,6}",
            "[0-9]{1,4}",
            "[(){};,.+*/!=<>-]{1,3}",
            "[@#$%^&é€]",
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn ends_with_single_eof(source in lox_like()) {
        let out = tokenize(&source);
        let eofs = out.tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(out.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn error_flag_matches_errors(source in lox_like()) {
        let out = tokenize(&source);
        prop_assert_eq!(out.had_error(), !out.errors.is_empty());
        prop_assert_eq!(out.diagnostics().count(), out.errors.len());
    }

    #[test]
    fn tokenize_is_idempotent(source in lox_like()) {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    #[test]
    fn token_line_counts_preceding_newlines(source in lox_like()) {
        let out = tokenize(&source);
        for token in out.tokens.iter().filter(|t| t.kind != TokenKind::Eof) {
            let offset = token.lexeme.as_ptr() as usize - source.as_ptr() as usize;
            let newlines = source.as_bytes()[..offset]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            prop_assert_eq!(token.line as usize, newlines + 1);
        }
    }

    #[test]
    fn arbitrary_bytes_terminate(source in proptest::collection::vec(any::<u8>(), 0..256)) {
        let out = tokenize(&source);
        let eof_line = out.tokens.last().map_or(0, |t| t.line) as usize;
        prop_assert_eq!(eof_line, source.iter().filter(|&&b| b == b'\n').count() + 1);
    }
}
